use std::{
    collections::{HashMap, HashSet},
    hash::Hash,
};

use mstgen_core::AcronymStyle;
use tracing::debug;

use super::NamingConvention;

/// Handle to a name that is resolved later by [`Names`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NameId(u32);

#[derive(Debug)]
struct Request {
    proposals: Vec<String>,
    rank: u32,
}

/// Collects name requests for one namespace.
///
/// Interning is idempotent per key: the first registration decides the
/// proposals and rank, later calls with the same key return the same
/// [`NameId`].
#[derive(Debug)]
pub struct Namer<K> {
    keys: HashMap<K, NameId>,
    requests: Vec<Request>,
}

impl<K: Eq + Hash> Namer<K> {
    pub fn new() -> Self {
        Self {
            keys: HashMap::new(),
            requests: Vec::new(),
        }
    }

    /// Request a name for `key`. Lower ranks are resolved first.
    pub fn intern<S: Into<String>>(
        &mut self,
        key: K,
        proposals: impl IntoIterator<Item = S>,
        rank: u32,
    ) -> NameId {
        if let Some(&id) = self.keys.get(&key) {
            return id;
        }
        let id = NameId(self.requests.len() as u32);
        self.requests.push(Request {
            proposals: proposals.into_iter().map(Into::into).collect(),
            rank,
        });
        self.keys.insert(key, id);
        id
    }

    /// The name already interned for `key`, if any.
    pub fn get(&self, key: &K) -> Option<NameId> {
        self.keys.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Resolve every request into a distinct identifier.
    ///
    /// Requests are handled by ascending rank, ties in interning order. Each
    /// takes its first styled proposal that is still free; if none is, the
    /// first proposal gets the smallest numeric suffix from 2 up that is free.
    pub fn assign(&self, convention: &NamingConvention, acronyms: AcronymStyle) -> Names {
        let mut order: Vec<usize> = (0..self.requests.len()).collect();
        // sort_by_key is stable, so equal ranks keep interning order
        order.sort_by_key(|&i| self.requests[i].rank);

        let mut taken: HashSet<String> = HashSet::new();
        let mut names = vec![String::new(); self.requests.len()];
        let is_free =
            |name: &str, taken: &HashSet<String>| !taken.contains(name) && !convention.is_reserved(name);

        for i in order {
            let request = &self.requests[i];
            let styled: Vec<String> = if request.proposals.is_empty() {
                vec![convention.apply("", acronyms)]
            } else {
                request
                    .proposals
                    .iter()
                    .map(|p| convention.apply(p, acronyms))
                    .collect()
            };

            let name = match styled.iter().find(|s| is_free(s, &taken)) {
                Some(free) => free.clone(),
                None => {
                    let base = &styled[0];
                    let mut n = 2;
                    loop {
                        let candidate = format!("{}{}", base, n);
                        if is_free(&candidate, &taken) {
                            break candidate;
                        }
                        n += 1;
                    }
                }
            };

            debug!(rank = request.rank, "assigned name {}", name);
            taken.insert(name.clone());
            names[i] = name;
        }

        Names { names }
    }
}

impl<K: Eq + Hash> Default for Namer<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolved identifiers, indexed by [`NameId`].
#[derive(Debug, Clone, Default)]
pub struct Names {
    names: Vec<String>,
}

impl Names {
    pub fn resolve(&self, id: NameId) -> Option<&str> {
        self.names.get(id.0 as usize).map(String::as_str)
    }
}
