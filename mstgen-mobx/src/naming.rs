//! Name requests for declared types, enum cases and property keys.

use std::collections::HashMap;

use mstgen_codegen::naming::{
    NameId, Namer, Names, NamingConvention, TS_ENUM_CASE_NAMING, TS_PROPERTY_NAMING,
    TS_TYPE_NAMING,
};
use mstgen_core::{AcronymStyle, to_camel_case};
use mstgen_graph::{TypeGraph, TypeId, TypeKind};
use tracing::debug;

use crate::{Error, Result};

/// Name priorities. Lower ranks are assigned first and so get the cleanest
/// names when proposals collide.
pub mod rank {
    pub const ENUM: u32 = 5;
    pub const OBJECT: u32 = 10;
    /// Names given explicitly in the graph, for any kind.
    pub const GIVEN: u32 = 10;
    pub const INFERRED_OTHER: u32 = 30;
    pub const TOP_LEVEL: u32 = 100;
}

/// What a name in the type namespace belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKey {
    /// A class, enum or union. Named top-levels share their type's name.
    Type(TypeId),
    /// A top-level whose type is not a named type, by top-level index.
    TopLevel(usize),
}

/// Resolved names of everything the file declares.
#[derive(Debug)]
pub struct TypeNames {
    ids: HashMap<NameKey, NameId>,
    names: Names,
}

impl TypeNames {
    /// Intern and assign names for every top-level and named type.
    ///
    /// Top-levels are interned first, so a top-level that is itself a
    /// class, enum or union hands its name to that type. Unions are only
    /// named when they get their own declarations.
    pub fn assign(
        graph: &TypeGraph,
        declare_unions_separately: bool,
        acronyms: AcronymStyle,
    ) -> Result<Self> {
        let mut namer = Namer::new();

        for (i, top) in graph.top_levels().iter().enumerate() {
            let key = top_level_key(graph, i);
            namer.intern(key, [top.name.as_str()], rank::TOP_LEVEL);
            debug!(top_level = %top.name, "interned top-level {:?}", key);
        }

        for (id, node) in graph.iter() {
            let kind_rank = match &node.kind {
                TypeKind::Class { .. } => rank::OBJECT,
                TypeKind::Enum { .. } => rank::ENUM,
                TypeKind::Union { .. } if declare_unions_separately => rank::INFERRED_OTHER,
                _ => continue,
            };
            let key = NameKey::Type(id);
            if namer.get(&key).is_some() {
                continue;
            }
            if node.names.is_empty() {
                if matches!(node.kind, TypeKind::Union { .. }) {
                    // An unnamed union stays inline
                    continue;
                }
                return Err(Box::new(Error::UnnamedType {
                    ty: id,
                    kind: node.kind.name(),
                }));
            }
            let rank = if node.names.inferred {
                kind_rank
            } else {
                rank::GIVEN
            };
            namer.intern(key, node.names.names.iter().map(String::as_str), rank);
        }

        let names = namer.assign(&TS_TYPE_NAMING, acronyms);
        let ids = graph
            .top_levels()
            .iter()
            .enumerate()
            .map(|(i, _)| top_level_key(graph, i))
            .chain(graph.iter().map(|(id, _)| NameKey::Type(id)))
            .filter_map(|key| namer.get(&key).map(|id| (key, id)))
            .collect();

        Ok(Self { ids, names })
    }

    /// The name of a class, enum or named union.
    pub fn type_name(&self, ty: TypeId) -> Option<NameId> {
        self.ids.get(&NameKey::Type(ty)).copied()
    }

    /// The name of the `index`th top-level.
    pub fn top_level_name(&self, graph: &TypeGraph, index: usize) -> Option<NameId> {
        if index >= graph.top_levels().len() {
            return None;
        }
        self.ids.get(&top_level_key(graph, index)).copied()
    }

    pub fn names(&self) -> &Names {
        &self.names
    }

    /// Resolve a name to its identifier.
    pub fn resolve(&self, id: NameId) -> Result<&str> {
        self.names
            .resolve(id)
            .ok_or_else(|| Box::new(Error::UnresolvedName(id)))
    }
}

pub(crate) fn top_level_key(graph: &TypeGraph, index: usize) -> NameKey {
    let ty = graph.top_levels()[index].ty;
    if graph.kind(ty).is_named() {
        NameKey::Type(ty)
    } else {
        NameKey::TopLevel(index)
    }
}

/// Identifiers for the cases of one enum, in case order.
pub fn enum_case_names<'a>(
    cases: impl IntoIterator<Item = &'a String>,
    acronyms: AcronymStyle,
) -> Vec<String> {
    assign_in_order(cases, &TS_ENUM_CASE_NAMING, acronyms)
}

/// camelCase identifiers for the properties of one class, in property order.
pub fn nice_property_names<'a>(
    properties: impl IntoIterator<Item = &'a String>,
    acronyms: AcronymStyle,
) -> Vec<String> {
    assign_in_order(properties, &TS_PROPERTY_NAMING, acronyms)
}

fn assign_in_order<'a>(
    proposals: impl IntoIterator<Item = &'a String>,
    convention: &NamingConvention,
    acronyms: AcronymStyle,
) -> Vec<String> {
    let mut namer = Namer::new();
    let ids: Vec<NameId> = proposals
        .into_iter()
        .enumerate()
        .map(|(i, p)| namer.intern(i, [p.as_str()], 0))
        .collect();
    let names = namer.assign(convention, acronyms);
    ids.into_iter()
        .map(|id| names.resolve(id).unwrap_or_default().to_string())
        .collect()
}

/// `toProduct`: the decoder method for a declared name.
pub fn decoder_name(type_name: &str) -> String {
    format!("to{}", type_name)
}

/// `productToJson`: the encoder method for a declared name.
pub fn encoder_name(type_name: &str) -> String {
    format!("{}ToJson", to_camel_case(type_name, AcronymStyle::Original))
}
