//! Loading a type graph from its JSON interchange format.
//!
//! ```json
//! {
//!   "topLevels": [{ "name": "Product", "type": 2 }],
//!   "types": [
//!     { "kind": "string" },
//!     { "kind": "integer" },
//!     {
//!       "kind": "class",
//!       "names": ["Product"],
//!       "properties": {
//!         "name": { "type": 0 },
//!         "count": { "type": 1, "optional": true }
//!       }
//!     }
//!   ]
//! }
//! ```

use std::path::Path;

use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;
use tracing::debug;

use crate::{
    ClassProperty, Error, GraphError, Result, TopLevel, TransformedKind, TypeGraph, TypeId,
    TypeKind, TypeNames, TypeNode, error::find_string_span, validate::validate,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawGraph {
    #[serde(default)]
    top_levels: Vec<RawTopLevel>,
    types: Vec<RawType>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTopLevel {
    name: String,
    #[serde(rename = "type")]
    ty: u32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum RawKind {
    Any,
    Null,
    Bool,
    Integer,
    Double,
    String,
    Array,
    #[serde(alias = "object")]
    Class,
    Map,
    Enum,
    Union,
    Transformed,
}

impl RawKind {
    fn as_str(self) -> &'static str {
        match self {
            RawKind::Any => "any",
            RawKind::Null => "null",
            RawKind::Bool => "bool",
            RawKind::Integer => "integer",
            RawKind::Double => "double",
            RawKind::String => "string",
            RawKind::Array => "array",
            RawKind::Class => "class",
            RawKind::Map => "map",
            RawKind::Enum => "enum",
            RawKind::Union => "union",
            RawKind::Transformed => "transformed",
        }
    }
}

/// One entry of `types`. Which optional fields are required depends on `kind`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawType {
    kind: RawKind,
    #[serde(default)]
    names: Vec<String>,
    #[serde(default)]
    inferred_name: bool,
    description: Option<String>,
    items: Option<u32>,
    values: Option<u32>,
    properties: Option<IndexMap<String, RawProperty>>,
    cases: Option<Vec<String>>,
    members: Option<Vec<u32>>,
    format: Option<TransformedKind>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProperty {
    #[serde(rename = "type")]
    ty: u32,
    #[serde(default)]
    optional: bool,
    description: Option<String>,
}

impl RawType {
    fn into_node(self, id: TypeId) -> std::result::Result<TypeNode, GraphError> {
        let kind_name = self.kind.as_str();
        let missing = |field: &'static str| GraphError::MissingField {
            ty: id,
            kind: kind_name,
            field,
        };

        let kind = match self.kind {
            RawKind::Any => TypeKind::Any,
            RawKind::Null => TypeKind::Null,
            RawKind::Bool => TypeKind::Bool,
            RawKind::Integer => TypeKind::Integer,
            RawKind::Double => TypeKind::Double,
            RawKind::String => TypeKind::String,
            RawKind::Array => TypeKind::Array {
                items: TypeId(self.items.ok_or_else(|| missing("items"))?),
            },
            RawKind::Map => TypeKind::Map {
                values: TypeId(self.values.ok_or_else(|| missing("values"))?),
            },
            RawKind::Class => TypeKind::Class {
                properties: self
                    .properties
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(name, p)| {
                        let property = ClassProperty {
                            ty: TypeId(p.ty),
                            optional: p.optional,
                            description: p.description,
                        };
                        (name, property)
                    })
                    .collect(),
            },
            RawKind::Enum => {
                let mut cases = IndexSet::new();
                for case in self.cases.ok_or_else(|| missing("cases"))? {
                    if cases.contains(&case) {
                        return Err(GraphError::DuplicateCase { ty: id, case });
                    }
                    cases.insert(case);
                }
                TypeKind::Enum { cases }
            }
            RawKind::Union => TypeKind::Union {
                members: self
                    .members
                    .ok_or_else(|| missing("members"))?
                    .into_iter()
                    .map(TypeId)
                    .collect(),
            },
            RawKind::Transformed => {
                TypeKind::Transformed(self.format.ok_or_else(|| missing("format"))?)
            }
        };

        Ok(TypeNode {
            kind,
            names: TypeNames {
                names: self.names,
                inferred: self.inferred_name,
            },
            description: self.description,
        })
    }
}

impl TypeGraph {
    /// Parse and validate a type graph from JSON text.
    ///
    /// `filename` is only used for diagnostics.
    pub fn from_json_str(src: &str, filename: &str) -> Result<Self> {
        let raw: RawGraph =
            serde_json::from_str(src).map_err(|e| Error::parse(e, src, filename))?;

        let mut nodes = Vec::with_capacity(raw.types.len());
        for (i, ty) in raw.types.into_iter().enumerate() {
            let node = ty
                .into_node(TypeId(i as u32))
                .map_err(|e| invalid(e, src, filename))?;
            nodes.push(node);
        }

        let top_levels: Vec<TopLevel> = raw
            .top_levels
            .into_iter()
            .map(|t| TopLevel {
                name: t.name,
                ty: TypeId(t.ty),
            })
            .collect();

        validate(&nodes, &top_levels).map_err(|e| invalid(e, src, filename))?;

        debug!(
            types = nodes.len(),
            top_levels = top_levels.len(),
            "loaded type graph from {}",
            filename
        );
        Ok(TypeGraph::from_parts(nodes, top_levels))
    }

    /// Read, parse and validate a type graph file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        Self::from_json_str(&content, &filename)
    }
}

/// Attach source context, pointing at the offending name where one exists.
fn invalid(reason: GraphError, src: &str, filename: &str) -> Box<Error> {
    let span = match &reason {
        GraphError::DuplicateTopLevel(name) | GraphError::DanglingTopLevel { name, .. } => {
            find_string_span(src, name)
        }
        GraphError::DuplicateCase { case, .. } => find_string_span(src, case),
        _ => None,
    };
    Error::invalid(reason, src, filename, span)
}
