//! The immutable type graph handed to the code generator.

use std::{fmt, str::FromStr};

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Index of a node in a [`TypeGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// String types that carry an additional format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransformedKind {
    DateTime,
    Date,
    Time,
    Uuid,
    Uri,
    IntegerString,
    BoolString,
}

impl TransformedKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransformedKind::DateTime => "date-time",
            TransformedKind::Date => "date",
            TransformedKind::Time => "time",
            TransformedKind::Uuid => "uuid",
            TransformedKind::Uri => "uri",
            TransformedKind::IntegerString => "integer-string",
            TransformedKind::BoolString => "bool-string",
        }
    }
}

impl fmt::Display for TransformedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransformedKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date-time" => Ok(TransformedKind::DateTime),
            "date" => Ok(TransformedKind::Date),
            "time" => Ok(TransformedKind::Time),
            "uuid" => Ok(TransformedKind::Uuid),
            "uri" => Ok(TransformedKind::Uri),
            "integer-string" => Ok(TransformedKind::IntegerString),
            "bool-string" => Ok(TransformedKind::BoolString),
            _ => Err(format!("unknown string format '{}'", s)),
        }
    }
}

/// A property of a class type.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassProperty {
    pub ty: TypeId,
    pub optional: bool,
    pub description: Option<String>,
}

impl ClassProperty {
    pub fn new(ty: TypeId) -> Self {
        Self {
            ty,
            optional: false,
            description: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// The shape of a type node.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    Any,
    Null,
    Bool,
    Integer,
    Double,
    String,
    Array {
        items: TypeId,
    },
    /// Properties keyed by their original JSON name, in source order.
    Class {
        properties: IndexMap<String, ClassProperty>,
    },
    /// String-keyed map.
    Map {
        values: TypeId,
    },
    Enum {
        cases: IndexSet<String>,
    },
    Union {
        members: Vec<TypeId>,
    },
    Transformed(TransformedKind),
}

/// Dedup key for a type's structural kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindTag {
    Any,
    Null,
    Bool,
    Integer,
    Double,
    String,
    Array,
    Class,
    Map,
    Enum,
    Union,
    Transformed(TransformedKind),
}

impl TypeKind {
    pub fn tag(&self) -> KindTag {
        match self {
            TypeKind::Any => KindTag::Any,
            TypeKind::Null => KindTag::Null,
            TypeKind::Bool => KindTag::Bool,
            TypeKind::Integer => KindTag::Integer,
            TypeKind::Double => KindTag::Double,
            TypeKind::String => KindTag::String,
            TypeKind::Array { .. } => KindTag::Array,
            TypeKind::Class { .. } => KindTag::Class,
            TypeKind::Map { .. } => KindTag::Map,
            TypeKind::Enum { .. } => KindTag::Enum,
            TypeKind::Union { .. } => KindTag::Union,
            TypeKind::Transformed(t) => KindTag::Transformed(*t),
        }
    }

    /// Scalar kinds: any, null, bool, numbers, strings and formatted strings.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            TypeKind::Any
                | TypeKind::Null
                | TypeKind::Bool
                | TypeKind::Integer
                | TypeKind::Double
                | TypeKind::String
                | TypeKind::Transformed(_)
        )
    }

    /// Classes, enums and unions take part in naming and declaration ordering.
    pub fn is_named(&self) -> bool {
        matches!(
            self,
            TypeKind::Class { .. } | TypeKind::Enum { .. } | TypeKind::Union { .. }
        )
    }

    /// Direct references to other nodes, in declaration order.
    pub fn children(&self) -> Vec<TypeId> {
        match self {
            TypeKind::Array { items } => vec![*items],
            TypeKind::Map { values } => vec![*values],
            TypeKind::Class { properties } => properties.values().map(|p| p.ty).collect(),
            TypeKind::Union { members } => members.clone(),
            _ => Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TypeKind::Any => "any",
            TypeKind::Null => "null",
            TypeKind::Bool => "bool",
            TypeKind::Integer => "integer",
            TypeKind::Double => "double",
            TypeKind::String => "string",
            TypeKind::Array { .. } => "array",
            TypeKind::Class { .. } => "class",
            TypeKind::Map { .. } => "map",
            TypeKind::Enum { .. } => "enum",
            TypeKind::Union { .. } => "union",
            TypeKind::Transformed(t) => t.as_str(),
        }
    }
}

/// Names proposed for a type by the front end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeNames {
    pub names: Vec<String>,
    /// Inferred from property names rather than given explicitly.
    pub inferred: bool,
}

impl TypeNames {
    pub fn given(name: impl Into<String>) -> Self {
        Self {
            names: vec![name.into()],
            inferred: false,
        }
    }

    pub fn inferred(name: impl Into<String>) -> Self {
        Self {
            names: vec![name.into()],
            inferred: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// One node of the type graph.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeNode {
    pub kind: TypeKind,
    pub names: TypeNames,
    pub description: Option<String>,
}

impl TypeNode {
    pub fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            names: TypeNames::default(),
            description: None,
        }
    }
}

/// An entry point designated by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopLevel {
    pub name: String,
    pub ty: TypeId,
}

/// An immutable, validated type graph.
///
/// Construct one with [`crate::GraphBuilder`] or load it from JSON with
/// [`TypeGraph::from_json_str`]; both run the same validation, so every
/// `TypeId` reachable from the graph is in range.
#[derive(Debug, Clone)]
pub struct TypeGraph {
    nodes: Vec<TypeNode>,
    top_levels: Vec<TopLevel>,
}

impl TypeGraph {
    pub(crate) fn from_parts(nodes: Vec<TypeNode>, top_levels: Vec<TopLevel>) -> Self {
        Self { nodes, top_levels }
    }

    /// Get a node. Ids handed out by this graph are always in range.
    pub fn node(&self, id: TypeId) -> &TypeNode {
        &self.nodes[id.index()]
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeNode> {
        self.nodes.get(id.index())
    }

    pub fn kind(&self, id: TypeId) -> &TypeKind {
        &self.node(id).kind
    }

    pub fn top_levels(&self) -> &[TopLevel] {
        &self.top_levels
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes with their ids, in graph order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &TypeNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (TypeId(i as u32), node))
    }

    /// Ids of all class nodes, in graph order.
    pub fn classes(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.iter()
            .filter(|(_, node)| matches!(node.kind, TypeKind::Class { .. }))
            .map(|(id, _)| id)
    }
}
