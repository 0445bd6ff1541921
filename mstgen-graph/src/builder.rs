use indexmap::IndexSet;

use crate::{
    ClassProperty, Error, GraphError, Result, TopLevel, TransformedKind, TypeGraph, TypeId,
    TypeKind, TypeNames, TypeNode, validate::validate,
};

/// Incrementally constructs a [`TypeGraph`].
///
/// Classes are created empty and filled in with [`GraphBuilder::property`],
/// so recursive types can reference a class before its properties exist.
/// Misuse (adding a property to a non-class, repeating an enum case) is
/// recorded and reported by [`GraphBuilder::build`].
///
/// # Example
///
/// ```
/// use mstgen_graph::GraphBuilder;
///
/// let mut b = GraphBuilder::new();
/// let string = b.string();
/// let product = b.class("Product");
/// b.property(product, "name", string);
/// b.top_level("Product", product);
/// let graph = b.build().unwrap();
/// assert_eq!(graph.top_levels().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<TypeNode>,
    top_levels: Vec<TopLevel>,
    error: Option<GraphError>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an unnamed node.
    pub fn add(&mut self, kind: TypeKind) -> TypeId {
        self.add_node(TypeNode::new(kind))
    }

    pub fn add_node(&mut self, node: TypeNode) -> TypeId {
        let id = TypeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn any(&mut self) -> TypeId {
        self.add(TypeKind::Any)
    }

    pub fn null(&mut self) -> TypeId {
        self.add(TypeKind::Null)
    }

    pub fn bool(&mut self) -> TypeId {
        self.add(TypeKind::Bool)
    }

    pub fn integer(&mut self) -> TypeId {
        self.add(TypeKind::Integer)
    }

    pub fn double(&mut self) -> TypeId {
        self.add(TypeKind::Double)
    }

    pub fn string(&mut self) -> TypeId {
        self.add(TypeKind::String)
    }

    pub fn transformed(&mut self, kind: TransformedKind) -> TypeId {
        self.add(TypeKind::Transformed(kind))
    }

    pub fn array(&mut self, items: TypeId) -> TypeId {
        self.add(TypeKind::Array { items })
    }

    pub fn map(&mut self, values: TypeId) -> TypeId {
        self.add(TypeKind::Map { values })
    }

    /// Add an empty class with a given name.
    pub fn class(&mut self, name: impl Into<String>) -> TypeId {
        self.add_node(TypeNode {
            kind: TypeKind::Class {
                properties: Default::default(),
            },
            names: TypeNames::given(name),
            description: None,
        })
    }

    /// Add an enum with a given name. Cases keep their order.
    pub fn enumeration<S: Into<String>>(
        &mut self,
        name: impl Into<String>,
        cases: impl IntoIterator<Item = S>,
    ) -> TypeId {
        let id = TypeId(self.nodes.len() as u32);
        let mut set = IndexSet::new();
        for case in cases {
            let case = case.into();
            if set.contains(&case) {
                self.record(GraphError::DuplicateCase { ty: id, case });
            } else {
                set.insert(case);
            }
        }
        self.add_node(TypeNode {
            kind: TypeKind::Enum { cases: set },
            names: TypeNames::given(name),
            description: None,
        })
    }

    /// Add an unnamed union.
    pub fn union(&mut self, members: impl IntoIterator<Item = TypeId>) -> TypeId {
        self.add(TypeKind::Union {
            members: members.into_iter().collect(),
        })
    }

    /// Append a required property to a class.
    pub fn property(&mut self, class: TypeId, name: impl Into<String>, ty: TypeId) -> &mut Self {
        self.insert_property(class, name.into(), ClassProperty::new(ty))
    }

    /// Append an optional property to a class.
    pub fn optional_property(
        &mut self,
        class: TypeId,
        name: impl Into<String>,
        ty: TypeId,
    ) -> &mut Self {
        self.insert_property(class, name.into(), ClassProperty::new(ty).optional())
    }

    /// Set the description of a class property.
    pub fn describe_property(
        &mut self,
        class: TypeId,
        name: &str,
        description: impl Into<String>,
    ) -> &mut Self {
        match self.properties_mut(class) {
            Some(properties) => {
                if let Some(property) = properties.get_mut(name) {
                    property.description = Some(description.into());
                }
            }
            None => self.record(GraphError::NotAClass(class)),
        }
        self
    }

    pub fn describe(&mut self, ty: TypeId, description: impl Into<String>) -> &mut Self {
        if let Some(node) = self.nodes.get_mut(ty.index()) {
            node.description = Some(description.into());
        }
        self
    }

    /// Replace the proposed names of a node.
    pub fn names(&mut self, ty: TypeId, names: TypeNames) -> &mut Self {
        if let Some(node) = self.nodes.get_mut(ty.index()) {
            node.names = names;
        }
        self
    }

    pub fn top_level(&mut self, name: impl Into<String>, ty: TypeId) -> &mut Self {
        self.top_levels.push(TopLevel {
            name: name.into(),
            ty,
        });
        self
    }

    /// Validate and freeze the graph.
    pub fn build(self) -> Result<TypeGraph> {
        if let Some(error) = self.error {
            return Err(Box::new(Error::Graph(error)));
        }
        validate(&self.nodes, &self.top_levels).map_err(|e| Box::new(Error::Graph(e)))?;
        Ok(TypeGraph::from_parts(self.nodes, self.top_levels))
    }

    fn insert_property(&mut self, class: TypeId, name: String, property: ClassProperty) -> &mut Self {
        match self.properties_mut(class) {
            Some(properties) => {
                properties.insert(name, property);
            }
            None => self.record(GraphError::NotAClass(class)),
        }
        self
    }

    fn properties_mut(
        &mut self,
        class: TypeId,
    ) -> Option<&mut indexmap::IndexMap<String, ClassProperty>> {
        match self.nodes.get_mut(class.index()).map(|n| &mut n.kind) {
            Some(TypeKind::Class { properties }) => Some(properties),
            _ => None,
        }
    }

    fn record(&mut self, error: GraphError) {
        // Keep the first problem; later ones are usually consequences.
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}
