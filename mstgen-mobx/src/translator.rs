//! Type-to-expression translation.

use std::collections::HashSet;

use mstgen_codegen::naming::NameId;
use mstgen_graph::{KindTag, TransformedKind, TypeGraph, TypeId, TypeKind};
use tracing::trace;

use crate::{
    Error, Result,
    naming::TypeNames,
    plan::can_be_forward_declared,
    source::{Part, Word, paren_if_needed},
    vocabulary::{Scalar, Vocabulary},
};

/// Turns graph nodes into runtime type expressions.
///
/// `emitted` holds the declarations already written; a class referenced
/// before its declaration is wrapped in `types.late`, and a declared union
/// referenced before its declaration is inlined instead.
pub struct Translator<'a> {
    pub graph: &'a TypeGraph,
    pub vocabulary: &'a Vocabulary,
    pub names: &'a TypeNames,
    pub emitted: &'a HashSet<TypeId>,
}

impl Translator<'_> {
    pub fn translate(&self, id: TypeId) -> Result<Word> {
        let kind = self.graph.kind(id);
        trace!(ty = %id, kind = kind.name(), "translating");

        let word = match kind {
            TypeKind::Class { .. } => {
                let name = self.name_of(id, kind)?;
                self.reference(id, kind, name)
                    .ok_or_else(|| Box::new(Error::UnresolvedName(name)))?
            }
            TypeKind::Any => self.vocabulary.scalar(Scalar::Any),
            TypeKind::Null => self.vocabulary.scalar(Scalar::Null),
            TypeKind::Bool => self.vocabulary.scalar(Scalar::Boolean),
            TypeKind::Integer | TypeKind::Double => self.vocabulary.scalar(Scalar::Number),
            TypeKind::String => self.vocabulary.scalar(Scalar::String),
            TypeKind::Array { items } => {
                let items = self.translate(*items)?;
                let mut parts = vec![Part::text(self.vocabulary.member("array("))];
                parts.extend(paren_if_needed(items));
                parts.push(Part::from(")"));
                Word::single(parts)
            }
            // Maps are passed through as opaque snapshots
            TypeKind::Map { .. } => self.vocabulary.scalar(Scalar::Any),
            TypeKind::Enum { .. } => {
                let name = self.name_of(id, kind)?;
                Word::single([
                    Part::text(self.vocabulary.member("enumeration<")),
                    Part::Name(name),
                    Part::from(">(\""),
                    Part::Name(name),
                    Part::from("\", Object.values("),
                    Part::Name(name),
                    Part::from("))"),
                ])
            }
            TypeKind::Union { .. } => match self
                .names
                .type_name(id)
                .and_then(|name| self.reference(id, kind, name))
            {
                Some(word) => word,
                None => self.union_expression(id)?,
            },
            TypeKind::Transformed(TransformedKind::DateTime) => {
                self.vocabulary.scalar(Scalar::Date)
            }
            TypeKind::Transformed(_) => self.vocabulary.scalar(Scalar::String),
        };

        Ok(word)
    }

    /// `types.union(...)` over the union's members.
    ///
    /// Primitive members are deduplicated by kind, keeping the first; every
    /// other member is kept, even if it has the same kind as another.
    pub fn union_expression(&self, id: TypeId) -> Result<Word> {
        let TypeKind::Union { members } = self.graph.kind(id) else {
            return self.translate(id);
        };

        let mut seen: HashSet<KindTag> = HashSet::new();
        let mut parts = vec![Part::text(self.vocabulary.member("union("))];
        let mut first = true;
        for &member in members {
            let kind = self.graph.kind(member);
            if kind.is_primitive() && !seen.insert(kind.tag()) {
                continue;
            }
            if !first {
                parts.push(Part::from(", "));
            }
            first = false;
            parts.extend(paren_if_needed(self.translate(member)?));
        }
        parts.push(Part::from(")"));
        Ok(Word::single(parts))
    }

    /// A reference to a declared type by name, late-bound when the
    /// declaration comes further down the file. `None` when the type has no
    /// declaration yet and cannot be referenced ahead of it.
    fn reference(&self, id: TypeId, kind: &TypeKind, name: NameId) -> Option<Word> {
        if self.emitted.contains(&id) {
            Some(Word::name(name))
        } else if can_be_forward_declared(kind) {
            trace!(ty = %id, "forward reference");
            Some(Word::single([
                Part::text(self.vocabulary.member("late(() => ")),
                Part::Name(name),
                Part::from(")"),
            ]))
        } else {
            None
        }
    }

    fn name_of(&self, id: TypeId, kind: &TypeKind) -> Result<NameId> {
        self.names.type_name(id).ok_or_else(|| {
            Box::new(Error::UnnamedType {
                ty: id,
                kind: kind.name(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use mstgen_core::AcronymStyle;
    use mstgen_graph::GraphBuilder;

    use super::*;

    fn render(graph: &TypeGraph, id: TypeId, emitted: &[TypeId], declare_unions: bool) -> String {
        let names = TypeNames::assign(graph, declare_unions, AcronymStyle::Pascal).unwrap();
        let vocabulary = Vocabulary::standard();
        let emitted: HashSet<TypeId> = emitted.iter().copied().collect();
        let translator = Translator {
            graph,
            vocabulary: &vocabulary,
            names: &names,
            emitted: &emitted,
        };
        translator
            .translate(id)
            .unwrap()
            .render(names.names())
            .unwrap()
    }

    #[test]
    fn test_primitives() {
        let mut b = GraphBuilder::new();
        let ids = [
            b.any(),
            b.null(),
            b.bool(),
            b.integer(),
            b.double(),
            b.string(),
        ];
        let graph = b.build().unwrap();
        let rendered: Vec<String> = ids.iter().map(|&id| render(&graph, id, &[], false)).collect();
        assert_eq!(
            rendered,
            vec![
                "types.frozen()",
                "types.null",
                "types.boolean",
                "types.number",
                "types.number",
                "types.string",
            ]
        );
    }

    #[test]
    fn test_arrays_and_maps() {
        let mut b = GraphBuilder::new();
        let string = b.string();
        let list = b.array(string);
        let nested = b.array(list);
        let map = b.map(string);
        let graph = b.build().unwrap();
        assert_eq!(render(&graph, nested, &[], false), "types.array(types.array(types.string))");
        assert_eq!(render(&graph, map, &[], false), "types.frozen()");
    }

    #[test]
    fn test_transformed_strings() {
        let mut b = GraphBuilder::new();
        let date = b.transformed(TransformedKind::DateTime);
        let uuid = b.transformed(TransformedKind::Uuid);
        let graph = b.build().unwrap();
        assert_eq!(render(&graph, date, &[], false), "types.Date");
        assert_eq!(render(&graph, uuid, &[], false), "types.string");
    }

    #[test]
    fn test_enum_reference() {
        let mut b = GraphBuilder::new();
        let status = b.enumeration("status", ["draft"]);
        let graph = b.build().unwrap();
        assert_eq!(
            render(&graph, status, &[status], false),
            "types.enumeration<Status>(\"Status\", Object.values(Status))"
        );
    }

    #[test]
    fn test_class_reference_before_and_after_declaration() {
        let mut b = GraphBuilder::new();
        let product = b.class("Product");
        let graph = b.build().unwrap();
        assert_eq!(render(&graph, product, &[product], false), "Product");
        assert_eq!(render(&graph, product, &[], false), "types.late(() => Product)");
    }

    #[test]
    fn test_union_dedups_primitives_only() {
        let mut b = GraphBuilder::new();
        let s1 = b.string();
        let s2 = b.string();
        let number = b.double();
        let object_a = b.class("ObjectA");
        let object_b = b.class("ObjectA");
        let union = b.union([s1, s2, number, object_a, object_b]);
        let graph = b.build().unwrap();
        assert_eq!(
            render(&graph, union, &[object_a, object_b], false),
            "types.union(types.string, types.number, ObjectA, ObjectA2)"
        );
    }

    #[test]
    fn test_union_keeps_integer_and_double_apart() {
        let mut b = GraphBuilder::new();
        let integer = b.integer();
        let double = b.double();
        let null = b.null();
        let union = b.union([null, integer, double]);
        let graph = b.build().unwrap();
        assert_eq!(
            render(&graph, union, &[], false),
            "types.union(types.null, types.number, types.number)"
        );
    }

    #[test]
    fn test_declared_union_reference() {
        let mut b = GraphBuilder::new();
        let string = b.string();
        let integer = b.integer();
        let union = b.union([string, integer]);
        b.names(union, mstgen_graph::TypeNames::given("StringOrInt"));
        let graph = b.build().unwrap();

        assert_eq!(render(&graph, union, &[union], true), "StringOrInt");
        // Not declared yet, so it is inlined
        assert_eq!(
            render(&graph, union, &[], true),
            "types.union(types.string, types.number)"
        );
        // Default policy always inlines
        assert_eq!(
            render(&graph, union, &[union], false),
            "types.union(types.string, types.number)"
        );
    }

    #[test]
    fn test_unnamed_enum_is_an_error() {
        let mut b = GraphBuilder::new();
        let status = b.enumeration("Status", ["a"]);
        let graph = b.build().unwrap();
        let vocabulary = Vocabulary::standard();
        let names = TypeNames::assign(&graph, false, AcronymStyle::Pascal).unwrap();
        let other = {
            let mut b = GraphBuilder::new();
            b.string();
            b.build().unwrap()
        };
        let other_names = TypeNames::assign(&other, false, AcronymStyle::Pascal).unwrap();
        let emitted = HashSet::new();
        let translator = Translator {
            graph: &graph,
            vocabulary: &vocabulary,
            names: &other_names,
            emitted: &emitted,
        };
        let err = translator.translate(status).unwrap_err();
        assert!(matches!(*err, Error::UnnamedType { kind: "enum", .. }));
        assert!(names.type_name(status).is_some());
    }
}
