//! The declaration emitter: renders a whole models file from a type graph.

use std::collections::{BTreeSet, HashSet};

use indexmap::IndexMap;
use mstgen_codegen::{
    builder::{CodeFragment, Renderable},
    naming::NameId,
};
use mstgen_core::{AcronymStyle, string_escape, to_camel_case};
use mstgen_graph::{ClassProperty, TypeGraph, TypeId, TypeKind};
use tracing::debug;

use crate::{
    Error, Result,
    ast::{Const, ConvertClass, EnumDecl, Import, Method, Model, ModelProperty},
    code_file::CodeFile,
    naming::{TypeNames, decoder_name, encoder_name, enum_case_names, nice_property_names},
    options::{ConverterScope, MstOptions, PropertyNaming, RendererConfig, TypeScriptOptions},
    plan::declaration_order,
    quote::{KeyConvention, quote_property_name},
    translator::Translator,
    vocabulary::Vocabulary,
};

/// Helper types always come from the stock library, whatever module the
/// `types` namespace is imported from.
const HELPER_TYPES_MODULE: &str = "mobx-state-tree";

/// Where usage examples in the header import the generated file from.
const USAGE_MODULE: &str = "./file";

/// Generates one TypeScript models file from a type graph.
///
/// ```
/// use mstgen_graph::GraphBuilder;
/// use mstgen_mobx::{Generator, RendererConfig};
///
/// let mut b = GraphBuilder::new();
/// let product = b.class("Product");
/// let name = b.string();
/// b.property(product, "name", name).top_level("Product", product);
/// let graph = b.build().unwrap();
///
/// let config = RendererConfig {
///     just_types: true,
///     ..RendererConfig::default()
/// };
/// let code = Generator::new(&graph, &config).generate().unwrap();
/// assert!(code.contains("export const Product = types.model(\"Product\", {"));
/// ```
pub struct Generator<'a> {
    graph: &'a TypeGraph,
    mst: MstOptions,
    ts: TypeScriptOptions,
    vocabulary: Vocabulary,
    keys: KeyConvention,
}

impl<'a> Generator<'a> {
    pub fn new(graph: &'a TypeGraph, config: &RendererConfig) -> Self {
        let (mst, ts) = config.clone().split();
        let vocabulary = Vocabulary::standard().with_module(mst.module_reference.clone());
        Self {
            graph,
            mst,
            ts,
            vocabulary,
            keys: KeyConvention::default(),
        }
    }

    /// Use a composed vocabulary instead of the standard one.
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    pub fn with_key_convention(mut self, keys: KeyConvention) -> Self {
        self.keys = keys;
        self
    }

    /// Render the file as lines, without line terminators.
    pub fn generate_lines(&self) -> Result<Vec<String>> {
        Ok(self.generate()?.lines().map(str::to_string).collect())
    }

    /// Render the file. Any error aborts generation; no partial output is
    /// returned.
    pub fn generate(&self) -> Result<String> {
        let names = TypeNames::assign(
            self.graph,
            self.mst.declare_unions_separately,
            self.ts.acronym_style,
        )?;
        let order = declaration_order(self.graph, self.mst.declare_unions_separately);

        let mut emitted = HashSet::new();
        let mut items = Vec::new();
        for &id in &order {
            if matches!(self.graph.kind(id), TypeKind::Union { .. }) && names.type_name(id).is_none() {
                // Unnamed unions stay inline
                continue;
            }
            items.push(self.declaration(id, &names, &emitted)?);
            emitted.insert(id);
        }
        items.extend(self.aliases(&names, &emitted)?);

        let mut file = CodeFile::new().import(
            Import::values(self.vocabulary.module()).binding(self.vocabulary.namespace()),
        );

        if !self.ts.just_types {
            let targets = self.converter_targets(&names, &order)?;
            if !targets.is_empty() {
                let (convert, helpers) = self.convert_class(&targets);
                file = file
                    .import(Import::types(HELPER_TYPES_MODULE).bindings(helpers))
                    .comment_lines(self.usage_comment(&targets));
                items.push(Item::Convert(convert));
            }
        }

        debug!(declarations = items.len(), "rendered models file");
        Ok(file.add_all(items).render())
    }

    fn declaration(&self, id: TypeId, names: &TypeNames, emitted: &HashSet<TypeId>) -> Result<Item> {
        let node = self.graph.node(id);
        let name_id = names.type_name(id).ok_or_else(|| {
            Box::new(Error::UnnamedType {
                ty: id,
                kind: node.kind.name(),
            })
        })?;
        let name = names.resolve(name_id)?;
        debug!(ty = %id, kind = node.kind.name(), name, "emitting declaration");

        let translator = self.translator(names, emitted);
        let description = node.description.as_deref();
        let item = match &node.kind {
            TypeKind::Class { properties } => {
                Item::Model(self.model(&translator, names, name, properties)?.doc(description))
            }
            TypeKind::Enum { cases } => {
                let idents = enum_case_names(cases, self.ts.acronym_style);
                let decl = idents
                    .into_iter()
                    .zip(cases)
                    .fold(EnumDecl::new(name), |decl, (ident, value)| {
                        decl.case(ident, string_escape(value))
                    });
                Item::Enum(decl.doc(description))
            }
            TypeKind::Union { .. } => {
                let expr = translator.union_expression(id)?.render(names.names())?;
                Item::Const(Const::new(name, expr).doc(description))
            }
            other => {
                return Err(Box::new(Error::UnnamedType {
                    ty: id,
                    kind: other.name(),
                }));
            }
        };
        Ok(item)
    }

    fn model(
        &self,
        translator: &Translator<'_>,
        names: &TypeNames,
        name: &str,
        properties: &IndexMap<String, ClassProperty>,
    ) -> Result<Model> {
        let keys: Vec<String> = match self.ts.property_naming {
            PropertyNaming::Original => properties
                .keys()
                .map(|key| quote_property_name(key, &self.keys))
                .collect(),
            PropertyNaming::Nice => nice_property_names(properties.keys(), self.ts.acronym_style)
                .iter()
                .map(|key| quote_property_name(key, &self.keys))
                .collect(),
        };

        let mut model = Model::new(name, self.vocabulary.member("model"));
        for (property, key) in properties.values().zip(keys) {
            let expr = translator.translate(property.ty)?.render(names.names())?;
            let value = if property.optional {
                format!("{}({})", self.vocabulary.member("maybe"), expr)
            } else {
                expr
            };
            model = model
                .property(ModelProperty::new(key, value).doc(property.description.as_deref()));
        }
        Ok(model)
    }

    /// `export const N = expr;` for top-levels whose type got no
    /// declaration of its own. Top-levels sharing a name share one alias.
    fn aliases(&self, names: &TypeNames, emitted: &HashSet<TypeId>) -> Result<Vec<Item>> {
        let translator = self.translator(names, emitted);
        let mut seen = HashSet::new();
        let mut aliases = Vec::new();
        for (index, top) in self.graph.top_levels().iter().enumerate() {
            if emitted.contains(&top.ty) {
                continue;
            }
            let name_id = self.top_level_name(names, index)?;
            if !seen.insert(name_id) {
                continue;
            }
            let name = names.resolve(name_id)?;
            debug!(top_level = %top.name, name, "emitting alias");
            let expr = translator.translate(top.ty)?.render(names.names())?;
            let description = self.graph.node(top.ty).description.as_deref();
            aliases.push(Item::Const(Const::new(name, expr).doc(description)));
        }
        Ok(aliases)
    }

    fn converter_targets(&self, names: &TypeNames, order: &[TypeId]) -> Result<Vec<Target>> {
        let ids: Vec<(NameId, TypeId)> = match self.ts.converters {
            ConverterScope::TopLevel => self
                .graph
                .top_levels()
                .iter()
                .enumerate()
                .map(|(index, top)| Ok((self.top_level_name(names, index)?, top.ty)))
                .collect::<Result<_>>()?,
            ConverterScope::AllObjects => order
                .iter()
                .filter(|&&id| matches!(self.graph.kind(id), TypeKind::Class { .. }))
                .filter_map(|&id| names.type_name(id).map(|name| (name, id)))
                .collect(),
        };

        let mut seen = HashSet::new();
        let mut targets = Vec::new();
        for (name_id, ty) in ids {
            if !seen.insert(name_id) {
                continue;
            }
            targets.push(Target {
                name: names.resolve(name_id)?.to_string(),
                is_enum: matches!(self.graph.kind(ty), TypeKind::Enum { .. }),
            });
        }
        Ok(targets)
    }

    /// The `Convert` class and the helper types its signatures use.
    fn convert_class(&self, targets: &[Target]) -> (ConvertClass, BTreeSet<&'static str>) {
        let runtime = self.ts.runtime_type_checking;
        let mut helpers = BTreeSet::new();
        let mut convert = ConvertClass::new();

        for target in targets {
            let name = &target.name;
            let (decoded, encoded) = if target.is_enum {
                (name.clone(), name.clone())
            } else if runtime {
                helpers.insert("Instance");
                let instance = format!("Instance<typeof {}>", name);
                (instance.clone(), instance)
            } else {
                helpers.insert("SnapshotIn");
                helpers.insert("SnapshotOut");
                (
                    format!("SnapshotIn<typeof {}>", name),
                    format!("SnapshotOut<typeof {}>", name),
                )
            };
            // Enums are plain strings at runtime, so they always pass through
            let decode = if runtime && !target.is_enum {
                format!("return {}.create(JSON.parse(json));", name)
            } else {
                "return JSON.parse(json);".to_string()
            };

            convert = convert
                .method(
                    Method::new(decoder_name(name))
                        .param("json", "string")
                        .returns(decoded)
                        .line(decode),
                )
                .method(
                    Method::new(encoder_name(name))
                        .param("value", encoded)
                        .returns("string")
                        .line("return JSON.stringify(value);"),
                );
        }
        (convert, helpers)
    }

    fn usage_comment(&self, targets: &[Target]) -> Vec<String> {
        let type_names: Vec<&str> = targets.iter().map(|t| t.name.as_str()).collect();
        let mut lines = vec![
            "To parse this data:".to_string(),
            String::new(),
            format!(
                "  import {{ Convert, {} }} from \"{}\";",
                type_names.join(", "),
                USAGE_MODULE
            ),
            String::new(),
        ];
        for name in type_names {
            lines.push(format!(
                "  const {} = Convert.{}(json);",
                to_camel_case(name, AcronymStyle::Original),
                decoder_name(name)
            ));
        }
        if self.ts.runtime_type_checking {
            lines.push(String::new());
            lines.push("These functions will throw an error if the JSON doesn't".to_string());
            lines.push("match the expected interface, even if the JSON is valid.".to_string());
        }
        lines
    }

    fn top_level_name(&self, names: &TypeNames, index: usize) -> Result<NameId> {
        names.top_level_name(self.graph, index).ok_or_else(|| {
            let ty = self.graph.top_levels()[index].ty;
            Box::new(Error::UnnamedType {
                ty,
                kind: self.graph.kind(ty).name(),
            })
        })
    }

    fn translator<'t>(&'t self, names: &'t TypeNames, emitted: &'t HashSet<TypeId>) -> Translator<'t> {
        Translator {
            graph: self.graph,
            vocabulary: &self.vocabulary,
            names,
            emitted,
        }
    }
}

/// A type that gets `Convert` methods.
struct Target {
    name: String,
    is_enum: bool,
}

/// One top-level element of the file body.
enum Item {
    Model(Model),
    Enum(EnumDecl),
    Const(Const),
    Convert(ConvertClass),
}

impl Renderable for Item {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        match self {
            Item::Model(model) => model.to_fragments(),
            Item::Enum(decl) => decl.to_fragments(),
            Item::Const(decl) => decl.to_fragments(),
            Item::Convert(convert) => convert.to_fragments(),
        }
    }
}

#[cfg(test)]
mod tests {
    use mstgen_graph::GraphBuilder;

    use super::*;

    fn just_types() -> RendererConfig {
        RendererConfig {
            just_types: true,
            ..RendererConfig::default()
        }
    }

    #[test]
    fn test_empty_graph_only_imports() {
        let graph = GraphBuilder::new().build().unwrap();
        let lines = Generator::new(&graph, &RendererConfig::default())
            .generate_lines()
            .unwrap();
        assert_eq!(lines, vec!["import { types } from \"mobx-state-tree\";"]);
    }

    #[test]
    fn test_optional_property_is_wrapped() {
        let mut b = GraphBuilder::new();
        let item = b.class("Item");
        let string = b.string();
        b.optional_property(item, "note", string);
        let graph = b.build().unwrap();

        let lines = Generator::new(&graph, &just_types())
            .generate_lines()
            .unwrap();
        assert!(lines.contains(&"  note: types.maybe(types.string),".to_string()));
    }

    #[test]
    fn test_self_reference_is_late() {
        let mut b = GraphBuilder::new();
        let node = b.class("TreeNode");
        let children = b.array(node);
        b.property(node, "children", children);
        let graph = b.build().unwrap();

        let code = Generator::new(&graph, &just_types()).generate().unwrap();
        assert!(code.contains("  children: types.array(types.late(() => TreeNode)),"));
    }

    #[test]
    fn test_enum_values_are_escaped() {
        let mut b = GraphBuilder::new();
        b.enumeration("Quote", ["say \"hi\""]);
        let graph = b.build().unwrap();

        let code = Generator::new(&graph, &just_types()).generate().unwrap();
        assert!(code.contains("  SayHi = \"say \\\"hi\\\"\","));
    }

    #[test]
    fn test_enum_only_targets_skip_helper_import() {
        let mut b = GraphBuilder::new();
        let status = b.enumeration("Status", ["on"]);
        b.top_level("Status", status);
        let graph = b.build().unwrap();

        let code = Generator::new(&graph, &RendererConfig::default())
            .generate()
            .unwrap();
        assert!(!code.contains("import type"));
        assert!(code.contains("public static toStatus(json: string): Status {"));
        assert!(code.contains("public static statusToJson(value: Status): string {"));
    }

    #[test]
    fn test_unnamed_class_aborts_generation() {
        let mut b = GraphBuilder::new();
        b.add(TypeKind::Class {
            properties: Default::default(),
        });
        let graph = b.build().unwrap();

        let err = Generator::new(&graph, &RendererConfig::default())
            .generate()
            .unwrap_err();
        assert!(matches!(*err, Error::UnnamedType { .. }));
    }

    #[test]
    fn test_custom_key_convention() {
        fn never_start(_: char) -> bool {
            false
        }

        let mut b = GraphBuilder::new();
        let item = b.class("Item");
        let string = b.string();
        b.property(item, "name", string);
        let graph = b.build().unwrap();

        let code = Generator::new(&graph, &just_types())
            .with_key_convention(KeyConvention {
                is_identifier_start: never_start,
                ..KeyConvention::default()
            })
            .generate()
            .unwrap();
        assert!(code.contains("  \"name\": types.string,"));
    }
}
