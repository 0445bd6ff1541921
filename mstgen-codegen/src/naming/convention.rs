//! Naming conventions for generated identifiers.

use mstgen_core::{AcronymStyle, is_identifier_start, to_camel_case, to_pascal_case};

/// How proposals become identifiers in one namespace.
///
/// Defines the casing applied to every proposal and the words that may never
/// be handed out.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a proposal into the target casing.
    pub style: fn(&str, AcronymStyle) -> String,
    /// Words that are never assigned.
    pub reserved_words: &'static [&'static str],
    /// Used when a proposal styles to an empty string.
    pub empty: &'static str,
    /// Prepended when a styled proposal does not start like an identifier.
    pub prefix: &'static str,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Style a proposal into a legal identifier (not checked against reserved words).
    pub fn apply(&self, proposal: &str, acronyms: AcronymStyle) -> String {
        let styled = (self.style)(proposal, acronyms);
        match styled.chars().next() {
            None => self.empty.to_string(),
            Some(c) if !is_identifier_start(c) => format!("{}{}", self.prefix, styled),
            Some(_) => styled,
        }
    }
}

/// Words a generated TypeScript module must not declare.
pub const TS_RESERVED: &[&str] = &[
    // JavaScript reserved words
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "let",
    "new",
    "null",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
    // TypeScript reserved words
    "any",
    "as",
    "async",
    "await",
    "boolean",
    "constructor",
    "declare",
    "get",
    "implements",
    "interface",
    "module",
    "namespace",
    "never",
    "number",
    "object",
    "package",
    "private",
    "protected",
    "public",
    "readonly",
    "require",
    "set",
    "static",
    "string",
    "symbol",
    "type",
    "undefined",
    "unknown",
    // Globals the generated module relies on
    "Object",
    "JSON",
    "Date",
    "Array",
    "String",
    "Number",
    "Boolean",
    "Error",
    "Map",
    "Symbol",
    "Promise",
    // Identifiers the generated module declares or imports itself
    "types",
    "Convert",
    "Instance",
    "SnapshotIn",
    "SnapshotOut",
];

/// PascalCase names for declared types (models, enums, aliases).
pub const TS_TYPE_NAMING: NamingConvention = NamingConvention {
    style: to_pascal_case,
    reserved_words: TS_RESERVED,
    empty: "Empty",
    prefix: "The",
};

/// PascalCase names for enum members. Members live in their enum's own
/// namespace and may be any property name.
pub const TS_ENUM_CASE_NAMING: NamingConvention = NamingConvention {
    style: to_pascal_case,
    reserved_words: &[],
    empty: "Empty",
    prefix: "The",
};

/// camelCase names, used for property identifiers under the `nice` policy.
pub const TS_PROPERTY_NAMING: NamingConvention = NamingConvention {
    style: to_camel_case,
    reserved_words: &[],
    empty: "empty",
    prefix: "the",
};
