//! Renderer configuration.
//!
//! [`RendererConfig`] is the one validated input. It can be loaded from the
//! `[renderer]` table of an `mstgen.toml`, assembled from untyped
//! `key=value` pairs, or built in code, and is then split into the option
//! sets consumed by the model emitter and by the TypeScript-level helpers.

use std::{fmt, path::Path, str::FromStr};

use mstgen_core::AcronymStyle;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// How model property keys are derived from source property names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyNaming {
    /// Keep the source (JSON) name, quoting it when it is not an identifier.
    #[default]
    Original,
    /// Use camelCase identifiers.
    Nice,
}

impl PropertyNaming {
    /// Returns the option value as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyNaming::Original => "original",
            PropertyNaming::Nice => "nice",
        }
    }
}

impl fmt::Display for PropertyNaming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PropertyNaming {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "original" => Ok(PropertyNaming::Original),
            "nice" => Ok(PropertyNaming::Nice),
            _ => Err(format!(
                "unknown property naming '{}', expected 'original' or 'nice'",
                s
            )),
        }
    }
}

/// Which types get `Convert` helpers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConverterScope {
    /// Only top-level types.
    #[default]
    TopLevel,
    /// Every object type.
    AllObjects,
}

impl ConverterScope {
    /// Returns the option value as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConverterScope::TopLevel => "top-level",
            ConverterScope::AllObjects => "all-objects",
        }
    }
}

impl fmt::Display for ConverterScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConverterScope {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "top-level" => Ok(ConverterScope::TopLevel),
            "all-objects" => Ok(ConverterScope::AllObjects),
            _ => Err(format!(
                "unknown converter scope '{}', expected 'top-level' or 'all-objects'",
                s
            )),
        }
    }
}

/// Every recognized renderer option.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
pub struct RendererConfig {
    /// Give unions their own named declarations instead of inlining them.
    pub declare_unions_separately: bool,
    /// Validate decoded JSON by creating model instances.
    pub runtime_type_checking: bool,
    pub property_naming: PropertyNaming,
    pub acronym_style: AcronymStyle,
    /// Module the `types` namespace is imported from.
    pub module_reference: String,
    pub converters: ConverterScope,
    /// Emit declarations only, without `Convert` helpers.
    pub just_types: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            declare_unions_separately: false,
            runtime_type_checking: false,
            property_naming: PropertyNaming::default(),
            acronym_style: AcronymStyle::default(),
            module_reference: DEFAULT_MODULE.to_string(),
            converters: ConverterScope::default(),
            just_types: false,
        }
    }
}

/// The runtime library models are written against.
pub const DEFAULT_MODULE: &str = "mobx-state-tree";

/// Keys accepted by `RendererConfig::set`, in documentation order.
pub const OPTION_NAMES: &[&str] = &[
    "declare-unions-separately",
    "runtime-type-checking",
    "property-naming",
    "acronym-style",
    "module-reference",
    "converters",
    "just-types",
];

fn check_module_reference(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::invalid_option(
            "module-reference",
            value,
            "the module reference cannot be empty",
        ));
    }
    Ok(())
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    renderer: RendererConfig,
}

impl RendererConfig {
    /// Parse the `[renderer]` table of an `mstgen.toml`.
    ///
    /// `filename` is only used for diagnostics.
    pub fn from_toml_str(src: &str, filename: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(src).map_err(|e| Error::config(e, src, filename))?;
        file.renderer.validate()?;
        Ok(file.renderer)
    }

    /// Read and parse an `mstgen.toml` file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Build a configuration from untyped `key=value` pairs over the defaults.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        for (key, value) in pairs {
            config.set(key.as_ref(), value.as_ref())?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Set one option from its string form.
    ///
    /// Besides the canonical kebab-case keys this accepts the short legacy
    /// spellings `declare-unions`, `runtime-typecheck` and the boolean
    /// `nice-property-names`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "declare-unions-separately" | "declare-unions" => {
                self.declare_unions_separately = parse_bool(key, value)?;
            }
            "runtime-type-checking" | "runtime-typecheck" => {
                self.runtime_type_checking = parse_bool(key, value)?;
            }
            "property-naming" => {
                self.property_naming = parse_with(key, value)?;
            }
            "nice-property-names" => {
                self.property_naming = if parse_bool(key, value)? {
                    PropertyNaming::Nice
                } else {
                    PropertyNaming::Original
                };
            }
            "acronym-style" => {
                self.acronym_style = parse_with(key, value)?;
            }
            "module-reference" => {
                check_module_reference(value)?;
                self.module_reference = value.to_string();
            }
            "converters" => {
                self.converters = parse_with(key, value)?;
            }
            "just-types" => {
                self.just_types = parse_bool(key, value)?;
            }
            _ => {
                return Err(Box::new(Error::UnknownOption {
                    key: key.to_string(),
                    valid: OPTION_NAMES.join(", "),
                }));
            }
        }
        Ok(())
    }

    /// Check the values serde cannot rule out on its own.
    pub fn validate(&self) -> Result<()> {
        check_module_reference(&self.module_reference)
    }

    /// Split into the model-emitter options and the TypeScript-level options.
    pub fn split(self) -> (MstOptions, TypeScriptOptions) {
        let mst = MstOptions {
            declare_unions_separately: self.declare_unions_separately,
            module_reference: self.module_reference,
        };
        let ts = TypeScriptOptions {
            runtime_type_checking: self.runtime_type_checking,
            property_naming: self.property_naming,
            acronym_style: self.acronym_style,
            converters: self.converters,
            just_types: self.just_types,
        };
        (mst, ts)
    }
}

/// Options owned by the mobx-state-tree model emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MstOptions {
    pub declare_unions_separately: bool,
    pub module_reference: String,
}

/// Options shared with plain TypeScript output: naming and `Convert` helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeScriptOptions {
    pub runtime_type_checking: bool,
    pub property_naming: PropertyNaming,
    pub acronym_style: AcronymStyle,
    pub converters: ConverterScope,
    pub just_types: bool,
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Error::invalid_option(key, value, "expected 'true' or 'false'")),
    }
}

fn parse_with<T: FromStr<Err = String>>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|reason: String| Error::invalid_option(key, value, reason))
}
