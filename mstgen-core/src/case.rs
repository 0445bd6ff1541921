//! Word splitting and case conversion.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How multi-letter acronyms (`URL`, `ID`) are cased inside generated names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AcronymStyle {
    /// Keep the acronym as written in the source (`userID` -> `UserID`).
    Original,
    /// Capitalize only the first letter (`userID` -> `UserId`).
    #[default]
    Pascal,
    /// Like `Pascal`, but a leading acronym is fully lowercased in camelCase.
    Camel,
    /// Lowercase the whole acronym (`userID` -> `Userid`).
    LowerCase,
}

impl AcronymStyle {
    /// Returns the option value as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            AcronymStyle::Original => "original",
            AcronymStyle::Pascal => "pascal",
            AcronymStyle::Camel => "camel",
            AcronymStyle::LowerCase => "lower-case",
        }
    }

    fn style(&self, word: &str) -> String {
        match self {
            AcronymStyle::Original => word.to_string(),
            AcronymStyle::Pascal | AcronymStyle::Camel => capitalize(&word.to_lowercase()),
            AcronymStyle::LowerCase => word.to_lowercase(),
        }
    }
}

impl fmt::Display for AcronymStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AcronymStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "original" => Ok(AcronymStyle::Original),
            "pascal" => Ok(AcronymStyle::Pascal),
            "camel" => Ok(AcronymStyle::Camel),
            "lower-case" | "lowerCase" => Ok(AcronymStyle::LowerCase),
            _ => Err(format!(
                "unknown acronym style '{}', expected one of: original, pascal, camel, lower-case",
                s
            )),
        }
    }
}

/// Split a name into words.
///
/// Breaks on any non-alphanumeric character, on a lower-to-upper transition,
/// before the last capital of an acronym run that starts a new word
/// (`URLPath` -> `URL`, `Path`) and after a digit run followed by a letter.
pub fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = (prev.is_lowercase() && c.is_uppercase())
                || (prev.is_uppercase() && c.is_uppercase() && next_is_lower)
                || (prev.is_numeric() && c.is_alphabetic());
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn is_acronym(word: &str) -> bool {
    word.chars().count() >= 2
        && word.chars().any(char::is_alphabetic)
        && word
            .chars()
            .all(|c| !c.is_alphabetic() || c.is_uppercase())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

fn style_word(word: &str, acronyms: AcronymStyle) -> String {
    if is_acronym(word) {
        acronyms.style(word)
    } else {
        capitalize(word)
    }
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld").
///
/// The first character of the result is always uppercase.
pub fn to_pascal_case(s: &str, acronyms: AcronymStyle) -> String {
    let joined: String = split_words(s)
        .iter()
        .map(|w| style_word(w, acronyms))
        .collect();
    capitalize(&joined)
}

/// Convert a string to camelCase (e.g., "hello_world" -> "helloWorld").
///
/// The first word is lowercased entirely, acronym or not.
pub fn to_camel_case(s: &str, acronyms: AcronymStyle) -> String {
    let words = split_words(s);
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            out.push_str(&style_word(word, acronyms));
        }
    }
    out
}
