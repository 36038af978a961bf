//! Word splitting, case-style classification and pluralization.
//!
//! These helpers back the naming rules (verbs in paths, plural collections)
//! and the consistency tallies over JSON keys and parameter names.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Version path segments: `v1`, `V2`, `v1.1`.
static VERSION_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[vV]\d+(\.\d+)*$").expect("Invalid version segment regex"));

const IRREGULAR_PLURALS: &[&str] = &[
    "people", "children", "men", "women", "data", "media", "criteria", "indices", "matrices",
    "feet", "teeth", "mice", "geese",
];

const UNCOUNTABLE: &[&str] = &[
    "information",
    "equipment",
    "news",
    "series",
    "species",
    "metadata",
    "software",
    "feedback",
    "staff",
    "health",
    "auth",
    "status",
    "analytics",
    "settings",
];

/// Naming convention of an identifier.
///
/// Declaration order doubles as the tie-break order when picking a
/// dominant style.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum CaseStyle {
    #[serde(rename = "camelCase", alias = "camel")]
    Camel,
    #[serde(rename = "snake_case", alias = "snake")]
    Snake,
    #[serde(rename = "PascalCase", alias = "pascal")]
    Pascal,
    #[serde(rename = "kebab-case", alias = "kebab")]
    Kebab,
    #[serde(rename = "SCREAMING_SNAKE_CASE", alias = "screaming-snake")]
    ScreamingSnake,
    /// Anything that fits no convention (`first-Name`, `$type`).
    #[serde(rename = "mixed")]
    Mixed,
    /// A single lowercase word; compatible with camel, snake and kebab.
    #[serde(rename = "flat")]
    Flat,
}

impl CaseStyle {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Camel => "camelCase",
            Self::Snake => "snake_case",
            Self::Pascal => "PascalCase",
            Self::Kebab => "kebab-case",
            Self::ScreamingSnake => "SCREAMING_SNAKE_CASE",
            Self::Mixed => "mixed",
            Self::Flat => "flat",
        }
    }

    /// Classify an identifier.
    pub fn classify(name: &str) -> Self {
        if name.is_empty() {
            return Self::Mixed;
        }
        let has_dash = name.contains('-');
        let has_underscore = name.contains('_');
        let all_lower = name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
        let all_upper = name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');

        match (has_dash, has_underscore) {
            (true, true) => Self::Mixed,
            (true, false) => {
                if all_lower && !name.starts_with('-') && !name.ends_with('-') && !name.contains("--")
                {
                    Self::Kebab
                } else {
                    Self::Mixed
                }
            }
            (false, true) => {
                if all_lower {
                    Self::Snake
                } else if all_upper {
                    Self::ScreamingSnake
                } else {
                    Self::Mixed
                }
            }
            (false, false) => {
                if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
                    return Self::Mixed;
                }
                let first = name.chars().next().unwrap_or_default();
                if !first.is_ascii_alphabetic() {
                    return Self::Mixed;
                }
                let has_upper = name.chars().any(|c| c.is_ascii_uppercase());
                let has_lower = name.chars().any(|c| c.is_ascii_lowercase());
                if first.is_ascii_lowercase() {
                    if has_upper { Self::Camel } else { Self::Flat }
                } else if has_lower {
                    Self::Pascal
                } else {
                    Self::ScreamingSnake
                }
            }
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CaseStyle {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "camelCase" | "camel" => Ok(Self::Camel),
            "snake_case" | "snake" => Ok(Self::Snake),
            "PascalCase" | "pascal" => Ok(Self::Pascal),
            "kebab-case" | "kebab" => Ok(Self::Kebab),
            "SCREAMING_SNAKE_CASE" | "screaming-snake" => Ok(Self::ScreamingSnake),
            other => Err(ModelError::UnknownCaseStyle(other.to_string())),
        }
    }
}

/// Split an identifier into lowercase words.
///
/// Separators are `-`, `_`, `.` and spaces; camel humps and acronym
/// boundaries (`HTTPServer` → `http`, `server`) also split.
pub fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (index, &ch) in chars.iter().enumerate() {
        if matches!(ch, '-' | '_' | '.' | ' ') {
            flush_word(&mut words, &mut current);
            continue;
        }
        if ch.is_uppercase() && !current.is_empty() {
            let prev = chars[index - 1];
            let next_is_lower = chars.get(index + 1).is_some_and(|c| c.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                flush_word(&mut words, &mut current);
            }
        }
        current.extend(ch.to_lowercase());
    }
    flush_word(&mut words, &mut current);
    words
}

fn flush_word(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

/// Heuristic plural check for a single word.
pub fn is_plural(word: &str) -> bool {
    let word = word.to_lowercase();
    if IRREGULAR_PLURALS.contains(&word.as_str()) || UNCOUNTABLE.contains(&word.as_str()) {
        return true;
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return false;
    }
    word.ends_with('s')
}

/// Naive English pluralization, applied to the end of `word`.
pub fn pluralize(word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.ends_with('y') {
        let before = lower.chars().rev().nth(1);
        if before.is_some_and(|c| !"aeiou".contains(c)) {
            return format!("{}ies", &word[..word.len() - 1]);
        }
    }
    if ["s", "x", "z", "ch", "sh"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        return format!("{word}es");
    }
    format!("{word}s")
}

/// True for path segments like `v1`, `V2`, `v1.1`.
pub fn is_version_segment(segment: &str) -> bool {
    VERSION_SEGMENT.is_match(segment)
}

/// True when any `/`-separated segment of `url` is a version segment.
pub fn has_version_segment(url: &str) -> bool {
    url.split('/').any(is_version_segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_words_handles_all_separators() {
        assert_eq!(split_words("getUsers"), vec!["get", "users"]);
        assert_eq!(split_words("create-order"), vec!["create", "order"]);
        assert_eq!(split_words("list_items"), vec!["list", "items"]);
        assert_eq!(split_words("HTTPServer"), vec!["http", "server"]);
        assert_eq!(split_words("userID"), vec!["user", "id"]);
        assert!(split_words("--").is_empty());
    }

    #[test]
    fn classify_styles() {
        assert_eq!(CaseStyle::classify("firstName"), CaseStyle::Camel);
        assert_eq!(CaseStyle::classify("first_name"), CaseStyle::Snake);
        assert_eq!(CaseStyle::classify("FirstName"), CaseStyle::Pascal);
        assert_eq!(CaseStyle::classify("first-name"), CaseStyle::Kebab);
        assert_eq!(CaseStyle::classify("FIRST_NAME"), CaseStyle::ScreamingSnake);
        assert_eq!(CaseStyle::classify("name"), CaseStyle::Flat);
        assert_eq!(CaseStyle::classify("name2"), CaseStyle::Flat);
        assert_eq!(CaseStyle::classify("first-Name"), CaseStyle::Mixed);
        assert_eq!(CaseStyle::classify("$type"), CaseStyle::Mixed);
        assert_eq!(CaseStyle::classify(""), CaseStyle::Mixed);
    }

    #[test]
    fn plural_detection() {
        assert!(is_plural("users"));
        assert!(is_plural("categories"));
        assert!(is_plural("people"));
        assert!(is_plural("status"));
        assert!(!is_plural("user"));
        assert!(!is_plural("address"));
        assert!(!is_plural("analysis"));
    }

    #[test]
    fn pluralize_words() {
        assert_eq!(pluralize("user"), "users");
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("match"), "matches");
        assert_eq!(pluralize("userProfile"), "userProfiles");
    }

    #[test]
    fn version_segments() {
        assert!(is_version_segment("v1"));
        assert!(is_version_segment("V2"));
        assert!(is_version_segment("v1.2"));
        assert!(!is_version_segment("version"));
        assert!(!is_version_segment("v"));
        assert!(has_version_segment("https://api.example.com/v1"));
        assert!(!has_version_segment("https://api.example.com/api"));
    }

    #[test]
    fn case_style_parses_from_config_names() {
        assert_eq!("camelCase".parse::<CaseStyle>().unwrap(), CaseStyle::Camel);
        assert_eq!("snake".parse::<CaseStyle>().unwrap(), CaseStyle::Snake);
        assert!("flat".parse::<CaseStyle>().is_err());
    }
}
