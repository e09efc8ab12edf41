// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for vpc-led-lang
//!
//! A language resource file becomes a [`LanguageBundle`]: its translation
//! table plus the expanded command list. The command list is positional,
//! index `i` in one language names the same device command as index `i` in
//! every other language.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Short language identifier such as `"en"` or `"de"`.
pub type LanguageCode = String;

/// The language every lookup ultimately falls back to. A bundle with this
/// code must be present for the application to start.
pub const BASELINE_LANGUAGE: &str = "en";

/// One entry of a resource file's `commands` array.
///
/// On disk a literal is a one-element array, `["Landing Gear"]`, and a range
/// is a three-element array, `["Fire Group {e} ({d})", 1, 8]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawTemplateSpec")]
pub enum TemplateSpec {
    Literal(String),
    Range { template: String, start: i64, end: i64 },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTemplateSpec {
    Literal([String; 1]),
    Range(String, i64, i64),
}

impl From<RawTemplateSpec> for TemplateSpec {
    fn from(raw: RawTemplateSpec) -> Self {
        match raw {
            RawTemplateSpec::Literal([text]) => TemplateSpec::Literal(text),
            RawTemplateSpec::Range(template, start, end) => TemplateSpec::Range {
                template,
                start,
                end,
            },
        }
    }
}

impl TemplateSpec {
    pub fn literal(text: impl Into<String>) -> Self {
        TemplateSpec::Literal(text.into())
    }

    pub fn range(template: impl Into<String>, start: i64, end: i64) -> Self {
        TemplateSpec::Range {
            template: template.into(),
            start,
            end,
        }
    }
}

/// A fully loaded language: translations plus the flattened command list.
///
/// Immutable once built; the loader is the only producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageBundle {
    code: LanguageCode,
    translations: BTreeMap<String, String>,
    commands: Vec<String>,
    #[serde(skip)]
    source: PathBuf,
}

impl LanguageBundle {
    pub fn new(
        code: impl Into<LanguageCode>,
        translations: BTreeMap<String, String>,
        commands: Vec<String>,
        source: impl Into<PathBuf>,
    ) -> Self {
        Self {
            code: code.into(),
            translations,
            commands,
            source: source.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn translations(&self) -> &BTreeMap<String, String> {
        &self.translations
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.translations.get(key).map(String::as_str)
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// File the bundle was parsed from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn is_baseline(&self) -> bool {
        self.code == BASELINE_LANGUAGE
    }
}

/// All loaded bundles keyed by language code.
pub type Bundles = BTreeMap<LanguageCode, LanguageBundle>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_spec_parses_literal_and_range() {
        let specs: Vec<TemplateSpec> =
            serde_json::from_str(r#"[["Gear"], ["Fire Group {e}", 1, 8]]"#).unwrap();
        assert_eq!(
            specs,
            vec![
                TemplateSpec::literal("Gear"),
                TemplateSpec::range("Fire Group {e}", 1, 8),
            ]
        );
    }

    #[test]
    fn template_spec_rejects_other_shapes() {
        assert!(serde_json::from_str::<TemplateSpec>(r#"["a", 1]"#).is_err());
        assert!(serde_json::from_str::<TemplateSpec>(r#"[]"#).is_err());
        assert!(serde_json::from_str::<TemplateSpec>(r#""bare""#).is_err());
        assert!(serde_json::from_str::<TemplateSpec>(r#"["a", "1", "2"]"#).is_err());
    }

    #[test]
    fn bundle_lookup() {
        let mut translations = BTreeMap::new();
        translations.insert("greeting".to_string(), "Hello".to_string());
        let bundle = LanguageBundle::new("en", translations, vec![], "lang.en.json");

        assert_eq!(bundle.get("greeting"), Some("Hello"));
        assert_eq!(bundle.get("farewell"), None);
        assert!(bundle.is_baseline());
        assert_eq!(bundle.source(), Path::new("lang.en.json"));
    }
}
