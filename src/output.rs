// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rendering of loaded bundles for the `dump` command

use crate::i18n::language_name;
use crate::types::Bundles;
use anyhow::Result;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DumpFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl DumpFormat {
    pub fn render(&self, bundles: &Bundles) -> Result<String> {
        match self {
            DumpFormat::Text => Ok(format_bundles_as_text(bundles)),
            DumpFormat::Json => Ok(serde_json::to_string_pretty(bundles)?),
            DumpFormat::Yaml => Ok(serde_yaml::to_string(bundles)?),
        }
    }
}

fn format_bundles_as_text(bundles: &Bundles) -> String {
    let mut lines = Vec::new();
    for (code, bundle) in bundles {
        match language_name(code) {
            Some(name) => lines.push(format!("{} ({}):", code, name)),
            None => lines.push(format!("{}:", code)),
        }
        for (key, value) in bundle.translations() {
            lines.push(format!("\t{}: {}", key, value));
        }
        lines.push(String::new());
        for (index, command) in bundle.commands().iter().enumerate() {
            lines.push(format!("\t{}\t{}", index, command));
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LanguageBundle;
    use std::collections::BTreeMap;

    fn bundles() -> Bundles {
        let mut translations = BTreeMap::new();
        translations.insert("greeting".to_string(), "Hello".to_string());
        let mut out = Bundles::new();
        out.insert(
            "en".to_string(),
            LanguageBundle::new(
                "en",
                translations,
                vec!["Gear".to_string(), "Fire Group 01".to_string()],
                "lang.en.json",
            ),
        );
        out
    }

    #[test]
    fn text_lists_translations_then_commands() {
        let text = DumpFormat::Text.render(&bundles()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "en (English):");
        assert_eq!(lines[1], "\tgreeting: Hello");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "\t0\tGear");
        assert_eq!(lines[4], "\t1\tFire Group 01");
    }

    #[test]
    fn json_contains_commands() {
        let json = DumpFormat::Json.render(&bundles()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["en"]["commands"][1], "Fire Group 01");
        assert_eq!(value["en"]["translations"]["greeting"], "Hello");
        assert!(value["en"].get("source").is_none());
    }

    #[test]
    fn yaml_renders() {
        let yaml = DumpFormat::Yaml.render(&bundles()).unwrap();
        assert!(yaml.contains("greeting: Hello"));
    }
}
