// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime settings for loading and lookup.
//!
//! Precedence is CLI flag, then environment variable, then default. The
//! environment layer is applied by [`Config::from_env`]; the binary overlays
//! its flags on top.

use crate::diagnostics::DEFAULT_LOG_FILE;
use crate::i18n::{BundleLoader, ParsePolicy, DEFAULT_PATTERN};
use crate::types::{LanguageCode, BASELINE_LANGUAGE};
use std::env;
use std::path::PathBuf;

pub const DIR_ENV: &str = "VPC_LANG_DIR";
pub const PATTERN_ENV: &str = "VPC_LANG_PATTERN";
pub const LANG_ENV: &str = "VPC_LANG";
pub const LOG_FILE_ENV: &str = "VPC_LOG_FILE";
pub const TEST_ENV: &str = "VPC_TEST";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the `lang.<code>.json` files
    pub directory: PathBuf,
    /// File name glob for language files
    pub pattern: String,
    /// Language used for lookups that do not name one
    pub language: LanguageCode,
    /// Diagnostics log file
    pub log_file: PathBuf,
    /// Log file names and expanded commands while loading
    pub echo: bool,
    pub parse_policy: ParsePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            pattern: DEFAULT_PATTERN.to_string(),
            language: BASELINE_LANGUAGE.to_string(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            echo: false,
            parse_policy: ParsePolicy::Abort,
        }
    }
}

impl Config {
    /// Defaults overridden by any `VPC_*` variables that are set and
    /// non-empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(dir) = get(DIR_ENV) {
            config.directory = PathBuf::from(dir);
        }
        if let Some(pattern) = get(PATTERN_ENV) {
            config.pattern = pattern;
        }
        if let Some(lang) = get(LANG_ENV) {
            config.language = lang.trim().to_string();
        }
        if let Some(log_file) = get(LOG_FILE_ENV) {
            config.log_file = PathBuf::from(log_file);
        }
        if let Some(flag) = get(TEST_ENV) {
            config.echo = parse_flag(&flag);
        }
        config
    }

    pub fn loader(&self) -> BundleLoader {
        BundleLoader::new(&self.directory)
            .pattern(self.pattern.clone())
            .parse_policy(self.parse_policy)
            .echo(self.echo)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.pattern, "lang.*.json");
        assert_eq!(config.language, "en");
        assert!(!config.echo);
        assert_eq!(config.parse_policy, ParsePolicy::Abort);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::from_lookup(lookup(&[
            (DIR_ENV, "/opt/vpc/lang"),
            (LANG_ENV, " de "),
            (TEST_ENV, "TRUE"),
            (LOG_FILE_ENV, "audit.log"),
        ]));
        assert_eq!(config.directory, PathBuf::from("/opt/vpc/lang"));
        assert_eq!(config.language, "de");
        assert!(config.echo);
        assert_eq!(config.log_file, PathBuf::from("audit.log"));
        assert_eq!(config.pattern, DEFAULT_PATTERN);
    }

    #[test]
    fn blank_values_ignored() {
        let config = Config::from_lookup(lookup(&[(LANG_ENV, "  "), (PATTERN_ENV, "")]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn flag_parsing() {
        assert!(parse_flag("1"));
        assert!(parse_flag("on"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("nope"));
    }
}
