// SPDX-License-Identifier: PMPL-1.0-or-later

//! Translation lookup with fallback and usage tracking.
//!
//! Lookup order is requested language, then English, then the key itself
//! (keys are written to double as readable English). Every miss is logged
//! once per (language, key) pair for the lifetime of the translator, and
//! keys that were never asked for are reported by [`Translator::report_unused`]
//! at shutdown.

use crate::diagnostics::{DiagnosticsSink, MODULE_LABEL};
use crate::i18n::state::TranslationState;
use crate::types::{Bundles, LanguageCode, BASELINE_LANGUAGE};
use anyhow::{bail, Result};
use tracing::{debug, warn};

pub struct Translator<S: DiagnosticsSink> {
    state: TranslationState,
    sink: S,
    language: LanguageCode,
}

impl<S: DiagnosticsSink> Translator<S> {
    /// Build a translator over loaded bundles. The current language starts
    /// as English.
    pub fn new(bundles: Bundles, sink: S) -> Self {
        Self {
            state: TranslationState::new(bundles),
            sink,
            language: BASELINE_LANGUAGE.to_string(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Change the language used by [`Translator::t`]. Only loaded languages
    /// are accepted.
    pub fn set_language(&mut self, code: &str) -> Result<()> {
        if !self.state.has_language(code) {
            bail!("no language file loaded for {:?}", code);
        }
        self.language = code.to_string();
        Ok(())
    }

    pub fn state(&self) -> &TranslationState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Translate into the current language.
    pub fn t(&mut self, key: &str) -> String {
        let lang = self.language.clone();
        self.translate(key, &lang)
    }

    /// Translate `key` into `lang`, falling back to English and then to the
    /// key. A language with no bundle behaves like an empty one.
    pub fn translate(&mut self, key: &str, lang: &str) -> String {
        self.state.mark_used(lang, key);

        if let Some(value) = self.state.lookup(lang, key) {
            return value.to_string();
        }

        if self.state.record_missing(lang, key) {
            self.emit(
                "translate",
                &format!("translation missing ({}): {}", lang, key),
            );
        }

        if lang != BASELINE_LANGUAGE {
            return self.translate(key, BASELINE_LANGUAGE);
        }
        key.to_string()
    }

    /// Log the keys that were never requested, one line per language.
    pub fn report_unused(&mut self) -> Result<()> {
        let lines: Vec<String> = self
            .state
            .all_unused()
            .iter()
            .filter(|(_, keys)| !keys.is_empty())
            .map(|(lang, keys)| {
                let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
                format!("unused translations ({}): {}", lang, keys.join(", "))
            })
            .collect();

        for line in &lines {
            self.sink.write_line(MODULE_LABEL, "unused", line)?;
        }
        debug!(languages = lines.len(), "reported unused translations");
        Ok(())
    }

    fn emit(&mut self, function: &str, message: &str) {
        if let Err(err) = self.sink.write_line(MODULE_LABEL, function, message) {
            warn!("diagnostics write failed: {:#}", err);
        }
    }
}
