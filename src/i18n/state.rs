// SPDX-License-Identifier: PMPL-1.0-or-later

//! Loaded bundles plus per-language lookup bookkeeping.
//!
//! `unused[lang]` starts as every key of that language's bundle and shrinks
//! as keys are requested. `missing[lang]` grows with each distinct key that
//! was requested but not present in that language.

use crate::types::{Bundles, LanguageBundle, LanguageCode};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone)]
pub struct TranslationState {
    bundles: Bundles,
    missing: BTreeMap<LanguageCode, BTreeSet<String>>,
    unused: BTreeMap<LanguageCode, BTreeSet<String>>,
}

impl TranslationState {
    pub fn new(bundles: Bundles) -> Self {
        let unused = bundles
            .iter()
            .map(|(code, bundle)| (code.clone(), bundle.translations().keys().cloned().collect()))
            .collect();

        Self {
            bundles,
            missing: BTreeMap::new(),
            unused,
        }
    }

    pub fn bundles(&self) -> &Bundles {
        &self.bundles
    }

    pub fn bundle(&self, lang: &str) -> Option<&LanguageBundle> {
        self.bundles.get(lang)
    }

    pub fn has_language(&self, lang: &str) -> bool {
        self.bundles.contains_key(lang)
    }

    /// Translation of `key` in `lang`, without touching any bookkeeping.
    pub fn lookup(&self, lang: &str, key: &str) -> Option<&str> {
        self.bundle(lang).and_then(|bundle| bundle.get(key))
    }

    /// Returns true if `key` was still unused.
    pub(crate) fn mark_used(&mut self, lang: &str, key: &str) -> bool {
        self.unused
            .get_mut(lang)
            .map(|keys| keys.remove(key))
            .unwrap_or(false)
    }

    /// Returns true the first time a (lang, key) pair is recorded.
    pub(crate) fn record_missing(&mut self, lang: &str, key: &str) -> bool {
        debug_assert!(self.lookup(lang, key).is_none());
        self.missing
            .entry(lang.to_string())
            .or_default()
            .insert(key.to_string())
    }

    pub fn missing(&self, lang: &str) -> Option<&BTreeSet<String>> {
        self.missing.get(lang)
    }

    pub fn unused(&self, lang: &str) -> Option<&BTreeSet<String>> {
        self.unused.get(lang)
    }

    pub fn all_unused(&self) -> &BTreeMap<LanguageCode, BTreeSet<String>> {
        &self.unused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundles() -> Bundles {
        let mut en = BTreeMap::new();
        en.insert("greeting".to_string(), "Hello".to_string());
        en.insert("farewell".to_string(), "Bye".to_string());
        let mut out = Bundles::new();
        out.insert(
            "en".to_string(),
            LanguageBundle::new("en", en, vec![], "lang.en.json"),
        );
        out
    }

    #[test]
    fn unused_seeded_from_translations() {
        let state = TranslationState::new(bundles());
        let unused = state.unused("en").unwrap();
        assert_eq!(unused.len(), 2);
        assert!(unused.contains("greeting"));
        assert!(state.missing("en").is_none());
    }

    #[test]
    fn mark_used_only_shrinks() {
        let mut state = TranslationState::new(bundles());
        assert!(state.mark_used("en", "greeting"));
        assert!(!state.mark_used("en", "greeting"));
        assert!(!state.mark_used("en", "not-a-key"));
        assert!(!state.mark_used("de", "greeting"));
        assert_eq!(state.unused("en").unwrap().len(), 1);
    }

    #[test]
    fn record_missing_deduplicates() {
        let mut state = TranslationState::new(bundles());
        assert!(state.record_missing("en", "absent"));
        assert!(!state.record_missing("en", "absent"));
        assert!(state.record_missing("de", "absent"));
        assert_eq!(state.missing("en").unwrap().len(), 1);
        assert!(state.missing("de").unwrap().contains("absent"));
    }
}
