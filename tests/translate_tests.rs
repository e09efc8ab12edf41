// SPDX-License-Identifier: PMPL-1.0-or-later

//! End-to-end lookup tests: load files, translate, check the diagnostics log

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use vpc_led_lang::diagnostics::{FileSink, MemorySink};
use vpc_led_lang::i18n::{BundleLoader, Translator};

fn sample_translator() -> Translator<MemorySink> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("lang");
    let bundles = BundleLoader::new(&dir).load_all().expect("sample files should load");
    Translator::new(bundles, MemorySink::new())
}

#[test]
fn test_translate_present_key_returns_bundle_value() {
    let mut tr = sample_translator();
    let expected = tr.state().lookup("de", "Docked").unwrap().to_string();

    assert_eq!(tr.translate("Docked", "de"), expected);
    assert_eq!(expected, "Angedockt");
    assert!(tr.sink().lines().is_empty());
}

#[test]
fn test_key_missing_in_german_uses_english() {
    let mut tr = sample_translator();
    assert_eq!(tr.translate("Low Fuel", "de"), "Low Fuel");
    assert!(tr.state().missing("de").unwrap().contains("Low Fuel"));
    assert!(tr.state().missing("en").is_none());
    assert!(!tr.state().unused("en").unwrap().contains("Low Fuel"));
}

#[test]
fn test_key_missing_everywhere_returns_key() {
    let mut tr = sample_translator();
    assert_eq!(tr.translate("Silent Running", "de"), "Silent Running");
    assert!(tr.state().missing("de").unwrap().contains("Silent Running"));
    assert!(tr.state().missing("en").unwrap().contains("Silent Running"));
}

#[test]
fn test_repeated_lookup_is_idempotent() {
    let mut tr = sample_translator();
    let first = tr.translate("Silent Running", "de");
    let second = tr.translate("Silent Running", "de");
    assert_eq!(first, second);
    assert_eq!(tr.sink().matching("translation missing (de): Silent Running"), 1);
    assert_eq!(tr.sink().matching("translation missing (en): Silent Running"), 1);
}

#[test]
fn test_used_key_stays_removed() {
    let mut tr = sample_translator();
    tr.translate("Device", "en");
    assert!(!tr.state().unused("en").unwrap().contains("Device"));
    tr.translate("Device", "en");
    tr.translate("Command", "en");
    assert!(!tr.state().unused("en").unwrap().contains("Device"));
}

#[test]
fn test_session_writes_log_file() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("vpc.log");

    let lang_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("lang");
    let bundles = BundleLoader::new(&lang_dir).load_all().unwrap();
    let mut tr = Translator::new(bundles, FileSink::new(&log));
    tr.set_language("de").unwrap();

    assert_eq!(tr.t("Save"), "Speichern");
    assert_eq!(tr.t("Low Fuel"), "Low Fuel");
    assert_eq!(tr.t("Low Fuel"), "Low Fuel");
    tr.report_unused().unwrap();

    let content = fs::read_to_string(&log).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3, "one miss plus one unused line per language");
    assert!(lines[0].contains(" : translate\t\ttranslation missing (de): Low Fuel"));
    assert!(lines[1].contains(" : unused\t\tunused translations (de): "));
    assert!(!lines[1].contains("Save"));
    assert!(lines[2].contains("unused translations (en): "));
    assert!(!lines[2].contains("Low Fuel"));
    assert!(lines[2].contains("Cancel"));
}
