// SPDX-License-Identifier: PMPL-1.0-or-later

//! Coverage audit of every language against the English baseline.
//!
//! Translators work from the English file, so the interesting questions are
//! which English keys a language lacks (those lookups will fall back) and
//! which keys it has that English does not (those are never reached by a
//! lookup that passes through English). Command lists are positional, so a
//! length difference means indices no longer line up.

use crate::i18n::TranslationState;
use crate::types::{LanguageBundle, BASELINE_LANGUAGE};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LanguageAudit {
    pub code: String,
    pub missing_keys: Vec<String>,
    pub extra_keys: Vec<String>,
    pub command_count: usize,
    pub baseline_command_count: usize,
}

impl LanguageAudit {
    pub fn is_clean(&self) -> bool {
        self.missing_keys.is_empty()
            && self.extra_keys.is_empty()
            && self.command_count == self.baseline_command_count
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub baseline: String,
    pub baseline_keys: usize,
    pub languages: Vec<LanguageAudit>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.languages.iter().all(LanguageAudit::is_clean)
    }
}

/// Compare each non-baseline bundle with the baseline. Returns an empty
/// report when the state holds no baseline bundle.
pub fn audit(state: &TranslationState) -> AuditReport {
    let Some(baseline) = state.bundle(BASELINE_LANGUAGE) else {
        return AuditReport {
            baseline: BASELINE_LANGUAGE.to_string(),
            baseline_keys: 0,
            languages: Vec::new(),
        };
    };

    let languages = state
        .bundles()
        .values()
        .filter(|bundle| !bundle.is_baseline())
        .map(|bundle| compare(baseline, bundle))
        .collect();

    AuditReport {
        baseline: BASELINE_LANGUAGE.to_string(),
        baseline_keys: baseline.translations().len(),
        languages,
    }
}

fn compare(baseline: &LanguageBundle, bundle: &LanguageBundle) -> LanguageAudit {
    let missing_keys = baseline
        .translations()
        .keys()
        .filter(|key| !bundle.translations().contains_key(*key))
        .cloned()
        .collect();
    let extra_keys = bundle
        .translations()
        .keys()
        .filter(|key| !baseline.translations().contains_key(*key))
        .cloned()
        .collect();

    LanguageAudit {
        code: bundle.code().to_string(),
        missing_keys,
        extra_keys,
        command_count: bundle.commands().len(),
        baseline_command_count: baseline.commands().len(),
    }
}

/// Human-readable rendering, one block per language.
pub fn format_report(report: &AuditReport) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "Baseline: {} ({} keys)",
        report.baseline, report.baseline_keys
    ));
    for lang in &report.languages {
        let status = if lang.is_clean() { "OK" } else { "WARN" };
        lines.push(format!("  [{}] {}", status, lang.code));
        if !lang.missing_keys.is_empty() {
            lines.push(format!(
                "      missing ({}): {}",
                lang.missing_keys.len(),
                lang.missing_keys.join(", ")
            ));
        }
        if !lang.extra_keys.is_empty() {
            lines.push(format!(
                "      extra ({}): {}",
                lang.extra_keys.len(),
                lang.extra_keys.join(", ")
            ));
        }
        if lang.command_count != lang.baseline_command_count {
            lines.push(format!(
                "      commands: {} (baseline {})",
                lang.command_count, lang.baseline_command_count
            ));
        }
    }
    lines.join("\n")
}
