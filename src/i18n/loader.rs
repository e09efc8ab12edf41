// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language resource file discovery and parsing.
//!
//! Files are picked up by a shell-style glob (`lang.*.json` by default),
//! resolved relative to the loader's directory, and processed in sorted path
//! order, so when two files declare the same `code` the later one wins.
//!
//! Fault isolation is per file: an unreadable file is skipped and recorded
//! in [`LoadReport::skipped`]. A file that reads but does not parse either
//! aborts the load or is skipped, depending on [`ParsePolicy`].

use crate::error::{FileReadError, LoadError};
use crate::i18n::codes::looks_like_language_code;
use crate::i18n::expand::CommandExpander;
use crate::types::{Bundles, LanguageBundle, LanguageCode, TemplateSpec, BASELINE_LANGUAGE};
use glob::{MatchOptions, Pattern};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Default file name glob for language resource files.
pub const DEFAULT_PATTERN: &str = "lang.*.json";

/// What to do with a language file that reads fine but is not a valid
/// resource document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Fail the whole load. No bundle from a broken file is ever registered.
    #[default]
    Abort,
    /// Skip the file and keep loading the rest.
    Skip,
}

/// Why a discovered file did not become a bundle.
#[derive(Debug)]
pub enum SkipReason {
    Unreadable(FileReadError),
    Malformed(serde_json::Error),
}

#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Result of a successful load: the bundles plus the files left out.
#[derive(Debug)]
pub struct LoadReport {
    pub bundles: Bundles,
    pub files: Vec<PathBuf>,
    pub skipped: Vec<SkippedFile>,
}

/// On-disk shape of a language file. Every top-level key other than `code`
/// and `commands` is a translation.
#[derive(Debug, Deserialize)]
struct ResourceDocument {
    code: LanguageCode,
    commands: Vec<TemplateSpec>,
    #[serde(flatten)]
    translations: BTreeMap<String, String>,
}

pub struct BundleLoader {
    directory: PathBuf,
    pattern: String,
    policy: ParsePolicy,
    echo: bool,
    expander: CommandExpander,
}

impl BundleLoader {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            pattern: DEFAULT_PATTERN.to_string(),
            policy: ParsePolicy::default(),
            echo: false,
            expander: CommandExpander::new(),
        }
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn parse_policy(mut self, policy: ParsePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Log each file name and every expanded command while loading.
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self.expander = CommandExpander::with_echo(echo);
        self
    }

    /// Load every matching file and return the bundles keyed by code.
    pub fn load_all(&self) -> Result<Bundles, LoadError> {
        self.load_with_report().map(|report| report.bundles)
    }

    pub fn load_with_report(&self) -> Result<LoadReport, LoadError> {
        let files = self.discover()?;
        if files.is_empty() {
            return Err(LoadError::NoLanguageFiles {
                directory: self.directory.clone(),
                pattern: self.pattern.clone(),
            });
        }

        let mut bundles = Bundles::new();
        let mut skipped = Vec::new();

        for path in &files {
            if self.echo {
                info!(file = %path.display(), "loading language file");
            }

            let content = match read_source(path) {
                Ok(content) => content,
                Err(err) => {
                    warn!("skipping language file: {}", err);
                    skipped.push(SkippedFile {
                        path: path.clone(),
                        reason: SkipReason::Unreadable(err),
                    });
                    continue;
                }
            };

            let bundle = match self.parse_bundle(path, &content) {
                Ok(bundle) => bundle,
                Err(source) => match self.policy {
                    ParsePolicy::Abort => {
                        return Err(LoadError::Malformed {
                            path: path.clone(),
                            source,
                        })
                    }
                    ParsePolicy::Skip => {
                        warn!(
                            "skipping malformed language file {}: {}",
                            path.display(),
                            source
                        );
                        skipped.push(SkippedFile {
                            path: path.clone(),
                            reason: SkipReason::Malformed(source),
                        });
                        continue;
                    }
                },
            };

            if !looks_like_language_code(bundle.code()) {
                warn!(
                    "{} declares unusual language code {:?}",
                    path.display(),
                    bundle.code()
                );
            }

            let code = bundle.code().to_string();
            if let Some(previous) = bundles.insert(code.clone(), bundle) {
                debug!(
                    "{} replaces {} for language {}",
                    path.display(),
                    previous.source().display(),
                    code
                );
            }
        }

        if !bundles.contains_key(BASELINE_LANGUAGE) {
            return Err(LoadError::MissingBaseline);
        }

        Ok(LoadReport {
            bundles,
            files,
            skipped,
        })
    }

    /// Matching files under the directory, sorted by path.
    ///
    /// The pattern is matched against paths relative to the directory and
    /// only at the depth it names, so `lang.*.json` never looks into
    /// subdirectories while `lang/lang.*.json` looks exactly one level down.
    /// Symlinks are listed without being followed; a dangling one shows up
    /// later as an unreadable file. A missing or unreadable directory yields
    /// an empty list, which the caller reports as "no language files found".
    pub fn discover(&self) -> Result<Vec<PathBuf>, LoadError> {
        let matcher = Pattern::new(&self.pattern).map_err(|source| LoadError::InvalidPattern {
            pattern: self.pattern.clone(),
            source,
        })?;
        let depth = Path::new(&self.pattern).components().count().max(1);

        let mut files: Vec<PathBuf> = WalkDir::new(&self.directory)
            .min_depth(depth)
            .max_depth(depth)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| !entry.file_type().is_dir())
            .filter(|entry| {
                entry
                    .path()
                    .strip_prefix(&self.directory)
                    .map(|relative| matcher.matches_path_with(relative, GLOB_OPTIONS))
                    .unwrap_or(false)
            })
            .map(|entry| entry.into_path())
            .collect();

        files.sort();
        Ok(files)
    }

    fn parse_bundle(&self, path: &Path, content: &str) -> Result<LanguageBundle, serde_json::Error> {
        // Line breaks inside string values were always accepted, so they are
        // dropped before parsing rather than rejected. CRLF files too.
        let flattened = content.replace(&['\r', '\n'][..], "");
        let document: ResourceDocument = serde_json::from_str(&flattened)?;
        let commands = self.expander.expand(&document.commands);

        Ok(LanguageBundle::new(
            document.code,
            document.translations,
            commands,
            path,
        ))
    }
}

/// Read a language file as text: UTF-8 first, then Windows-1252.
pub(crate) fn read_source(path: &Path) -> Result<String, FileReadError> {
    let raw_bytes = fs::read(path).map_err(|source| FileReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let content = match String::from_utf8(raw_bytes) {
        Ok(s) => s,
        Err(err) => {
            let raw_bytes = err.into_bytes();
            let (cow, _, had_errors) = encoding_rs::WINDOWS_1252.decode(&raw_bytes);
            if had_errors {
                return Err(FileReadError::NotText {
                    path: path.to_path_buf(),
                });
            }
            cow.into_owned()
        }
    };

    Ok(match content.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => content,
    })
}

/// `*` and `?` stop at path separators and never match a leading dot.
const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};
