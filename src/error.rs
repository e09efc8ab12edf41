// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for bundle loading

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a bundle load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no language files found (looked for {pattern} in {})", .directory.display())]
    NoLanguageFiles { directory: PathBuf, pattern: String },

    #[error("missing baseline `en` language file")]
    MissingBaseline,

    #[error("malformed language file {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid language file pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl LoadError {
    /// True for the two conditions the application cannot start without:
    /// nothing to load, or no baseline language.
    pub fn is_fatal_config(&self) -> bool {
        matches!(
            self,
            LoadError::NoLanguageFiles { .. } | LoadError::MissingBaseline
        )
    }
}

/// A single language file that could not be read. Loading carries on
/// without it.
#[derive(Debug, Error)]
pub enum FileReadError {
    #[error("unable to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is neither UTF-8 nor Latin-1 text", .path.display())]
    NotText { path: PathBuf },
}

impl FileReadError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            FileReadError::Io { path, .. } | FileReadError::NotText { path } => path,
        }
    }
}
