// SPDX-License-Identifier: PMPL-1.0-or-later

//! Diagnostics log: one timestamped line per event, appended to a file.
//!
//! Line layout (tab separated):
//!
//! ```text
//! 2026-10-19 08:15:02.381204 UTC\tvpc-led-lang v0.4.11 : translate\t\ttranslation missing (de): Cargo Scoop
//! ```
//!
//! Every line is flushed and synced before `write_line` returns so a crash
//! never loses an already reported event.

use anyhow::{Context, Result};
use chrono::Utc;
use std::borrow::Cow;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Module label used in diagnostics lines written by this crate.
pub const MODULE_LABEL: &str = concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));

/// Default log file name, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = concat!(env!("CARGO_PKG_NAME"), ".log");

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Anything that accepts single-line audit messages.
pub trait DiagnosticsSink {
    fn write_line(&mut self, module: &str, function: &str, message: &str) -> Result<()>;
}

/// Format one diagnostics line, including the trailing newline. Control
/// characters in the message are escaped so a record never spans lines.
pub fn format_line(module: &str, function: &str, message: &str) -> String {
    format!(
        "{} UTC\t{} : {}\t\t{}\n",
        Utc::now().format(TIMESTAMP_FORMAT),
        module,
        function,
        escape_controls(message)
    )
}

fn escape_controls(message: &str) -> Cow<'_, str> {
    if !message.contains(char::is_control) {
        return Cow::Borrowed(message);
    }
    let mut escaped = String::with_capacity(message.len() + 8);
    for ch in message.chars() {
        if ch.is_control() {
            escaped.extend(ch.escape_default());
        } else {
            escaped.push(ch);
        }
    }
    Cow::Owned(escaped)
}

/// Append-only file sink. The file is opened per write so several
/// processes (or a tailing editor) can share it.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DiagnosticsSink for FileSink {
    fn write_line(&mut self, module: &str, function: &str, message: &str) -> Result<()> {
        let line = format_line(module, function, message);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening diagnostics log {}", self.path.display()))?;
        file.write_all(line.as_bytes())
            .with_context(|| format!("writing diagnostics log {}", self.path.display()))?;
        file.flush()?;
        file.sync_all()
            .with_context(|| format!("syncing diagnostics log {}", self.path.display()))?;
        Ok(())
    }
}

/// Keeps lines in memory; used by tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines whose message part contains `needle`.
    pub fn matching(&self, needle: &str) -> usize {
        self.lines
            .iter()
            .filter(|line| line.rsplit("\t\t").next().unwrap_or("").contains(needle))
            .count()
    }
}

impl DiagnosticsSink for MemorySink {
    fn write_line(&mut self, module: &str, function: &str, message: &str) -> Result<()> {
        self.lines.push(format_line(module, function, message));
        Ok(())
    }
}
