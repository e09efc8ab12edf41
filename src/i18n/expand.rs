// SPDX-License-Identifier: PMPL-1.0-or-later

//! Command template expansion.
//!
//! A resource file lists device commands compactly: literals stand for
//! themselves and `[template, start, end]` triples stand for one command per
//! value in the inclusive range. The expanded list is the canonical command
//! index shared by every language.
//!
//! Two placeholders are recognised:
//!
//! | Placeholder | Value                                         |
//! |-------------|-----------------------------------------------|
//! | `{d}`       | the range value itself                        |
//! | `{e}`       | 1-based position within this particular range |
//!
//! Both are rendered as exactly two characters: the number is left-padded
//! with `"00"` and only the last two characters are kept, so `7` becomes
//! `07` and `101` becomes `01`. Existing command files depend on that
//! truncation, so it must not be "fixed".

use crate::types::TemplateSpec;
use tracing::info;

const PLACES: usize = 2;

/// Expands [`TemplateSpec`] lists into flat command lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandExpander {
    echo: bool,
}

impl CommandExpander {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expander that logs every command it produces (the old test mode).
    pub fn with_echo(echo: bool) -> Self {
        Self { echo }
    }

    pub fn expand(&self, specs: &[TemplateSpec]) -> Vec<String> {
        let mut commands = Vec::new();
        for spec in specs {
            match spec {
                TemplateSpec::Literal(text) => commands.push(text.clone()),
                TemplateSpec::Range {
                    template,
                    start,
                    end,
                } => {
                    for (offset, d_num) in (*start..=*end).enumerate() {
                        let e_num = offset as i64 + 1;
                        commands.push(render(template, d_num, e_num));
                    }
                }
            }
        }

        if self.echo {
            for (index, command) in commands.iter().enumerate() {
                info!(index, command = %command, "expanded command");
            }
        }
        commands
    }
}

/// Expand without echo.
pub fn expand(specs: &[TemplateSpec]) -> Vec<String> {
    CommandExpander::new().expand(specs)
}

fn render(template: &str, d_num: i64, e_num: i64) -> String {
    template
        .replace("{d}", &pad(d_num))
        .replace("{e}", &pad(e_num))
}

fn pad(value: i64) -> String {
    let padded = format!("{}{}", "0".repeat(PLACES), value);
    let skip = padded.chars().count() - PLACES;
    padded.chars().skip(skip).collect()
}
