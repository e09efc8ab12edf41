// SPDX-License-Identifier: PMPL-1.0-or-later

//! Internationalisation for the VPC LED controller.
//!
//! Translations live in one JSON file per language (`lang.en.json`,
//! `lang.de.json`, ...) next to the executable. Each file carries its
//! language code, a compact `commands` list that is expanded into the
//! device command index, and flat key/string pairs.
//!
//! ## Flow
//!
//! 1. [`BundleLoader`] finds and parses the files, expanding commands with
//!    [`CommandExpander`]. No files, or no `en` file, is fatal.
//! 2. [`Translator`] owns the resulting [`TranslationState`] for the rest of
//!    the process and answers lookups: requested language, then English,
//!    then the key itself.
//! 3. At shutdown [`Translator::report_unused`] writes the keys nobody asked
//!    for to the diagnostics log.
//!
//! ```no_run
//! use vpc_led_lang::diagnostics::FileSink;
//! use vpc_led_lang::i18n::{BundleLoader, Translator};
//!
//! let bundles = BundleLoader::new(".").load_all()?;
//! let mut translator = Translator::new(bundles, FileSink::new("vpc-led-lang.log"));
//! println!("{}", translator.translate("Landing Gear", "de"));
//! translator.report_unused()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod codes;
mod expand;
mod loader;
mod state;
mod translator;

pub use codes::{language_name, looks_like_language_code};
pub use expand::{expand, CommandExpander};
pub use loader::{
    BundleLoader, LoadReport, ParsePolicy, SkipReason, SkippedFile, DEFAULT_PATTERN,
};
pub use state::TranslationState;
pub use translator::Translator;
