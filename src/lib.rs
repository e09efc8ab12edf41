// SPDX-License-Identifier: PMPL-1.0-or-later

//! vpc-led-lang: language bundles for the VPC LED controller.
//!
//! The controller reacts to Elite Dangerous journal events by switching LEDs
//! on Virpil devices. Everything it shows the user, and the names of the
//! device commands it can send, come from per-language resource files. This
//! crate loads those files and answers translation lookups.
//!
//! PIECES:
//! 1. **i18n**: bundle loading, command template expansion, lookup with
//!    English fallback and missing/unused key tracking.
//! 2. **diagnostics**: the append-only, fsynced audit log lookups write to.
//! 3. **audit** / **output**: coverage checks and dumps for translators.

pub mod audit;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod notify;
pub mod output;
pub mod types;

pub use error::{FileReadError, LoadError};
pub use types::{Bundles, LanguageBundle, LanguageCode, TemplateSpec, BASELINE_LANGUAGE};
