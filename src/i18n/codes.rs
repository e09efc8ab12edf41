// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language code checks and display names.
//!
//! Resource files declare their own code, so nothing stops a translator
//! writing `"English"` or `"EN"` there. Those still load (the code is just a
//! map key) but the loader warns about them.

/// Whether `code` has the shape of a language tag: two or three lowercase
/// ASCII letters, optionally followed by `-` or `_` and a region/script
/// subtag of ASCII alphanumerics (`en`, `pt-BR`, `zh_Hans`).
pub fn looks_like_language_code(code: &str) -> bool {
    let (primary, region) = match code.find(&['-', '_'][..]) {
        Some(idx) => (&code[..idx], Some(&code[idx + 1..])),
        None => (code, None),
    };

    let primary_ok =
        (2..=3).contains(&primary.len()) && primary.bytes().all(|b| b.is_ascii_lowercase());
    let region_ok = region.map_or(true, |r| {
        (2..=8).contains(&r.len()) && r.bytes().all(|b| b.is_ascii_alphanumeric())
    });

    primary_ok && region_ok
}

/// English name for the languages the controller has shipped translations
/// for, plus common neighbours. Region suffixes are ignored.
pub fn language_name(code: &str) -> Option<&'static str> {
    let primary = code.split(&['-', '_'][..]).next().unwrap_or(code);
    match primary {
        "en" => Some("English"),
        "de" => Some("German"),
        "fr" => Some("French"),
        "es" => Some("Spanish"),
        "it" => Some("Italian"),
        "nl" => Some("Dutch"),
        "pl" => Some("Polish"),
        "pt" => Some("Portuguese"),
        "ru" => Some("Russian"),
        "cs" => Some("Czech"),
        "sv" => Some("Swedish"),
        "fi" => Some("Finnish"),
        "da" => Some("Danish"),
        "no" | "nb" => Some("Norwegian"),
        "uk" => Some("Ukrainian"),
        "ja" => Some("Japanese"),
        "zh" => Some("Chinese"),
        "ko" => Some("Korean"),
        _ => None,
    }
}
