//! System locale detection.

use super::Locale;
use std::env;

/// Environment variables consulted by [`detect_locale`], highest priority first.
pub const LOCALE_VARS: [&str; 4] = ["GLOSSA_LOCALE", "LC_ALL", "LC_MESSAGES", "LANG"];

/// Detect the system locale with optional user override.
pub fn detect_locale_with_override(user_locale: Option<&str>) -> Locale {
    if let Some(locale) = user_locale.and_then(parse_env_value) {
        return locale;
    }

    detect_locale()
}

/// Detect the system locale.
///
/// Falls back to the root locale when no variable holds a usable value.
pub fn detect_locale() -> Locale {
    LOCALE_VARS
        .iter()
        .find_map(|var| env::var(var).ok().and_then(|v| parse_env_value(&v)))
        .unwrap_or_default()
}

/// Parse a locale environment value, skipping the POSIX placeholders.
fn parse_env_value(value: &str) -> Option<Locale> {
    let value = value.trim();
    if value.is_empty() || value == "C" || value == "POSIX" || value.starts_with("C.") {
        return None;
    }

    let locale = Locale::parse(value);
    (!locale.is_root()).then_some(locale)
}
