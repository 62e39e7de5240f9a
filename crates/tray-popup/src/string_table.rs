//! Localized strings embedded at compile time.
//!
//! Each locale is a flat TOML table of dotted keys. Lookups fall back to
//! English, then to the key itself.

use crate::{AppError, AppResult};

use std::{collections::HashMap, env, panic::Location};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument};

/// Locale used when nothing else matches.
pub const FALLBACK_LOCALE: &str = "en";

/// String table key for the tray menu's quit item.
pub const QUIT_KEY: &str = "tray.quit";

const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Strings for one resolved locale plus the English fallback.
#[derive(Debug, Clone)]
pub struct StringTable {
    locale: String,
    strings: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl StringTable {
    /// Load the table for `locale_override`, or the locale from the environment.
    #[track_caller]
    #[instrument]
    pub fn load(locale_override: Option<&str>) -> AppResult<Self> {
        let requested = locale_override
            .map(str::to_string)
            .or_else(detect_locale)
            .unwrap_or_else(|| FALLBACK_LOCALE.to_string());

        let table = Self::for_locale(&requested)?;

        info!(requested = %requested, locale = %table.locale(), "String table loaded");

        Ok(table)
    }

    /// Load the table for an explicit locale such as `de_DE.UTF-8`.
    #[track_caller]
    pub fn for_locale(requested: &str) -> AppResult<Self> {
        let fallback = parse_table(FALLBACK_LOCALE, embedded_table(FALLBACK_LOCALE))?;

        let language = language_tag(requested);
        let (locale, strings) = match embedded_table(&language) {
            Some(source) if language != FALLBACK_LOCALE => {
                (language.clone(), parse_table(&language, Some(source))?)
            }
            _ => {
                if language != FALLBACK_LOCALE {
                    debug!(language = %language, "No strings for language, using fallback");
                }
                (FALLBACK_LOCALE.to_string(), fallback.clone())
            }
        };

        Ok(Self {
            locale,
            strings,
            fallback,
        })
    }

    /// Language the table resolved to.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Look up `key`, falling back to English and then to the key itself.
    pub fn get(&self, key: &str) -> String {
        self.strings
            .get(key)
            .or_else(|| self.fallback.get(key))
            .cloned()
            .unwrap_or_else(|| {
                debug!(key = %key, "Missing string");
                key.to_string()
            })
    }
}

/// Reduce a POSIX or BCP 47 locale to its lowercase language subtag.
///
/// `de_DE.UTF-8` and `de-AT` both become `de`.
pub fn language_tag(locale: &str) -> String {
    locale
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .split(['_', '-'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

fn detect_locale() -> Option<String> {
    LOCALE_VARS
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
}

fn embedded_table(language: &str) -> Option<&'static str> {
    match language {
        "en" => Some(include_str!("../resources/locales/en.toml")),
        "de" => Some(include_str!("../resources/locales/de.toml")),
        "fr" => Some(include_str!("../resources/locales/fr.toml")),
        _ => None,
    }
}

#[track_caller]
fn parse_table(language: &str, source: Option<&str>) -> AppResult<HashMap<String, String>> {
    let source = source.ok_or_else(|| AppError::AssetError {
        reason: format!("No embedded strings for {}", language),
        location: ErrorLocation::from(Location::caller()),
    })?;

    toml::from_str(source).map_err(|e| AppError::AssetError {
        reason: format!("Failed to parse {} strings: {}", language, e),
        location: ErrorLocation::from(Location::caller()),
    })
}
