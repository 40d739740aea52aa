// src/config.rs
use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::domain::dates::{DateFormats, DateVariant};
use crate::domain::slug::{DEFAULT_MAX_LENGTH, DEFAULT_SLUG, ScopeKind, SlugSettings};

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: Option<String>,
    slug_settings: SlugSettings,
    date_variant: DateVariant,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::Invalid(format!("{key} must be a boolean, got {other:?}"))),
    }
}

impl AppConfig {
    /// Build configuration from environment variables, loading `.env` first
    /// when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let max_length = match lookup("SLUG_MAX_LENGTH") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                ConfigError::Invalid(format!("SLUG_MAX_LENGTH must be a positive integer, got {raw:?}"))
            })?,
            None => DEFAULT_MAX_LENGTH,
        };

        let allow_unicode = lookup("SLUG_ALLOW_UNICODE")
            .map(|v| parse_bool("SLUG_ALLOW_UNICODE", &v))
            .transpose()?
            .unwrap_or(false);

        // An empty DEFAULT_SLUG disables the fallback token.
        let default_slug = lookup("DEFAULT_SLUG").unwrap_or_else(|| DEFAULT_SLUG.into());

        let scope = lookup("SLUG_SCOPE")
            .map(|v| ScopeKind::from_str(&v))
            .transpose()
            .map_err(|err| ConfigError::Invalid(err.to_string()))?
            .unwrap_or_default();

        let date_variant = lookup("DATE_VARIANT")
            .map(|v| DateVariant::from_str(&v))
            .transpose()
            .map_err(|err| ConfigError::Invalid(err.to_string()))?
            .unwrap_or_default();

        let slug_settings = SlugSettings::new(max_length, allow_unicode, Some(default_slug), scope)
            .map_err(|err| ConfigError::Invalid(err.to_string()))?;

        Ok(Self {
            database_url,
            slug_settings,
            date_variant,
        })
    }

    /// Only commands touching storage need a database.
    pub fn database_url(&self) -> Result<&str, ConfigError> {
        self.database_url
            .as_deref()
            .ok_or(ConfigError::Missing("DATABASE_URL"))
    }

    pub fn slug_settings(&self) -> &SlugSettings {
        &self.slug_settings
    }

    pub fn date_variant(&self) -> DateVariant {
        self.date_variant
    }

    /// Display formats for the configured `DATE_VARIANT`.
    pub fn date_formats(&self) -> DateFormats {
        DateFormats::english(self.date_variant)
    }
}
