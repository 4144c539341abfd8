//! API configuration
//!
//! Read from `API_`-prefixed environment variables (`API_PORT`,
//! `API_JWT_SECRET`, `API_DEFAULT_LOCALE`, ...). Unset variables keep the
//! [`Default`] values.

use std::time::Duration;

use serde::Deserialize;

use core_kernel::{CoreError, FlatTranslator};

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Shared secret of the identity provider's HS256 tokens
    pub jwt_secret: String,
    /// Lifetime of tokens issued by [`create_token`](crate::auth::create_token)
    pub jwt_expiration_secs: u64,
    /// Log level
    pub log_level: String,
    /// Locale of month labels and messages (`en` or `fr`)
    pub default_locale: String,
    /// Optional flat JSON catalog replacing the bundled translations
    pub translations_file: Option<String>,
    /// Idle seconds after which an open ledger session is discarded
    pub session_idle_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            jwt_secret: "change-me-in-production".to_string(),
            jwt_expiration_secs: 3600,
            log_level: "info".to_string(),
            default_locale: "en".to_string(),
            translations_file: None,
            session_idle_secs: 1800,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("jwt_secret", defaults.jwt_secret)?
            .set_default("jwt_expiration_secs", defaults.jwt_expiration_secs as i64)?
            .set_default("log_level", defaults.log_level)?
            .set_default("default_locale", defaults.default_locale)?
            .set_default("session_idle_secs", defaults.session_idle_secs as i64)?
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Idle time after which an open ledger session is discarded
    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }

    /// Loads the translation catalog
    ///
    /// # Errors
    ///
    /// `CoreError::Configuration` when the locale has no bundled catalog or
    /// the catalog file cannot be read or parsed.
    pub fn translator(&self) -> Result<FlatTranslator, CoreError> {
        if let Some(path) = &self.translations_file {
            let json = std::fs::read_to_string(path)
                .map_err(|e| CoreError::Configuration(format!("{}: {}", path, e)))?;
            return FlatTranslator::from_json(&json);
        }
        FlatTranslator::builtin(&self.default_locale).ok_or_else(|| {
            CoreError::Configuration(format!("unsupported locale: {}", self.default_locale))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Translator;

    #[test]
    fn test_default_locale_is_english() {
        let translator = ApiConfig::default().translator().unwrap();
        assert_eq!(translator.translate("month.3"), "March");
    }

    #[test]
    fn test_default_session_idle_timeout() {
        assert_eq!(ApiConfig::default().session_idle_timeout(), Duration::from_secs(1800));
    }

    #[test]
    fn test_unknown_locale_is_configuration_error() {
        let config = ApiConfig {
            default_locale: "de".to_string(),
            ..ApiConfig::default()
        };
        assert!(matches!(config.translator(), Err(CoreError::Configuration(_))));
    }
}
