//! Configuration management
//!
//! The WASM client has no filesystem or process environment, so it reads the
//! `SEATBOOK_*` variables at compile time. The server binary loads the same
//! fields at runtime from `seatbook.toml` and the environment.

use serde::Deserialize;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API domain {domain:?}: {source}")]
    InvalidApiDomain {
        domain: String,
        source: url::ParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Host (and optional port/path) of the backend API
    #[serde(default = "default_api_domain")]
    pub api_domain: String,

    /// Use https for API calls
    #[serde(default)]
    pub api_secure: bool,

    /// Sent as `x-api-key` on every request
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_app_version")]
    pub app_version: String,

    /// Version of the runtime the client was built against
    #[serde(default)]
    pub runtime_version: Option<String>,

    #[serde(default)]
    pub dev: bool,
}

fn default_api_domain() -> String {
    "localhost:8080".to_string()
}

fn default_app_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_domain: default_api_domain(),
            api_secure: false,
            api_key: None,
            app_version: default_app_version(),
            runtime_version: None,
            dev: false,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl AppConfig {
    /// Build from `(name, value)` pairs using the `SEATBOOK_*` names.
    /// Unknown names are ignored, empty values count as unset.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut config = Self::default();
        for (name, value) in pairs {
            if value.is_empty() {
                continue;
            }
            match name {
                "SEATBOOK_API_DOMAIN" => config.api_domain = value.to_string(),
                "SEATBOOK_API_SECURE" => config.api_secure = parse_flag(value),
                "SEATBOOK_API_KEY" => config.api_key = Some(value.to_string()),
                "SEATBOOK_APP_VERSION" => config.app_version = value.to_string(),
                "SEATBOOK_RUNTIME_VERSION" => config.runtime_version = Some(value.to_string()),
                "SEATBOOK_DEV" => config.dev = parse_flag(value),
                _ => {}
            }
        }
        config
    }

    /// Values baked in at compile time.
    pub fn from_build_env() -> Self {
        let pairs = [
            ("SEATBOOK_API_DOMAIN", option_env!("SEATBOOK_API_DOMAIN")),
            ("SEATBOOK_API_SECURE", option_env!("SEATBOOK_API_SECURE")),
            ("SEATBOOK_API_KEY", option_env!("SEATBOOK_API_KEY")),
            ("SEATBOOK_APP_VERSION", option_env!("SEATBOOK_APP_VERSION")),
            ("SEATBOOK_RUNTIME_VERSION", option_env!("SEATBOOK_RUNTIME_VERSION")),
            ("SEATBOOK_DEV", option_env!("SEATBOOK_DEV")),
        ];
        Self::from_pairs(
            pairs
                .into_iter()
                .filter_map(|(name, value)| value.map(|v| (name, v))),
        )
    }

    pub fn api_base_url(&self) -> Result<Url, ConfigError> {
        let scheme = if self.api_secure { "https" } else { "http" };
        let domain = self.api_domain.trim_end_matches('/');
        Url::parse(&format!("{}://{}/", scheme, domain)).map_err(|source| {
            ConfigError::InvalidApiDomain {
                domain: self.api_domain.clone(),
                source,
            }
        })
    }
}

/// Load server-side configuration from `seatbook.toml` (optional) and
/// `SEATBOOK_*` environment variables.
#[cfg(feature = "server")]
pub fn load_config() -> anyhow::Result<AppConfig> {
    let config = ::config::Config::builder()
        .add_source(::config::File::with_name("seatbook").required(false))
        // SEATBOOK_API_DOMAIN -> api_domain, SEATBOOK_DEV -> dev, ...
        .add_source(::config::Environment::with_prefix("SEATBOOK").try_parsing(true))
        .build()?;

    Ok(config.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_domain, "localhost:8080");
        assert!(!config.api_secure);
        assert!(!config.dev);
        assert_eq!(config.app_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_from_pairs() {
        let config = AppConfig::from_pairs([
            ("SEATBOOK_API_DOMAIN", "api.example.com"),
            ("SEATBOOK_API_SECURE", "true"),
            ("SEATBOOK_API_KEY", "k-123"),
            ("SEATBOOK_DEV", "0"),
            ("SEATBOOK_RUNTIME_VERSION", ""),
            ("UNRELATED", "x"),
        ]);
        assert_eq!(config.api_domain, "api.example.com");
        assert!(config.api_secure);
        assert_eq!(config.api_key.as_deref(), Some("k-123"));
        assert!(!config.dev);
        assert_eq!(config.runtime_version, None);
    }

    #[test]
    fn test_base_url_scheme_follows_secure_flag() {
        let mut config = AppConfig::from_pairs([("SEATBOOK_API_DOMAIN", "api.example.com/")]);
        assert_eq!(
            config.api_base_url().unwrap().as_str(),
            "http://api.example.com/"
        );
        config.api_secure = true;
        assert_eq!(
            config.api_base_url().unwrap().as_str(),
            "https://api.example.com/"
        );
    }

    #[test]
    fn test_base_url_keeps_path_prefix() {
        let config = AppConfig::from_pairs([("SEATBOOK_API_DOMAIN", "example.com/api/v1")]);
        let base = config.api_base_url().unwrap();
        assert_eq!(base.join("seats").unwrap().as_str(), "http://example.com/api/v1/seats");
    }

    #[test]
    fn test_invalid_domain() {
        let config = AppConfig::from_pairs([("SEATBOOK_API_DOMAIN", "bad host:notaport")]);
        assert!(matches!(
            config.api_base_url(),
            Err(ConfigError::InvalidApiDomain { .. })
        ));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"api_domain":"x.test","dev":true}"#).unwrap();
        assert_eq!(config.api_domain, "x.test");
        assert!(config.dev);
        assert_eq!(config.api_key, None);
    }
}
