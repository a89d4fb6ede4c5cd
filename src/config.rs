//! Page Configuration
//!
//! Defaults can be overridden from the page's query string:
//! `?api=<url>&gate=observed|enforced&log=<level>`.

use std::str::FromStr;

use reqwest::Url;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE: &str = "http://localhost:3000/api/";

/// Which top-level view the session flag selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionGate {
    /// The dare board is shown whether or not the user signed in
    #[default]
    Observed,
    /// Signed-out users see the landing page
    Enforced,
}

impl FromStr for SessionGate {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "observed" => Ok(Self::Observed),
            "enforced" => Ok(Self::Enforced),
            _ => Err(ConfigError::SessionGate(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: Url,
    pub session_gate: SessionGate,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: parse_api_base(DEFAULT_API_BASE).expect("default api base should parse"),
            session_gate: SessionGate::default(),
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    /// Build config from the full page URL
    pub fn from_href(href: &str) -> Result<Self, ConfigError> {
        let page = Url::parse(href).map_err(|e| ConfigError::PageUrl {
            value: href.to_string(),
            message: e.to_string(),
        })?;

        let mut config = Self::default();
        for (key, value) in page.query_pairs() {
            match key.as_ref() {
                "api" => config.api_base = parse_api_base(&value)?,
                "gate" => config.session_gate = value.parse()?,
                "log" => {
                    config.log_level = log::Level::from_str(&value)
                        .map_err(|_| ConfigError::LogLevel(value.to_string()))?
                }
                _ => {}
            }
        }
        Ok(config)
    }
}

/// Parse an API base; the path always ends in `/` so endpoints join under it
fn parse_api_base(value: &str) -> Result<Url, ConfigError> {
    let invalid = |message: String| ConfigError::ApiBase {
        value: value.to_string(),
        message,
    };

    let mut url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_href("http://localhost:8080/").unwrap();

        assert_eq!(config.api_base.as_str(), DEFAULT_API_BASE);
        assert_eq!(config.session_gate, SessionGate::Observed);
        assert_eq!(config.log_level, log::Level::Info);
    }

    #[test]
    fn test_query_overrides() {
        let config = AppConfig::from_href(
            "http://localhost:8080/?api=https%3A%2F%2Fdares.example%2Fv2&gate=Enforced&log=debug",
        )
        .unwrap();

        assert_eq!(config.api_base.as_str(), "https://dares.example/v2/");
        assert_eq!(config.session_gate, SessionGate::Enforced);
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = AppConfig::from_href("http://localhost:8080/?theme=dark").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            AppConfig::from_href("http://localhost:8080/?gate=sometimes"),
            Err(ConfigError::SessionGate("sometimes".into()))
        );
        assert_eq!(
            AppConfig::from_href("http://localhost:8080/?log=loud"),
            Err(ConfigError::LogLevel("loud".into()))
        );
        assert!(matches!(
            AppConfig::from_href("http://localhost:8080/?api=ftp%3A%2F%2Fhost%2F"),
            Err(ConfigError::ApiBase { .. })
        ));
        assert!(matches!(
            AppConfig::from_href("not a url"),
            Err(ConfigError::PageUrl { .. })
        ));
    }
}
