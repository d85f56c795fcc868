//! Configuration loaded from the environment.

use crate::error::{Error, Result};

/// Port the original web app listened on; the extensions point here.
pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Top-level relay configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Interface to bind.
    pub host: String,
    /// HTTP server port.
    pub port: u16,
    /// Reject malformed write bodies instead of normalizing them.
    pub strict: bool,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            strict: false,
        }
    }
}

impl RelayConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RelayConfig::from_env`] but reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .map(|h| h.trim().to_string())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        if host.is_empty() {
            return Err(Error::Config("HOST must not be empty".into()));
        }

        let port = lookup("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let strict = match lookup("MARKETRELAY_STRICT") {
            Some(v) => parse_flag(&v).ok_or_else(|| {
                Error::Config(format!("MARKETRELAY_STRICT: unrecognized value '{}'", v))
            })?,
            None => false,
        };

        Ok(Self { host, port, strict })
    }

    /// `host:port` as passed to the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RelayConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, RelayConfig::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:5001");
    }

    #[test]
    fn test_overrides() {
        let config = RelayConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("MARKETRELAY_STRICT", "true"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert!(config.strict);
    }

    #[test]
    fn test_bad_port_falls_back() {
        let config = RelayConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_rejects_empty_host() {
        let err = RelayConfig::from_lookup(lookup_from(&[("HOST", "  ")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_rejects_unknown_strict_value() {
        let err =
            RelayConfig::from_lookup(lookup_from(&[("MARKETRELAY_STRICT", "maybe")])).unwrap_err();
        assert!(err.to_string().contains("MARKETRELAY_STRICT"));
    }

    #[test]
    fn test_flag_values() {
        assert_eq!(parse_flag("ON"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag(""), Some(false));
        assert_eq!(parse_flag("2"), None);
    }
}
