use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::Deserialize;

/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Resend API key for email delivery. `None` when unset or empty.
    pub resend_api_key: Option<String>,

    /// Interface the HTTP server binds to (default: 0.0.0.0)
    pub host: IpAddr,

    /// Port the HTTP server listens on (default: 3000)
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            resend_api_key: lookup("RESEND_API_KEY").filter(|key| !key.trim().is_empty()),
            host: lookup("HOST")
                .unwrap_or_else(|| "0.0.0.0".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("HOST must be a valid IP address"))?,
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid u16"))?,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            resend_api_key: None,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert!(config.resend_api_key.is_none());
        assert_eq!(config.socket_addr(), "0.0.0.0:3000".parse().unwrap());
    }

    #[test]
    fn test_reads_key_and_listen_address() {
        let config = AppConfig::from_lookup(lookup(&[
            ("RESEND_API_KEY", "re_123"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
        ]))
        .unwrap();
        assert_eq!(config.resend_api_key.as_deref(), Some("re_123"));
        assert_eq!(config.socket_addr(), "127.0.0.1:8080".parse().unwrap());
    }

    #[test]
    fn test_empty_key_counts_as_missing() {
        let config = AppConfig::from_lookup(lookup(&[("RESEND_API_KEY", "  ")])).unwrap();
        assert!(config.resend_api_key.is_none());
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = AppConfig::from_lookup(lookup(&[("PORT", "not-a-port")]));
        assert!(result.is_err());
    }
}
