use std::env;

use anyhow::Context;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// HTTP listener settings
///
/// Environment variables:
/// - SERVICE_IP: address to bind (default: "127.0.0.1")
/// - SERVICE_PORT: port to bind, 0-65535 (default: 8080)
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_parts(env::var("SERVICE_IP").ok(), env::var("SERVICE_PORT").ok())
    }

    fn from_parts(ip: Option<String>, port: Option<String>) -> anyhow::Result<Self> {
        let port = match port {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("SERVICE_PORT is not a valid port: {raw}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            ip: ip.unwrap_or_else(|| DEFAULT_IP.to_string()),
            port,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_localhost_8080() {
        let config = ServerConfig::from_parts(None, None).unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn should_use_configured_ip_and_port() {
        let config =
            ServerConfig::from_parts(Some("0.0.0.0".to_string()), Some(" 9002 ".to_string()))
                .unwrap();

        assert_eq!(config.port, 9002);
        assert_eq!(config.bind_address(), "0.0.0.0:9002");
    }

    #[test]
    fn should_reject_port_out_of_range() {
        let result = ServerConfig::from_parts(None, Some("70000".to_string()));

        assert!(result.is_err());
    }
}
