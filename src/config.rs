use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;
use tracing::info;

pub const PORT_ENV_VAR: &str = "PORT";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// Reads the listen port from the `PORT` environment variable, falling back to 8080 when unset.
    /// A value that is present but not a valid port is an error rather than a silent fallback.
    pub fn from_env() -> Result<Config> {
        let raw = match env::var(PORT_ENV_VAR) {
            Ok(value) => Some(value),
            Err(env::VarError::NotPresent) => None,
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {} environment variable", PORT_ENV_VAR));
            }
        };
        let config = Config {
            port: parse_port(raw.as_deref())?,
        };
        info!("Loaded config from environment: port {}", config.port);
        Ok(config)
    }

    /// Listen address on all interfaces.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16> {
    match raw {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .trim()
            .parse::<u16>()
            .with_context(|| format!("Invalid {} value {:?}, expected an integer between 0 and 65535", PORT_ENV_VAR, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_unset_uses_default() {
        assert_eq!(parse_port(None).expect("Default should apply"), 8080);
    }

    #[test]
    fn test_parse_port_valid() {
        assert_eq!(parse_port(Some("9090")).expect("Should parse"), 9090);
        assert_eq!(parse_port(Some(" 3000\n")).expect("Should trim whitespace"), 3000);
    }

    #[test]
    fn test_parse_port_invalid() {
        for bad in ["", "http", "80a", "-1", "65536", "8080.0"] {
            let err = parse_port(Some(bad)).expect_err("Should reject invalid port");
            assert!(
                err.to_string().contains("Invalid PORT value"),
                "unexpected error for {:?}: {}",
                bad,
                err
            );
        }
    }

    #[test]
    fn test_socket_addr_binds_all_interfaces() {
        let config = Config { port: 8123 };
        let addr = config.socket_addr();
        assert!(addr.ip().is_unspecified());
        assert_eq!(addr.port(), 8123);
        assert_eq!(addr.to_string(), "0.0.0.0:8123");
    }

    #[test]
    fn test_from_env_reads_port() {
        // The only test that touches PORT.
        unsafe {
            env::set_var(PORT_ENV_VAR, "18080");
        }
        let config = Config::from_env().expect("Should load config");
        assert_eq!(config.port, 18080);

        unsafe {
            env::remove_var(PORT_ENV_VAR);
        }
        let config = Config::from_env().expect("Should load config");
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
