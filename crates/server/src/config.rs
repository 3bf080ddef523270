//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `DATABASE_URL` - `PostgreSQL` connection string
//! - `SMTP_HOST` - SMTP server hostname
//! - `SMTP_USERNAME` - SMTP authentication username
//! - `SMTP_PASSWORD` - SMTP authentication password
//! - `SMTP_FROM` - Email sender address
//!
//! ## Optional
//! - `SERVER_HOST` - Bind address (default: 127.0.0.1)
//! - `SERVER_PORT` - Listen port (default: 3200)
//! - `SMTP_PORT` - SMTP port (default: 587)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3200;
const DEFAULT_SMTP_PORT: u16 = 587;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// SMTP transport configuration.
#[derive(Debug, Clone)]
pub struct MailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port.
    pub smtp_port: u16,
    /// SMTP authentication username.
    pub smtp_username: String,
    /// SMTP authentication password.
    pub smtp_password: SecretString,
    /// Sender address for all outgoing mail.
    pub from_address: String,
}

/// Tool server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `PostgreSQL` connection URL (contains password).
    pub database_url: SecretString,
    /// Bind address.
    pub host: IpAddr,
    /// Listen port.
    pub port: u16,
    /// Outbound mail transport settings.
    pub mail: MailConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] for absent required variables
    /// and [`ConfigError::InvalidEnvVar`] for unparseable values.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = SecretString::from(required("DATABASE_URL")?);

        let host: IpAddr = optional("SERVER_HOST")
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidEnvVar("SERVER_HOST".into(), format!("{e}")))?;
        let port = parse_port("SERVER_PORT", DEFAULT_PORT)?;

        let mail = MailConfig {
            smtp_host: required("SMTP_HOST")?,
            smtp_port: parse_port("SMTP_PORT", DEFAULT_SMTP_PORT)?,
            smtp_username: required("SMTP_USERNAME")?,
            smtp_password: SecretString::from(required("SMTP_PASSWORD")?),
            from_address: required("SMTP_FROM")?,
        };

        Ok(Self {
            database_url,
            host,
            port,
            mail,
        })
    }

    /// The socket address to bind the listener to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn parse_port(name: &str, default: u16) -> Result<u16, ConfigError> {
    match optional(name) {
        None => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|e| ConfigError::InvalidEnvVar(name.to_string(), format!("{e}"))),
    }
}

#[cfg(test)]
#[allow(unsafe_code)] // env::set_var/remove_var are unsafe in edition 2024
mod tests {
    use super::*;

    #[test]
    fn missing_required_variable_is_reported_by_name() {
        // SAFETY: no other thread in this test binary mutates these
        // variables concurrently.
        unsafe { std::env::remove_var("DATABASE_URL") };
        let err = ServerConfig::from_env().expect_err("must fail");
        assert!(matches!(err, ConfigError::MissingEnvVar(ref name) if name == "DATABASE_URL"));
    }

    #[test]
    fn port_parsing_rejects_garbage() {
        let err = {
            unsafe { std::env::set_var("TEST_PORT_GARBAGE", "not-a-port") };
            parse_port("TEST_PORT_GARBAGE", 1234).expect_err("must fail")
        };
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref name, _) if name == "TEST_PORT_GARBAGE"));

        unsafe { std::env::remove_var("TEST_PORT_GARBAGE") };
        assert_eq!(parse_port("TEST_PORT_GARBAGE", 1234).expect("default"), 1234);
    }
}
