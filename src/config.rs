//! Host configuration parsed from environment variables.
//!
//! CONFIGURATION
//! =============
//! - `HOST`: bind address, default `0.0.0.0`
//! - `PORT`: listen port, default `3000`
//!
//! Backend service URLs are not read here; the client bakes them in at build
//! time from `COMPLIANCE_DOCUMENTS_URL`, `COMPLIANCE_RULES_URL`, and
//! `COMPLIANCE_SCANNER_URL`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when `PORT` is not a valid port number
    /// or `HOST` is blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup; unset keys take their defaults.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup("HOST") {
            None => DEFAULT_HOST.to_owned(),
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::Invalid { var: "HOST", value: raw }),
            Some(raw) => raw.trim().to_owned(),
        };
        let port = match lookup("PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .ok()
                .filter(|p| *p != 0)
                .ok_or(ConfigError::Invalid { var: "PORT", value: raw })?,
        };
        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
