//! Environment configuration
//!
//! `SPAMSENSE_HOST`, `SPAMSENSE_PORT` (falling back to `PORT`), and
//! `SPAMSENSE_BLACKLIST` (comma-separated numbers appended to the
//! built-in deny-list). CLI flags override the environment.

use std::env;

use crate::errors::{Result, SpamsenseError};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration for the server binary
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Extra deny-list entries, normalized to digit strings
    pub blacklist: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            blacklist: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self> {
        let host = env::var("SPAMSENSE_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("SPAMSENSE_PORT").or_else(|_| env::var("PORT")) {
            Ok(raw) => parse_port(&raw)?,
            Err(_) => DEFAULT_PORT,
        };

        let blacklist = match env::var("SPAMSENSE_BLACKLIST") {
            Ok(raw) => parse_blacklist(&raw)?,
            Err(_) => Vec::new(),
        };

        let config = Self {
            host,
            port,
            blacklist,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(SpamsenseError::configuration("host must not be empty"));
        }
        Ok(())
    }

    /// CLI flags win over environment values
    pub fn merge_with_cli(&mut self, host: Option<&str>, port: Option<u16>) {
        if let Some(host) = host {
            self.host = host.to_string();
        }
        if let Some(port) = port {
            self.port = port;
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim().parse::<u16>().map_err(|_| {
        SpamsenseError::configuration(format!("invalid port value: {:?}", raw))
    })
}

/// Split on commas and normalize each entry to its digit string. Blank
/// entries are skipped; an entry with no digits at all is an operator
/// typo and rejected outright.
fn parse_blacklist(raw: &str) -> Result<Vec<String>> {
    let mut entries = Vec::new();
    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let digits: String = entry.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return Err(SpamsenseError::configuration(format!(
                "blacklist entry {:?} contains no digits",
                entry
            )));
        }
        entries.push(digits);
    }
    Ok(entries)
}

// =============================================================================
// TESTS
// =============================================================================
