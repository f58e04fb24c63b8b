use thiserror::Error;

use crate::cli::Cli;
use crate::engine::EngineFamily;

/// A configuration problem that must stop the invocation before any
/// network I/O. All variants map to exit code 4.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No IPv4 address supplied.")]
    MissingAddress,
    #[error("No port supplied.")]
    MissingPort,
    #[error("Invalid port '{0}'.")]
    InvalidPort(String),
    #[error("No engine supplied.")]
    MissingEngine,
    #[error("Unrecognized engine '{0}'.")]
    UnknownEngine(String),
}

/// Validated probe inputs: a target endpoint and a resolved engine family.
#[derive(Debug)]
pub struct ProbeConfig {
    pub address: String,
    pub port: u16,
    pub family: EngineFamily,
}

impl ProbeConfig {
    /// Presence-check the required options and resolve the engine
    /// identifier. The address is not validated for format; a bad address
    /// surfaces later as a connect failure.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let address = match cli.address.as_deref() {
            Some(a) if !a.is_empty() => a.to_string(),
            _ => return Err(ConfigError::MissingAddress),
        };
        let port = match cli.port.as_deref() {
            Some(p) if !p.is_empty() => p
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(p.to_string()))?,
            _ => return Err(ConfigError::MissingPort),
        };
        let family = match cli.engine.as_deref() {
            Some(e) if !e.is_empty() => EngineFamily::from_identifier(e)
                .ok_or_else(|| ConfigError::UnknownEngine(e.to_string()))?,
            _ => return Err(ConfigError::MissingEngine),
        };

        Ok(Self {
            address,
            port,
            family,
        })
    }
}
