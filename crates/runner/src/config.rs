//! Runner configuration, read from the environment.

use std::path::PathBuf;

use thiserror::Error;

use prodchain_observability::{LogFormat, ParseLogFormatError};

pub const CHAINCODE_NAME_VAR: &str = "PRODCHAIN_CHAINCODE_NAME";
pub const LOG_FORMAT_VAR: &str = "PRODCHAIN_LOG_FORMAT";
pub const CREATOR_FILE_VAR: &str = "PRODCHAIN_CREATOR_FILE";
pub const INIT_ARGS_VAR: &str = "PRODCHAIN_INIT_ARGS";

const DEFAULT_CHAINCODE_NAME: &str = "SimpleChaincode";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PRODCHAIN_LOG_FORMAT: {0}")]
    LogFormat(#[from] ParseLogFormatError),

    #[error("{0} is set but empty")]
    Empty(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Recorded on the chaincode's root span.
    pub chaincode_name: String,
    pub log_format: LogFormat,
    /// Credential used for transactions that carry no `creator` of their own.
    pub creator_file: Option<PathBuf>,
    /// When set, `init` runs once with these arguments before any input.
    pub init_args: Option<Vec<String>>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            chaincode_name: DEFAULT_CHAINCODE_NAME.to_string(),
            log_format: LogFormat::default(),
            creator_file: None,
            init_args: None,
        }
    }
}

impl RunnerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup(CHAINCODE_NAME_VAR) {
            config.chaincode_name = non_empty(CHAINCODE_NAME_VAR, name)?;
        }
        if let Some(format) = lookup(LOG_FORMAT_VAR) {
            config.log_format = format.parse()?;
        }
        if let Some(path) = lookup(CREATOR_FILE_VAR) {
            config.creator_file = Some(PathBuf::from(non_empty(CREATOR_FILE_VAR, path)?));
        }
        if let Some(args) = lookup(INIT_ARGS_VAR) {
            let args = non_empty(INIT_ARGS_VAR, args)?;
            config.init_args = Some(args.split(',').map(|a| a.trim().to_string()).collect());
        }

        Ok(config)
    }
}

fn non_empty(var: &'static str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Empty(var));
    }
    Ok(value)
}
