use std::{env, path::PathBuf};

use thiserror::Error;

pub const RULES_PATH_VAR: &str = "RULES_PATH";
pub const SEED_VAR: &str = "RESPONSE_SEED";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid RESPONSE_SEED \"{0}\": expected an unsigned integer")]
    InvalidSeed(String),
}

/// Runtime settings, read from the environment (and a `.env` file when the
/// binary loads one first).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Rule file to load instead of the bundled rules.
    pub rules_path: Option<PathBuf>,
    /// Fixed seed for template selection.
    pub seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var(RULES_PATH_VAR).ok(), env::var(SEED_VAR).ok())
    }

    pub fn from_vars(rules_path: Option<String>, seed: Option<String>) -> Result<Self, ConfigError> {
        let rules_path = rules_path
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let seed = match seed {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidSeed(raw))?),
            None => None,
        };
        Ok(Config {
            rules_path: rules_path,
            seed: seed,
        })
    }
}
