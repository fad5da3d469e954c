//! YAML configuration for the `lotto` front end.
//!
//! Every field has a default; a file only needs the keys it overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::purchase::TICKET_PRICE;
use crate::tally::TallyMode;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LottoConfig {
    #[serde(default)]
    pub purchase: PurchaseConfig,
    #[serde(default)]
    pub tally: TallyConfig,
    #[serde(default)]
    pub sim: SimConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PurchaseConfig {
    /// Price of a single ticket.
    #[serde(default = "default_ticket_price")]
    pub ticket_price: u64,
}

fn default_ticket_price() -> u64 {
    TICKET_PRICE
}

impl Default for PurchaseConfig {
    fn default() -> Self {
        Self {
            ticket_price: default_ticket_price(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TallyConfig {
    /// Whether printed/logged tallies list tiers nobody hit.
    #[serde(default)]
    pub mode: TallyMode,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimConfig {
    /// Base seed for quick picks and the simulated draw.
    #[serde(default)]
    pub seed: u64,
    /// Tally simulated tickets on the rayon pool.
    #[serde(default = "default_sim_parallel")]
    pub parallel: bool,
    /// Upper bound on tickets per run; larger `--tickets`/`--budget` requests are rejected.
    #[serde(default = "default_sim_max_tickets")]
    pub max_tickets: u64,
}

fn default_sim_parallel() -> bool {
    true
}

fn default_sim_max_tickets() -> u64 {
    10_000_000
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            parallel: default_sim_parallel(),
            max_tickets: default_sim_max_tickets(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Flush NDJSON logs every N lines (0 disables periodic flushing).
    #[serde(default = "default_flush_every_lines")]
    pub flush_every_lines: u64,
}

fn default_flush_every_lines() -> u64 {
    100
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            flush_every_lines: default_flush_every_lines(),
        }
    }
}

impl LottoConfig {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: LottoConfig = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.purchase.ticket_price < 1 {
            return Err(ConfigError::Invalid(
                "purchase.ticket_price must be >= 1".to_string(),
            ));
        }
        if self.sim.max_tickets < 1 {
            return Err(ConfigError::Invalid(
                "sim.max_tickets must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}
