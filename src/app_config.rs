use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::default::Default;

use crate::errors::ConfigError;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Target block length in minutes
    #[serde(default = "default_block_length_minutes")]
    pub block_length_minutes: u64,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log level setting
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_block_length_minutes() -> u64 {
    5
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.block_length_minutes == 0 {
            return Err(ConfigError::ZeroBlockDuration.into());
        }

        Ok(())
    }

    /// Target block duration converted to the unit the merger works in
    pub fn target_duration_ms(&self) -> u64 {
        self.block_length_minutes * 60_000
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            block_length_minutes: default_block_length_minutes(),
            log_level: LogLevel::default(),
        }
    }
}
