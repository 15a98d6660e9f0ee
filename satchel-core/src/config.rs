//! Inventory layout configuration.

use std::{fs, io, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::inventory::{HOTBAR_SIZE, INVENTORY_SIZE};

const DEFAULT_CONFIG: &str = include_str!("../../package-content/inventory_config.json5");

/// Errors raised while loading or validating an [`InventoryConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read or written.
    #[error("failed to access inventory config: {0}")]
    Io(#[from] io::Error),
    /// The config file is not valid JSON5 for this schema.
    #[error("failed to parse inventory config: {0}")]
    Parse(#[from] serde_json5::Error),
    /// The values are readable but inconsistent.
    #[error("invalid inventory config: {0}")]
    Invalid(&'static str),
}

/// Slot layout of a player inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InventoryConfig {
    /// Total number of slots.
    pub capacity: usize,
    /// Number of leading slots that can be held.
    pub hotbar_size: usize,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self::PLAYER
    }
}

impl InventoryConfig {
    /// The standard player layout: 36 slots, the first 9 of them the hotbar.
    pub const PLAYER: Self = Self {
        capacity: INVENTORY_SIZE,
        hotbar_size: HOTBAR_SIZE,
    };

    /// Parses and validates a JSON5 config.
    pub fn from_json5(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json5::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the config at `path`, writing the default one there first if it is missing.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let text = fs::read_to_string(path)?;
            return Self::from_json5(&text);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_CONFIG)?;
        log::info!("Wrote default inventory config to {}", path.display());
        Self::from_json5(DEFAULT_CONFIG)
    }

    /// Checks that the hotbar is a non-empty prefix of the slot range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hotbar_size == 0 {
            return Err(ConfigError::Invalid("Hotbar must have at least one slot"));
        }
        if self.hotbar_size > self.capacity {
            return Err(ConfigError::Invalid(
                "Hotbar size must not exceed inventory capacity",
            ));
        }
        Ok(())
    }
}
