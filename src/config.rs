//! Configuration file support for gc-orders.
//!
//! Provides YAML-based configuration through `gc-orders.config.yml` files:
//! where the data file lives, the daily shipping cutoff, the default log
//! level and the product catalog to seed at startup.

use anyhow::Context;
use chrono::NaiveTime;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

use crate::ordering::domain::{Product, ProductId};
use crate::shared::error::OrderError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "gc-orders.config.yml";
pub const DEFAULT_DATA_FILE: &str = "gc-orders.data.json";
pub const DEFAULT_SHIPPING_CUTOFF: &str = "14:00";
const CUTOFF_FORMAT: &str = "%H:%M";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub data_file: Option<PathBuf>,
    /// Daily cutoff in `HH:MM` (UTC)
    pub shipping_cutoff: Option<String>,
    pub log_level: Option<String>,
    #[serde(default)]
    pub products: Vec<ProductSeed>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// A catalog entry seeded into the database at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct ProductSeed {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub price: u64,
    pub description: Option<String>,
}

impl ProductSeed {
    pub fn to_product(&self) -> Result<Product> {
        Product::new(
            ProductId::from_uuid(self.id),
            self.name.clone(),
            self.category.clone(),
            self.price,
            self.description.clone(),
        )
    }
}

impl ConfigFile {
    /// Cutoff from the file, or 14:00 when unset.
    pub fn shipping_cutoff(&self) -> Result<NaiveTime> {
        parse_cutoff(
            self.shipping_cutoff
                .as_deref()
                .unwrap_or(DEFAULT_SHIPPING_CUTOFF),
        )
    }

    /// Seed entries converted to domain products.
    pub fn catalog(&self) -> Result<Vec<Product>> {
        self.products.iter().map(ProductSeed::to_product).collect()
    }
}

/// Parses a `HH:MM` cutoff time.
pub fn parse_cutoff(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), CUTOFF_FORMAT).map_err(|e| {
        OrderError::validation(format!(
            "Invalid shipping cutoff '{}': {}. Expected HH:MM (e.g. \"14:00\")",
            value, e
        ))
        .into()
    })
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config).map_err(|e| OrderError::ConfigError {
        path: path.to_path_buf(),
        details: format!("{:#}", e),
    })?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.shipping_cutoff()?;

    let mut seen = HashSet::new();
    for (i, seed) in config.products.iter().enumerate() {
        seed.to_product()
            .with_context(|| format!("products[{}] is invalid", i))?;
        if !seen.insert(seed.id) {
            return Err(OrderError::validation(format!(
                "products[{}].id {} is listed more than once",
                i, seed.id
            ))
            .into());
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
///
/// Called once logging is up, since the log level itself may come from the
/// config.
pub fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!(field = %key, "Unknown config field will be ignored");
    }
}
