//! Loading property maps from configuration files.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use config::File;
use serde::de::DeserializeOwned;

use crate::error::{ConfigError, Result};

/// Load a flat property map from a configuration file.
///
/// The format is detected from the extension (`.yaml`/`.yml`, `.toml`,
/// `.json`); every top-level key becomes one property.
pub(crate) fn load_properties<V>(path: &Path) -> Result<BTreeMap<String, V>>
where
    V: DeserializeOwned,
{
    validate_extension(path)?;

    if !path.exists() {
        return Err(ConfigError::LoadError(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let parsed = config::Config::builder()
        .add_source(File::from(path.to_path_buf()).required(true))
        .build()
        .map_err(|e| ConfigError::LoadError(format!("Failed to load file: {}", e)))?;

    let raw = parsed
        .try_deserialize::<HashMap<String, config::Value>>()
        .map_err(|e| ConfigError::DeserializationError(format!("Failed to parse file: {}", e)))?;

    let mut properties = BTreeMap::new();
    for (name, value) in raw {
        let value = value.try_deserialize::<V>().map_err(|e| {
            ConfigError::DeserializationError(format!(
                "Failed to deserialize property '{}': {}",
                name, e
            ))
        })?;
        properties.insert(name, value);
    }
    Ok(properties)
}

fn validate_extension(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| {
            ConfigError::LoadError(format!(
                "Unable to determine file format for: {}",
                path.display()
            ))
        })?;

    match extension {
        "yaml" | "yml" | "toml" | "json" => Ok(()),
        _ => Err(ConfigError::LoadError(format!(
            "Unsupported file extension: {}. Supported: .yaml, .yml, .toml, .json",
            extension
        ))),
    }
}
