use crate::inventory::{InventoryOptions, ReportMode, TraversalOrder};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Path substrings marking vendored code, on top of `node_modules`
    pub vendor_markers: Option<Vec<String>>,
    pub interfaces_only: Option<bool>,
    /// `category` or `unit`
    pub order: Option<String>,
}

impl InventoryConfig {
    /// Config written by `pragma-inventory init`
    pub fn default_template() -> Self {
        Self {
            vendor_markers: Some(vec!["lib/forge-std".to_string()]),
            interfaces_only: Some(false),
            order: Some(TraversalOrder::default().as_str().to_string()),
        }
    }

    /// Turn the file settings into run options
    pub fn to_options(&self) -> crate::Result<InventoryOptions> {
        let order = match &self.order {
            Some(order) => order.parse()?,
            None => TraversalOrder::default(),
        };
        let mode = if self.interfaces_only.unwrap_or(false) {
            ReportMode::InterfacesOnly
        } else {
            ReportMode::All
        };

        Ok(InventoryOptions {
            mode,
            order,
            vendor_markers: self.vendor_markers.clone().unwrap_or_default(),
        })
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("pragma-inventory.toml")
}

pub fn load_config(path: Option<&Path>) -> crate::Result<Option<InventoryConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: InventoryConfig = toml::from_str(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &InventoryConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}
