use serde::{Deserialize, Serialize};

/// Where the widget finds its icons and its design-tool descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory serving "1.svg".."17.svg", "all.svg" and "circle.svg"
    pub asset_root: String,
    /// Directory holding "{tag}.haxProperties.json"
    pub descriptor_root: String,
    /// Element tag name the widget is registered under
    pub tag: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            asset_root: "/lib/svgs".to_string(),
            descriptor_root: "/lib".to_string(),
            tag: "un-sdg".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid asset configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl AssetConfig {
    /// Parse a JSON configuration; missing fields fall back to the defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Asset location for a goal key; the only place icon file names are built
    pub fn path(&self, key: &str) -> String {
        format!("{}/{}.svg", self.asset_root.trim_end_matches('/'), key)
    }

    /// Fixed URL of the editable-property descriptor for design-tool hosts
    pub fn descriptor_url(&self) -> String {
        format!(
            "{}/{}.haxProperties.json",
            self.descriptor_root.trim_end_matches('/'),
            self.tag
        )
    }
}
