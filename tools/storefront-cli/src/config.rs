//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use storefront_static::DEFAULT_PROGRESS_INTERVAL;

/// Config file names looked up from the working directory upwards.
pub const CONFIG_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Site settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Static generation settings.
    #[serde(default)]
    pub generate: GenerateConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

/// Deployment settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Prefix the site is served under, e.g. `/shop`. Empty for root.
    #[serde(default)]
    pub base_path: String,
}

/// Where the product catalog comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON fixture with the product list.
    #[serde(default = "default_fixture")]
    pub fixture: String,
}

fn default_fixture() -> String {
    "fixtures/items.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            fixture: default_fixture(),
        }
    }
}

/// Static generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Output directory for the generated tree.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Built HTML to take asset paths from. Defaults to the output
    /// directory's `index.html`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<String>,

    /// Written products between progress log lines.
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,
}

fn default_output_dir() -> String {
    "dist".to_string()
}

fn default_progress_interval() -> usize {
    DEFAULT_PROGRESS_INTERVAL
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            assets: None,
            progress_interval: default_progress_interval(),
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Storefront configuration

[site]
# Prefix the site is deployed under, e.g. "/front_7th_chapter4-1/vanilla"
base_path = ""

[catalog]
fixture = "{fixture}"

[generate]
output_dir = "{output_dir}"
# assets = "dist/index.html"
progress_interval = {progress_interval}
"#,
        fixture = default_fixture(),
        output_dir = default_output_dir(),
        progress_interval = DEFAULT_PROGRESS_INTERVAL,
    )
}
