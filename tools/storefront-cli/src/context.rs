//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};

use storefront_catalog::{Catalog, CatalogService};
use storefront_render::Storefront;

use crate::config::{StorefrontConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: StorefrontConfig,
    /// Config file in use, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Directory relative paths resolve against: the config file's
    /// directory, or the working directory without one.
    pub root: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let found = if let Some(path) = config_path {
            let path = absolute(&cwd, Path::new(path));
            Some((StorefrontConfig::load(&path)?, path))
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd)?
        };

        let (config, config_path) = match found {
            Some((config, path)) => (config, Some(path)),
            None => (StorefrontConfig::default(), None),
        };
        let root = config_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.clone());
        match &config_path {
            Some(path) => tracing::debug!(config = %path.display(), root = %root.display(), "Using config file"),
            None => tracing::debug!(root = %root.display(), "No config file found, using defaults"),
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            root,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Result<Option<(StorefrontConfig, PathBuf)>> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    let config = StorefrontConfig::load(&config_path)?;
                    return Ok(Some((config, config_path)));
                }
            }

            if !current.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Resolve a path relative to the config root.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        absolute(&self.root, Path::new(path))
    }

    /// Base path from a flag, falling back to config.
    pub fn base_path(&self, flag: Option<&str>) -> String {
        flag.unwrap_or(&self.config.site.base_path).to_string()
    }

    /// Load the catalog fixture, from `fixture` when given.
    pub fn load_catalog(&self, fixture: Option<&str>) -> Result<Arc<Catalog>> {
        let path = self.resolve_path(fixture.unwrap_or(&self.config.catalog.fixture));
        self.output
            .debug(&format!("Loading catalog from {}", path.display()));

        let catalog = Catalog::from_path(&path)
            .with_context(|| format!("Failed to load catalog: {}", path.display()))?;
        tracing::info!(path = %path.display(), products = catalog.len(), "Catalog loaded");
        Ok(Arc::new(catalog))
    }

    /// Build the storefront over `catalog`.
    pub fn storefront(&self, catalog: Arc<Catalog>, base_path: &str) -> Result<Storefront> {
        let service = CatalogService::new(catalog);
        Storefront::new(Arc::new(service), base_path).context("Failed to build route table")
    }
}

fn absolute(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_in_ancestor() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("storefront.toml"),
            "[site]\nbase_path = \"/shop\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, path) = Context::find_config(&nested).unwrap().unwrap();
        assert_eq!(config.site.base_path, "/shop");
        assert_eq!(path, dir.path().join("storefront.toml"));
    }

    #[test]
    fn test_invalid_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("storefront.toml"), "[site\n").unwrap();
        assert!(Context::find_config(dir.path()).is_err());
    }

    #[test]
    fn test_absolute() {
        let base = Path::new("/srv/shop");
        assert_eq!(absolute(base, Path::new("dist")), PathBuf::from("/srv/shop/dist"));
        assert_eq!(absolute(base, Path::new("/tmp/out")), PathBuf::from("/tmp/out"));
    }
}
