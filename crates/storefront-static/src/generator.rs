//! Static site generation.
//!
//! Renders the root page and every product page through the same
//! [`Storefront`] used for SSR and writes them under the output directory:
//!
//! ```text
//! <output>/index.html
//! <output>/404.html               copy of index.html
//! <output>/product/<id>/index.html
//! ```
//!
//! Product pages are generated one at a time in catalog order. A failing
//! product is recorded and skipped; only the manifest or the root page can
//! abort the run.

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;

use storefront_catalog::ProductId;
use storefront_render::{RenderResult, Storefront};
use storefront_router::normalize_base_path;

use crate::error::GenerateError;
use crate::manifest::AssetManifest;
use crate::template::build_html;

/// Log a progress line after this many written products.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 50;

/// Where the asset manifest comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AssetSource {
    /// `index.html` already in the output directory, as left by the bundler.
    #[default]
    BuiltIndex,
    /// A specific built HTML file.
    File(PathBuf),
    /// No assets; documents carry neither tag.
    None,
}

/// Generation settings.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Root of the generated tree.
    pub output_dir: PathBuf,
    /// Deployment prefix prepended to every rendered URL, normalized the
    /// way the router normalizes it.
    pub base_path: String,
    pub assets: AssetSource,
    /// Written products between progress log lines.
    pub progress_interval: usize,
}

impl GenerateOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            base_path: String::new(),
            assets: AssetSource::default(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    pub fn with_base_path(mut self, base_path: impl AsRef<str>) -> Self {
        self.base_path = normalize_base_path(base_path.as_ref());
        self
    }

    pub fn with_assets(mut self, assets: AssetSource) -> Self {
        self.assets = assets;
        self
    }

    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval.max(1);
        self
    }

    /// URL the storefront is asked to render for `path`.
    pub fn page_url(&self, path: &str) -> String {
        format!("{}{}", normalize_base_path(&self.base_path), path)
    }
}

/// What happened to one product page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemOutcome {
    Written { product_id: String, path: PathBuf },
    Failed { product_id: String, reason: String },
}

impl ItemOutcome {
    pub fn product_id(&self) -> &str {
        match self {
            Self::Written { product_id, .. } | Self::Failed { product_id, .. } => product_id,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }
}

/// Summary of a generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub assets: AssetManifest,
    /// Product pages attempted.
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Per-product outcomes in catalog order.
    pub outcomes: Vec<ItemOutcome>,
    pub elapsed_ms: u64,
}

impl GenerationReport {
    /// Failed outcomes only.
    pub fn failures(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.outcomes.iter().filter(|o| !o.is_written())
    }

    /// Check if every product page was written.
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}

/// Drives a [`Storefront`] over the whole page set.
pub struct Generator<'a> {
    storefront: &'a Storefront,
    options: GenerateOptions,
}

impl<'a> Generator<'a> {
    pub fn new(storefront: &'a Storefront, options: GenerateOptions) -> Self {
        Self { storefront, options }
    }

    /// Generate the site for `product_ids`.
    pub async fn run(&self, product_ids: &[ProductId]) -> Result<GenerationReport, GenerateError> {
        self.run_with(product_ids, |_, _| {}).await
    }

    /// Generate the site, calling `on_item` after each product page with
    /// the number of pages done so far.
    pub async fn run_with<F>(
        &self,
        product_ids: &[ProductId],
        mut on_item: F,
    ) -> Result<GenerationReport, GenerateError>
    where
        F: FnMut(usize, &ItemOutcome),
    {
        let start = Instant::now();
        let output_dir = &self.options.output_dir;

        let assets = self.load_assets().await?;
        create_dir(output_dir).await?;

        self.generate_root(&assets).await?;

        let total = product_ids.len();
        tracing::info!(total, "Generating product pages");

        let mut outcomes = Vec::with_capacity(total);
        let mut succeeded = 0;
        for (index, product_id) in product_ids.iter().enumerate() {
            let outcome = match self.generate_product(product_id, &assets).await {
                Ok(path) => {
                    succeeded += 1;
                    if succeeded % self.options.progress_interval == 0 {
                        tracing::info!("{succeeded}/{total} products generated");
                    }
                    ItemOutcome::Written {
                        product_id: product_id.to_string(),
                        path,
                    }
                }
                Err(e) => {
                    tracing::warn!(product_id = %product_id, error = %e, "Failed to generate product page");
                    ItemOutcome::Failed {
                        product_id: product_id.to_string(),
                        reason: e.to_string(),
                    }
                }
            };

            on_item(index + 1, &outcome);
            outcomes.push(outcome);
        }

        let report = GenerationReport {
            output_dir: output_dir.clone(),
            assets,
            attempted: total,
            succeeded,
            failed: total - succeeded,
            outcomes,
            elapsed_ms: start.elapsed().as_millis() as u64,
        };

        tracing::info!(
            succeeded = report.succeeded,
            failed = report.failed,
            elapsed_ms = report.elapsed_ms,
            "Static site generation completed"
        );
        Ok(report)
    }

    async fn load_assets(&self) -> Result<AssetManifest, GenerateError> {
        match &self.options.assets {
            AssetSource::BuiltIndex => {
                AssetManifest::load(&self.options.output_dir.join("index.html")).await
            }
            AssetSource::File(path) => AssetManifest::load(path).await,
            AssetSource::None => Ok(AssetManifest::empty()),
        }
    }

    /// Root page to `index.html`, then copied to `404.html`.
    async fn generate_root(&self, assets: &AssetManifest) -> Result<(), GenerateError> {
        let url = self.options.page_url("/");
        let rendered = self.render_page(&url).await?;

        let index = self.options.output_dir.join("index.html");
        write_file(&index, &build_html(&rendered, assets)?).await?;

        let not_found = self.options.output_dir.join("404.html");
        tokio::fs::copy(&index, &not_found)
            .await
            .map_err(|e| GenerateError::write(&not_found, e))?;

        tracing::info!(url = %url, "Home page generated");
        Ok(())
    }

    async fn generate_product(
        &self,
        product_id: &ProductId,
        assets: &AssetManifest,
    ) -> Result<PathBuf, GenerateError> {
        let id = product_id.as_str();
        let url = self.options.page_url(&format!("/product/{id}/"));
        if !is_safe_segment(id) {
            return Err(GenerateError::Page {
                url,
                reason: "product id is not a valid path segment".to_string(),
            });
        }

        let rendered = self.render_page(&url).await?;
        let document = build_html(&rendered, assets)?;

        let dir = self.options.output_dir.join("product").join(id);
        create_dir(&dir).await?;
        let path = dir.join("index.html");
        write_file(&path, &document).await?;
        Ok(path)
    }

    /// Render `url`, treating the 404 and error documents as failures.
    async fn render_page(&self, url: &str) -> Result<RenderResult, GenerateError> {
        let rendered = self.storefront.render(url, &Default::default()).await;
        match rendered.failure_reason() {
            None => Ok(rendered),
            Some(reason) => Err(GenerateError::Page {
                url: url.to_string(),
                reason,
            }),
        }
    }
}

/// Generate with default progress handling.
pub async fn generate(
    storefront: &Storefront,
    product_ids: &[ProductId],
    options: GenerateOptions,
) -> Result<GenerationReport, GenerateError> {
    Generator::new(storefront, options).run(product_ids).await
}

fn is_safe_segment(id: &str) -> bool {
    !id.is_empty()
        && id != "."
        && id != ".."
        && !id.contains(['/', '\\', '?', '#', '%'])
        && !id.chars().any(char::is_control)
}

async fn create_dir(path: &Path) -> Result<(), GenerateError> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|e| GenerateError::write(path, e))
}

async fn write_file(path: &Path, contents: &str) -> Result<(), GenerateError> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| GenerateError::write(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url() {
        let options = GenerateOptions::new("dist");
        assert_eq!(options.page_url("/"), "/");

        let options = options.with_base_path("/front_7th_chapter4-1/vanilla/");
        assert_eq!(options.page_url("/"), "/front_7th_chapter4-1/vanilla/");
        assert_eq!(
            options.page_url("/product/7/"),
            "/front_7th_chapter4-1/vanilla/product/7/"
        );
    }

    #[test]
    fn test_base_path_without_leading_slash() {
        let options = GenerateOptions::new("dist").with_base_path("shop/");
        assert_eq!(options.base_path, "/shop");
        assert_eq!(options.page_url("/"), "/shop/");

        let mut options = GenerateOptions::new("dist");
        options.base_path = "shop".to_string();
        assert_eq!(options.page_url("/product/7/"), "/shop/product/7/");
    }

    #[test]
    fn test_safe_segment() {
        assert!(is_safe_segment("85067212996"));
        assert!(!is_safe_segment(""));
        assert!(!is_safe_segment(".."));
        assert!(!is_safe_segment("a/b"));
        assert!(!is_safe_segment("7?page=2"));
        assert!(!is_safe_segment("7#top"));
        assert!(!is_safe_segment("7%2F"));
    }

    #[test]
    fn test_outcome_serializes_with_status() {
        let outcome = ItemOutcome::Failed {
            product_id: "7".to_string(),
            reason: "boom".to_string(),
        };
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["status"], "failed");
        assert_eq!(value["product_id"], "7");
    }

    #[test]
    fn test_progress_interval_floor() {
        assert_eq!(GenerateOptions::new("d").with_progress_interval(0).progress_interval, 1);
    }
}
