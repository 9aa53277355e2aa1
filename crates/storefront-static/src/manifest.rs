//! Asset paths from a bundler-built `index.html`.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::GenerateError;

/// Entry script and stylesheet referenced by the built page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssetManifest {
    /// First `src="...js"` in the document.
    pub js: Option<String>,
    /// First `href="...css"` in the document.
    pub css: Option<String>,
}

static JS_ASSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"src="([^"]*\.js)""#).expect("valid js asset pattern"));

static CSS_ASSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href="([^"]*\.css)""#).expect("valid css asset pattern"));

impl AssetManifest {
    /// No assets; the document gets neither tag.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Extract asset paths from HTML text.
    pub fn from_html(html: &str) -> Self {
        let capture = |re: &Regex| {
            re.captures(html)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
        };

        Self {
            js: capture(&JS_ASSET),
            css: capture(&CSS_ASSET),
        }
    }

    /// Read and extract from a built `index.html`.
    pub async fn load(path: &Path) -> Result<Self, GenerateError> {
        let html = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| GenerateError::Manifest {
                path: path.to_path_buf(),
                source,
            })?;

        let manifest = Self::from_html(&html);
        tracing::info!(
            js = manifest.js.as_deref().unwrap_or(""),
            css = manifest.css.as_deref().unwrap_or(""),
            "Loaded asset manifest"
        );
        Ok(manifest)
    }
}
