//! Render a single URL.

use anyhow::{bail, Result};

use storefront_render::RenderResult;
use storefront_router::QueryParams;
use storefront_static::{build_html, AssetManifest};

use super::RenderArgs;
use crate::context::Context;
use crate::output::status_badge;

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let query = parse_query_pairs(&args.query)?;
    let base_path = ctx.base_path(args.base_path.as_deref());

    let catalog = ctx.load_catalog(args.catalog.as_deref())?;
    let storefront = ctx.storefront(catalog, &base_path)?;

    ctx.output.debug(&format!("Rendering {}", args.url));
    let result = storefront.render(&args.url, &query).await;
    tracing::info!(url = %args.url, status = result.status.as_str(), "Rendered");

    if ctx.output.is_json() {
        ctx.output.json(&result);
        return Ok(());
    }

    if !result.is_ok() {
        ctx.output.warn(&format!(
            "{} rendered with status {}",
            args.url,
            status_badge(result.status)
        ));
    }

    println!("{}", document(&args, ctx, &result).await?);

    Ok(())
}

/// The body fragment, or the full document with assets from `--assets`.
async fn document(args: &RenderArgs, ctx: &Context, result: &RenderResult) -> Result<String> {
    if args.fragment {
        return Ok(result.html.clone());
    }

    let assets = match args.assets.as_deref() {
        Some(path) => AssetManifest::load(&ctx.resolve_path(path)).await?,
        None => AssetManifest::empty(),
    };
    Ok(build_html(result, &assets)?)
}

/// Parse `key=value` flags into a query map.
fn parse_query_pairs(pairs: &[String]) -> Result<QueryParams> {
    let mut query = QueryParams::new();
    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("Invalid query parameter '{}': expected key=value", pair);
        };
        if key.is_empty() {
            bail!("Invalid query parameter '{}': empty key", pair);
        }
        query.insert(key.to_string(), value.to_string());
    }
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{context_in, write_catalog};

    fn args(url: &str) -> RenderArgs {
        RenderArgs {
            url: url.to_string(),
            query: Vec::new(),
            base_path: None,
            catalog: None,
            assets: None,
            fragment: false,
        }
    }

    async fn render(ctx: &Context, url: &str) -> RenderResult {
        let storefront = ctx.storefront(ctx.load_catalog(None).unwrap(), "").unwrap();
        storefront.render(url, &QueryParams::new()).await
    }

    #[tokio::test]
    async fn test_fragment_and_full_document() {
        let dir = tempfile::tempdir().unwrap();
        write_catalog(dir.path());
        std::fs::write(
            dir.path().join("built.html"),
            r#"<script type="module" src="/assets/app.js"></script>"#,
        )
        .unwrap();
        let ctx = context_in(dir.path());
        let result = render(&ctx, "/product/1001/").await;

        let fragment = document(&RenderArgs { fragment: true, ..args("/product/1001/") }, &ctx, &result)
            .await
            .unwrap();
        assert_eq!(fragment, result.html);
        assert!(!fragment.contains("<!doctype html>"));

        let full = document(
            &RenderArgs { assets: Some("built.html".to_string()), ..args("/product/1001/") },
            &ctx,
            &result,
        )
        .await
        .unwrap();
        assert!(full.contains("Alpha Mug | 쇼핑몰"));
        assert!(full.contains(r#"src="/assets/app.js""#));
    }

    #[tokio::test]
    async fn test_not_found_still_renders() {
        let dir = tempfile::tempdir().unwrap();
        write_catalog(dir.path());
        let ctx = context_in(dir.path());

        assert!(run(args("/nowhere"), &ctx).await.is_ok());
        assert!(run(RenderArgs { query: vec!["bad".to_string()], ..args("/") }, &ctx).await.is_err());
    }

    #[test]
    fn test_parse_query_pairs() {
        let query = parse_query_pairs(&[
            "search=젤리".to_string(),
            "sort=price_desc".to_string(),
            "category2=".to_string(),
        ])
        .unwrap();

        assert_eq!(query["search"], "젤리");
        assert_eq!(query["sort"], "price_desc");
        assert_eq!(query["category2"], "");
    }

    #[test]
    fn test_invalid_pairs() {
        assert!(parse_query_pairs(&["nokey".to_string()]).is_err());
        assert!(parse_query_pairs(&["=v".to_string()]).is_err());
    }
}
