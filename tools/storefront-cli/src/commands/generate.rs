//! Generate the static site.

use anyhow::{Context as _, Result};
use console::style;

use storefront_static::{AssetSource, GenerateOptions, Generator, ItemOutcome};

use super::GenerateArgs;
use crate::context::Context;
use crate::output::format_duration_ms;

/// Run the generate command.
pub async fn run(args: GenerateArgs, ctx: &Context) -> Result<()> {
    let base_path = ctx.base_path(args.base_path.as_deref());
    let output_dir = ctx.resolve_path(
        args.output
            .as_deref()
            .unwrap_or(&ctx.config.generate.output_dir),
    );
    let assets = asset_source(&args, ctx);
    tracing::info!(output = %output_dir.display(), base_path = %base_path, ?assets, "Starting generation");

    ctx.output.header("Generating static site");

    ctx.output.step(1, 3, "Loading catalog");
    let catalog = ctx.load_catalog(args.catalog.as_deref())?;
    let storefront = ctx.storefront(catalog.clone(), &base_path)?;
    ctx.output.kv("products", &catalog.len().to_string());
    if !storefront.base_path().is_empty() {
        ctx.output.kv("base path", storefront.base_path());
    }

    let options = GenerateOptions::new(&output_dir)
        .with_base_path(&base_path)
        .with_assets(assets)
        .with_progress_interval(ctx.config.generate.progress_interval);

    ctx.output.step(2, 3, "Rendering pages");
    let product_ids = catalog.product_ids();
    let pb = ctx.output.progress(product_ids.len() as u64, "product pages");
    let result = Generator::new(&storefront, options)
        .run_with(&product_ids, |done, outcome| {
            pb.set_position(done as u64);
            if let ItemOutcome::Failed { product_id, reason } = outcome {
                pb.suspend(|| {
                    ctx.output
                        .warn(&format!("Failed to generate product {}: {}", product_id, reason))
                });
            }
        })
        .await;
    pb.finish_and_clear();

    let report = result.context("Static site generation failed")?;

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    ctx.output.step(3, 3, "Writing summary");
    ctx.output.success("Static site generation completed");
    ctx.output.kv("home page", "1");
    ctx.output.kv(
        "product pages",
        &format!("{}/{}", report.succeeded, report.attempted),
    );
    if report.failed > 0 {
        ctx.output
            .kv("errors", &style(report.failed).red().to_string());
    }
    ctx.output.kv("js", report.assets.js.as_deref().unwrap_or("-"));
    ctx.output.kv("css", report.assets.css.as_deref().unwrap_or("-"));
    ctx.output.kv("output", &report.output_dir.display().to_string());
    ctx.output.kv("elapsed", &format_duration_ms(report.elapsed_ms));

    Ok(())
}

/// `--no-assets` beats `--assets`, which beats `generate.assets`.
fn asset_source(args: &GenerateArgs, ctx: &Context) -> AssetSource {
    if args.no_assets {
        return AssetSource::None;
    }
    match args.assets.as_deref().or(ctx.config.generate.assets.as_deref()) {
        Some(path) => AssetSource::File(ctx.resolve_path(path)),
        None => AssetSource::BuiltIndex,
    }
}
