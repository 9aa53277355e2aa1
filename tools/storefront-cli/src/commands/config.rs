//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use storefront_router::normalize_base_path;

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        None => {
            print!("{}", generate_default_config());
            Ok(())
        }
        Some(ConfigCommand::Show) => show_config(ctx),
        Some(ConfigCommand::Init { force }) => init_config(force, ctx),
        Some(ConfigCommand::Validate) => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[site]");
    ctx.output.kv("base_path", &format!("{:?}", ctx.config.site.base_path));

    ctx.output.info("[catalog]");
    ctx.output.kv("fixture", &ctx.config.catalog.fixture);

    ctx.output.info("[generate]");
    ctx.output.kv("output_dir", &ctx.config.generate.output_dir);
    if let Some(ref assets) = ctx.config.generate.assets {
        ctx.output.kv("assets", assets);
    }
    ctx.output.kv(
        "progress_interval",
        &ctx.config.generate.progress_interval.to_string(),
    );

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("storefront.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let issues = check_config(ctx);
    if issues.errors.is_empty() && issues.warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &issues.errors {
        ctx.output.list_item(&format!("Error: {}", error));
    }

    for warning in &issues.warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !issues.errors.is_empty() {
        bail!("Configuration has {} error(s)", issues.errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

#[derive(Debug, Default)]
struct ConfigIssues {
    errors: Vec<String>,
    warnings: Vec<String>,
}

fn check_config(ctx: &Context) -> ConfigIssues {
    let mut issues = ConfigIssues::default();

    let base_path = &ctx.config.site.base_path;
    let normalized = normalize_base_path(base_path);
    if normalized != *base_path {
        issues.warnings.push(format!(
            "site.base_path '{}' is used as '{}'",
            base_path, normalized
        ));
    }

    let fixture = ctx.resolve_path(&ctx.config.catalog.fixture);
    if !fixture.is_file() {
        issues
            .errors
            .push(format!("catalog.fixture not found: {}", fixture.display()));
    }

    if ctx.config.generate.output_dir.trim().is_empty() {
        issues.errors.push("generate.output_dir is required".to_string());
    }

    if ctx.config.generate.progress_interval == 0 {
        issues
            .warnings
            .push("generate.progress_interval of 0 is treated as 1".to_string());
    }

    if let Some(ref assets) = ctx.config.generate.assets {
        let path = ctx.resolve_path(assets);
        if !path.is_file() {
            issues
                .warnings
                .push(format!("generate.assets not found yet: {}", path.display()));
        }
    }

    issues
}
