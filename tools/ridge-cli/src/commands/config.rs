//! Configuration management.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::RidgeConfig;
use crate::context::Context;

const CONFIG_FILE: &str = "ridge.toml";

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Init { force } => init(ctx, force),
    }
}

fn show(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Configuration");
    ctx.output.kv("Backend URL", &ctx.config.backend.url);
    ctx.output
        .kv("Backend key env", &ctx.config.backend.api_key_env);
    ctx.output
        .kv("Timeout", &format!("{}s", ctx.config.backend.timeout_secs));
    ctx.output.kv("AI endpoint", &ctx.config.ai.endpoint);
    ctx.output.kv("AI model", &ctx.config.ai.model);
    ctx.output.kv("Currency", &ctx.config.shop.currency);
    Ok(())
}

fn init(ctx: &Context, force: bool) -> Result<()> {
    let path = ctx.cwd.join(CONFIG_FILE);
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let config = RidgeConfig::default();
    config.save(path.to_str().unwrap_or(CONFIG_FILE))?;

    ctx.output
        .success(&format!("Wrote {}", path.display()));
    ctx.output
        .info("Edit the backend URL, then export the API key in $RIDGE_API_KEY.");
    Ok(())
}
