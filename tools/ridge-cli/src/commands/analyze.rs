//! AI-assisted product data entry.

use anyhow::Result;
use ridge_ai::Analyzer;

use super::AnalyzeArgs;
use crate::context::Context;

/// Run the analyze command.
pub async fn run(args: AnalyzeArgs, ctx: &Context) -> Result<()> {
    let analyzer = ctx.analyzer()?;

    let spinner = ctx.output.spinner("Analyzing photo...");
    let analysis = analyzer.analyze(&args.image_url).await?;
    spinner.finish_and_clear();

    if ctx.output.is_json() {
        ctx.output.json(&analysis);
        return Ok(());
    }

    ctx.output.header("Suggested product data");
    if let Some(name) = &analysis.name_en {
        ctx.output.kv("Name (en)", name);
    }
    if let Some(name) = &analysis.name_ka {
        ctx.output.kv("Name (ka)", name);
    }
    if let Some(description) = &analysis.description_en {
        ctx.output.kv("Description (en)", description);
    }
    if let Some(category) = &analysis.category_slug {
        ctx.output.kv("Category", category);
    }
    if !analysis.sizes.is_empty() {
        ctx.output.kv("Sizes", &analysis.sizes.join(", "));
    }
    if !analysis.tags.is_empty() {
        ctx.output.kv("Tags", &analysis.tags.join(", "));
    }
    if let Some(price) = analysis.suggested_price_cents {
        let money = ridge_commerce::money::Money::new(price, ctx.currency());
        ctx.output.kv("Suggested price", &money.display());
    }
    if let Some(confidence) = analysis.confidence {
        ctx.output
            .kv("Confidence", &format!("{:.0}%", confidence * 100.0));
    }

    ctx.output
        .info("Review the suggestions before saving; they never overwrite hand-entered fields.");
    Ok(())
}
