//! Product catalog commands.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use ridge_commerce::catalog::Product;
use ridge_commerce::ids::ProductId;
use ridge_commerce::search::{CatalogQuery, Filter, SortOption};
use ridge_commerce::text::Lang;

use super::{ProductsArgs, ProductsCommand};
use crate::context::Context;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ProductsCommand::List {
            search,
            status,
            category,
            brand,
            in_stock,
            sort,
            page,
            per_page,
        } => {
            let mut query = CatalogQuery::new()
                .with_sort(parse_sort(&sort)?)
                .with_pagination(page, per_page);
            if let Some(search) = search {
                query = query.with_text(search);
            }
            if let Some(status) = status {
                query = query.with_filter(Filter::Status(status));
            }
            if let Some(category) = category {
                query = query.with_filter(Filter::category(category.as_str()));
            }
            if let Some(brand) = brand {
                query = query.with_filter(Filter::brand(brand.as_str()));
            }
            if in_stock {
                query = query.with_filter(Filter::in_stock());
            }
            list(ctx, query).await
        }
        ProductsCommand::Show { id } => show(ctx, &id).await,
        ProductsCommand::Archive { id, yes } => archive(ctx, &id, yes).await,
    }
}

fn parse_sort(sort: &str) -> Result<SortOption> {
    Ok(match sort {
        "newest" => SortOption::Newest,
        "oldest" => SortOption::Oldest,
        "price-asc" => SortOption::PriceAsc,
        "price-desc" => SortOption::PriceDesc,
        "name-asc" => SortOption::NameAsc,
        "name-desc" => SortOption::NameDesc,
        other => bail!("Unknown sort order: {}", other),
    })
}

async fn list(ctx: &Context, query: CatalogQuery) -> Result<()> {
    let client = ctx.client()?;
    let results = client.products(&query).await?;

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    ctx.output.header(&format!(
        "Products (page {}/{}, {} total)",
        results.pagination.page,
        results.pagination.total_pages().max(1),
        results.pagination.total
    ));

    if results.is_empty() {
        ctx.output.info("No products match.");
        return Ok(());
    }

    let widths = [12, 32, 12, 6, 9];
    ctx.output
        .table_row(&["SKU", "NAME", "PRICE", "STOCK", "STATUS"], &widths);
    for product in &results.items {
        ctx.output.table_row(
            &[
                &product.sku,
                product.name.get(Lang::En),
                &product.price.display(),
                &product.stock.to_string(),
                product.status.as_str(),
            ],
            &widths,
        );
    }

    Ok(())
}

async fn show(ctx: &Context, id: &str) -> Result<()> {
    let client = ctx.client()?;
    let Some(product) = client.product(&ProductId::new(id)).await? else {
        bail!("Product not found: {}", id);
    };

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }

    print_product(ctx, &product);
    Ok(())
}

fn print_product(ctx: &Context, product: &Product) {
    ctx.output.header(product.name.get(Lang::En));
    ctx.output.kv("Id", product.id.as_str());
    ctx.output.kv("SKU", &product.sku);
    ctx.output.kv("Name (ka)", product.name.get(Lang::Ka));
    ctx.output.kv("Slug", &product.slug);
    ctx.output.kv("Price", &product.price.display());
    if let Some(compare_at) = product.compare_at_price {
        ctx.output.kv("Compare at", &compare_at.display());
    }
    ctx.output.kv("Stock", &product.stock.to_string());
    ctx.output
        .kv("Min order", &product.min_order_quantity.to_string());
    if !product.sizes.is_empty() {
        ctx.output.kv("Sizes", &product.sizes.join(", "));
    }
    ctx.output.kv("Status", product.status.as_str());
    if !product.tags.is_empty() {
        ctx.output.kv("Tags", &product.tags.join(", "));
    }
    for image in &product.images {
        ctx.output.list_item(&image.url);
    }
}

async fn archive(ctx: &Context, id: &str, yes: bool) -> Result<()> {
    let client = ctx.client()?;
    let product_id = ProductId::new(id);

    let Some(product) = client.product(&product_id).await? else {
        bail!("Product not found: {}", id);
    };

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Archive \"{}\" ({})?",
                product.name.get(Lang::En),
                product.sku
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.warn("Archive cancelled");
            return Ok(());
        }
    }

    client.archive_product(&product_id).await?;
    ctx.output
        .success(&format!("Archived {}", product.name.get(Lang::En)));
    Ok(())
}
