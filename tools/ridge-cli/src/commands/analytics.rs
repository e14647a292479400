//! Revenue dashboards.
//!
//! Fetches order rows once and does every aggregation client-side: a
//! headline summary, a month-by-month table with deltas, and best-sellers.

use anyhow::Result;
use chrono::{Datelike, Utc};
use ridge_commerce::analytics::{
    customer_stats, monthly_revenue, top_products, CustomerStats, MonthlyRevenue, ProductSales,
    RevenueSummary,
};
use ridge_commerce::checkout::Order;
use ridge_commerce::ids::UserId;
use ridge_commerce::text::Lang;
use serde::Serialize;

use super::AnalyticsArgs;
use crate::context::Context;

#[derive(Serialize)]
struct Report {
    summary: RevenueSummary,
    monthly: Vec<MonthlyRevenue>,
    top_products: Vec<ProductSales>,
    customer: Option<CustomerStats>,
}

/// Run the analytics command.
pub async fn run(args: AnalyticsArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let currency = ctx.currency();

    let spinner = ctx.output.spinner("Fetching orders...");
    let mut orders = client.orders().await?;
    spinner.finish_and_clear();

    if let Some(months) = args.months {
        let cutoff = months_ago(months);
        orders.retain(|order| order.created_at >= cutoff);
    }

    let customer = match &args.user {
        Some(user) => {
            let user = UserId::new(user.as_str());
            Some(customer_stats(&orders, &user, currency))
        }
        None => None,
    };

    let report = Report {
        summary: RevenueSummary::for_orders(&orders, currency),
        monthly: monthly_revenue(&orders, currency),
        top_products: top_products(&orders, args.top, currency),
        customer,
    };

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    print_report(ctx, &orders, &report, &args);
    Ok(())
}

fn print_report(ctx: &Context, orders: &[Order], report: &Report, args: &AnalyticsArgs) {
    ctx.output.header("Revenue");
    ctx.output.kv("Orders", &report.summary.orders.to_string());
    ctx.output
        .kv("Gross revenue", &report.summary.gross_revenue.display());
    ctx.output.kv(
        "Average order",
        &report.summary.average_order_value.display(),
    );

    if !report.monthly.is_empty() {
        ctx.output.header("By month");
        let widths = [9, 8, 14, 9];
        ctx.output
            .table_row(&["MONTH", "ORDERS", "REVENUE", "CHANGE"], &widths);
        for (index, month) in report.monthly.iter().enumerate() {
            let change = index
                .checked_sub(1)
                .and_then(|prev| month.change_from(&report.monthly[prev]))
                .map(|pct| format!("{:+.1}%", pct))
                .unwrap_or_else(|| "-".to_string());
            ctx.output.table_row(
                &[
                    &month.label(),
                    &month.orders.to_string(),
                    &month.revenue.display(),
                    &change,
                ],
                &widths,
            );
        }
    }

    if !report.top_products.is_empty() {
        ctx.output
            .header(&format!("Top {} products", report.top_products.len()));
        for (rank, product) in report.top_products.iter().enumerate() {
            ctx.output.list_item(&format!(
                "{}. {} — {} units, {}",
                rank + 1,
                product.name.get(Lang::En),
                product.units,
                product.revenue.display()
            ));
        }
    }

    if let (Some(user), Some(stats)) = (&args.user, &report.customer) {
        ctx.output.header(&format!("Customer {}", user));
        ctx.output.kv("Orders", &stats.orders.to_string());
        ctx.output
            .kv("Lifetime spend", &stats.lifetime_spend.display());
        ctx.output
            .kv("Average order", &stats.average_order_value.display());
        if let Some(last) = stats.last_order_at {
            ctx.output.kv("Last order", &format_date(last));
        }
    }

    if orders.is_empty() {
        ctx.output.info("No orders in the selected window.");
    }
}

/// Unix timestamp of the first day of the month `months` back from now.
fn months_ago(months: u32) -> i64 {
    let now = Utc::now();
    let total = now.year() * 12 + now.month() as i32 - 1 - months as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;

    chrono::NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp())
        .unwrap_or(0)
}

fn format_date(timestamp: i64) -> String {
    chrono::DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}
