//! CSV bulk import.
//!
//! Two phases, mirroring the importer library: validate the whole file
//! first, then (after confirmation) insert row by row with a progress bar.
//! A failed insert marks its row and the run continues; the exit status
//! reflects whether every planned row made it in.

use std::fs::File;

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;
use ridge_commerce::catalog::Severity;
use ridge_commerce::import::{CsvImporter, ImportReport, RowIssue};

use super::ImportArgs;
use crate::context::Context;

/// How many issues to print before eliding (unless --all-issues).
const ISSUE_PREVIEW: usize = 10;

/// Run the import command.
pub async fn run(args: ImportArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.file);
    ctx.output
        .header(&format!("Importing {}", path.display()));

    // Phase 1: parse + validate everything up front.
    let file =
        File::open(&path).with_context(|| format!("Failed to open {}", path.display()))?;
    let importer = CsvImporter::new(ctx.currency());
    let plan = importer
        .parse(file)
        .context("Failed to read the CSV file")?;

    ctx.output.kv("Rows", &plan.total_rows.to_string());
    ctx.output.kv("Importable", &plan.drafts.len().to_string());
    ctx.output.kv("Errors", &plan.error_count().to_string());
    ctx.output.kv("Warnings", &plan.warning_count().to_string());

    print_issues(ctx, &plan.issues, args.all_issues);

    if args.dry_run {
        if plan.is_clean() {
            ctx.output.success("Validation passed (dry run)");
        } else {
            bail!("Validation found {} error(s)", plan.error_count());
        }
        return Ok(());
    }

    if plan.drafts.is_empty() {
        bail!("Nothing to import");
    }

    if !plan.is_clean() {
        ctx.output.warn(&format!(
            "{} row(s) will be skipped due to errors",
            plan.error_count()
        ));
    }

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Import {} product(s)?", plan.drafts.len()))
            .default(true)
            .interact()?;
        if !confirmed {
            ctx.output.warn("Import cancelled");
            return Ok(());
        }
    }

    // Phase 2: sequential inserts, one backend call per row.
    let client = ctx.client()?;
    let pb = ctx
        .output
        .progress(plan.drafts.len() as u64, "Importing products");

    let mut report = ImportReport {
        inserted: 0,
        failed: 0,
        issues: plan.issues.clone(),
    };

    for (row, draft) in &plan.drafts {
        let result = match draft.clone().into_product() {
            Ok(product) => client
                .create_product(&product)
                .await
                .map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        match result {
            Ok(()) => report.inserted += 1,
            Err(message) => {
                report.failed += 1;
                report.issues.push(RowIssue {
                    row: *row,
                    field: "insert".to_string(),
                    message,
                    severity: Severity::Error,
                });
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if ctx.output.is_json() {
        ctx.output.json(&report);
    }

    if report.is_success() {
        ctx.output
            .success(&format!("Imported {} product(s)", report.inserted));
        Ok(())
    } else {
        ctx.output.info(&format!(
            "Imported {} product(s), {} failed",
            report.inserted, report.failed
        ));
        print_issues(
            ctx,
            &report
                .issues
                .iter()
                .filter(|i| i.field == "insert")
                .cloned()
                .collect::<Vec<_>>(),
            args.all_issues,
        );
        bail!("{} row(s) failed to import", report.failed)
    }
}

fn print_issues(ctx: &Context, issues: &[RowIssue], all: bool) {
    let shown = if all {
        issues.len()
    } else {
        issues.len().min(ISSUE_PREVIEW)
    };

    for issue in &issues[..shown] {
        let tag = match issue.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        ctx.output.list_item(&format!(
            "row {} [{}] {}: {}",
            issue.row, tag, issue.field, issue.message
        ));
    }
    if shown < issues.len() {
        ctx.output.info(&format!(
            "... and {} more (use --all-issues to see everything)",
            issues.len() - shown
        ));
    }
}
