//! CSV product importer.
//!
//! Bulk import runs in two stages. `CsvImporter::parse` reads the file and
//! validates every row up front, producing an [`ImportPlan`] — the clean
//! drafts plus every per-row issue found. The caller then inserts the
//! drafts sequentially (one backend call per row), reporting progress as
//! it goes; a failed insert marks that row and the run continues.

use crate::catalog::{ProductDraft, Severity};
use crate::import::{ImportReport, RowIssue};
use crate::money::{Currency, Money};
use serde::Deserialize;
use std::io::Read;

/// One data row of the import file, as written by the shop's spreadsheet
/// export. `sizes` and `tags` are `;`-separated lists.
#[derive(Debug, Deserialize)]
struct CsvRow {
    sku: String,
    name_en: String,
    #[serde(default)]
    name_ka: String,
    #[serde(default)]
    description_en: String,
    #[serde(default)]
    description_ka: String,
    price: f64,
    stock: u32,
    #[serde(default)]
    min_order_quantity: Option<u32>,
    #[serde(default)]
    sizes: String,
    #[serde(default)]
    image_url: String,
    #[serde(default)]
    tags: String,
}

impl CsvRow {
    fn into_draft(self, currency: Currency) -> ProductDraft {
        let mut draft = ProductDraft::new();
        draft.sku = self.sku;
        draft.name_en = self.name_en;
        draft.name_ka = self.name_ka;
        draft.description_en = self.description_en;
        draft.description_ka = self.description_ka;
        draft.price_cents = Money::from_decimal(self.price, currency).amount_cents;
        draft.currency = currency;
        draft.stock = self.stock;
        draft.min_order_quantity = self.min_order_quantity.unwrap_or(1);
        draft.sizes = split_list(&self.sizes);
        draft.tags = split_list(&self.tags);
        if !self.image_url.is_empty() {
            draft.image_urls.push(self.image_url);
        }
        draft
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The validated outcome of parsing an import file.
#[derive(Debug)]
pub struct ImportPlan {
    /// Number of data rows in the file, malformed ones included.
    pub total_rows: usize,
    /// Drafts that passed validation, with their 1-indexed row numbers.
    pub drafts: Vec<(usize, ProductDraft)>,
    /// Every issue found, across all rows.
    pub issues: Vec<RowIssue>,
}

impl ImportPlan {
    /// Rows that cannot be imported.
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    /// Non-blocking findings.
    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// Whether every row validated without errors.
    pub fn is_clean(&self) -> bool {
        self.error_count() == 0
    }

    /// Insert the planned drafts sequentially.
    ///
    /// `insert` is called once per draft; a returned error message becomes
    /// a row issue and the run continues with the next row. `on_progress`
    /// is invoked after every row, including failed ones.
    pub fn execute<F, P>(&self, mut insert: F, mut on_progress: P) -> ImportReport
    where
        F: FnMut(&ProductDraft) -> Result<(), String>,
        P: FnMut(ImportProgress),
    {
        let mut report = ImportReport {
            inserted: 0,
            failed: 0,
            issues: self.issues.clone(),
        };
        let total = self.drafts.len();

        for (processed, (row, draft)) in self.drafts.iter().enumerate() {
            match insert(draft) {
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
            on_progress(ImportProgress {
                processed: processed + 1,
                total,
            });
        }

        report
    }
}

/// Progress of a sequential import run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportProgress {
    /// Rows handled so far.
    pub processed: usize,
    /// Rows planned.
    pub total: usize,
}

impl ImportProgress {
    /// Whole-number percentage, 100 when there is nothing to do.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.processed * 100) / self.total) as u8
    }
}

/// Parser for the product import format.
#[derive(Debug, Clone, Copy)]
pub struct CsvImporter {
    currency: Currency,
}

impl CsvImporter {
    /// Create an importer pricing rows in the given currency.
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    /// Parse and validate an import file.
    ///
    /// Malformed records become per-row errors rather than failing the
    /// whole file; only an unreadable input (I/O) is a hard error.
    pub fn parse(&self, input: impl Read) -> Result<ImportPlan, csv::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(input);

        let mut plan = ImportPlan {
            total_rows: 0,
            drafts: Vec::new(),
            issues: Vec::new(),
        };

        for (index, record) in reader.deserialize::<CsvRow>().enumerate() {
            let row = index + 1;
            plan.total_rows = row;

            let parsed = match record {
                Ok(parsed) => parsed,
                Err(err) => {
                    if err.is_io_error() {
                        return Err(err);
                    }
                    plan.issues.push(RowIssue {
                        row,
                        field: "row".to_string(),
                        message: format!("Malformed row: {}", err),
                        severity: Severity::Error,
                    });
                    continue;
                }
            };

            let draft = parsed.into_draft(self.currency);
            let mut blocked = false;
            for issue in draft.validate() {
                if issue.severity == Severity::Error {
                    blocked = true;
                }
                plan.issues.push(RowIssue {
                    row,
                    field: issue.field,
                    message: issue.message,
                    severity: issue.severity,
                });
            }
            if !blocked {
                plan.drafts.push((row, draft));
            }
        }

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "sku,name_en,name_ka,description_en,description_ka,price,stock,min_order_quantity,sizes,image_url,tags\n";

    fn parse(body: &str) -> ImportPlan {
        let csv = format!("{}{}", HEADER, body);
        CsvImporter::new(Currency::GEL)
            .parse(csv.as_bytes())
            .unwrap()
    }

    #[test]
    fn test_clean_file() {
        let plan = parse(
            "RG-1,Combat Shirt,პერანგი,,,159.00,20,1,M;L,https://img/1.jpg,apparel\n\
             RG-2,Patrol Pack,,,,249.50,5,,,https://img/2.jpg,\n",
        );

        assert_eq!(plan.total_rows, 2);
        assert_eq!(plan.drafts.len(), 2);
        assert!(plan.is_clean());
        // Row 2 has no Georgian name: warning, not error.
        assert_eq!(plan.warning_count(), 1);

        let (_, first) = &plan.drafts[0];
        assert_eq!(first.price_cents, 15_900);
        assert_eq!(first.sizes, vec!["M", "L"]);
        assert_eq!(first.min_order_quantity, 1);
    }

    #[test]
    fn test_invalid_row_collected_not_fatal() {
        let plan = parse(
            "RG-1,Combat Shirt,n,,,159.00,20,1,,https://img/1.jpg,\n\
             ,No Sku,n,,,10.00,5,1,,,\n\
             RG-3,Belt,n,,,not-a-price,5,1,,,\n",
        );

        assert_eq!(plan.total_rows, 3);
        assert_eq!(plan.drafts.len(), 1);
        assert!(!plan.is_clean());
        // Row 2: missing sku. Row 3: unparseable price.
        assert!(plan.issues.iter().any(|i| i.row == 2 && i.field == "sku"));
        assert!(plan.issues.iter().any(|i| i.row == 3 && i.field == "row"));
    }

    #[test]
    fn test_execute_reports_progress_and_failures() {
        let plan = parse(
            "RG-1,A,n,,,10.00,5,1,,i,\n\
             RG-2,B,n,,,10.00,5,1,,i,\n\
             RG-3,C,n,,,10.00,5,1,,i,\n",
        );

        let mut percents = Vec::new();
        let report = plan.execute(
            |draft| {
                if draft.sku == "RG-2" {
                    Err("duplicate sku".to_string())
                } else {
                    Ok(())
                }
            },
            |progress| percents.push(progress.percent()),
        );

        assert_eq!(report.inserted, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(percents, vec![33, 66, 100]);
        assert!(report
            .issues
            .iter()
            .any(|i| i.row == 2 && i.field == "insert"));
    }

    #[test]
    fn test_progress_of_empty_plan() {
        let progress = ImportProgress {
            processed: 0,
            total: 0,
        };
        assert_eq!(progress.percent(), 100);
    }
}
