//! Spreadsheet export of a computed deal: a "Deal Summary" sheet of
//! label/value rows and a "5-Year Projection" sheet.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use rust_xlsxwriter::{Workbook, XlsxError};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::DealMetrics;

pub const EXPORT_FILE_NAME: &str = "blackgrid_deal_analysis.xlsx";
pub const SUMMARY_SHEET: &str = "Deal Summary";
pub const PROJECTION_SHEET: &str = "5-Year Projection";
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no export directory available")]
    DirectoryUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to write workbook: {0}")]
    Xlsx(#[from] XlsxError),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    fn fixed(value: f64, decimals: usize) -> Self {
        Cell::Text(format!("{value:.decimals$}"))
    }

    fn fixed_or_na(value: Option<f64>, decimals: usize) -> Self {
        value
            .map(|v| Cell::fixed(v, decimals))
            .unwrap_or_else(|| Cell::text(NOT_AVAILABLE))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SheetData {
    pub name: &'static str,
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DealWorkbook {
    pub summary: SheetData,
    pub projection: SheetData,
}

impl DealWorkbook {
    pub fn sheets(&self) -> [&SheetData; 2] {
        [&self.summary, &self.projection]
    }
}

pub fn build_workbook(metrics: &DealMetrics) -> DealWorkbook {
    let outlook = metrics.appreciation.as_ref();

    let summary_rows = vec![
        ("Purchase Price", Cell::Number(metrics.purchase_price)),
        (
            "Expected Appreciation (%)",
            metrics
                .appreciation_rate_pct
                .map(Cell::Number)
                .unwrap_or_else(|| Cell::text(NOT_AVAILABLE)),
        ),
        ("Monthly Rent", Cell::fixed(metrics.monthly_rent(), 0)),
        ("Monthly Expenses", Cell::fixed(metrics.monthly_expenses(), 0)),
        ("Down Payment", Cell::Number(metrics.down_payment)),
        ("Annual Cash Flow", Cell::fixed(metrics.annual_cash_flow, 0)),
        ("Cap Rate (%)", Cell::fixed(metrics.cap_rate_pct, 2)),
        ("Cash-on-Cash Return (%)", Cell::fixed(metrics.cash_on_cash_pct, 2)),
        ("GRM", Cell::fixed(metrics.gross_rent_multiplier, 2)),
        ("OER (%)", Cell::fixed(metrics.operating_expense_ratio_pct, 2)),
        ("5-Year Return (%)", Cell::fixed(metrics.five_year_cash_return_pct, 2)),
        (
            "Estimated Resale Value (Year 5)",
            Cell::fixed_or_na(outlook.map(|o| o.resale_value_year5), 0),
        ),
        (
            "Equity Gain From Appreciation",
            Cell::fixed_or_na(outlook.map(|o| o.equity_gain), 0),
        ),
        (
            "Total ROI w/ Appreciation (%)",
            Cell::fixed_or_na(outlook.map(|o| o.five_year_return_pct), 2),
        ),
    ];

    let mut projection_rows = vec![vec![Cell::text("Year"), Cell::text("Total Value")]];
    projection_rows.extend(
        metrics
            .projection
            .iter()
            .map(|point| vec![Cell::Text(point.label()), Cell::Number(point.value)]),
    );

    DealWorkbook {
        summary: SheetData {
            name: SUMMARY_SHEET,
            rows: summary_rows
                .into_iter()
                .map(|(label, value)| vec![Cell::text(label), value])
                .collect(),
        },
        projection: SheetData {
            name: PROJECTION_SHEET,
            rows: projection_rows,
        },
    }
}

fn to_xlsx(book: &DealWorkbook) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();

    for sheet in book.sheets() {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name)?;
        worksheet.set_column_width(0, 32.0)?;
        worksheet.set_column_width(1, 16.0)?;

        for (row_idx, row) in sheet.rows.iter().enumerate() {
            let row_num = row_idx as u32;
            for (col_idx, cell) in row.iter().enumerate() {
                let col_num = col_idx as u16;
                match cell {
                    Cell::Text(text) => {
                        worksheet.write_string(row_num, col_num, text)?;
                    }
                    Cell::Number(value) => {
                        worksheet.write_number(row_num, col_num, *value)?;
                    }
                }
            }
        }
    }

    Ok(workbook)
}

/// Serializes the workbook to `.xlsx` bytes.
pub fn render_xlsx(book: &DealWorkbook) -> Result<Vec<u8>, ExportError> {
    Ok(to_xlsx(book)?.save_to_buffer()?)
}

/// Writes the workbook as [`EXPORT_FILE_NAME`] inside `dir`, replacing any
/// earlier export.
pub fn write_xlsx(book: &DealWorkbook, dir: &Path) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(EXPORT_FILE_NAME);
    let bytes = render_xlsx(book)?;
    debug!(bytes = bytes.len(), path = %path.display(), "writing workbook");
    fs::write(&path, bytes)?;
    Ok(path)
}

/// Exports the current deal. Nothing to export is not an error.
pub fn export_deal(
    metrics: Option<&DealMetrics>,
    dir: &Path,
) -> Result<Option<PathBuf>, ExportError> {
    let Some(metrics) = metrics else {
        debug!("export requested before any analysis; skipping");
        return Ok(None);
    };

    let path = write_xlsx(&build_workbook(metrics), dir)?;
    info!(path = %path.display(), "exported deal analysis");
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{compute, DealInputs, InputMode};

    fn scenario_metrics(appreciation: Option<f64>) -> DealMetrics {
        compute(&DealInputs {
            purchase_price: 200_000.0,
            rent: 2000.0,
            expenses: 500.0,
            down_payment: 40_000.0,
            appreciation_rate_pct: appreciation,
            mode: InputMode::Monthly,
        })
        .unwrap()
    }

    fn summary_value<'a>(book: &'a DealWorkbook, label: &str) -> &'a Cell {
        book.summary
            .rows
            .iter()
            .find(|row| row[0] == Cell::text(label))
            .map(|row| &row[1])
            .unwrap_or_else(|| panic!("missing summary row {label}"))
    }

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("blackgrid-{name}-{}", std::process::id()))
    }

    #[test]
    fn summary_sheet_matches_reference_deal() {
        let book = build_workbook(&scenario_metrics(Some(3.0)));

        assert_eq!(book.summary.name, "Deal Summary");
        assert_eq!(book.summary.rows.len(), 14);
        assert_eq!(
            book.summary.rows[6],
            vec![Cell::text("Cap Rate (%)"), Cell::text("9.00")]
        );
        assert_eq!(summary_value(&book, "Purchase Price"), &Cell::Number(200_000.0));
        assert_eq!(summary_value(&book, "Expected Appreciation (%)"), &Cell::Number(3.0));
        assert_eq!(summary_value(&book, "Monthly Rent"), &Cell::text("2000"));
        assert_eq!(summary_value(&book, "Monthly Expenses"), &Cell::text("500"));
        assert_eq!(summary_value(&book, "Annual Cash Flow"), &Cell::text("18000"));
        assert_eq!(summary_value(&book, "Cash-on-Cash Return (%)"), &Cell::text("45.00"));
        assert_eq!(summary_value(&book, "GRM"), &Cell::text("8.33"));
        assert_eq!(summary_value(&book, "OER (%)"), &Cell::text("25.00"));
        assert_eq!(summary_value(&book, "5-Year Return (%)"), &Cell::text("225.00"));
        assert_eq!(
            summary_value(&book, "Estimated Resale Value (Year 5)"),
            &Cell::text("231855")
        );
        assert_eq!(
            summary_value(&book, "Equity Gain From Appreciation"),
            &Cell::text("31855")
        );
        assert_eq!(
            summary_value(&book, "Total ROI w/ Appreciation (%)"),
            &Cell::text("304.64")
        );
    }

    #[test]
    fn projection_sheet_has_header_and_five_years() {
        let book = build_workbook(&scenario_metrics(Some(3.0)));

        assert_eq!(book.projection.name, "5-Year Projection");
        assert_eq!(book.projection.rows.len(), 6);
        assert_eq!(
            book.projection.rows[0],
            vec![Cell::text("Year"), Cell::text("Total Value")]
        );
        assert_eq!(
            book.projection.rows[1],
            vec![Cell::text("Year 1"), Cell::Number(58_000.0)]
        );
        assert_eq!(
            book.projection.rows[5],
            vec![Cell::text("Year 5"), Cell::Number(130_000.0)]
        );
    }

    #[test]
    fn missing_appreciation_renders_na() {
        let book = build_workbook(&scenario_metrics(None));
        for label in [
            "Expected Appreciation (%)",
            "Estimated Resale Value (Year 5)",
            "Equity Gain From Appreciation",
            "Total ROI w/ Appreciation (%)",
        ] {
            assert_eq!(summary_value(&book, label), &Cell::text("N/A"), "{label}");
        }
        assert_eq!(summary_value(&book, "5-Year Return (%)"), &Cell::text("225.00"));
    }

    #[test]
    fn rendered_bytes_are_a_zip_container() {
        let bytes = render_xlsx(&build_workbook(&scenario_metrics(Some(3.0)))).unwrap();
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn export_without_metrics_is_a_no_op() {
        let dir = scratch_dir("noop");
        assert!(export_deal(None, &dir).unwrap().is_none());
        assert!(!dir.join(EXPORT_FILE_NAME).exists());
    }

    #[test]
    fn export_writes_fixed_file_name() {
        let dir = scratch_dir("export");
        let metrics = scenario_metrics(Some(3.0));

        let path = export_deal(Some(&metrics), &dir).unwrap().unwrap();
        assert_eq!(path, dir.join(EXPORT_FILE_NAME));
        assert!(fs::metadata(&path).unwrap().len() > 0);

        let _ = fs::remove_dir_all(&dir);
    }
}
