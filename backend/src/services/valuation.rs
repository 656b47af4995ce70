//! Valuation view: weekly payout reports filtered by a minimum total.

use crate::api::{BalanceTableView, ValuationView};
use crate::error::{ReportError, ReportResult};
use crate::models::{total_value, BalanceTable, Upload, TOTAL_COLUMN};
use crate::parsing::{read_balance_table, Workbook};
use crate::routes::valuation::{table_subheader, VALUATION_HEADER};

/// Reject thresholds the numeric input would not allow.
pub fn validate_min_total(min_total: f64) -> ReportResult<()> {
    if !min_total.is_finite() || min_total < 0.0 {
        return Err(ReportError::invalid_parameter(
            "valor_minimo",
            format!("must be a non-negative number, got {}", min_total),
        ));
    }
    Ok(())
}

/// Keep rows whose `Total` is at least `min_total`, in their original order.
///
/// A threshold of zero disables the filter and does not require a `Total`
/// column. Otherwise rows with an empty or non-numeric `Total` are dropped.
pub fn filter_by_minimum_total(
    table: BalanceTable,
    min_total: f64,
    file: &str,
) -> ReportResult<BalanceTable> {
    if min_total <= 0.0 {
        return Ok(table);
    }
    let index = table
        .column_index(TOTAL_COLUMN)
        .ok_or_else(|| ReportError::missing_column(file, TOTAL_COLUMN))?;

    let BalanceTable { columns, rows } = table;
    let rows = rows
        .into_iter()
        .filter(|row| {
            row.get(index)
                .and_then(total_value)
                .map(|total| total >= min_total)
                .unwrap_or(false)
        })
        .collect();
    Ok(BalanceTable::new(columns, rows))
}

/// Read, filter and label one payout report.
pub fn balance_table_view(upload: Upload, min_total: f64) -> ReportResult<BalanceTableView> {
    let mut workbook = Workbook::open(upload)?;
    let range = workbook.first_sheet()?;
    let file_name = workbook.file_name().to_string();

    let table = read_balance_table(&range, &file_name);
    let total_rows = table.len();
    let table = filter_by_minimum_total(table, min_total, &file_name)?;

    log::debug!(
        "'{}': kept {} of {} rows with Total >= {}",
        file_name,
        table.len(),
        total_rows,
        min_total
    );

    Ok(BalanceTableView {
        subheader: table_subheader(&file_name),
        file_name,
        columns: table.columns,
        rows: table.rows,
        total_rows,
    })
}

/// Render the valuation view for one interaction.
///
/// Without uploads the placeholder is returned and nothing is parsed. Each
/// file is filtered independently and rendered in upload order.
pub fn build_valuation_view(uploads: Vec<Upload>, min_total: f64) -> ReportResult<ValuationView> {
    validate_min_total(min_total)?;
    if uploads.is_empty() {
        return Ok(ValuationView::placeholder(min_total));
    }

    let tables = uploads
        .into_iter()
        .map(|upload| balance_table_view(upload, min_total))
        .collect::<ReportResult<Vec<_>>>()?;

    log::info!("valuation view: {} tables", tables.len());

    Ok(ValuationView {
        header: VALUATION_HEADER.to_string(),
        info: None,
        min_total,
        tables,
    })
}
