//! Performance view: per-courier aggregation of delivery shifts.
//!
//! The view is a pure function of the uploaded workbook and the current
//! widget values ([`PerformanceParams`]). Nothing is cached between calls.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::filters::{self, PerformanceFilters};
use super::metrics::{acceptance_rate, online_time_percentage};
use crate::api::{
    CourierDetailRow, CourierDetails, CourierSummaryRow, CourierSummaryTable, PerformanceView,
};
use crate::error::ReportResult;
use crate::models::{CourierAggregate, CourierKey, DailyTotals, DeliveryRecord, Upload};
use crate::parsing::{normalize_name, read_delivery_records, Workbook};
use crate::routes::performance::{detail_columns, details_subheader, summary_columns, PERFORMANCE_HEADER};

/// Default name of the sheet holding the delivery statistics.
pub const DEFAULT_PERFORMANCE_SHEET: &str = "Analise";

/// Widget values of the performance view for one interaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceParams {
    #[serde(default)]
    pub filters: PerformanceFilters,
    /// Courier picked in the detail selector; defaults to the first option.
    #[serde(default)]
    pub selected_courier: Option<String>,
    /// Whether the "show details" action was triggered.
    #[serde(default)]
    pub show_details: bool,
}

/// Replace every courier name by its accent-stripped form.
pub fn normalize_names(records: &mut [DeliveryRecord]) {
    for record in records.iter_mut() {
        if let Some(name) = record.courier_name.as_mut() {
            *name = normalize_name(name);
        }
    }
}

/// Sum counts and online time per (courier id, courier name).
///
/// Records missing either key part are left out. Groups come back in key order.
pub fn aggregate_by_courier(records: &[DeliveryRecord]) -> Vec<CourierAggregate> {
    let mut groups: BTreeMap<CourierKey, CourierAggregate> = BTreeMap::new();
    for record in records {
        let Some(key) = record.courier_key() else {
            continue;
        };
        groups
            .entry(key.clone())
            .or_insert_with(|| CourierAggregate::empty(key))
            .add(record);
    }
    groups.into_values().collect()
}

/// Number of distinct dates among the records. A missing date counts as one
/// more distinct value.
pub fn distinct_dates(records: &[DeliveryRecord]) -> usize {
    records
        .iter()
        .map(|r| r.date)
        .collect::<HashSet<Option<NaiveDate>>>()
        .len()
}

/// Summary rows with both derived percentages.
pub fn summary_rows(aggregates: &[CourierAggregate], distinct_dates: usize) -> Vec<CourierSummaryRow> {
    aggregates
        .iter()
        .map(|agg| CourierSummaryRow {
            courier: agg.key.name.clone(),
            rides_offered: agg.rides_offered,
            rides_accepted: agg.rides_accepted,
            rides_rejected: agg.rides_rejected,
            acceptance_rate: acceptance_rate(agg.rides_offered, agg.rides_accepted),
            online_time_pct: online_time_percentage(agg.online_seconds, distinct_dates),
        })
        .collect()
}

/// Distinct courier names in table order.
pub fn courier_options(rows: &[CourierSummaryRow]) -> Vec<String> {
    let mut options: Vec<String> = Vec::with_capacity(rows.len());
    for row in rows {
        if !options.contains(&row.courier) {
            options.push(row.courier.clone());
        }
    }
    options
}

/// Totals per date for every record of the named courier.
///
/// Matching is on the (normalized) display name, so two ids sharing a name
/// are merged. Records without a date are dropped; dates come back sorted.
pub fn daily_totals(records: &[DeliveryRecord], courier: &str) -> Vec<DailyTotals> {
    let mut days: BTreeMap<NaiveDate, DailyTotals> = BTreeMap::new();
    for record in records {
        if record.courier_name.as_deref() != Some(courier) {
            continue;
        }
        let Some(date) = record.date else {
            continue;
        };
        let totals = days.entry(date).or_insert_with(|| DailyTotals {
            date,
            rides_offered: 0,
            rides_accepted: 0,
            rides_rejected: 0,
        });
        totals.rides_offered = totals.rides_offered.saturating_add(record.rides_offered);
        totals.rides_accepted = totals.rides_accepted.saturating_add(record.rides_accepted);
        totals.rides_rejected = totals.rides_rejected.saturating_add(record.rides_rejected);
    }
    days.into_values().collect()
}

/// Drill-down table for one courier.
pub fn courier_details(records: &[DeliveryRecord], courier: &str) -> CourierDetails {
    let rows = daily_totals(records, courier)
        .into_iter()
        .map(|day| CourierDetailRow {
            date: day.date,
            rides_offered: day.rides_offered,
            rides_accepted: day.rides_accepted,
            rides_rejected: day.rides_rejected,
            acceptance_rate: acceptance_rate(day.rides_offered, day.rides_accepted),
        })
        .collect();
    CourierDetails {
        subheader: details_subheader(courier),
        courier: courier.to_string(),
        columns: detail_columns(),
        rows,
    }
}

/// Compute the view from already-parsed records.
pub fn compute_performance_view(records: Vec<DeliveryRecord>, params: &PerformanceParams) -> PerformanceView {
    let filter_options = filters::filter_options(&records);

    let mut records = filters::apply_filters(records, &params.filters);
    normalize_names(&mut records);

    let aggregates = aggregate_by_courier(&records);
    let rows = summary_rows(&aggregates, distinct_dates(&records));
    let courier_options = courier_options(&rows);

    let selected_courier = params
        .selected_courier
        .clone()
        .filter(|name| courier_options.contains(name))
        .or_else(|| courier_options.first().cloned());

    let details = match (&selected_courier, params.show_details) {
        (Some(courier), true) => Some(courier_details(&records, courier)),
        _ => None,
    };

    log::info!(
        "performance view: {} records after filters, {} couriers",
        records.len(),
        rows.len()
    );

    PerformanceView {
        header: PERFORMANCE_HEADER.to_string(),
        info: None,
        filter_options: Some(filter_options),
        summary: Some(CourierSummaryTable {
            columns: summary_columns(),
            rows,
        }),
        courier_options,
        selected_courier,
        details,
    }
}

/// Render the performance view for one interaction.
///
/// Without an upload the placeholder is returned and nothing is parsed.
pub fn build_performance_view(
    upload: Option<Upload>,
    params: &PerformanceParams,
    sheet: &str,
) -> ReportResult<PerformanceView> {
    let Some(upload) = upload else {
        return Ok(PerformanceView::placeholder());
    };

    let mut workbook = Workbook::open(upload)?;
    let range = workbook.sheet(sheet)?;
    let records = read_delivery_records(&range, workbook.file_name())?;

    Ok(compute_performance_view(records, params))
}
