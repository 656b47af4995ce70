//! Sidebar filters of the performance view.
//!
//! Each filter is a no-op when its selection is empty; the three combine
//! conjunctively and keep the original row order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::FilterOptions;
use crate::models::DeliveryRecord;

/// Current selections of the sidebar widgets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceFilters {
    #[serde(default)]
    pub sub_regions: Vec<String>,
    #[serde(default)]
    pub shift_periods: Vec<String>,
    /// Date picker selection; only a pair of dates forms a range.
    #[serde(default)]
    pub dates: Vec<NaiveDate>,
}

impl PerformanceFilters {
    /// Inclusive `(start, end)` when exactly two dates are selected.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match self.dates.as_slice() {
            [start, end] => Some((*start, *end)),
            _ => None,
        }
    }

    /// Whether no filter would remove anything.
    pub fn is_empty(&self) -> bool {
        self.sub_regions.is_empty() && self.shift_periods.is_empty() && self.date_range().is_none()
    }

    pub fn matches(&self, record: &DeliveryRecord) -> bool {
        matches_selection(&record.sub_region, &self.sub_regions)
            && matches_selection(&record.shift_period, &self.shift_periods)
            && self
                .date_range()
                .map_or(true, |range| in_range(record.date, range))
    }
}

fn matches_selection(value: &Option<String>, selection: &[String]) -> bool {
    if selection.is_empty() {
        return true;
    }
    value
        .as_ref()
        .map(|v| selection.iter().any(|s| s == v))
        .unwrap_or(false)
}

fn in_range(date: Option<NaiveDate>, (start, end): (NaiveDate, NaiveDate)) -> bool {
    date.map(|d| d >= start && d <= end).unwrap_or(false)
}

/// Keep records whose sub-region is selected.
pub fn filter_by_sub_region(records: Vec<DeliveryRecord>, selection: &[String]) -> Vec<DeliveryRecord> {
    if selection.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|r| matches_selection(&r.sub_region, selection))
        .collect()
}

/// Keep records whose shift period is selected.
pub fn filter_by_shift_period(records: Vec<DeliveryRecord>, selection: &[String]) -> Vec<DeliveryRecord> {
    if selection.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|r| matches_selection(&r.shift_period, selection))
        .collect()
}

/// Keep records dated within the inclusive range, when exactly two dates are
/// given. Records without a date fall outside every range.
pub fn filter_by_date_range(records: Vec<DeliveryRecord>, dates: &[NaiveDate]) -> Vec<DeliveryRecord> {
    let [start, end] = dates else {
        return records;
    };
    records
        .into_iter()
        .filter(|r| in_range(r.date, (*start, *end)))
        .collect()
}

/// Apply all sidebar filters.
pub fn apply_filters(records: Vec<DeliveryRecord>, filters: &PerformanceFilters) -> Vec<DeliveryRecord> {
    if filters.is_empty() {
        return records;
    }
    let before = records.len();
    let records = filter_by_shift_period(records, &filters.shift_periods);
    let records = filter_by_sub_region(records, &filters.sub_regions);
    let records = filter_by_date_range(records, &filters.dates);
    log::debug!("filters kept {} of {} records", records.len(), before);
    records
}

/// Distinct sub-regions and shift periods, in first-seen order.
pub fn filter_options(records: &[DeliveryRecord]) -> FilterOptions {
    let mut options = FilterOptions::default();
    for record in records {
        push_unique(&mut options.sub_regions, &record.sub_region);
        push_unique(&mut options.shift_periods, &record.shift_period);
    }
    options
}

fn push_unique(values: &mut Vec<String>, value: &Option<String>) {
    if let Some(v) = value {
        if !values.contains(v) {
            values.push(v.clone());
        }
    }
}
