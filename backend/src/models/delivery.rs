use std::cmp::Ordering;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// One row of the `Analise` sheet: a courier's statistics for one shift on one date.
///
/// Every field is best-effort: cells that fail to parse are stored as `None`
/// (or `0` for counts) instead of rejecting the row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeliveryRecord {
    pub courier_id: Option<String>,
    pub courier_name: Option<String>,
    pub sub_region: Option<String>,
    pub shift_period: Option<String>,
    pub date: Option<NaiveDate>,
    pub rides_offered: i64,
    pub rides_accepted: i64,
    pub rides_rejected: i64,
    pub available_time: Option<Duration>,
}

impl DeliveryRecord {
    /// Grouping key, if both the courier id and name are present.
    pub fn courier_key(&self) -> Option<CourierKey> {
        match (&self.courier_id, &self.courier_name) {
            (Some(id), Some(name)) => Some(CourierKey::new(id.clone(), name.clone())),
            _ => None,
        }
    }

    /// Available time in whole and fractional seconds; missing counts as zero.
    pub fn available_seconds(&self) -> f64 {
        self.available_time
            .map(|d| d.num_milliseconds() as f64 / 1000.0)
            .unwrap_or(0.0)
    }
}

/// (courier id, courier name) pair used to group delivery records.
///
/// Ids compare numerically when both sides look like numbers, so `"9"`
/// sorts before `"10"`; numeric ids sort before textual ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourierKey {
    pub id: String,
    pub name: String,
}

impl CourierKey {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    fn numeric_id(&self) -> Option<f64> {
        self.id.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

impl Ord for CourierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_id = match (self.numeric_id(), other.numeric_id()) {
            (Some(a), Some(b)) => a.total_cmp(&b).then_with(|| self.id.cmp(&other.id)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.id.cmp(&other.id),
        };
        by_id.then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for CourierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Summed counts and online time for one courier over the filtered records.
#[derive(Debug, Clone, PartialEq)]
pub struct CourierAggregate {
    pub key: CourierKey,
    pub rides_offered: i64,
    pub rides_accepted: i64,
    pub rides_rejected: i64,
    pub online_seconds: f64,
}

impl CourierAggregate {
    pub fn empty(key: CourierKey) -> Self {
        Self {
            key,
            rides_offered: 0,
            rides_accepted: 0,
            rides_rejected: 0,
            online_seconds: 0.0,
        }
    }

    /// Fold one record in. Counts saturate instead of wrapping.
    pub fn add(&mut self, record: &DeliveryRecord) {
        self.rides_offered = self.rides_offered.saturating_add(record.rides_offered);
        self.rides_accepted = self.rides_accepted.saturating_add(record.rides_accepted);
        self.rides_rejected = self.rides_rejected.saturating_add(record.rides_rejected);
        self.online_seconds += record.available_seconds();
    }
}

/// Per-date counts for one courier (drill-down).
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub rides_offered: i64,
    pub rides_accepted: i64,
    pub rides_rejected: i64,
}
