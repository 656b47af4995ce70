//! Best-effort cell coercions.
//!
//! Every function here is total: a cell that cannot be read as the requested
//! type becomes `None` (or `0` for counts). Nothing in this module returns an
//! error, so a single bad cell never aborts a render.

use calamine::Data;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

const SECONDS_PER_DAY: f64 = 86_400.0;

static CLOCK_DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?P<sign>[-+])?\s*(?:(?P<days>\d+)\s*days?,?\s*)?(?P<h>\d+):(?P<m>\d{1,2})(?::(?P<s>\d{1,2}(?:\.\d+)?))?$",
    )
    .expect("clock duration pattern is valid")
});

static UNIT_DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:\s*\d+(?:\.\d+)?\s*(?:days?|d|hours?|hrs?|h|milliseconds?|ms|minutes?|mins?|m|seconds?|secs?|s)\s*)+$",
    )
    .expect("unit duration pattern is valid")
});

static UNIT_COMPONENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?P<value>\d+(?:\.\d+)?)\s*(?P<unit>days?|d|hours?|hrs?|h|milliseconds?|ms|minutes?|mins?|m|seconds?|secs?|s)",
    )
    .expect("unit component pattern is valid")
});

static ISO_DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^P(?:(?P<d>\d+(?:\.\d+)?)D)?(?:T(?:(?P<h>\d+(?:\.\d+)?)H)?(?:(?P<m>\d+(?:\.\d+)?)M)?(?:(?P<s>\d+(?:\.\d+)?)S)?)?$",
    )
    .expect("ISO duration pattern is valid")
});

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%Y", "%d-%m-%Y"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Render a float the way a spreadsheet shows it: integral values without `.0`.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Trimmed textual content of a cell; empty and error cells are `None`.
pub fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty | Data::Error(_) => return None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_number(*f),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) if datetime.time() == chrono::NaiveTime::MIN => {
                datetime.date().to_string()
            }
            Some(datetime) => datetime.to_string(),
            None => format_number(dt.as_f64()),
        },
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Integer count; non-numeric or empty cells count as zero.
pub fn parse_count(cell: &Data) -> i64 {
    let value = match cell {
        Data::Int(i) => return *i,
        Data::Float(f) => Some(*f),
        Data::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    value
        .filter(|v| v.is_finite())
        .map(|v| v.round() as i64)
        .unwrap_or(0)
}

/// Calendar date of a cell, or `None` when it does not look like one.
///
/// Plain numbers are not dates: only cells formatted as dates or text in a
/// recognised layout qualify. Month-first is tried before day-first for
/// slash-separated text.
pub fn parse_date(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::DateTime(dt) if !dt.is_duration() => dt.as_datetime().map(|d| d.date()),
        Data::String(s) | Data::DateTimeIso(s) => parse_date_str(s),
        _ => None,
    }
}

pub fn parse_date_str(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Clock duration of a cell, or `None` when it cannot be read as one.
///
/// Time-of-day cells are read as the elapsed time since midnight; cells that
/// carry a full date are not durations.
pub fn parse_duration(cell: &Data) -> Option<Duration> {
    match cell {
        Data::DateTime(dt) if dt.is_duration() => duration_from_seconds(dt.as_f64() * SECONDS_PER_DAY),
        Data::DateTime(dt) => {
            let days = dt.as_f64();
            if (0.0..1.0).contains(&days) {
                duration_from_seconds(days * SECONDS_PER_DAY)
            } else {
                None
            }
        }
        Data::String(s) => parse_duration_str(s),
        Data::DurationIso(s) => parse_iso_duration(s),
        _ => None,
    }
}

pub fn parse_duration_str(text: &str) -> Option<Duration> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Some(caps) = CLOCK_DURATION.captures(text) {
        let days = caps.name("days").map_or(Some(0.0), |m| m.as_str().parse::<f64>().ok())?;
        let hours = caps["h"].parse::<f64>().ok()?;
        let minutes = caps["m"].parse::<f64>().ok()?;
        let seconds = caps.name("s").map_or(Some(0.0), |m| m.as_str().parse::<f64>().ok())?;
        if minutes >= 60.0 || seconds >= 60.0 {
            return None;
        }
        let total = days * SECONDS_PER_DAY + hours * 3600.0 + minutes * 60.0 + seconds;
        let signed = if caps.name("sign").map(|m| m.as_str()) == Some("-") {
            -total
        } else {
            total
        };
        return duration_from_seconds(signed);
    }
    if UNIT_DURATION.is_match(text) {
        let mut total = 0.0;
        for caps in UNIT_COMPONENT.captures_iter(text) {
            let value = caps["value"].parse::<f64>().ok()?;
            total += value * unit_seconds(&caps["unit"])?;
        }
        return duration_from_seconds(total);
    }
    parse_iso_duration(text)
}

fn parse_iso_duration(text: &str) -> Option<Duration> {
    let caps = ISO_DURATION.captures(text.trim())?;
    let parts = [("d", SECONDS_PER_DAY), ("h", 3600.0), ("m", 60.0), ("s", 1.0)];
    let mut seen = false;
    let mut total = 0.0;
    for (name, scale) in parts {
        if let Some(m) = caps.name(name) {
            seen = true;
            total += m.as_str().parse::<f64>().ok()? * scale;
        }
    }
    if !seen {
        return None;
    }
    duration_from_seconds(total)
}

fn unit_seconds(unit: &str) -> Option<f64> {
    let unit = unit.to_ascii_lowercase();
    let scale = match unit.as_str() {
        "d" | "day" | "days" => SECONDS_PER_DAY,
        "h" | "hr" | "hrs" | "hour" | "hours" => 3600.0,
        "m" | "min" | "mins" | "minute" | "minutes" => 60.0,
        "s" | "sec" | "secs" | "second" | "seconds" => 1.0,
        "ms" | "millisecond" | "milliseconds" => 0.001,
        _ => return None,
    };
    Some(scale)
}

/// Millisecond-precision duration; `None` when it does not fit a `Duration`.
fn duration_from_seconds(seconds: f64) -> Option<Duration> {
    let millis = (seconds * 1000.0).round();
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return None;
    }
    Duration::try_milliseconds(millis as i64)
}

/// JSON rendering of a cell for pass-through tables.
pub fn cell_to_json(cell: &Data) -> Value {
    match cell {
        Data::Empty | Data::Error(_) => Value::Null,
        Data::Int(i) => Value::from(*i),
        Data::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Value::String(s.clone()),
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(dt) => {
            if dt.is_duration() {
                return duration_from_seconds(dt.as_f64() * SECONDS_PER_DAY)
                    .map(|d| Value::String(format_duration(d)))
                    .unwrap_or(Value::Null);
            }
            match dt.as_datetime() {
                Some(datetime) if datetime.time() == chrono::NaiveTime::MIN => {
                    Value::String(datetime.date().format("%Y-%m-%d").to_string())
                }
                Some(datetime) => Value::String(datetime.format("%Y-%m-%dT%H:%M:%S").to_string()),
                None => Value::Null,
            }
        }
    }
}

/// `H:MM:SS` rendering of a duration (hours may exceed 24).
pub fn format_duration(duration: Duration) -> String {
    let total = duration.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();
    format!("{}{}:{:02}:{:02}", sign, total / 3600, (total % 3600) / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Data::String("  Centro ".into())), Some("Centro".into()));
        assert_eq!(cell_text(&Data::String("   ".into())), None);
        assert_eq!(cell_text(&Data::Empty), None);
        assert_eq!(cell_text(&Data::Float(1234.0)), Some("1234".into()));
        assert_eq!(cell_text(&Data::Float(12.5)), Some("12.5".into()));
        assert_eq!(cell_text(&Data::Int(7)), Some("7".into()));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(&Data::Int(12)), 12);
        assert_eq!(parse_count(&Data::Float(3.0)), 3);
        assert_eq!(parse_count(&Data::String(" 5 ".into())), 5);
        assert_eq!(parse_count(&Data::String("cinco".into())), 0);
        assert_eq!(parse_count(&Data::Empty), 0);
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15);
        assert_eq!(parse_date(&Data::String("2024-03-15".into())), expected);
        assert_eq!(parse_date(&Data::String("2024/03/15".into())), expected);
        assert_eq!(parse_date(&Data::String("15/03/2024".into())), expected);
        assert_eq!(parse_date(&Data::String("03/15/2024".into())), expected);
        assert_eq!(parse_date(&Data::String("2024-03-15 08:00:00".into())), expected);
        assert_eq!(parse_date(&Data::DateTimeIso("2024-03-15T10:30:00".into())), expected);
    }

    #[test]
    fn test_parse_date_coerces_garbage() {
        assert_eq!(parse_date(&Data::String("ontem".into())), None);
        assert_eq!(parse_date(&Data::String("2024-02-30".into())), None);
        assert_eq!(parse_date(&Data::Float(45000.0)), None);
        assert_eq!(parse_date(&Data::Empty), None);
    }

    #[test]
    fn test_parse_duration_clock() {
        assert_eq!(parse_duration_str("08:00:00"), Some(Duration::hours(8)));
        assert_eq!(parse_duration_str("1:30"), Some(Duration::minutes(90)));
        assert_eq!(
            parse_duration_str("0 days 02:15:30"),
            Some(Duration::seconds(2 * 3600 + 15 * 60 + 30))
        );
        assert_eq!(
            parse_duration_str("1 day, 01:00:00"),
            Some(Duration::hours(25))
        );
        assert_eq!(parse_duration_str("00:00:01.5"), Some(Duration::milliseconds(1500)));
        assert_eq!(parse_duration_str("-00:30:00"), Some(Duration::minutes(-30)));
    }

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration_str("2h30m"), Some(Duration::minutes(150)));
        assert_eq!(parse_duration_str("45min"), Some(Duration::minutes(45)));
        assert_eq!(parse_duration_str("1 hour 15 seconds"), Some(Duration::seconds(3615)));
        assert_eq!(parse_duration_str("2 days"), Some(Duration::days(2)));
        assert_eq!(parse_duration_str("250ms"), Some(Duration::milliseconds(250)));
    }

    #[test]
    fn test_parse_duration_iso() {
        assert_eq!(parse_duration_str("PT8H"), Some(Duration::hours(8)));
        assert_eq!(parse_duration_str("P1DT30M"), Some(Duration::minutes(24 * 60 + 30)));
        assert_eq!(parse_duration_str("P"), None);
    }

    #[test]
    fn test_parse_duration_coerces_garbage() {
        assert_eq!(parse_duration_str(""), None);
        assert_eq!(parse_duration_str("sem registro"), None);
        assert_eq!(parse_duration_str("08:75:00"), None);
        assert_eq!(parse_duration(&Data::Float(3.5)), None);
        assert_eq!(parse_duration(&Data::Empty), None);
    }

    #[test]
    fn test_parse_duration_out_of_range_is_missing() {
        assert_eq!(parse_duration_str("-99999999999999999999:00:00"), None);
        assert_eq!(parse_duration_str("99999999999999999999:00:00"), None);
        assert_eq!(parse_duration_str("99999999999999999999999h"), None);
        assert_eq!(duration_from_seconds(f64::NAN), None);
        assert_eq!(duration_from_seconds(f64::INFINITY), None);
        assert_eq!(duration_from_seconds(90.0), Some(Duration::seconds(90)));
    }

    #[test]
    fn test_parse_count_saturates_huge_values() {
        assert_eq!(parse_count(&Data::Float(1e19)), i64::MAX);
        assert_eq!(parse_count(&Data::Float(-1e19)), i64::MIN);
    }

    #[test]
    fn test_cell_to_json() {
        assert_eq!(cell_to_json(&Data::Empty), Value::Null);
        assert_eq!(cell_to_json(&Data::Float(10.5)), serde_json::json!(10.5));
        assert_eq!(cell_to_json(&Data::Int(3)), serde_json::json!(3));
        assert_eq!(cell_to_json(&Data::String("Ana".into())), serde_json::json!("Ana"));
        assert_eq!(cell_to_json(&Data::Bool(true)), serde_json::json!(true));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::seconds(30 * 3600 + 61)), "30:01:01");
        assert_eq!(format_duration(Duration::minutes(-5)), "-0:05:00");
    }
}
