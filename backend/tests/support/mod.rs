#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use rust_xlsxwriter::Workbook;

use entregas_dashboard::models::Upload;
use entregas_dashboard::parsing::columns;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

// =============================================================================
// Workbook fixtures
// =============================================================================

/// A fixture cell.
#[derive(Debug, Clone)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

pub fn text(value: &str) -> Cell {
    Cell::Text(value.to_string())
}

pub fn num(value: f64) -> Cell {
    Cell::Number(value)
}

/// Build an in-memory `.xlsx` with the given sheets (name, rows).
pub fn xlsx_bytes(sheets: &[(&str, Vec<Vec<Cell>>)]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Text(value) => {
                        worksheet.write_string(r as u32, c as u16, value.as_str()).unwrap();
                    }
                    Cell::Number(value) => {
                        worksheet.write_number(r as u32, c as u16, *value).unwrap();
                    }
                    Cell::Empty => {}
                }
            }
        }
    }
    workbook.save_to_buffer().unwrap()
}

/// One delivery row: id, name, sub-region, shift, date, offered, accepted, rejected, online time.
pub struct ShiftRow<'a> {
    pub id: f64,
    pub name: &'a str,
    pub sub_region: &'a str,
    pub shift: &'a str,
    pub date: &'a str,
    pub offered: f64,
    pub accepted: f64,
    pub rejected: f64,
    pub online: &'a str,
}

pub fn shift<'a>(
    id: f64,
    name: &'a str,
    sub_region: &'a str,
    shift: &'a str,
    date: &'a str,
    offered: f64,
    accepted: f64,
    online: &'a str,
) -> ShiftRow<'a> {
    ShiftRow {
        id,
        name,
        sub_region,
        shift,
        date,
        offered,
        accepted,
        rejected: offered - accepted,
        online,
    }
}

pub fn delivery_header() -> Vec<Cell> {
    [
        columns::COURIER_ID,
        columns::COURIER_NAME,
        columns::SUB_REGION,
        columns::SHIFT_PERIOD,
        columns::DATE,
        columns::RIDES_OFFERED,
        columns::RIDES_ACCEPTED,
        columns::RIDES_REJECTED,
        columns::AVAILABLE_TIME,
    ]
    .iter()
    .map(|c| text(c))
    .collect()
}

pub fn delivery_rows(rows: &[ShiftRow<'_>]) -> Vec<Vec<Cell>> {
    let mut out = vec![delivery_header()];
    for row in rows {
        out.push(vec![
            num(row.id),
            text(row.name),
            text(row.sub_region),
            text(row.shift),
            text(row.date),
            num(row.offered),
            num(row.accepted),
            num(row.rejected),
            text(row.online),
        ]);
    }
    out
}

/// Performance workbook with an `Analise` sheet (plus a decoy first sheet).
pub fn performance_workbook(rows: &[ShiftRow<'_>]) -> Vec<u8> {
    xlsx_bytes(&[
        ("Resumo", vec![vec![text("nada aqui")]]),
        ("Analise", delivery_rows(rows)),
    ])
}

/// The week used across the integration tests.
pub fn sample_shifts() -> Vec<ShiftRow<'static>> {
    vec![
        shift(101.0, "José Silva", "Centro", "Manhã", "2024-03-04", 10.0, 8.0, "04:00:00"),
        shift(101.0, "José Silva", "Centro", "Noite", "2024-03-04", 20.0, 15.0, "04:00:00"),
        shift(101.0, "José Silva", "Norte", "Manhã", "2024-03-05", 10.0, 5.0, "sem registro"),
        shift(202.0, "Ana Lúcia", "Norte", "Noite", "2024-03-05", 40.0, 30.0, "08:00:00"),
        shift(202.0, "Ana Lúcia", "Centro", "Manhã", "data inválida", 5.0, 5.0, "02:00:00"),
    ]
}

pub fn performance_upload(rows: &[ShiftRow<'_>]) -> Upload {
    Upload::new("entregas.xlsx", performance_workbook(rows))
}

/// Payout workbook: a single sheet with `Entregador` and `Total`.
pub fn balance_workbook(rows: &[(&str, Option<f64>)]) -> Vec<u8> {
    let mut sheet = vec![vec![text("Entregador"), text("Pix"), text("Total")]];
    for (name, total) in rows {
        sheet.push(vec![
            text(name),
            text("sim"),
            total.map(num).unwrap_or(Cell::Empty),
        ]);
    }
    xlsx_bytes(&[("Saldo", sheet)])
}

// =============================================================================
// Multipart helpers
// =============================================================================

pub const BOUNDARY: &str = "dashboardtestboundary";

/// A multipart part: `(field name, optional file name, content)`.
pub type Part<'a> = (&'a str, Option<&'a str>, &'a [u8]);

pub fn make_multipart(parts: &[Part<'_>]) -> (Vec<u8>, String) {
    let mut body = Vec::new();
    for (name, file_name, content) in parts {
        let disposition = match file_name {
            Some(file) => format!("form-data; name=\"{name}\"; filename=\"{file}\""),
            None => format!("form-data; name=\"{name}\""),
        };
        let content_type = if file_name.is_some() {
            "Content-Type: application/vnd.openxmlformats-officedocument.spreadsheetml.sheet\r\n"
        } else {
            ""
        };
        let header = format!("--{BOUNDARY}\r\nContent-Disposition: {disposition}\r\n{content_type}\r\n");
        body.extend_from_slice(header.as_bytes());
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    let content_type = format!("multipart/form-data; boundary={BOUNDARY}");
    (body, content_type)
}
