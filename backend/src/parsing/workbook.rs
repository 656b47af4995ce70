//! Workbook loading and sheet-to-record conversion.

use std::collections::HashMap;
use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Range, Reader, Sheets};

use super::cells;
use crate::error::{ReportError, ReportResult};
use crate::models::{BalanceTable, DeliveryRecord, Upload};

/// Columns read from the performance sheet.
pub mod columns {
    pub const COURIER_ID: &str = "id_da_pessoa_entregadora";
    pub const COURIER_NAME: &str = "pessoa_entregadora";
    pub const SUB_REGION: &str = "sub_praca";
    pub const SHIFT_PERIOD: &str = "periodo";
    pub const DATE: &str = "data_do_periodo";
    pub const RIDES_OFFERED: &str = "numero_de_corridas_ofertadas";
    pub const RIDES_ACCEPTED: &str = "numero_de_corridas_aceitas";
    pub const RIDES_REJECTED: &str = "numero_de_corridas_rejeitadas";
    pub const AVAILABLE_TIME: &str = "tempo_disponivel_absoluto";
}

/// An uploaded workbook held in memory.
pub struct Workbook {
    file_name: String,
    sheets: Sheets<Cursor<Vec<u8>>>,
}

impl Workbook {
    /// Open a workbook from an upload. The bytes are moved, not copied.
    pub fn open(upload: Upload) -> ReportResult<Self> {
        let Upload { file_name, bytes } = upload;
        let sheets = open_workbook_auto_from_rs(Cursor::new(bytes))
            .map_err(|e| ReportError::workbook(file_name.as_str(), e))?;
        Ok(Self { file_name, sheets })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    /// Cell range of the sheet called `name`.
    pub fn sheet(&mut self, name: &str) -> ReportResult<Range<Data>> {
        if !self.sheet_names().iter().any(|s| s == name) {
            return Err(ReportError::MissingSheet {
                file: self.file_name.clone(),
                sheet: name.to_string(),
            });
        }
        self.sheets
            .worksheet_range(name)
            .map_err(|e| ReportError::workbook(self.file_name.as_str(), e))
    }

    /// Cell range of the first sheet in workbook order.
    pub fn first_sheet(&mut self) -> ReportResult<Range<Data>> {
        match self.sheets.worksheet_range_at(0) {
            Some(range) => range.map_err(|e| ReportError::workbook(self.file_name.as_str(), e)),
            None => Err(ReportError::EmptyWorkbook {
                file: self.file_name.clone(),
            }),
        }
    }
}

/// Header names of the first row. Blank headers become `Unnamed: <index>` and
/// repeated headers get a `.1`, `.2`, ... suffix so every column stays addressable.
pub fn header_row(range: &Range<Data>) -> Vec<String> {
    let Some(first) = range.rows().next() else {
        return Vec::new();
    };
    let mut seen: HashMap<String, usize> = HashMap::new();
    first
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            let base = cells::cell_text(cell).unwrap_or_else(|| format!("Unnamed: {}", index));
            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 {
                base
            } else {
                format!("{}.{}", base, count)
            };
            *count += 1;
            name
        })
        .collect()
}

fn column_index(headers: &[String], file: &str, column: &str) -> ReportResult<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| ReportError::missing_column(file, column))
}

fn cell(row: &[Data], index: usize) -> &Data {
    row.get(index).unwrap_or(&Data::Empty)
}

fn is_blank_row(row: &[Data]) -> bool {
    row.iter().all(|c| matches!(c, Data::Empty))
}

struct DeliveryColumns {
    courier_id: usize,
    courier_name: usize,
    sub_region: usize,
    shift_period: usize,
    date: usize,
    rides_offered: usize,
    rides_accepted: usize,
    rides_rejected: usize,
    available_time: usize,
}

impl DeliveryColumns {
    fn resolve(headers: &[String], file: &str) -> ReportResult<Self> {
        Ok(Self {
            courier_id: column_index(headers, file, columns::COURIER_ID)?,
            courier_name: column_index(headers, file, columns::COURIER_NAME)?,
            sub_region: column_index(headers, file, columns::SUB_REGION)?,
            shift_period: column_index(headers, file, columns::SHIFT_PERIOD)?,
            date: column_index(headers, file, columns::DATE)?,
            rides_offered: column_index(headers, file, columns::RIDES_OFFERED)?,
            rides_accepted: column_index(headers, file, columns::RIDES_ACCEPTED)?,
            rides_rejected: column_index(headers, file, columns::RIDES_REJECTED)?,
            available_time: column_index(headers, file, columns::AVAILABLE_TIME)?,
        })
    }
}

/// Build delivery records from the performance sheet.
///
/// Every expected column must be present in the header row. Cell values are
/// coerced best-effort; fully blank rows are skipped.
pub fn read_delivery_records(range: &Range<Data>, file: &str) -> ReportResult<Vec<DeliveryRecord>> {
    let headers = header_row(range);
    let cols = DeliveryColumns::resolve(&headers, file)?;

    let records: Vec<DeliveryRecord> = range
        .rows()
        .skip(1)
        .filter(|row| !is_blank_row(row))
        .map(|row| DeliveryRecord {
            courier_id: cells::cell_text(cell(row, cols.courier_id)),
            courier_name: cells::cell_text(cell(row, cols.courier_name)),
            sub_region: cells::cell_text(cell(row, cols.sub_region)),
            shift_period: cells::cell_text(cell(row, cols.shift_period)),
            date: cells::parse_date(cell(row, cols.date)),
            rides_offered: cells::parse_count(cell(row, cols.rides_offered)),
            rides_accepted: cells::parse_count(cell(row, cols.rides_accepted)),
            rides_rejected: cells::parse_count(cell(row, cols.rides_rejected)),
            available_time: cells::parse_duration(cell(row, cols.available_time)),
        })
        .collect();

    log::debug!("read {} delivery records from '{}'", records.len(), file);
    Ok(records)
}

/// Build a pass-through table from a payout sheet.
pub fn read_balance_table(range: &Range<Data>, file: &str) -> BalanceTable {
    let columns = header_row(range);
    let width = columns.len();
    let rows: Vec<Vec<serde_json::Value>> = range
        .rows()
        .skip(1)
        .map(|row| (0..width).map(|i| cells::cell_to_json(cell(row, i))).collect())
        .collect();

    log::debug!("read {} balance rows from '{}'", rows.len(), file);
    BalanceTable::new(columns, rows)
}
