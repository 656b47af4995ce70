//! Multipart form parsing for the view endpoints.
//!
//! A view request carries the uploaded workbook(s) plus the current widget
//! values as plain form fields. Repeated fields model multi-selects.

use axum::extract::Multipart;
use chrono::NaiveDate;

use super::dto::fields;
use super::error::AppError;
use crate::models::Upload;
use crate::services::filters::PerformanceFilters;
use crate::services::PerformanceParams;

/// One multipart field read fully into memory.
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

impl FormField {
    fn text(&self) -> Result<String, AppError> {
        String::from_utf8(self.bytes.clone())
            .map(|s| s.trim().to_string())
            .map_err(|_| AppError::BadRequest(format!("field '{}' is not valid UTF-8", self.name)))
    }

    /// The uploaded file, or `None` for an empty file input.
    fn upload(self) -> Result<Option<Upload>, AppError> {
        let file_name = self.file_name.unwrap_or_default();
        if file_name.is_empty() && self.bytes.is_empty() {
            return Ok(None);
        }
        let upload = Upload::new(file_name, self.bytes);
        if !upload.is_xlsx() {
            return Err(AppError::BadRequest(format!(
                "'{}' is not an .xlsx file",
                upload.file_name
            )));
        }
        Ok(Some(upload))
    }
}

/// Drain every named field of the form.
pub async fn read_fields(multipart: &mut Multipart) -> Result<Vec<FormField>, AppError> {
    let mut out = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(name) = field.name() else {
            tracing::debug!("ignoring unnamed multipart field");
            continue;
        };
        let name = name.to_string();
        let file_name = field.file_name().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        out.push(FormField {
            name,
            file_name,
            bytes: bytes.to_vec(),
        });
    }
    Ok(out)
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest(format!(
            "invalid date '{}' for field '{}', expected YYYY-MM-DD",
            value,
            fields::DATE
        ))
    })
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "true" | "1" | "on" | "yes")
}

/// Build the performance inputs from the form fields.
pub fn performance_form(form: Vec<FormField>) -> Result<(Option<Upload>, PerformanceParams), AppError> {
    let mut upload: Option<Upload> = None;
    let mut filters = PerformanceFilters::default();
    let mut params = PerformanceParams::default();

    for field in form {
        match field.name.as_str() {
            fields::PERFORMANCE_FILE => {
                if let Some(file) = field.upload()? {
                    if upload.is_some() {
                        return Err(AppError::BadRequest(
                            "only one performance workbook can be uploaded".to_string(),
                        ));
                    }
                    upload = Some(file);
                }
            }
            fields::SUB_REGION => push_non_empty(&mut filters.sub_regions, field.text()?),
            fields::SHIFT_PERIOD => push_non_empty(&mut filters.shift_periods, field.text()?),
            fields::DATE => {
                let value = field.text()?;
                if !value.is_empty() {
                    filters.dates.push(parse_date(&value)?);
                }
            }
            fields::COURIER => {
                let value = field.text()?;
                params.selected_courier = (!value.is_empty()).then_some(value);
            }
            fields::SHOW_DETAILS => params.show_details = parse_flag(&field.text()?),
            other => tracing::debug!(field = other, "ignoring unknown performance field"),
        }
    }

    params.filters = filters;
    Ok((upload, params))
}

/// Build the valuation inputs from the form fields.
///
/// Returns the uploads in form order and the minimum total (default `0`).
pub fn valuation_form(form: Vec<FormField>) -> Result<(Vec<Upload>, f64), AppError> {
    let mut uploads = Vec::new();
    let mut min_total = 0.0;

    for field in form {
        match field.name.as_str() {
            fields::BALANCE_FILE => {
                if let Some(file) = field.upload()? {
                    uploads.push(file);
                }
            }
            fields::MIN_TOTAL => {
                let value = field.text()?;
                if !value.is_empty() {
                    min_total = value.parse::<f64>().map_err(|_| {
                        AppError::BadRequest(format!(
                            "invalid number '{}' for field '{}'",
                            value,
                            fields::MIN_TOTAL
                        ))
                    })?;
                }
            }
            other => tracing::debug!(field = other, "ignoring unknown valuation field"),
        }
    }

    Ok((uploads, min_total))
}

fn push_non_empty(values: &mut Vec<String>, value: String) {
    if !value.is_empty() {
        values.push(value);
    }
}
