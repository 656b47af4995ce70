//! Error types for workbook ingestion and view computation.
//!
//! Only structural problems surface as errors: an unreadable workbook, a
//! missing sheet or a missing expected column. Bad cell values never do;
//! they are coerced by the best-effort parsers in [`crate::parsing::cells`].

use thiserror::Error;

/// Result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors that abort the current render of a view.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The uploaded bytes are not a workbook calamine can open.
    #[error("failed to open workbook '{file}': {message}")]
    Workbook { file: String, message: String },

    /// The workbook has no sheet with the requested name.
    #[error("worksheet '{sheet}' not found in '{file}'")]
    MissingSheet { file: String, sheet: String },

    /// The workbook has no sheets at all.
    #[error("workbook '{file}' contains no worksheets")]
    EmptyWorkbook { file: String },

    /// A column the view needs is absent from the header row.
    #[error("column '{column}' not found in '{file}'")]
    MissingColumn { file: String, column: String },

    /// A widget value outside its allowed domain.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter { name: String, message: String },
}

impl ReportError {
    pub fn workbook(file: impl Into<String>, err: impl std::fmt::Display) -> Self {
        ReportError::Workbook {
            file: file.into(),
            message: err.to_string(),
        }
    }

    pub fn missing_column(file: impl Into<String>, column: impl Into<String>) -> Self {
        ReportError::MissingColumn {
            file: file.into(),
            column: column.into(),
        }
    }

    pub fn invalid_parameter(name: impl Into<String>, message: impl Into<String>) -> Self {
        ReportError::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Whether the error was caused by the request parameters rather than
    /// by the uploaded workbook.
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, ReportError::InvalidParameter { .. })
    }
}
