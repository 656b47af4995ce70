use serde::{Deserialize, Serialize};

/// An uploaded file, read fully into memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Upload {
    /// Original file name as sent by the client.
    pub file_name: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Whether the file name carries the `.xlsx` extension (case-insensitive).
    pub fn is_xlsx(&self) -> bool {
        std::path::Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("xlsx"))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
