use thiserror::Error;

#[derive(Error, Debug)]
pub enum RemapError {
    #[error("Row numbers start at 1")]
    ZeroRow,

    #[error("future_row ({future}) must be greater than prev_row ({prev})")]
    InvalidRowOrder { prev: usize, future: usize },

    #[error("Row {row} does not exist, the palette table has {rows} row(s)")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("Document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to build token matcher: {0}")]
    Regex(#[from] regex::Error),
}
