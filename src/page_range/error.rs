use serde::Serialize;
use thiserror::Error;

/// Message shown when the user has to re-enter a page range.
pub const INVALID_RANGE_MESSAGE: &str =
    "Invalid page range. Please enter valid page numbers or ranges (e.g., 1,3,5-10).";

const EMPTY_INPUT_MESSAGE: &str = "Please enter the pages to extract.";

/// Why a page range expression was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    EmptyInput,
    MalformedNumber,
    InvalidPage,
    InvertedRange,
    CapacityExceeded,
    EmptyResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRangeError {
    #[error("Empty page range")]
    EmptyInput,

    #[error("Invalid page number in {token:?}")]
    MalformedNumber { token: String },

    #[error("Page {page} is out of range (1-{total}) in {token:?}")]
    InvalidPage { token: String, page: u64, total: u32 },

    #[error("Start page {start} exceeds end page {end} in {token:?}")]
    InvertedRange { token: String, start: u32, end: u32 },

    #[error("More than {capacity} pages selected at {token:?}")]
    CapacityExceeded { token: String, capacity: usize },

    #[error("No pages selected")]
    EmptyResult,
}

impl PageRangeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PageRangeError::EmptyInput => ErrorKind::EmptyInput,
            PageRangeError::MalformedNumber { .. } => ErrorKind::MalformedNumber,
            PageRangeError::InvalidPage { .. } => ErrorKind::InvalidPage,
            PageRangeError::InvertedRange { .. } => ErrorKind::InvertedRange,
            PageRangeError::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
            PageRangeError::EmptyResult => ErrorKind::EmptyResult,
        }
    }

    /// The token that caused the failure, if the failure belongs to one.
    pub fn token(&self) -> Option<&str> {
        match self {
            PageRangeError::MalformedNumber { token }
            | PageRangeError::InvalidPage { token, .. }
            | PageRangeError::InvertedRange { token, .. }
            | PageRangeError::CapacityExceeded { token, .. } => Some(token),
            PageRangeError::EmptyInput | PageRangeError::EmptyResult => None,
        }
    }

    /// Text suitable for a prompt asking the user to try again.
    pub fn user_message(&self) -> &'static str {
        match self {
            PageRangeError::EmptyInput => EMPTY_INPUT_MESSAGE,
            _ => INVALID_RANGE_MESSAGE,
        }
    }
}
