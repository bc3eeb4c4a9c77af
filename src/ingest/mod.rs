//! CSV ingest module
//!
//! Reads attendee exports and maps their free-form columns onto contact drafts

pub mod normalizer;
pub mod reader;

pub use normalizer::{normalize_date, normalize_row, normalize_rows};
pub use reader::{read_rows, RawRow};

use crate::models::ContactDraft;
use crate::utils::errors::Result;

/// Parse and normalize a CSV export in one step
pub fn drafts_from_csv(text: &str) -> Result<Vec<ContactDraft>> {
    let rows = read_rows(text)?;
    Ok(normalize_rows(&rows))
}
