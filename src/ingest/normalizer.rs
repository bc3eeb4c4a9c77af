//! Header aliasing and date normalization for attendee exports

use crate::ingest::reader::RawRow;
use crate::models::ContactDraft;

// Aliases are tried in order; the first non-empty value wins.
const FIRST_NAME: &[&str] = &["First Name", "first name", "firstName"];
const LAST_NAME: &[&str] = &["Last Name", "last name", "lastName"];
const EMAIL: &[&str] = &["Email", "email", "EMAIL"];
const REGISTRATION_DATE: &[&str] = &["Registration Date", "registration date"];
const LAST_MODIFIED_DATE: &[&str] = &["Last Modified Date", "last modified date"];
const CANCELLATION_DATE: &[&str] = &["Cancellation Date", "cancellation date"];
const ATTENDEE_CATEGORY: &[&str] = &["Attendee Category", "attendee category"];
const REGISTRATION_STATUS: &[&str] = &["Registration Status", "registration status"];

fn pick<'a>(row: &'a RawRow, aliases: &[&str]) -> Option<&'a str> {
    aliases
        .iter()
        .filter_map(|alias| row.get(*alias))
        .map(String::as_str)
        .find(|value| !value.is_empty())
}

/// Rewrite `dd/mm/yyyy` as `yyyy-mm-dd`.
///
/// Only the shape is checked: any value with exactly two `/` separators is
/// reordered, everything else is returned unchanged.
pub fn normalize_date(value: Option<&str>) -> Option<String> {
    let value = value.filter(|v| !v.is_empty())?;
    let parts: Vec<&str> = value.trim().split('/').collect();

    match parts.as_slice() {
        [day, month, year] => Some(format!("{}-{}-{}", year, month, day)),
        _ => Some(value.to_string()),
    }
}

/// Map one raw row onto the contact schema
pub fn normalize_row(row: &RawRow) -> ContactDraft {
    ContactDraft {
        first_name: pick(row, FIRST_NAME).unwrap_or_default().to_string(),
        last_name: pick(row, LAST_NAME).unwrap_or_default().to_string(),
        email: pick(row, EMAIL).unwrap_or_default().to_string(),
        registration_date: normalize_date(pick(row, REGISTRATION_DATE)),
        last_modified_date: normalize_date(pick(row, LAST_MODIFIED_DATE)),
        cancellation_date: normalize_date(pick(row, CANCELLATION_DATE)),
        attendee_category: pick(row, ATTENDEE_CATEGORY).map(str::to_string),
        registration_status: pick(row, REGISTRATION_STATUS).map(str::to_string),
    }
}

/// Normalize every row, dropping rows with neither an email nor a first name
pub fn normalize_rows(rows: &[RawRow]) -> Vec<ContactDraft> {
    rows.iter()
        .map(normalize_row)
        .filter(|draft| !draft.email.is_empty() || !draft.first_name.is_empty())
        .collect()
}
