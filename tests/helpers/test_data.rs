//! Test data helpers for creating attendee exports and contact drafts

use std::path::PathBuf;
use stovaspot::models::ContactDraft;

/// An attendee export as produced by the registration platform
pub const ATTENDEE_EXPORT: &str = "\u{feff}First Name,Last Name,Email,Registration Date,Attendee Category,Registration Status\n\
Ana,García,ana@example.com,05/03/2025,Speaker,Confirmed\n\
Ben,Bell,ben@example.com,06/03/2025,Delegate,Confirmed\n\
,,,,,\n\
Cleo,Stone,,2025-03-07,Delegate,Cancelled\n";

/// Export using lower-case and camelCase header variants
pub const ALIASED_EXPORT: &str = "firstName,lastName,email\n\
Dora,Diaz,dora@example.com\n\
Eli,Evans,ben@example.com\n";

pub fn drafts(emails: &[&str]) -> Vec<ContactDraft> {
    emails
        .iter()
        .enumerate()
        .map(|(i, email)| ContactDraft::new(&format!("Guest{}", i), "Test", email))
        .collect()
}

/// Write `content` to `name` inside `dir`
pub fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write test file");
    path
}
