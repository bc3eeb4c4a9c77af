//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use crate::models::Contact;

/// Dedup key for an email address
pub fn email_key(email: &str) -> String {
    email.to_lowercase()
}

/// Whether an uploaded file should be treated as CSV.
///
/// Either a `.csv` file name or a `text/csv` content type is enough.
pub fn is_csv_upload(file_name: Option<&str>, content_type: Option<&str>) -> bool {
    let by_name = file_name
        .map(|name| name.to_ascii_lowercase().ends_with(".csv"))
        .unwrap_or(false);

    let by_type = content_type
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("text/csv"))
        .unwrap_or(false);

    by_name || by_type
}

/// Build a HubSpot search link for a contact.
///
/// Searches by email when present, otherwise by full name.
pub fn hubspot_search_url(portal_id: &str, contact: &Contact) -> Option<String> {
    let full_name = format!("{} {}", contact.first_name, contact.last_name);
    let query = if contact.email.is_empty() {
        full_name.trim()
    } else {
        contact.email.as_str()
    };

    if query.is_empty() {
        return None;
    }

    Some(format!(
        "https://app.hubspot.com/search/{}/search?query={}",
        portal_id,
        urlencoding::encode(query)
    ))
}

/// Elapsed milliseconds since `start`, saturating
pub fn elapsed_ms(start: std::time::Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn contact(first: &str, last: &str, email: &str) -> Contact {
        Contact {
            id: Uuid::new_v4(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            registration_date: None,
            last_modified_date: None,
            cancellation_date: None,
            attendee_category: None,
            registration_status: None,
            is_reviewed: false,
            event_id: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_csv_upload_detection() {
        assert!(is_csv_upload(Some("attendees.csv"), None));
        assert!(is_csv_upload(Some("ATTENDEES.CSV"), None));
        assert!(is_csv_upload(None, Some("text/csv")));
        assert!(is_csv_upload(Some("export"), Some("text/csv; charset=utf-8")));
        assert!(!is_csv_upload(Some("attendees.xlsx"), Some("application/vnd.ms-excel")));
        assert!(!is_csv_upload(None, None));
    }

    #[test]
    fn test_hubspot_url_prefers_email() {
        let url = hubspot_search_url("6832097", &contact("Ana", "García", "ana+conf@x.com")).unwrap();
        assert_eq!(url, "https://app.hubspot.com/search/6832097/search?query=ana%2Bconf%40x.com");
    }

    #[test]
    fn test_hubspot_url_falls_back_to_name() {
        let url = hubspot_search_url("1", &contact("Ana", "", "")).unwrap();
        assert!(url.ends_with("query=Ana"));
        assert!(hubspot_search_url("1", &contact("", "", "")).is_none());
    }

    #[test]
    fn test_email_key() {
        assert_eq!(email_key("A@X.COM"), email_key("a@x.com"));
    }
}
