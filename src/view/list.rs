//! Search, reviewed-tab filter and sort over a loaded contact list
//!
//! Everything here is pure: the visible list is recomputed from the full
//! contact set and the view state whenever either changes.

use std::cmp::Ordering;
use serde::{Deserialize, Serialize};
use crate::models::Contact;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    FirstName,
    LastName,
    Email,
    RegistrationDate,
    LastModifiedDate,
    CancellationDate,
    AttendeeCategory,
    RegistrationStatus,
    IsReviewed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

/// Client-held view state of one contact list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub search_term: String,
    /// Which tab is active: reviewed contacts or pending ones
    pub show_reviewed: bool,
    pub sort: SortSpec,
}

impl ViewState {
    /// Clicking the active column flips its direction; another column starts ascending
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort.field == field {
            self.sort.order = self.sort.order.flipped();
        } else {
            self.sort = SortSpec { field, order: SortOrder::Asc };
        }
    }
}

enum SortKey<'a> {
    Text(&'a str),
    Flag(bool),
}

fn sort_key(contact: &Contact, field: SortField) -> SortKey<'_> {
    fn text(value: &Option<String>) -> SortKey<'_> {
        SortKey::Text(value.as_deref().unwrap_or(""))
    }

    match field {
        SortField::FirstName => SortKey::Text(&contact.first_name),
        SortField::LastName => SortKey::Text(&contact.last_name),
        SortField::Email => SortKey::Text(&contact.email),
        SortField::RegistrationDate => text(&contact.registration_date),
        SortField::LastModifiedDate => text(&contact.last_modified_date),
        SortField::CancellationDate => text(&contact.cancellation_date),
        SortField::AttendeeCategory => text(&contact.attendee_category),
        SortField::RegistrationStatus => text(&contact.registration_status),
        SortField::IsReviewed => SortKey::Flag(contact.is_reviewed),
    }
}

fn base_letter(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => c,
    }
}

/// Collation-style comparison: letters first, then accents, then case
/// (lower before upper), then code points.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = |s: &str| s.chars().flat_map(char::to_lowercase).map(base_letter).collect::<Vec<_>>();
    let lowered = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();

    folded(a)
        .cmp(&folded(b))
        .then_with(|| lowered(a).cmp(&lowered(b)))
        .then_with(|| a.chars().map(char::is_uppercase).cmp(b.chars().map(char::is_uppercase)))
        .then_with(|| a.cmp(b))
}

/// Compare two contacts on one field, ascending
pub fn compare_by(a: &Contact, b: &Contact, field: SortField) -> Ordering {
    match (sort_key(a, field), sort_key(b, field)) {
        (SortKey::Text(x), SortKey::Text(y)) => locale_compare(x, y),
        (SortKey::Flag(x), SortKey::Flag(y)) => x.cmp(&y),
        _ => Ordering::Equal,
    }
}

/// Case-insensitive substring match on first name, last name or email
pub fn matches_search(contact: &Contact, term: &str) -> bool {
    let term = term.to_lowercase();
    contact.first_name.to_lowercase().contains(&term)
        || contact.last_name.to_lowercase().contains(&term)
        || contact.email.to_lowercase().contains(&term)
}

/// The contacts shown for `view`, in display order.
///
/// The sort is stable in both directions: descending reverses the comparison,
/// not the result, so equal contacts keep their loaded order.
pub fn visible_contacts<'a>(contacts: &'a [Contact], view: &ViewState) -> Vec<&'a Contact> {
    let mut visible: Vec<&Contact> = contacts
        .iter()
        .filter(|c| matches_search(c, &view.search_term))
        .filter(|c| c.is_reviewed == view.show_reviewed)
        .collect();

    let SortSpec { field, order } = view.sort;
    visible.sort_by(|a, b| match order {
        SortOrder::Asc => compare_by(a, b, field),
        SortOrder::Desc => compare_by(b, a, field),
    });

    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn contact(first: &str, last: &str, email: &str, reviewed: bool) -> Contact {
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
            is_reviewed: reviewed,
            event_id: Uuid::nil(),
            created_at: Utc::now(),
        }
    }

    fn names(list: &[&Contact]) -> Vec<String> {
        list.iter().map(|c| c.first_name.clone()).collect()
    }

    #[test]
    fn test_locale_compare() {
        assert_eq!(locale_compare("ana", "Bruno"), Ordering::Less);
        assert_eq!(locale_compare("Álvaro", "Bruno"), Ordering::Less);
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("e", "é"), Ordering::Less);
        assert_eq!(locale_compare("", "a"), Ordering::Less);
        assert_eq!(locale_compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_search_matches_any_name_field() {
        let contacts = vec![
            contact("Ana", "García", "ana@x.com", false),
            contact("Ben", "Bell", "ben@acme.org", false),
            contact("Cleo", "Stone", "cleo@x.com", false),
        ];
        let mut view = ViewState { search_term: "ACME".to_string(), ..Default::default() };
        assert_eq!(names(&visible_contacts(&contacts, &view)), vec!["Ben"]);

        view.search_term = "garc".to_string();
        assert_eq!(names(&visible_contacts(&contacts, &view)), vec!["Ana"]);

        view.search_term.clear();
        assert_eq!(visible_contacts(&contacts, &view).len(), 3);
    }

    #[test]
    fn test_reviewed_tab_filter() {
        let contacts = vec![
            contact("Ana", "", "a@x.com", true),
            contact("Ben", "", "b@x.com", false),
        ];
        let view = ViewState { show_reviewed: true, ..Default::default() };
        assert_eq!(names(&visible_contacts(&contacts, &view)), vec!["Ana"]);
    }

    #[test]
    fn test_sort_directions_are_reversed() {
        let contacts = vec![
            contact("cleo", "", "c@x.com", false),
            contact("Ana", "", "a@x.com", false),
            contact("Ben", "", "b@x.com", false),
        ];
        let mut view = ViewState::default();
        let asc = names(&visible_contacts(&contacts, &view));
        assert_eq!(asc, vec!["Ana", "Ben", "cleo"]);

        view.toggle_sort(SortField::FirstName);
        let mut desc = names(&visible_contacts(&contacts, &view));
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let contacts = vec![
            contact("First", "Same", "1@x.com", false),
            contact("Second", "Same", "2@x.com", false),
            contact("Third", "Same", "3@x.com", false),
        ];
        let mut view = ViewState::default();
        view.toggle_sort(SortField::LastName);
        assert_eq!(names(&visible_contacts(&contacts, &view)), vec!["First", "Second", "Third"]);

        view.toggle_sort(SortField::LastName);
        assert_eq!(view.sort.order, SortOrder::Desc);
        assert_eq!(names(&visible_contacts(&contacts, &view)), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_missing_values_sort_first() {
        let mut with_status = contact("Ana", "", "a@x.com", false);
        with_status.registration_status = Some("Confirmed".to_string());
        let without_status = contact("Ben", "", "b@x.com", false);
        let contacts = vec![with_status, without_status];

        let mut view = ViewState::default();
        view.toggle_sort(SortField::RegistrationStatus);
        assert_eq!(names(&visible_contacts(&contacts, &view)), vec!["Ben", "Ana"]);
    }

    #[test]
    fn test_toggle_sort_switching_field_resets_order() {
        let mut view = ViewState::default();
        view.toggle_sort(SortField::FirstName);
        assert_eq!(view.sort.order, SortOrder::Desc);
        view.toggle_sort(SortField::Email);
        assert_eq!(view.sort, SortSpec { field: SortField::Email, order: SortOrder::Asc });
    }
}
