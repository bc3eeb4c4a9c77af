//! Property tests for the contact list view

use chrono::Utc;
use proptest::prelude::*;
use stovaspot::models::Contact;
use stovaspot::view::{matches_search, visible_contacts, SortField, SortOrder, SortSpec, ViewState};
use uuid::Uuid;

fn contact_strategy() -> impl Strategy<Value = Contact> {
    (
        "[a-zA-Zé]{0,6}",
        "[a-zA-Z]{0,6}",
        "[a-z]{0,4}@[a-z]{1,3}\\.com",
        proptest::option::of("[A-Za-z]{1,5}"),
        any::<bool>(),
    )
        .prop_map(|(first, last, email, category, reviewed)| Contact {
            id: Uuid::new_v4(),
            first_name: first,
            last_name: last,
            email,
            registration_date: None,
            last_modified_date: None,
            cancellation_date: None,
            attendee_category: category,
            registration_status: None,
            is_reviewed: reviewed,
            event_id: Uuid::nil(),
            created_at: Utc::now(),
        })
}

fn field_strategy() -> impl Strategy<Value = SortField> {
    prop_oneof![
        Just(SortField::FirstName),
        Just(SortField::LastName),
        Just(SortField::Email),
        Just(SortField::AttendeeCategory),
        Just(SortField::IsReviewed),
    ]
}

proptest! {
    #[test]
    fn visible_is_exactly_the_matching_tab(
        contacts in proptest::collection::vec(contact_strategy(), 0..20),
        term in "[a-zA-Z@.]{0,3}",
        show_reviewed in any::<bool>(),
        field in field_strategy(),
    ) {
        let view = ViewState {
            search_term: term.clone(),
            show_reviewed,
            sort: SortSpec { field, order: SortOrder::Asc },
        };
        let visible = visible_contacts(&contacts, &view);

        let expected = contacts
            .iter()
            .filter(|c| c.is_reviewed == show_reviewed && matches_search(c, &term))
            .count();
        prop_assert_eq!(visible.len(), expected);
        for contact in &visible {
            prop_assert_eq!(contact.is_reviewed, show_reviewed);
            let term = term.to_lowercase();
            prop_assert!(
                contact.first_name.to_lowercase().contains(&term)
                    || contact.last_name.to_lowercase().contains(&term)
                    || contact.email.to_lowercase().contains(&term)
            );
        }
    }

    #[test]
    fn empty_search_shows_whole_tab(
        contacts in proptest::collection::vec(contact_strategy(), 0..20),
        show_reviewed in any::<bool>(),
    ) {
        let view = ViewState { show_reviewed, ..Default::default() };
        let expected = contacts.iter().filter(|c| c.is_reviewed == show_reviewed).count();
        prop_assert_eq!(visible_contacts(&contacts, &view).len(), expected);
    }

    #[test]
    fn descending_reverses_distinct_keys(
        emails in proptest::collection::btree_set("[a-z]{1,6}@x\\.com", 1..15),
    ) {
        let contacts: Vec<Contact> = emails
            .iter()
            .map(|email| Contact {
                id: Uuid::new_v4(),
                first_name: String::new(),
                last_name: String::new(),
                email: email.clone(),
                registration_date: None,
                last_modified_date: None,
                cancellation_date: None,
                attendee_category: None,
                registration_status: None,
                is_reviewed: false,
                event_id: Uuid::nil(),
                created_at: Utc::now(),
            })
            .collect();

        let mut view = ViewState::default();
        view.toggle_sort(SortField::Email);
        let ascending: Vec<Uuid> = visible_contacts(&contacts, &view).iter().map(|c| c.id).collect();
        view.toggle_sort(SortField::Email);
        let mut descending: Vec<Uuid> = visible_contacts(&contacts, &view).iter().map(|c| c.id).collect();
        descending.reverse();

        prop_assert_eq!(ascending, descending);
    }
}
