//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod event;
pub mod contact;

// Re-export commonly used models
pub use event::{Event, EventSummary, CreateEventRequest};
pub use contact::{
    Contact, ContactDraft, ImportContactsRequest, ImportResult, ContactListQuery,
    UpdateContactRequest, BulkReviewRequest, BulkReviewOutcome, BulkFailure,
};
