//! Database repositories module
//!
//! PostgreSQL implementations of the storage traits

pub mod event;
pub mod contact;

// Re-export repositories
pub use event::EventRepository;
pub use contact::ContactRepository;
