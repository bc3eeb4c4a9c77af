//! Client-side contact review view
//!
//! This module contains the list filtering and sorting, the checkbox
//! selection and the controller that applies review changes optimistically.

pub mod backend;
pub mod controller;
pub mod list;
pub mod selection;
pub mod tentative;

pub use backend::ReviewBackend;
pub use controller::ContactListController;
pub use list::{compare_by, locale_compare, matches_search, visible_contacts, SortField, SortOrder, SortSpec, ViewState};
pub use selection::Selection;
pub use tentative::apply_tentatively;
