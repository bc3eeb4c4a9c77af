//! Checkbox selection over the visible contacts

use std::collections::HashSet;
use uuid::Uuid;
use crate::models::Contact;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<Uuid>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: Uuid) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Header checkbox: clear when everything visible is already selected,
    /// otherwise select exactly the visible contacts.
    pub fn toggle_all(&mut self, visible: &[&Contact]) {
        if self.covers(visible) {
            self.ids.clear();
        } else {
            self.ids = visible.iter().map(|c| c.id).collect();
        }
    }

    /// Whether the header checkbox shows as checked
    pub fn covers(&self, visible: &[&Contact]) -> bool {
        !visible.is_empty()
            && self.ids.len() == visible.len()
            && visible.iter().all(|c| self.ids.contains(&c.id))
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> Vec<Uuid> {
        self.ids.iter().copied().collect()
    }
}
