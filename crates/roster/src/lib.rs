//! # Investor Roster
//!
//! The ordered, editable list of investors that the calculation engine reads.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 State:** The roster owns entries and nothing else. It performs no
//!   calculations and never interprets the numeric text it stores.
//! - **Total Operations:** `add`, `update` and `remove` never fail. Edits and
//!   removals that name an unknown id leave the roster untouched.
//! - **Stable Ids:** Ids come from a counter that only moves forward, so a removed
//!   id is never handed out again and the remaining entries keep their ids.

use core_types::{FieldUpdate, InvestorEntry, InvestorId};

/// An insertion-ordered collection of `InvestorEntry` rows keyed by `InvestorId`.
#[derive(Debug, Clone)]
pub struct Roster {
    entries: Vec<InvestorEntry>,
    next_id: u64,
}

impl Roster {
    /// Creates an empty roster. The first id handed out is `1`.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Appends an entry with default fields and returns its freshly assigned id.
    pub fn add(&mut self) -> InvestorId {
        let id = InvestorId(self.next_id);
        self.next_id += 1;
        self.entries.push(InvestorEntry::new(id));
        tracing::debug!(%id, size = self.entries.len(), "Investor added.");
        id
    }

    /// Applies `update` to the entry with the given id.
    ///
    /// Returns `false` and leaves the roster unchanged if no entry has that id.
    pub fn update(&mut self, id: InvestorId, update: FieldUpdate) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                tracing::debug!(%id, ?update, "Investor updated.");
                entry.apply(update);
                true
            }
            None => {
                tracing::debug!(%id, "Update ignored, no such investor.");
                false
            }
        }
    }

    /// Removes the entry with the given id, returning whether one was removed.
    pub fn remove(&mut self, id: InvestorId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = self.entries.len() != before;
        if removed {
            tracing::debug!(%id, size = self.entries.len(), "Investor removed.");
        } else {
            tracing::debug!(%id, "Remove ignored, no such investor.");
        }
        removed
    }

    /// The current entries in insertion order.
    pub fn entries(&self) -> &[InvestorEntry] {
        &self.entries
    }

    pub fn get(&self, id: InvestorId) -> Option<&InvestorEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
