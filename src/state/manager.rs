use serde::{Deserialize, Serialize};

use crate::models::CheckedItems;
use crate::shopping::checked_key;

/// Persisted checklist document: which items of which list version are
/// checked off.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChecklistState {
    #[serde(default)]
    pub signature: String,

    #[serde(default)]
    pub checked: CheckedItems,
}

/// Owns the checked-state of the current shopping list.
///
/// The manager knows nothing about storage; the host loads and saves the
/// `ChecklistState` document however it likes. The one rule it enforces is
/// the staleness guard: checks recorded against one list version must never
/// apply to another, so the map is reset whenever the signature changes.
pub struct ChecklistManager {
    signature: String,
    checked: CheckedItems,
}

impl ChecklistManager {
    pub fn new(state: ChecklistState) -> Self {
        Self {
            signature: state.signature,
            checked: state.checked,
        }
    }

    /// Adopt the signature of the current list, dropping all checks if it
    /// differs from the stored one. Returns true when a reset happened.
    pub fn sync_signature(&mut self, signature: &str) -> bool {
        if self.signature == signature {
            return false;
        }

        let had_checks = !self.checked.is_empty();
        self.signature = signature.to_string();
        self.checked.clear();
        had_checks
    }

    pub fn is_checked(&self, category: &str, index: usize) -> bool {
        self.checked
            .get(&checked_key(category, index))
            .copied()
            .unwrap_or(false)
    }

    /// Flip one item's checked flag; returns the new value.
    pub fn toggle(&mut self, category: &str, index: usize) -> bool {
        let value = !self.is_checked(category, index);
        self.checked.insert(checked_key(category, index), value);
        value
    }

    pub fn set(&mut self, category: &str, index: usize, value: bool) {
        self.checked.insert(checked_key(category, index), value);
    }

    /// Drop all checks, keeping the signature.
    pub fn reset(&mut self) {
        self.checked.clear();
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn checked(&self) -> &CheckedItems {
        &self.checked
    }

    pub fn to_state(&self) -> ChecklistState {
        ChecklistState {
            signature: self.signature.clone(),
            checked: self.checked.clone(),
        }
    }
}
