//! Notified-state model

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Issue keys that have already been announced to the chat.
///
/// Kept between runs so a polling cadence does not re-send the same
/// reminder every cycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct NotifiedState {
    keys: BTreeSet<String>,
}

impl NotifiedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Record an issue key as announced
    pub fn mark(&mut self, key: String) {
        self.keys.insert(key);
    }

    /// Forget every announced key
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Keep only keys for which `is_current` returns true.
    ///
    /// Used to drop issues that were resolved since the last poll, so a
    /// reopened issue triggers a fresh reminder.
    pub fn retain<F>(&mut self, mut is_current: F)
    where
        F: FnMut(&String) -> bool,
    {
        self.keys.retain(|key| is_current(key));
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.keys.iter()
    }
}
