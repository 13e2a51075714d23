//! Win tally for the lifetime of the process.

use crate::shape::ShapeKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Cumulative win count per mark kind, keyed by the kind's identifier.
///
/// Counts only grow. Board resets leave them untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreKeeper {
    wins: BTreeMap<String, u32>,
}

impl ScoreKeeper {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the win count for `kind`, 0 if it never won.
    pub fn get(&self, kind: &str) -> u32 {
        self.wins.get(kind).copied().unwrap_or(0)
    }

    /// Returns the win count for a mark kind.
    pub fn get_kind(&self, kind: ShapeKind) -> u32 {
        self.get(kind.as_str())
    }

    /// Records one more win for `kind`.
    #[instrument(skip(self))]
    pub(crate) fn increment(&mut self, kind: &str) {
        let count = self.wins.entry(kind.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        debug!(count = *count, "Score updated");
    }

    /// Recorded entries in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.wins.iter().map(|(kind, count)| (kind.as_str(), *count))
    }
}
