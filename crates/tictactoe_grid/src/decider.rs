//! Turn alternation.

use crate::shape::ShapeKind;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Hands out the kind of mark for each placement, alternating strictly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeDecider {
    current: ShapeKind,
}

impl ShapeDecider {
    /// Creates a decider whose first call to [`next`](Self::next) returns `first`.
    #[instrument]
    pub fn new(first: ShapeKind) -> Self {
        Self { current: first }
    }

    /// Returns the kind for the upcoming placement and passes the turn.
    #[instrument(skip(self), fields(kind = %self.current))]
    pub fn next(&mut self) -> ShapeKind {
        let kind = self.current;
        self.current = kind.opponent();
        kind
    }

    /// Returns the kind the next call to [`next`](Self::next) will hand out.
    pub fn peek(&self) -> ShapeKind {
        self.current
    }
}

impl Default for ShapeDecider {
    fn default() -> Self {
        Self::new(ShapeKind::Cross)
    }
}
