//! Session phases and turn outcomes.

use serde::{Deserialize, Serialize};
use vibecoder_core::GenerationResult;

/// Review sub-state after a result arrives.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Feedback {
    /// Result shown, no answer from the user yet
    #[default]
    #[display("awaiting feedback")]
    AwaitingFeedback,
    /// The user accepted the script
    #[display("satisfied")]
    Satisfied,
    /// The user asked for changes
    #[display("refining")]
    Refining,
}

/// Where a session is in its lifecycle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum SessionPhase {
    /// Nothing submitted
    #[default]
    #[display("idle")]
    Idle,
    /// A request is in flight
    #[display("generating (turn {})", sequence)]
    Generating {
        /// Sequence number of the in-flight request
        sequence: u64,
    },
    /// A result is on screen
    #[display("reviewed ({})", feedback)]
    Reviewed {
        /// Feedback sub-state
        feedback: Feedback,
    },
}

impl SessionPhase {
    /// Whether a request is in flight.
    pub fn is_generating(&self) -> bool {
        matches!(self, Self::Generating { .. })
    }
}

/// What happened to a submitted turn.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// The result was applied to the session
    Completed(GenerationResult),
    /// A request was already in flight; nothing was sent
    Ignored,
    /// The session moved on before the result arrived; it was discarded
    Stale,
}

impl TurnOutcome {
    /// The applied result, if any.
    pub fn result(&self) -> Option<&GenerationResult> {
        match self {
            Self::Completed(result) => Some(result),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(SessionPhase::Idle.to_string(), "idle");
        assert_eq!(
            SessionPhase::Generating { sequence: 3 }.to_string(),
            "generating (turn 3)"
        );
        assert_eq!(
            SessionPhase::Reviewed {
                feedback: Feedback::Refining
            }
            .to_string(),
            "reviewed (refining)"
        );
    }
}
