//! Generation session controller for VibeCoder.
//!
//! One [`SessionController`] drives a single describe-then-generate
//! conversation: submit a prompt, wait for the result while an elapsed-time
//! ticker runs, give feedback, refine, and optionally save or publish the
//! script through Drive.
//!
//! ```text
//! Idle --submit--> Generating --resolve--> Reviewed(AwaitingFeedback)
//!                                             |-- feedback(true)  --> Reviewed(Satisfied)
//!                                             `-- feedback(false) --> Reviewed(Refining)
//! Reviewed(Refining) --submit_refine--> Generating
//! any --reset--> Idle
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod controller;
mod phase;
mod settings;
mod ticker;

pub use controller::{PendingTurn, SessionController, SessionState};
pub use phase::{Feedback, SessionPhase, TurnOutcome};
pub use settings::TurnSettings;
