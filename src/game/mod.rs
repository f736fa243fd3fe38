//! Playing a puzzle: move rules and session state

pub mod rules;
pub mod session;

pub use rules::{check_move, is_valid_move};
pub use session::{Session, SubmitOutcome};
