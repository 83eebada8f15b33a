//! # Cashback Votes Engine
//! This crate defines the optimistic vote model shared by cashback entries and
//! rate suggestions.
//! It includes the pure vote transition engine, the controller that owns a
//! votable's local state and talks to the `VoteApi`, the explicit session
//! context and the user-facing signals, along with error handling.
pub mod controller;
pub mod session;
pub mod signals;
pub mod transition;

pub mod errors;

pub use controller::{PendingVote, VoteController, VoteOutcome};
pub use errors::VoteError;
pub use session::Session;
pub use signals::{RecordingSink, SignalSink, VoteSignal};
pub use transition::{TransitionKind, VoteTransition, apply_vote, parse_direction};
