//! Cashback Votes Library
//!
//! This library provides the command-line vote client: argument parsing,
//! configuration and dependency wiring, logging of user-facing signals and
//! the flow that loads a votable and casts one vote on it.

pub mod cli;
pub mod config;
pub mod errors;
pub mod runner;
pub mod signals;

pub use cli::{Target, VoteCommand};
pub use config::{ClientConfig, Dependencies};
pub use errors::AppError;
pub use runner::run_vote;
pub use signals::TracingSink;
