//! # Cashback Votes Shared
//! This crate defines shared data structures and types used across the cashback votes crates.
//! It includes common definitions for vote states and directions, vote counts, votables,
//! their moderation statuses, server snapshots and vote confirmations.
pub mod errors;
pub mod types;

pub use errors::SharedTypeError;
