//! # Cashback Votes API
//! This crate provides the trait and implementations for talking to the cashback
//! directory backend about votes.
//!
//! - [`VoteApi`] trait abstracting snapshot fetches and vote casting
//! - [`HttpVoteApi`] production client over `reqwest`
//! - [`MockVoteApi`] in-memory backend double for tests and local development
pub mod errors;
pub mod http;
pub mod interfaces;
pub mod mock;

pub use errors::{ApiError, MockFailure};
pub use http::HttpVoteApi;
pub use interfaces::VoteApi;
pub use mock::MockVoteApi;
