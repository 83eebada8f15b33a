//! `reqwest` implementation of the `VoteApi` trait.
mod client;
mod payload;

pub use client::HttpVoteApi;
