//! Configuration module for the cashback votes client.
//! Reads settings from the environment and wires up the vote API and session.
mod dependencies;

pub use dependencies::{ClientConfig, Dependencies};
