//! Core library components.
//!
//! This module contains the symmetric cryptography core: the data model,
//! cipher providers, request resolution and the orchestrator, plus the
//! configuration handling the command line builds on.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod events;
pub mod orchestrator;
pub mod prompt;
pub mod resolve;
pub mod types;

pub use orchestrator::Orchestrator;
