//! Command-line surface, persistence, configuration and error types

/// Command-line parsing and command dispatch
pub mod cli;
/// Constants and defaults shared across the crate
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Durable storage of pattern and progress pairs
pub mod persistence;
/// Terminal progress display for background generation
pub mod progress;
