//! # Solace Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! Exposes the conversation engine, the command handlers and the core
//! infrastructure to the `solace` binary and to the integration tests.
//!
pub mod commands; // Command-line handlers (chat, classify, strategy)
pub mod core; // Configuration and error types
pub mod engine; // Classification and response engine
