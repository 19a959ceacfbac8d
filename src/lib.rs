// ABOUTME: Library root for firedeploy - exposes deploy orchestration for testing.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod deploy;
pub mod diagnostics;
pub mod error;
pub mod output;
pub mod tool;
pub mod types;
