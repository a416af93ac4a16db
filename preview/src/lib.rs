//! # Gridtint Inspector Library
//!
//! Headless front end for the `themes` engine: loads options from layered
//! configuration, builds the engine over an in-memory backend and reports
//! the attributes each render context resolves to.
//!
//! ## Modules
//!
//! - [`app`] - Report flow shared by the binary and the integration tests
//! - [`cli`] - Command-line arguments
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Error types
//! - [`logger`] - Logging configuration
//! - [`render`] - Text and JSON reports

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod render;
