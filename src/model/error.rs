//! Error types for the feedshell application.
//!
//! The core (collections, controller, layout) has no error type at all: every
//! operation there is total and degrades to a no-op. Errors only exist at the
//! shell boundary and are composed here with `thiserror`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - [`InvalidEntityId`] - Seed data carried an empty id
//!   - [`ConfigError`] - Config file unreadable or not valid TOML
//!   - [`LoggingError`] - Log directory or subscriber setup failed
//!   - [`TuiError`] - Event loop or drawing failed
//!   - `std::io::Error` - Terminal setup failed

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::model::identifiers::InvalidEntityId;
use crate::view::TuiError;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
///
/// All are fatal: the process restores the terminal and exits non-zero.
#[derive(Debug, Error)]
pub enum AppError {
    /// Seed dataset contained an invalid identifier.
    #[error("Invalid seed data: {0}")]
    Seed(#[from] InvalidEntityId),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Event loop or drawing failed.
    #[error("TUI error: {0}")]
    Tui(#[from] TuiError),

    /// Malformed `--layout` argument.
    #[error("Invalid viewport '{0}': expected WIDTHxHEIGHT, e.g. 1920x1080")]
    InvalidViewport(String),
}
