//! Logging utilities.
//!
//! Centralizes logger initialization for binaries built on the library.
//! The libraries themselves only use the `log` facade.

mod init;

pub use init::{LoggingConfig, init_logging};
