//! Logging utilities.
//!
//! Centralizes logger initialization. Library code only ever talks to the
//! standard `log` facade; applications call [`init_logging`] once early in
//! `main` (or install their own backend instead).

mod init;

pub use init::{init_logging, LoggingConfig};
