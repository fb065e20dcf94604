//! Logging setup.
//!
//! The crate itself only emits through the `log` facade; binaries call
//! [`init_logging`] early in `main` to route records to `env_logger`.

mod init;

pub use init::{LoggingConfig, init_logging};
