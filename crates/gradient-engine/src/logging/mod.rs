//! Logger setup for binaries embedding the engine.
//!
//! The engine itself only talks to the `log` facade; `init_logging` wires up
//! `env_logger` as the backend.

mod init;

pub use init::{init_logging, LoggingConfig};
