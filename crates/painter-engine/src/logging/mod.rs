//! `env_logger` setup behind the `log` facade used across the workspace.

mod init;

pub use init::{init_logging, LoggingConfig};
