//! Core types - process-wide state shared across commands.

mod state;

pub use state::{RunGuard, is_shutdown, setup_shutdown_handler};
