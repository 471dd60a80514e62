//! Command-line interface module.

mod args;
pub mod links;
pub mod resize;
pub mod setup;

pub use args::{Cli, Commands, LinksArgs, ResizeArgs, SetupArgs};
