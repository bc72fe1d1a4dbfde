//! CLI command implementations.

pub mod args;
pub mod output;

pub mod create;
pub mod list;
pub mod tags;
pub mod tree;

pub use args::{Cli, Commands};
pub use output::Output;
