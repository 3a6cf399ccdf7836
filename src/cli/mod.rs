//! Command-line interface module.

mod args;
pub mod common;
pub mod data;
pub mod image;
pub mod text;

pub use args::{Cli, Commands};
