//! ToolForge - text, data and image utilities.
//!
//! Every transform is a plain function over strings or bytes; image
//! transforms are `async` and run their pixel work on tokio's blocking pool.
//!
//! - [`text`]: statistics and case conversion
//! - [`json`]: format, minify, validate
//! - [`codec`]: Base64 and UUID
//! - [`image`]: compress, resize, convert, dimensions, file sizes

pub mod codec;
pub mod config;
pub mod error;
pub mod image;
pub mod json;
pub mod logger;
pub mod text;
pub mod utils;

pub use self::error::{Result, ToolError, ValidationResult};
