//! Image processing utilities.
//!
//! # Modules
//!
//! - [`transform`]: compress, resize and convert (async)
//! - [`dimensions`]: resize target arithmetic
//! - [`file`]: in-memory image files and upload validation
//! - [`format`]: supported raster formats
//! - [`size`]: human readable byte sizes

pub mod dimensions;
pub mod file;
pub mod format;
pub mod size;
pub mod transform;

pub use dimensions::{Dimensions, get_image_dimensions};
pub use file::{DEFAULT_MAX_FILE_SIZE, ImageFile, validate_image_file};
pub use format::ImageFormatKind;
pub use size::format_file_size;
pub use transform::{CompressionResult, compress_image, convert_image, resize_image};
