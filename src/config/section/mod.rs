//! Configuration section definitions.
//!
//! Each module corresponds to a section in `toolforge.toml`:
//!
//! | Module  | TOML Section | Purpose                                 |
//! |---------|--------------|-----------------------------------------|
//! | `text`  | `[text]`     | Reading speed for text statistics       |
//! | `json`  | `[json]`     | Default indentation                     |
//! | `image` | `[image]`    | Upload limit, quality, resize defaults  |
//! | `uuid`  | `[uuid]`     | Batch size limit                        |

mod image;
mod json;
mod text;
mod uuid;

pub use self::image::ImageConfig;
pub use self::json::JsonConfig;
pub use self::text::TextConfig;
pub use self::uuid::UuidConfig;
