//! Text codecs and identifier generation.
//!
//! - [`base64`]: UTF-8 safe Base64 encode/decode
//! - [`uuid`]: v4 UUID generation and validation

pub mod base64;
pub mod uuid;

pub use self::base64::{decode_base64, encode_base64};
pub use self::uuid::{generate_multiple_uuids, generate_uuid, is_valid_uuid};
