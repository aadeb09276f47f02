//! Core types and traits for nestkv
//!
//! This crate defines the foundational pieces used throughout the system:
//! - Error: error taxonomy shared by the store, resolver and facade
//! - Container: trait describing one level of a nested container store
//! - Limits: key, value and nesting limits enforced by stores
//! - path: diagnostic path formatting for errors
//! - encoding: sortable natural-order and timestamp encodings

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod encoding;
pub mod error;
pub mod limits;
pub mod path;
pub mod traits;

pub use encoding::{decode_time, encode_natural, encode_time, put_time, TIME_BYTES_LEN};
pub use error::{EncodingError, Error, Result, StoreError};
pub use limits::Limits;
pub use path::{display_path, display_path_with};
pub use traits::Container;
