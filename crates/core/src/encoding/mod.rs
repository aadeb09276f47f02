//! Sortable binary encodings
//!
//! Byte representations whose lexicographic order matches a logical order
//! of the source value, for use as container keys:
//! - [`natural`]: strings ordered with embedded numbers compared numerically
//! - [`time`]: UTC instants packed into 9 bytes, ordered chronologically
//! - [`scalar`]: the fixed-width big-endian integer packing both rely on

pub mod natural;
pub mod scalar;
pub mod time;

pub use natural::encode_natural;
pub use time::{decode_time, encode_time, put_time, TIME_BYTES_LEN};
