//! Fixed-width big-endian unsigned integers
//!
//! Big-endian layout makes byte-wise comparison agree with numeric order.

use byteorder::{BigEndian, ByteOrder};

/// Width of a packed 56-bit integer
pub const U56_LEN: usize = 7;

/// Largest value a 56-bit field can hold
pub const U56_MAX: u64 = (1 << 56) - 1;

/// Pack the low 56 bits of `v` into `buf`
///
/// Higher bits are discarded.
pub fn put_u56(buf: &mut [u8; U56_LEN], v: u64) {
    BigEndian::write_uint(buf, v & U56_MAX, U56_LEN);
}

/// Unpack a 56-bit integer
pub fn get_u56(buf: &[u8; U56_LEN]) -> u64 {
    BigEndian::read_uint(buf, U56_LEN)
}

/// Pack a 16-bit integer
pub fn put_u16(buf: &mut [u8; 2], v: u16) {
    BigEndian::write_u16(buf, v);
}

/// Unpack a 16-bit integer
pub fn get_u16(buf: &[u8; 2]) -> u16 {
    BigEndian::read_u16(buf)
}

/// Pack a 64-bit integer
pub fn put_u64(buf: &mut [u8; 8], v: u64) {
    BigEndian::write_u64(buf, v);
}
