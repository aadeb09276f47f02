//! Natural sort order encoding
//!
//! Every maximal run of ASCII decimal digits is replaced in place by the
//! 8-byte big-endian form of its value, so that `"a2"` sorts before `"a10"`
//! when the encoded bytes are compared. Runs that do not fit in a `u64` are
//! copied through unchanged and compare as plain text.

use super::scalar::put_u64;

/// Encode `input` for natural ordering
///
/// The result is not valid UTF-8 in general; use it as an opaque key.
pub fn encode_natural(input: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len() + 8);
    let mut rest = input;

    while let Some(start) = rest.find(|c: char| c.is_ascii_digit()) {
        let end = rest[start..]
            .find(|c: char| !c.is_ascii_digit())
            .map_or(rest.len(), |len| start + len);

        out.extend_from_slice(rest[..start].as_bytes());
        let digits = &rest[start..end];
        match digits.parse::<u64>() {
            Ok(number) => {
                let mut buf = [0u8; 8];
                put_u64(&mut buf, number);
                out.extend_from_slice(&buf);
            }
            Err(_) => out.extend_from_slice(digits.as_bytes()),
        }
        rest = &rest[end..];
    }

    out.extend_from_slice(rest.as_bytes());
    out
}
