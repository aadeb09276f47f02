//! Sortable UTC timestamp encoding
//!
//! Layout (9 bytes, big-endian):
//!
//! ```text
//! [0..2]  year + 32768 as u16
//! [2..9]  nanoseconds since January 1st of that year as u56
//! ```
//!
//! The year shift keeps negative years ordered below positive ones when
//! compared unsigned. Years from -32767 to 32767 round-trip exactly; a
//! year's worth of nanoseconds (about 3.2e16) fits well inside 2^56.
//!
//! Leap seconds (`23:59:60.x`) have no slot of their own in this layout.
//! They are folded into the last nanosecond of the preceding second, so
//! they sort after every earlier instant and before the next day, but
//! decode as `23:59:59.999999999`.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Timelike, Utc};

use super::scalar::{get_u16, get_u56, put_u16, put_u56, U56_LEN};
use crate::error::EncodingError;

/// Length of an encoded timestamp
pub const TIME_BYTES_LEN: usize = 9;

const YEAR_SHIFT: i32 = i16::MAX as i32 + 1;

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Encode `t` as 9 sortable bytes
///
/// Years outside -32767..=32767 wrap around in the year field and no
/// longer sort or decode correctly.
pub fn encode_time<Tz: TimeZone>(t: &DateTime<Tz>) -> [u8; TIME_BYTES_LEN] {
    let mut buf = [0u8; TIME_BYTES_LEN];
    write_time(&mut buf, t);
    buf
}

/// Encode `t` into `buf`, which must be exactly [`TIME_BYTES_LEN`] long
pub fn put_time<Tz: TimeZone>(buf: &mut [u8], t: &DateTime<Tz>) -> Result<(), EncodingError> {
    let actual = buf.len();
    let buf: &mut [u8; TIME_BYTES_LEN] =
        buf.try_into().map_err(|_| EncodingError::InvalidLength {
            expected: TIME_BYTES_LEN,
            actual,
        })?;
    write_time(buf, t);
    Ok(())
}

/// Decode 9 bytes produced by [`encode_time`]
pub fn decode_time(buf: &[u8]) -> Result<DateTime<Utc>, EncodingError> {
    let buf: &[u8; TIME_BYTES_LEN] = buf.try_into().map_err(|_| EncodingError::InvalidLength {
        expected: TIME_BYTES_LEN,
        actual: buf.len(),
    })?;
    let year_field = [buf[0], buf[1]];
    let mut nanos_field = [0u8; U56_LEN];
    nanos_field.copy_from_slice(&buf[2..]);

    let mut year = i32::from(get_u16(&year_field));
    // A raw field of 0 decodes to the same year as 1.
    if year > 0 {
        year -= 1;
    }
    year -= i32::from(i16::MAX);

    let nanos = get_u56(&nanos_field);
    let start = NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or(EncodingError::OutOfRange)?;
    let instant = start
        .checked_add_signed(Duration::nanoseconds(nanos as i64))
        .ok_or(EncodingError::OutOfRange)?;
    Ok(Utc.from_utc_datetime(&instant))
}

fn write_time<Tz: TimeZone>(buf: &mut [u8; TIME_BYTES_LEN], t: &DateTime<Tz>) {
    let utc = t.naive_utc();
    let seconds = u64::from(utc.ordinal0()) * 86_400 + u64::from(utc.num_seconds_from_midnight());
    let subsec = u64::from(utc.nanosecond()).min(NANOS_PER_SEC - 1);
    let nanos = seconds * NANOS_PER_SEC + subsec;

    let mut year_field = [0u8; 2];
    let mut nanos_field = [0u8; U56_LEN];
    put_u16(&mut year_field, (utc.year() + YEAR_SHIFT) as u16);
    put_u56(&mut nanos_field, nanos);

    buf[..2].copy_from_slice(&year_field);
    buf[2..].copy_from_slice(&nanos_field);
}
