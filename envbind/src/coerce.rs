//! Conversion of raw environment strings into typed field values
//!
//! Each supported kind has its own grammar:
//!
//! | Kind     | Accepted input                                             |
//! |----------|------------------------------------------------------------|
//! | integer  | base-10 signed integer that fits the field's width         |
//! | float    | base-10 float, scientific notation allowed                 |
//! | bool     | `t`, `true`, `1`, `f`, `false`, `0` (any case)             |
//! | string   | anything                                                   |
//! | bytes    | standard base64 with padding                               |
//! | duration | `<integer><unit>` with unit one of `ns us ms s m h d w`    |

use std::str::FromStr;
use std::time::Duration;

use base64::engine::general_purpose;
use base64::Engine;

use crate::error::CoerceError;
use crate::field::{FloatSlot, IntSlot, Slot};

const NANOS_PER_MICRO: i64 = 1_000;
const NANOS_PER_MILLI: i64 = 1_000_000;
const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;
const NANOS_PER_DAY: i64 = 24 * NANOS_PER_HOUR;
const NANOS_PER_WEEK: i64 = 7 * NANOS_PER_DAY;

/// Write `raw` into `slot`, converting it to the slot's kind.
///
/// Fails with [`CoerceError::Unsupported`] for [`Slot::Unsupported`].
pub fn coerce(slot: Slot<'_>, raw: &str) -> Result<(), CoerceError> {
    match slot {
        Slot::Int(IntSlot::I8(v)) => *v = parse_int(raw)?,
        Slot::Int(IntSlot::I16(v)) => *v = parse_int(raw)?,
        Slot::Int(IntSlot::I32(v)) => *v = parse_int(raw)?,
        Slot::Int(IntSlot::I64(v)) => *v = parse_int(raw)?,
        Slot::Int(IntSlot::Isize(v)) => *v = parse_int(raw)?,
        Slot::Float(FloatSlot::F32(v)) => *v = parse_float(raw)?,
        Slot::Float(FloatSlot::F64(v)) => *v = parse_float(raw)?,
        Slot::Bool(v) => *v = parse_bool(raw)?,
        Slot::String(v) => raw.clone_into(v),
        Slot::Bytes(v) => *v = decode_bytes(raw)?,
        Slot::Duration(v) => *v = parse_duration(raw)?,
        Slot::Unsupported { type_name } => return Err(CoerceError::Unsupported { type_name }),
    }
    Ok(())
}

/// Parse a base-10 signed integer. Values outside `T`'s range are rejected.
pub fn parse_int<T>(raw: &str) -> Result<T, CoerceError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    Ok(raw.parse::<T>()?)
}

pub fn parse_float<T>(raw: &str) -> Result<T, CoerceError>
where
    T: FromStr<Err = std::num::ParseFloatError>,
{
    Ok(raw.parse::<T>()?)
}

/// Parse a boolean from a closed, case-insensitive vocabulary.
pub fn parse_bool(raw: &str) -> Result<bool, CoerceError> {
    const TRUE: [&str; 3] = ["t", "true", "1"];
    const FALSE: [&str; 3] = ["f", "false", "0"];

    if TRUE.iter().any(|word| raw.eq_ignore_ascii_case(word)) {
        Ok(true)
    } else if FALSE.iter().any(|word| raw.eq_ignore_ascii_case(word)) {
        Ok(false)
    } else {
        Err(CoerceError::Bool)
    }
}

/// Decode standard-alphabet, padded base64.
pub fn decode_bytes(raw: &str) -> Result<Vec<u8>, CoerceError> {
    general_purpose::STANDARD
        .decode(raw)
        .map_err(CoerceError::Base64)
}

/// Parse `<integer><unit>` into a [`Duration`].
///
/// The magnitude is everything before the first non-digit; the unit is the
/// rest and must match one of `ns us ms s m h d w` exactly. A string with no
/// unit is rejected. The product must fit in `i64` nanoseconds.
pub fn parse_duration(raw: &str) -> Result<Duration, CoerceError> {
    let split = raw
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(raw.len());
    let (magnitude, unit) = raw.split_at(split);

    let magnitude: i64 = magnitude
        .parse()
        .map_err(CoerceError::DurationMagnitude)?;

    let (unit, nanos_per_unit): (&'static str, i64) = match unit {
        "ns" => ("ns", 1),
        "us" => ("us", NANOS_PER_MICRO),
        "ms" => ("ms", NANOS_PER_MILLI),
        "s" => ("s", NANOS_PER_SECOND),
        "m" => ("m", NANOS_PER_MINUTE),
        "h" => ("h", NANOS_PER_HOUR),
        "d" => ("d", NANOS_PER_DAY),
        "w" => ("w", NANOS_PER_WEEK),
        other => {
            return Err(CoerceError::DurationUnit {
                unit: other.to_string(),
            })
        }
    };

    let nanos = magnitude
        .checked_mul(nanos_per_unit)
        .ok_or(CoerceError::DurationOverflow { magnitude, unit })?;

    // The magnitude holds only digits, so the product is never negative.
    Ok(Duration::from_nanos(nanos.unsigned_abs()))
}
