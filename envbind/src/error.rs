//! Error types for environment variable binding

use std::num::{ParseFloatError, ParseIntError};

/// Errors that can occur while binding environment variables into a struct.
///
/// Binding stops at the first error. Fields processed before the failing one
/// keep their new values; fields after it are left untouched.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// The target is not a struct with named fields.
    ///
    /// Raised before any field is looked at.
    #[error("Target '{type_name}' cannot be bound: {reason}")]
    BadTarget {
        /// Type name of the rejected target
        type_name: &'static str,
        /// Why the target was rejected
        reason: &'static str,
    },

    /// Environment variable is not set and the field has no default.
    ///
    /// Only reported when binding with [`crate::with_error_on_missing`].
    #[error("Environment variable '{name}' was not provided and has no default")]
    Missing {
        /// Name of the missing environment variable
        name: String,
    },

    /// Environment variable is set but its value is not valid UTF-8.
    #[error("Environment variable '{name}' is not valid unicode: {value:?}")]
    NotUnicode {
        /// Name of the environment variable
        name: String,
        /// Raw value as read from the environment
        value: std::ffi::OsString,
    },

    /// The field's declared type is not one the coercer handles.
    #[error("Environment variable '{name}' is bound to unsupported field type {type_name}")]
    Unsupported {
        /// Name of the environment variable bound to the field
        name: String,
        /// Type name of the field
        type_name: &'static str,
    },

    /// Failed to convert the raw value into the field's type.
    #[error("Failed to parse environment variable '{name}': {source}")]
    Parse {
        /// Name of the environment variable being parsed
        name: String,
        /// Underlying coercion failure
        source: CoerceError,
    },
}

impl EnvError {
    /// Create a bad target error for `T` (used by macro-generated code)
    #[doc(hidden)]
    pub fn bad_target<T: ?Sized>(reason: &'static str) -> Self {
        Self::BadTarget {
            type_name: std::any::type_name::<T>(),
            reason,
        }
    }

    /// Create a missing environment variable error
    pub fn missing(name: impl Into<String>) -> Self {
        Self::Missing { name: name.into() }
    }

    /// Create a parse error for the given variable
    pub fn parse(name: impl Into<String>, source: CoerceError) -> Self {
        Self::Parse {
            name: name.into(),
            source,
        }
    }

    /// Name of the environment variable the error is about, if any.
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            Self::BadTarget { .. } => None,
            Self::Missing { name }
            | Self::NotUnicode { name, .. }
            | Self::Unsupported { name, .. }
            | Self::Parse { name, .. } => Some(name.as_str()),
        }
    }
}

/// Why a raw string could not be converted into a typed value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoerceError {
    #[error("invalid integer: {0}")]
    Int(#[from] ParseIntError),

    #[error("invalid float: {0}")]
    Float(#[from] ParseFloatError),

    #[error("string was not clearly representative of a boolean value")]
    Bool,

    #[error("value was not encoded in standard base64")]
    Base64(#[source] base64::DecodeError),

    #[error("duration magnitude is not an integer: {0}")]
    DurationMagnitude(#[source] ParseIntError),

    /// Unit token was not one of `ns us ms s m h d w`.
    #[error("duration string had unknown unit: '{unit}'")]
    DurationUnit { unit: String },

    /// Magnitude times unit does not fit a signed 64-bit nanosecond count.
    #[error("duration {magnitude}{unit} overflows the nanosecond range")]
    DurationOverflow { magnitude: i64, unit: &'static str },

    /// The destination is a [`crate::Slot::Unsupported`] field.
    #[error("no conversion into {type_name}")]
    Unsupported { type_name: &'static str },
}
