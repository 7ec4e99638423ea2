//! Bind environment variables into typed configuration fields
//!
//! `envbind` fills the fields of a configuration struct from environment
//! variables. Each bound field names its variable and, optionally, a literal
//! default; the raw string is then converted to the field's type.
//!
//! # Features
//!
//! - **Declarative**: Field tables generated with `#[derive(EnvConfig)]`
//! - **Tag-style defaults**: Defaults are plain strings parsed like any value
//! - **Durations**: `30s`, `15m`, `2d`, `1w` and friends
//! - **Byte buffers**: Base64 encoded secrets decode into `Vec<u8>`
//! - **Fail fast**: The first bad or missing variable stops the pass
//!
//! # Supported Types
//!
//! | Field type                   | Accepted values                              |
//! |------------------------------|----------------------------------------------|
//! | `i8` `i16` `i32` `i64` `isize` | base-10 integers that fit the type         |
//! | `f32` `f64`                  | decimal or scientific notation               |
//! | `bool`                       | `t` `true` `1` / `f` `false` `0`, any case   |
//! | `String`                     | anything                                     |
//! | `Vec<u8>`                    | standard base64 with padding                 |
//! | `std::time::Duration`        | `<integer><unit>`, unit in `ns us ms s m h d w` |
//!
//! Other field types can still be declared but fail with
//! [`EnvError::Unsupported`] once a value is found for them.
//!
//! # Example
//!
//! ```rust
//! use envbind::EnvConfig;
//! use std::time::Duration;
//!
//! #[derive(Debug, Default, EnvConfig)]
//! struct Config {
//!     #[env(name = "EC_INTERVAL", default = "100")]
//!     pub interval: i64,
//!
//!     #[env(name = "EC_TIMEOUT", default = "30s")]
//!     pub timeout: Duration,
//!
//!     #[env(name = "EC_ENABLE", default = "t")]
//!     pub enabled: bool,
//!
//!     // Not bound to any variable
//!     pub retries: i32,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::remove_var("EC_INTERVAL");
//! #     std::env::remove_var("EC_TIMEOUT");
//! #     std::env::remove_var("EC_ENABLE");
//! let config = Config::from_env()?;
//! assert_eq!(config.interval, 100);
//! assert_eq!(config.timeout, Duration::from_secs(30));
//! #     Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[env(name = "NAME", default = "value")]`
//!
//! Bind a field to `NAME`. When `NAME` is unset or empty, `value` is used.
//! Defaults are always string literals and go through the same conversion
//! as environment values.
//!
//! ## `#[env]`
//!
//! Bind a field to its own name in upper case.
//!
//! ## `#[env(prefix = "APP_")]` on the struct
//!
//! Prepend `APP_` to every variable name in the struct.
//!
//! # Missing Values
//!
//! A bound field with neither a value nor a default keeps whatever value it
//! already had. Pass [`with_error_on_missing`] to make that an error instead:
//!
//! ```rust
//! use envbind::{apply, with_error_on_missing, EnvConfig, EnvError};
//!
//! #[derive(Default, EnvConfig)]
//! struct Config {
//!     #[env(name = "EC_SOMETHING_UNSET")]
//!     pub something: String,
//! }
//!
//! let mut config = Config::default();
//! let result = apply(&mut config, &[with_error_on_missing()]);
//! assert!(matches!(result, Err(EnvError::Missing { .. })));
//! ```

pub mod coerce;
mod env;
mod error;
mod field;
mod options;
mod populate;

pub use env::{Environment, ProcessEnv};
pub use envbind_derive::EnvConfig;
pub use error::{CoerceError, EnvError};
pub use field::{Bindable, Field, FieldDescriptor, FieldKind, FloatSlot, IntSlot, Slot};
pub use options::{with_error_on_missing, ConfigOption, Options};
pub use populate::{apply, apply_with_env, EnvConfig};
