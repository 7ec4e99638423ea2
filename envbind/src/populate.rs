//! The binding pass over a struct's fields

use crate::coerce::coerce;
use crate::env::{Environment, ProcessEnv};
use crate::error::{CoerceError, EnvError};
use crate::field::Field;
use crate::options::{ConfigOption, Options};

/// A struct whose fields can be bound to environment variables.
///
/// Usually implemented with `#[derive(EnvConfig)]`. A hand-written
/// implementation returns one [`Field`] per bound struct field, in
/// declaration order:
///
/// ```rust
/// use envbind::{EnvConfig, EnvError, Field};
///
/// #[derive(Default)]
/// struct Config {
///     port: i32,
///     name: String,
/// }
///
/// impl EnvConfig for Config {
///     fn fields(&mut self) -> Result<Vec<Field<'_>>, EnvError> {
///         Ok(vec![
///             Field::bind("APP_PORT", &mut self.port).with_default("8080"),
///             Field::bind("APP_NAME", &mut self.name),
///         ])
///     }
/// }
///
/// # fn main() -> anyhow::Result<()> {
/// #     let config = Config::from_env()?;
/// #     assert_eq!(config.port, 8080);
/// #     Ok(())
/// # }
/// ```
pub trait EnvConfig {
    /// Field table for this value.
    ///
    /// Fails with [`EnvError::BadTarget`] if the value is not a struct with
    /// named fields.
    fn fields(&mut self) -> Result<Vec<Field<'_>>, EnvError>;

    /// Build `Self::default()` and bind it from the process environment.
    fn from_env() -> Result<Self, EnvError>
    where
        Self: Default + Sized,
    {
        Self::from_env_with(&[])
    }

    /// Like [`EnvConfig::from_env`], with options.
    fn from_env_with(options: &[ConfigOption]) -> Result<Self, EnvError>
    where
        Self: Default + Sized,
    {
        let mut config = Self::default();
        apply(&mut config, options)?;
        Ok(config)
    }
}

/// Bind `target`'s fields from the process environment.
///
/// Fields are processed in declaration order and the pass stops at the first
/// error. See [`apply_with_env`] for the exact rules.
pub fn apply<T>(target: &mut T, options: &[ConfigOption]) -> Result<(), EnvError>
where
    T: EnvConfig + ?Sized,
{
    apply_with_env(target, &ProcessEnv, options)
}

/// Bind `target`'s fields from `env`.
///
/// For every field with a non-empty variable name:
///
/// 1. The raw value is the variable's value, or the field's default when the
///    variable is unset or empty.
/// 2. If there is still no value, the field is skipped, or the pass fails with
///    [`EnvError::Missing`] when [`crate::with_error_on_missing`] was given.
/// 3. Otherwise the value is converted to the field's type and written.
///    Conversion failures are returned as [`EnvError::Parse`].
///
/// Fields bound before a failure keep their new values.
pub fn apply_with_env<T, E>(
    target: &mut T,
    env: &E,
    options: &[ConfigOption],
) -> Result<(), EnvError>
where
    T: EnvConfig + ?Sized,
    E: Environment + ?Sized,
{
    let options: Options = options.iter().copied().collect();
    let fields = target.fields()?;

    tracing::trace!(fields = fields.len(), ?options, "binding environment");
    for field in fields {
        bind_field(field, env, &options)?;
    }
    tracing::trace!("environment bound");

    Ok(())
}

fn bind_field<E>(field: Field<'_>, env: &E, options: &Options) -> Result<(), EnvError>
where
    E: Environment + ?Sized,
{
    let (descriptor, slot) = field.into_parts();
    let name = descriptor.variable_name;
    if name.is_empty() {
        return Ok(());
    }

    let raw = match env.lookup(&name)?.filter(|value| !value.is_empty()) {
        Some(value) => {
            tracing::debug!(variable = %name, "using environment value");
            value
        }
        None => match descriptor.default_value.filter(|value| !value.is_empty()) {
            Some(value) => {
                tracing::debug!(variable = %name, "using default value");
                value.into_owned()
            }
            None if options.error_on_missing() => return Err(EnvError::missing(name)),
            None => {
                tracing::debug!(variable = %name, "no value or default, skipping");
                return Ok(());
            }
        },
    };

    coerce(slot, &raw).map_err(|e| match e {
        CoerceError::Unsupported { type_name } => EnvError::Unsupported {
            name: name.into_owned(),
            type_name,
        },
        e => EnvError::parse(name, e),
    })
}
