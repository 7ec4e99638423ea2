//! Options controlling a binding pass

/// A single option passed to [`crate::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigOption {
    /// See [`with_error_on_missing`].
    ErrorOnMissing,
}

/// Fail when a bound variable is unset and its field has no default.
///
/// Without this option such fields are skipped and keep their current value.
pub fn with_error_on_missing() -> ConfigOption {
    ConfigOption::ErrorOnMissing
}

/// Resolved options for one binding pass.
///
/// Built from [`ConfigOption`]s with `collect`; read-only afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    error_on_missing: bool,
}

impl Options {
    /// Whether a bound variable with no value and no default is an error.
    pub fn error_on_missing(&self) -> bool {
        self.error_on_missing
    }

    fn set(&mut self, option: ConfigOption) {
        match option {
            ConfigOption::ErrorOnMissing => self.error_on_missing = true,
        }
    }
}

impl Extend<ConfigOption> for Options {
    fn extend<I: IntoIterator<Item = ConfigOption>>(&mut self, iter: I) {
        for option in iter {
            self.set(option);
        }
    }
}

impl FromIterator<ConfigOption> for Options {
    fn from_iter<I: IntoIterator<Item = ConfigOption>>(iter: I) -> Self {
        let mut options = Self::default();
        options.extend(iter);
        options
    }
}
