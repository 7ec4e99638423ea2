//! Sources of environment variable values

use std::collections::{BTreeMap, HashMap};
use std::env::{self, VarError};
use std::hash::BuildHasher;

use crate::error::EnvError;

/// Read-only lookup of environment variables by name.
///
/// `Ok(None)` means unset. An empty value is treated the same as an unset
/// variable by the binding pass.
pub trait Environment {
    fn lookup(&self, name: &str) -> Result<Option<String>, EnvError>;
}

/// The current process environment.
///
/// A value that is not valid UTF-8 fails with [`EnvError::NotUnicode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn lookup(&self, name: &str) -> Result<Option<String>, EnvError> {
        match env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(value)) => Err(EnvError::NotUnicode {
                name: name.to_string(),
                value,
            }),
        }
    }
}

impl<S: BuildHasher> Environment for HashMap<String, String, S> {
    fn lookup(&self, name: &str) -> Result<Option<String>, EnvError> {
        Ok(self.get(name).cloned())
    }
}

impl Environment for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Result<Option<String>, EnvError> {
        Ok(self.get(name).cloned())
    }
}

impl<F> Environment for F
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, name: &str) -> Result<Option<String>, EnvError> {
        Ok(self(name))
    }
}
