//! Environment variable expansion for configuration strings.
//!
//! Supports `${VAR}` (errors when unset) and `${VAR:-default}` (falls back
//! to `default` when unset). shellexpand hands the braced content to the
//! lookup context verbatim, so the `:-` default syntax is split here.

use std::env;

use crate::ConfigError;

/// Expand environment variable references in a configuration value.
///
/// # Errors
///
/// Returns [`ConfigError::EnvVar`] naming `field` when a referenced
/// variable is unset and has no default, or is not valid UTF-8.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let context = |name: &str| -> Result<Option<String>, String> {
        let (var, default) = match name.split_once(":-") {
            Some((var, default)) => (var, Some(default)),
            None => (name, None),
        };

        match env::var(var) {
            Ok(found) => Ok(Some(found)),
            Err(env::VarError::NotPresent) => match default {
                Some(fallback) => Ok(Some(fallback.to_owned())),
                None => Err(format!("${{{var}}} not set")),
            },
            Err(env::VarError::NotUnicode(_)) => Err(format!("${{{var}}} is not valid UTF-8")),
        }
    };

    match shellexpand::env_with_context(value, context) {
        Ok(expanded) => Ok(expanded.into_owned()),
        Err(err) => Err(ConfigError::EnvVar {
            field: field.to_owned(),
            message: err.cause,
        }),
    }
}
