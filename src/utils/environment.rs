use std::env;
use std::path::PathBuf;

/// Read a path from an environment variable, ignoring unset or empty values
pub fn env_path(var: &str) -> Option<PathBuf> {
    match env::var(var) {
        Ok(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => None,
    }
}

/// Read a comma-separated list from an environment variable
///
/// Items are not trimmed, since leading spaces can be significant (e.g. `" 25"`).
/// Empty items are dropped.
pub fn env_csv(var: &str) -> Option<Vec<String>> {
    let value = env::var(var).ok().filter(|v| !v.is_empty())?;
    Some(value.split(',').filter(|item| !item.is_empty()).map(str::to_string).collect())
}
