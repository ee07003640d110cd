//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

/// Get and parse an environment variable.
pub fn get_env_parse<T: FromStr>(name: &'static str) -> Result<T, Error> {
    let val = get_env(name)?;
    val.trim().parse::<T>().map_err(|_| Error::WrongFormat(name))
}

/// Read a boolean switch. Accepts `1/0`, `true/false`, `yes/no`, `on/off`.
pub fn get_env_flag(name: &'static str) -> Result<bool, Error> {
    let val = get_env(name)?;
    parse_flag(&val).ok_or(Error::WrongFormat(name))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// region:    --- Error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MissingEnv(&'static str),
    WrongFormat(&'static str),
}

impl Error {
    /// True when the variable simply isn't set, as opposed to set but malformed.
    pub fn is_missing(&self) -> bool {
        matches!(self, Error::MissingEnv(_))
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_variants() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag(" TRUE "), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_missing_env_is_reported() {
        let err = get_env("LIB_UTILS_TEST_SURELY_UNSET_VAR").unwrap_err();
        assert!(err.is_missing());
        assert_eq!(err, Error::MissingEnv("LIB_UTILS_TEST_SURELY_UNSET_VAR"));
    }
}
