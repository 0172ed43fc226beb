use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Error;

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new("^[a-z]+$").unwrap());

/// Returns true if `name` is a legal element or attribute name.
///
/// Names are non-empty and consist of lowercase ASCII letters only.
pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

pub(crate) fn validate_name(name: &str) -> Result<(), Error> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(Error::InvalidName(name.to_string()))
    }
}

pub(crate) fn validate_value(name: &str, value: &str) -> Result<(), Error> {
    if is_blank(value) {
        Err(Error::EmptyValue(name.to_string()))
    } else {
        Ok(())
    }
}

/// Empty or whitespace-only.
#[inline]
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
