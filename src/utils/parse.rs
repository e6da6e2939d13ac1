use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Parse a strictly positive decimal integer made of ASCII digits only.
///
/// Signs, whitespace and decimal points are rejected.
///
/// # Errors
///
/// Returns [`UtilsError::NotAPositiveInteger`] if the text is empty, contains
/// a non-digit, is zero or does not fit in a `u64`.
pub fn parse_positive_integer(text: &str) -> Result<u64, UtilsError> {
    debug!("Parsing '{}' as a positive integer", text);

    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        warn!("Not a digit string: '{}'", text);
        return Err(UtilsError::NotAPositiveInteger(text.to_string()));
    }

    match text.parse::<u64>() {
        Ok(0) | Err(_) => Err(UtilsError::NotAPositiveInteger(text.to_string())),
        Ok(value) => Ok(value),
    }
}

/// # Errors
///
/// Returns [`UtilsError::InvalidTarget`] if `text` is not a positive integer.
pub fn parse_target(text: &str) -> Result<u64, UtilsError> {
    parse_positive_integer(text).map_err(|_| UtilsError::InvalidTarget)
}

/// Parse every number in order, stopping at the first bad one.
///
/// # Errors
///
/// Returns [`UtilsError::InvalidNumber`] for the first entry that is not a
/// positive integer.
pub fn parse_numbers<S: AsRef<str>>(texts: &[S]) -> Result<Vec<u64>, UtilsError> {
    texts
        .iter()
        .map(|text| parse_positive_integer(text.as_ref()).map_err(|_| UtilsError::InvalidNumber))
        .collect()
}
