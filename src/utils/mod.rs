//! Input parsing and validation performed before a search is started

mod errors;
mod parse;
mod validation;

pub use errors::UtilsError;
pub use parse::{parse_numbers, parse_positive_integer, parse_target};
pub use validation::{MAX_NUMBERS, validate_input};
