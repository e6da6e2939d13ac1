use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Largest number of inputs the game allows
pub const MAX_NUMBERS: usize = 6;

/// Check the search preconditions. The target is checked first, then each
/// number in order, then the count.
///
/// # Errors
///
/// Returns the first violated precondition.
pub fn validate_input(numbers: &[u64], target: u64) -> Result<(), UtilsError> {
    debug!("Validating target {} with numbers {:?}", target, numbers);

    if target == 0 {
        warn!("Target is not positive");
        return Err(UtilsError::InvalidTarget);
    }

    if numbers.contains(&0) {
        warn!("Numbers contain a zero: {:?}", numbers);
        return Err(UtilsError::InvalidNumber);
    }

    if numbers.is_empty() {
        warn!("No numbers supplied");
        return Err(UtilsError::NoNumbers);
    }

    if numbers.len() > MAX_NUMBERS {
        warn!(
            "Too many numbers: {} supplied, at most {} allowed",
            numbers.len(),
            MAX_NUMBERS
        );
        return Err(UtilsError::TooManyNumbers {
            max: MAX_NUMBERS,
            count: numbers.len(),
        });
    }

    debug!("Input validation successful");
    Ok(())
}
