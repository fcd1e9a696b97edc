use crate::api::errors::BenfordError;

type Result<T> = core::result::Result<T, BenfordError>;

/// Returns true if `magnitude` has a leading digit, i.e. is positive and finite.
pub fn is_valid_magnitude(magnitude: f64) -> bool {
    magnitude.is_finite() && magnitude > 0.0
}

/// Returns the first significant decimal digit of `magnitude`.
///
/// The value is written out in plain decimal notation; the decimal point and
/// any leading zeros are skipped. `4096.0` gives `4`, `0.789` gives `7`.
///
/// # Errors
///
/// [`BenfordError::InvalidInput`] if `magnitude` is zero, negative, or not finite.
pub fn leading_digit(magnitude: f64) -> Result<u8> {
    if !is_valid_magnitude(magnitude) {
        return Err(BenfordError::InvalidInput(magnitude));
    }

    // f64's Display never uses exponent notation.
    magnitude
        .to_string()
        .bytes()
        .find(|byte| matches!(byte, b'1'..=b'9'))
        .map(|byte| byte - b'0')
        .ok_or(BenfordError::InvalidInput(magnitude))
}
