/// Returns `true` if `value` is NaN
///
/// NaN is the only floating point value that does not compare equal to itself,
/// so the check stays correct for any `PartialEq` float type and treats `-0.0`
/// and `+0.0` as ordinary numbers.
///
/// # Arguments
///
/// * `value` - The value to test
///
/// # Returns
///
/// * `bool` - True if the value is NaN
#[inline]
#[allow(clippy::eq_op)]
pub fn is_nan<T: PartialEq + Copy>(value: T) -> bool {
    value != value
}

#[cfg(test)]
mod tests {
    use super::is_nan;

    #[test]
    fn detects_nan() {
        assert!(is_nan(f64::NAN));
        assert!(is_nan(f32::NAN));
        assert!(is_nan(-f64::NAN));
    }

    #[test]
    fn numbers_are_not_nan() {
        assert!(!is_nan(0.0_f64));
        assert!(!is_nan(-0.0_f64));
        assert!(!is_nan(f64::INFINITY));
        assert!(!is_nan(f64::NEG_INFINITY));
        assert!(!is_nan(f64::MIN_POSITIVE));
    }
}
