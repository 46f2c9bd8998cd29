/// Errors raised while constructing a moving window
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The window size was zero, negative, fractional, non-finite, does not fit in
    /// `usize` or is too large to allocate
    #[error("invalid argument. Must provide a positive integer. Value: `{0}`.")]
    InvalidWindowSize(f64),
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display_names_the_offending_value() {
        assert_eq!(
            Error::InvalidWindowSize(0.0).to_string(),
            "invalid argument. Must provide a positive integer. Value: `0`."
        );
        assert_eq!(
            Error::InvalidWindowSize(2.5).to_string(),
            "invalid argument. Must provide a positive integer. Value: `2.5`."
        );
        assert_eq!(
            Error::InvalidWindowSize(f64::NAN).to_string(),
            "invalid argument. Must provide a positive integer. Value: `NaN`."
        );
    }
}
