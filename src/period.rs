use core::num::NonZeroUsize;

use num_traits::Float;

use crate::Error;

/// A validated window size
///
/// Wraps a [`NonZeroUsize`] so every constructor that accepts a `Period` can
/// assume the window holds at least one value. Conversions from raw numbers
/// reject zero, negative, fractional and non-finite inputs with
/// [`Error::InvalidWindowSize`].
///
/// # Examples
///
/// ```
/// # use moving_sumabs2::{Error, Period};
/// assert_eq!(Period::new(3).map(Period::get), Ok(3));
/// assert_eq!(Period::try_from(4.0_f64), Period::new(4));
/// assert_eq!(Period::try_from(-1_i64), Err(Error::InvalidWindowSize(-1.0)));
/// assert!(Period::try_from(2.5_f64).is_err());
/// assert!(Period::try_from(f64::INFINITY).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period(NonZeroUsize);

impl Period {
    /// Creates a new period, failing if `period` is zero
    ///
    /// # Arguments
    ///
    /// * `period` - The number of values in the window
    ///
    /// # Returns
    ///
    /// * `Result<Period, Error>` - The validated period
    pub const fn new(period: usize) -> Result<Self, Error> {
        match NonZeroUsize::new(period) {
            Some(p) => Ok(Self(p)),
            None => Err(Error::InvalidWindowSize(0.0)),
        }
    }

    /// Returns the period as a `usize`
    pub const fn get(self) -> usize {
        self.0.get()
    }

    pub(crate) const fn non_zero(self) -> NonZeroUsize {
        self.0
    }
}

impl From<NonZeroUsize> for Period {
    fn from(period: NonZeroUsize) -> Self {
        Self(period)
    }
}

impl From<Period> for usize {
    fn from(period: Period) -> Self {
        period.get()
    }
}

impl TryFrom<usize> for Period {
    type Error = Error;

    fn try_from(period: usize) -> Result<Self, Self::Error> {
        Self::new(period)
    }
}

impl TryFrom<i64> for Period {
    type Error = Error;

    fn try_from(period: i64) -> Result<Self, Self::Error> {
        usize::try_from(period)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or(Error::InvalidWindowSize(period as f64))
    }
}

impl TryFrom<f64> for Period {
    type Error = Error;

    fn try_from(period: f64) -> Result<Self, Self::Error> {
        let invalid = Error::InvalidWindowSize(period);
        if !period.is_finite() || Float::floor(period) != period || period < 1.0 {
            return Err(invalid);
        }
        if period >= usize::MAX as f64 {
            return Err(invalid);
        }
        NonZeroUsize::new(period as usize).map(Self).ok_or(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_integers() {
        assert_eq!(Period::new(1).map(Period::get), Ok(1));
        assert_eq!(Period::try_from(7_usize).map(Period::get), Ok(7));
        assert_eq!(Period::try_from(7_i64).map(Period::get), Ok(7));
        assert_eq!(Period::try_from(7.0_f64).map(Period::get), Ok(7));
        assert_eq!(usize::from(Period::from(NonZeroUsize::MIN)), 1);
    }

    #[test]
    fn rejects_zero() {
        assert_eq!(Period::new(0), Err(Error::InvalidWindowSize(0.0)));
        assert_eq!(Period::try_from(0_i64), Err(Error::InvalidWindowSize(0.0)));
        assert!(Period::try_from(0.0_f64).is_err());
        assert!(Period::try_from(-0.0_f64).is_err());
    }

    #[test]
    fn rejects_negative() {
        assert_eq!(
            Period::try_from(-3_i64),
            Err(Error::InvalidWindowSize(-3.0))
        );
        assert_eq!(Period::try_from(-3.0_f64), Err(Error::InvalidWindowSize(-3.0)));
    }

    #[test]
    fn rejects_fractional() {
        assert_eq!(Period::try_from(2.5_f64), Err(Error::InvalidWindowSize(2.5)));
        assert!(Period::try_from(0.5_f64).is_err());
        assert!(Period::try_from(f64::MIN_POSITIVE).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Period::try_from(f64::INFINITY).is_err());
        assert!(Period::try_from(f64::NEG_INFINITY).is_err());
        assert!(matches!(
            Period::try_from(f64::NAN),
            Err(Error::InvalidWindowSize(v)) if v.is_nan()
        ));
    }

    #[test]
    fn rejects_values_beyond_usize() {
        assert!(Period::try_from(1e300_f64).is_err());
    }
}
