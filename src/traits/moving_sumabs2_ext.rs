use crate::{Error, MovingSumAbs2Iter, Numeric, TryMovingSumAbs2Iter};

/// Extension trait adding moving sum of squares adapters to every iterator
///
/// # Examples
///
/// ```
/// # use moving_sumabs2::MovingSumAbs2Ext;
/// let sums: Vec<f64> = [3.0_f64, -4.0, 0.0].into_iter().moving_sumabs2(2)?.collect();
/// assert_eq!(sums, [9.0, 25.0, 16.0]);
///
/// let readings = [Ok(1.0_f64), Err("timeout"), Ok(-2.0)];
/// let sums: Vec<_> = readings.into_iter().try_moving_sumabs2(2)?.collect();
/// assert_eq!(sums, [Ok(1.0), Err("timeout"), Ok(5.0)]);
/// # Ok::<(), moving_sumabs2::Error>(())
/// ```
pub trait MovingSumAbs2Ext: Iterator + Sized {
    /// Wraps the iterator in a [`MovingSumAbs2Iter`] over `period` values
    ///
    /// # Arguments
    ///
    /// * `period` - The size of the rolling window
    ///
    /// # Returns
    ///
    /// * `Result<MovingSumAbs2Iter<Self, _>, Error>` - The adapter, or [`Error::InvalidWindowSize`] if `period` is zero
    fn moving_sumabs2(
        self,
        period: usize,
    ) -> Result<MovingSumAbs2Iter<Self, <Self::Item as Numeric>::Float>, Error>
    where
        Self::Item: Numeric,
    {
        MovingSumAbs2Iter::new(self, period)
    }

    /// Wraps an iterator of `Result`s in a [`TryMovingSumAbs2Iter`] over `period` values
    fn try_moving_sumabs2<V, E>(
        self,
        period: usize,
    ) -> Result<TryMovingSumAbs2Iter<Self, V::Float>, Error>
    where
        Self: Iterator<Item = Result<V, E>>,
        V: Numeric,
    {
        TryMovingSumAbs2Iter::new(self, period)
    }
}

impl<I: Iterator> MovingSumAbs2Ext for I {}
