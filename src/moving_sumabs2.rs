use num_traits::Float;

use crate::{Error, Kbn, Period, Window, helper::is_nan};

/// Moving sum of squared absolute values over a fixed-size window.
///
/// Every pushed value is squared (which already discards its sign) and stored in
/// a circular buffer holding the last `period` squares. The running sum is kept
/// up to date in O(1) by adding the incoming square and subtracting the evicted
/// one.
///
/// A NaN input poisons the window: the sum stays NaN until the NaN has been
/// evicted, i.e. for `period` consecutive updates including the one that pushed
/// it. Evicting a NaN triggers a rescan of the remaining squares instead of the
/// incremental update, so the sum becomes exact again as soon as the window is
/// clean.
///
/// # Examples
///
/// ```
/// # use moving_sumabs2::MovingSumAbs2;
/// let mut acc = MovingSumAbs2::new(3)?;
/// assert_eq!(acc.sum(), None);
///
/// let results: Vec<f64> = [1.0, -2.0, 3.0, 4.0].iter().map(|&v| acc.update(v)).collect();
/// assert_eq!(results, [1.0, 5.0, 14.0, 29.0]);
/// assert_eq!(acc.sum(), Some(29.0));
/// # Ok::<(), moving_sumabs2::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MovingSumAbs2<T> {
    /// Window period
    period: Period,
    /// Squared inputs
    buf: Window<T>,
    /// Number of values seen, capped at the period
    count: usize,
    /// Running sum of the squares in the window
    sum: T,
}

impl<T: Float + Default> MovingSumAbs2<T> {
    /// Creates a new accumulator over a window of `period` values.
    ///
    /// # Arguments
    ///
    /// * `period` - The size of the rolling window
    ///
    /// # Returns
    ///
    /// * `Result<Self, Error>` - The accumulator, or [`Error::InvalidWindowSize`] if `period` is zero
    ///   or the window cannot be allocated
    pub fn new(period: usize) -> Result<Self, Error> {
        Period::new(period).and_then(Self::with_period)
    }

    /// Creates a new accumulator from an already validated period
    ///
    /// # Returns
    ///
    /// * `Result<Self, Error>` - The accumulator, or [`Error::InvalidWindowSize`] if the window
    ///   cannot be allocated
    pub fn with_period(period: Period) -> Result<Self, Error> {
        let buf = Window::new(period.non_zero())
            .map_err(|_| Error::InvalidWindowSize(period.get() as f64))?;

        Ok(Self {
            period,
            buf,
            count: 0,
            sum: T::zero(),
        })
    }

    /// Resets the accumulator to its freshly constructed state
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The accumulator
    pub fn reset(&mut self) -> &mut Self {
        self.buf.reset();
        self.count = 0;
        self.sum = T::zero();
        self
    }

    /// Pushes a value into the window and returns the updated sum
    ///
    /// The returned value is the sum of `v * v` over the last `period` pushed
    /// values, or over all of them while fewer than `period` have been pushed.
    /// It is NaN while a NaN input remains inside the window.
    ///
    /// # Arguments
    ///
    /// * `value` - The new value to be added to the window
    ///
    /// # Returns
    ///
    /// * `T` - The running sum of squares
    ///
    /// # Examples
    ///
    /// ```
    /// # use moving_sumabs2::MovingSumAbs2;
    /// let mut acc = MovingSumAbs2::new(2)?;
    /// assert_eq!(acc.update(1.0), 1.0);
    /// assert!(acc.update(f64::NAN).is_nan());
    /// assert!(acc.update(1.0).is_nan());
    /// assert_eq!(acc.update(1.0), 2.0);
    /// # Ok::<(), moving_sumabs2::Error>(())
    /// ```
    pub fn update(&mut self, value: T) -> T {
        let x = value * value;
        let period = self.period.get();
        let outgoing = self.buf.outgoing();

        if is_nan(value) {
            self.count = period;
            self.sum = T::nan();
        } else if self.count < period {
            self.count += 1;
            self.sum = self.sum + x;
        } else if is_nan(outgoing) {
            self.sum = self.resync(x);
            tracing::trace!(
                period,
                slot = self.buf.index(),
                poisoned = is_nan(self.sum),
                "evicted NaN, rescanned window"
            );
        } else if !is_nan(self.sum) {
            self.sum = self.sum + (x - outgoing);
        }

        self.buf.next(x);
        self.sum
    }

    // Sum of the incoming square and every slot except the one being evicted,
    // NaN as soon as another slot holds NaN
    fn resync(&self, x: T) -> T {
        let mut sum = x;
        for &v in self.buf.others() {
            if is_nan(v) {
                return T::nan();
            }
            sum = sum + v;
        }
        sum
    }

    /// Returns the current running sum without modifying the window
    ///
    /// # Returns
    ///
    /// * `Option<T>` - The value returned by the latest [`update`](Self::update), or `None` before the first push
    pub const fn sum(&self) -> Option<T> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum)
        }
    }

    /// Recomputes the running sum from the window, could be called to avoid
    /// prolonged compounding of floating rounding errors
    ///
    /// The squares are summed with the Kahan-Babuska-Neumaier algorithm. The
    /// result is NaN if any square in the window is NaN.
    ///
    /// # Returns
    ///
    /// * `Option<T>` - The recomputed sum, or `None` before the first push
    pub fn recompute(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }

        let mut sum = Kbn::default();
        for &v in self.buf.as_slice() {
            if is_nan(v) {
                self.sum = T::nan();
                return Some(self.sum);
            }
            sum += v;
        }
        self.sum = sum.total();
        Some(self.sum)
    }

    /// Returns the window period
    #[inline]
    pub const fn period(&self) -> usize {
        self.period.get()
    }

    /// Returns the number of values accounted for in the window
    ///
    /// A NaN input marks the window as full straight away, since the sum is
    /// unknown for the whole window until the NaN is evicted.
    #[inline]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns true once the window holds `period` values
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.count == self.period.get()
    }

    /// Returns an iterator over the squared values that were pushed,
    /// oldest to newest
    #[inline]
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }
}
