use core::iter::FusedIterator;

use num_traits::Float;

use super::Transform;
use crate::{Error, Numeric, Period};

/// Iterator adapter yielding the moving sum of squared absolute values
///
/// Each item pulled from the upstream iterator is pushed into a
/// [`MovingSumAbs2`](crate::MovingSumAbs2) window and the updated sum is yielded.
/// Items that are not numeric (see [`Numeric`]) enter the window as NaN.
///
/// The adapter ends when the upstream iterator ends or when it is closed with
/// [`close`](Self::close). Once ended it keeps returning `None` without pulling
/// from upstream again.
///
/// # Examples
///
/// ```
/// # use moving_sumabs2::MovingSumAbs2Iter;
/// let mut it = MovingSumAbs2Iter::new([1.0_f64, 2.0, 3.0, 4.0].into_iter(), 3)?;
/// assert_eq!(it.next(), Some(1.0));
/// assert_eq!(it.next(), Some(5.0));
/// assert_eq!(it.next(), Some(14.0));
/// assert_eq!(it.next(), Some(29.0));
/// assert_eq!(it.next(), None);
/// assert_eq!(it.next(), None);
/// # Ok::<(), moving_sumabs2::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MovingSumAbs2Iter<I, F> {
    /// Upstream iterator
    iter: I,
    /// Window and lifecycle
    transform: Transform<F>,
}

impl<I, F> MovingSumAbs2Iter<I, F>
where
    I: Iterator,
    I::Item: Numeric<Float = F>,
    F: Float + Default,
{
    /// Wraps `iter` in a moving window of `period` values
    ///
    /// # Arguments
    ///
    /// * `iter` - The upstream iterator
    /// * `period` - The size of the rolling window
    ///
    /// # Returns
    ///
    /// * `Result<Self, Error>` - The adapter, or [`Error::InvalidWindowSize`] if `period` is zero
    ///   or the window cannot be allocated. Nothing is pulled from `iter` on failure.
    pub fn new(iter: I, period: usize) -> Result<Self, Error> {
        Period::new(period).and_then(|period| Self::with_period(iter, period))
    }

    /// Wraps `iter` in a moving window of an already validated period
    ///
    /// Fails with [`Error::InvalidWindowSize`] if the window cannot be allocated.
    pub fn with_period(iter: I, period: Period) -> Result<Self, Error> {
        Ok(Self {
            iter,
            transform: Transform::new(period)?,
        })
    }

    /// Returns the latest yielded sum without pulling from upstream, or `None`
    /// if nothing was yielded yet
    pub fn current(&self) -> Option<F> {
        self.transform.current()
    }

    /// Returns the window period
    pub fn period(&self) -> usize {
        self.transform.period()
    }
}

impl<I, F> MovingSumAbs2Iter<I, F> {
    /// Ends the iteration early
    ///
    /// Every later call to `next` returns `None`. The upstream iterator is left
    /// as is; it is neither drained nor dropped.
    pub fn close(&mut self) {
        self.transform.finish("closed");
    }

    /// Ends the iteration early and hands `value` back
    ///
    /// # Arguments
    ///
    /// * `value` - The value to echo back
    ///
    /// # Returns
    ///
    /// * `R` - `value`, unchanged
    pub fn close_with<R>(&mut self, value: R) -> R {
        self.close();
        value
    }

    /// Returns true once the adapter has ended
    pub fn is_done(&self) -> bool {
        self.transform.is_done()
    }
}

impl<I, F> Iterator for MovingSumAbs2Iter<I, F>
where
    I: Iterator,
    I::Item: Numeric<Float = F>,
    F: Float + Default,
{
    type Item = F;

    fn next(&mut self) -> Option<F> {
        if self.transform.is_done() {
            return None;
        }

        match self.iter.next() {
            Some(item) => Some(self.transform.push(item.into_sample_or_nan())),
            None => {
                self.transform.finish("exhausted");
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.transform.is_done() {
            (0, Some(0))
        } else {
            self.iter.size_hint()
        }
    }
}

impl<I, F> FusedIterator for MovingSumAbs2Iter<I, F>
where
    I: Iterator,
    I::Item: Numeric<Float = F>,
    F: Float + Default,
{
}
