use core::iter::FusedIterator;

use num_traits::Float;

use super::Transform;
use crate::{Error, Numeric, Period};

/// Moving sum of squared absolute values over a fallible upstream
///
/// Behaves like [`MovingSumAbs2Iter`](crate::MovingSumAbs2Iter) for `Ok` items.
/// An `Err` from upstream is yielded unchanged; it does not enter the window and
/// does not end the iteration.
///
/// # Examples
///
/// ```
/// # use moving_sumabs2::TryMovingSumAbs2Iter;
/// let inputs = [Ok(1.0_f64), Err("sensor offline"), Ok(2.0)];
/// let results: Vec<_> = TryMovingSumAbs2Iter::new(inputs.into_iter(), 2)?.collect();
/// assert_eq!(results, [Ok(1.0), Err("sensor offline"), Ok(5.0)]);
/// # Ok::<(), moving_sumabs2::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct TryMovingSumAbs2Iter<I, F> {
    iter: I,
    transform: Transform<F>,
}

impl<I, V, E, F> TryMovingSumAbs2Iter<I, F>
where
    I: Iterator<Item = Result<V, E>>,
    V: Numeric<Float = F>,
    F: Float + Default,
{
    /// Wraps `iter` in a moving window of `period` values
    ///
    /// # Returns
    ///
    /// * `Result<Self, Error>` - The adapter, or [`Error::InvalidWindowSize`] if `period` is zero
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
}

impl<I, F> TryMovingSumAbs2Iter<I, F> {
    /// Ends the iteration early, leaving the upstream iterator as is
    pub fn close(&mut self) {
        self.transform.finish("closed");
    }

    /// Ends the iteration early and hands `value` back
    pub fn close_with<R>(&mut self, value: R) -> R {
        self.close();
        value
    }

    /// Returns true once the adapter has ended
    pub fn is_done(&self) -> bool {
        self.transform.is_done()
    }
}

impl<I, V, E, F> Iterator for TryMovingSumAbs2Iter<I, F>
where
    I: Iterator<Item = Result<V, E>>,
    V: Numeric<Float = F>,
    F: Float + Default,
{
    type Item = Result<F, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.transform.is_done() {
            return None;
        }

        match self.iter.next() {
            Some(Ok(item)) => Some(Ok(self.transform.push(item.into_sample_or_nan()))),
            Some(Err(e)) => Some(Err(e)),
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

impl<I, V, E, F> FusedIterator for TryMovingSumAbs2Iter<I, F>
where
    I: Iterator<Item = Result<V, E>>,
    V: Numeric<Float = F>,
    F: Float + Default,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct ReadError(u8);

    #[test]
    fn passes_errors_through() {
        let inputs = vec![Ok(1.0_f64), Ok(2.0), Err(ReadError(7)), Ok(3.0), Ok(4.0)];
        let mut it = TryMovingSumAbs2Iter::new(inputs.into_iter(), 3).unwrap();
        assert_eq!(it.next(), Some(Ok(1.0)));
        assert_eq!(it.next(), Some(Ok(5.0)));
        assert_eq!(it.next(), Some(Err(ReadError(7))));
        assert!(!it.is_done());
        assert_eq!(it.current(), Some(5.0));
        assert_eq!(it.next(), Some(Ok(14.0)));
        assert_eq!(it.next(), Some(Ok(29.0)));
        assert_eq!(it.next(), None);
        assert!(it.is_done());
        assert_eq!(it.next(), None);
    }

    #[test]
    fn non_numeric_ok_items_become_nan() {
        let inputs: [Result<Option<f64>, ()>; 3] = [Ok(Some(1.0)), Ok(None), Ok(Some(1.0))];
        let results: Vec<_> = TryMovingSumAbs2Iter::new(inputs.into_iter(), 1)
            .unwrap()
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(results[0], 1.0);
        assert!(results[1].is_nan());
        assert_eq!(results[2], 1.0);
    }

    #[test]
    fn close_with_echoes_value() {
        let inputs = [Ok::<f64, ()>(1.0), Ok(2.0)];
        let mut it = TryMovingSumAbs2Iter::new(inputs.into_iter(), 2).unwrap();
        assert_eq!(it.next(), Some(Ok(1.0)));
        assert_eq!(it.close_with(-1), -1);
        assert_eq!(it.next(), None);
        it.close();
        assert!(it.is_done());
    }

    #[test]
    fn current_reads_without_pulling() {
        let inputs = [Ok::<f64, ()>(3.0), Ok(4.0), Ok(5.0)];
        let mut it = TryMovingSumAbs2Iter::new(inputs.into_iter(), 2).unwrap();
        assert_eq!(it.current(), None);
        assert_eq!(it.next(), Some(Ok(9.0)));
        assert_eq!(it.current(), Some(9.0));
        assert_eq!(it.next(), Some(Ok(25.0)));
        it.close();
        assert_eq!(it.current(), Some(25.0));
        assert_eq!(it.next(), None);
        assert_eq!(it.current(), Some(25.0));
    }

    #[test]
    fn rejects_zero_period() {
        let inputs = [Ok::<f64, ()>(1.0)];
        assert!(TryMovingSumAbs2Iter::new(inputs.into_iter(), 0).is_err());
    }
}
