use core::{fmt, iter::FusedIterator};

use num_traits::Float;

use super::MovingSumAbs2Iter;
use crate::{Error, Numeric, Period};

/// Moving sum of squared absolute values over a re-iterable source
///
/// Iterates exactly like [`MovingSumAbs2Iter`] over `source.into_iter()`, and
/// additionally keeps the source so [`restart`](Self::restart) can start an
/// independent traversal from the beginning with a fresh window.
///
/// # Examples
///
/// ```
/// # use moving_sumabs2::RestartableMovingSumAbs2;
/// let samples = vec![1.0_f64, 2.0, 3.0, 4.0];
/// let mut it = RestartableMovingSumAbs2::new(&samples, 3)?;
/// assert_eq!(it.by_ref().take(2).collect::<Vec<_>>(), [1.0, 5.0]);
///
/// let again = it.restart()?;
/// assert_eq!(again.collect::<Vec<_>>(), [1.0, 5.0, 14.0, 29.0]);
/// assert_eq!(it.collect::<Vec<_>>(), [14.0, 29.0]);
/// # Ok::<(), moving_sumabs2::Error>(())
/// ```
pub struct RestartableMovingSumAbs2<S, F>
where
    S: IntoIterator,
{
    /// Source every traversal starts from
    source: S,
    /// Window period shared by every traversal
    period: Period,
    /// Current traversal
    inner: MovingSumAbs2Iter<S::IntoIter, F>,
}

impl<S, V, F> RestartableMovingSumAbs2<S, F>
where
    S: IntoIterator<Item = V> + Clone,
    V: Numeric<Float = F>,
    F: Float + Default,
{
    /// Starts a traversal of `source` with a moving window of `period` values
    ///
    /// # Arguments
    ///
    /// * `source` - The re-iterable upstream, cloned on every restart
    /// * `period` - The size of the rolling window
    ///
    /// # Returns
    ///
    /// * `Result<Self, Error>` - The adapter, or [`Error::InvalidWindowSize`] if `period` is zero
    ///   or the window cannot be allocated
    pub fn new(source: S, period: usize) -> Result<Self, Error> {
        Period::new(period).and_then(|period| Self::with_period(source, period))
    }

    /// Starts a traversal of `source` with an already validated period
    pub fn with_period(source: S, period: Period) -> Result<Self, Error> {
        let inner = MovingSumAbs2Iter::with_period(source.clone().into_iter(), period)?;
        Ok(Self {
            source,
            period,
            inner,
        })
    }

    /// Returns a new adapter over a fresh iterator of the source
    ///
    /// The new adapter has the same period and an empty window. It shares no
    /// state with `self`, which keeps its position. Fails only if the new
    /// window cannot be allocated.
    pub fn restart(&self) -> Result<Self, Error> {
        Self::with_period(self.source.clone(), self.period)
    }

    /// Returns the latest yielded sum of the current traversal without pulling
    /// from upstream, or `None` if nothing was yielded yet
    pub fn current(&self) -> Option<F> {
        self.inner.current()
    }
}

impl<S: IntoIterator, F> RestartableMovingSumAbs2<S, F> {
    /// Returns the window period
    pub fn period(&self) -> usize {
        self.period.get()
    }

    /// Ends the current traversal early
    ///
    /// Adapters obtained from [`restart`](Self::restart) are not affected.
    pub fn close(&mut self) {
        self.inner.close();
    }

    /// Ends the current traversal early and hands `value` back
    pub fn close_with<R>(&mut self, value: R) -> R {
        self.inner.close_with(value)
    }

    /// Returns true once the current traversal has ended
    pub fn is_done(&self) -> bool {
        self.inner.is_done()
    }
}

impl<S, F> fmt::Debug for RestartableMovingSumAbs2<S, F>
where
    S: IntoIterator + fmt::Debug,
    S::IntoIter: fmt::Debug,
    F: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestartableMovingSumAbs2")
            .field("source", &self.source)
            .field("period", &self.period)
            .field("inner", &self.inner)
            .finish()
    }
}

impl<S, V, F> Iterator for RestartableMovingSumAbs2<S, F>
where
    S: IntoIterator<Item = V>,
    V: Numeric<Float = F>,
    F: Float + Default,
{
    type Item = F;

    #[inline]
    fn next(&mut self) -> Option<F> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<S, V, F> FusedIterator for RestartableMovingSumAbs2<S, F>
where
    S: IntoIterator<Item = V>,
    V: Numeric<Float = F>,
    F: Float + Default,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_like_plain_adapter() {
        let it = RestartableMovingSumAbs2::new(vec![1.0_f64, 2.0, 3.0, 4.0], 3).unwrap();
        assert_eq!(it.collect::<Vec<_>>(), vec![1.0, 5.0, 14.0, 29.0]);
    }

    #[test]
    fn restart_is_independent() {
        let samples = [2.0_f64, f64::NAN, 1.0, 1.0, 1.0];
        let mut first = RestartableMovingSumAbs2::new(&samples, 2).unwrap();
        assert_eq!(first.next(), Some(4.0));
        assert!(first.next().unwrap().is_nan());

        let mut second = first.restart().unwrap();
        assert_eq!(second.period(), 2);
        assert_eq!(second.current(), None);
        assert_eq!(second.next(), Some(4.0));

        assert!(first.next().unwrap().is_nan());
        assert_eq!(first.next(), Some(2.0));
        assert!(second.next().unwrap().is_nan());
    }

    #[test]
    fn restart_after_done() {
        let mut it = RestartableMovingSumAbs2::new([3.0_f64, 4.0], 1).unwrap();
        assert_eq!(it.by_ref().collect::<Vec<_>>(), vec![9.0, 16.0]);
        assert!(it.is_done());
        assert_eq!(it.next(), None);

        let mut again = it.restart().unwrap();
        assert!(!again.is_done());
        assert_eq!(again.next(), Some(9.0));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn close_only_affects_current_traversal() {
        let mut it = RestartableMovingSumAbs2::new(vec![Some(1.0_f64), None], 2).unwrap();
        assert_eq!(it.close_with("bye"), "bye");
        assert!(it.is_done());
        assert_eq!(it.next(), None);

        let mut again = it.restart().unwrap();
        assert_eq!(again.next(), Some(1.0));
        assert!(again.next().unwrap().is_nan());
        again.close();
        assert_eq!(again.next(), None);
    }

    #[test]
    fn current_tracks_each_traversal() {
        let mut it = RestartableMovingSumAbs2::new([1.0_f64, 2.0, 3.0], 2).unwrap();
        assert_eq!(it.current(), None);
        assert_eq!(it.next(), Some(1.0));
        assert_eq!(it.next(), Some(5.0));
        assert_eq!(it.current(), Some(5.0));

        let again = it.restart().unwrap();
        assert_eq!(again.current(), None);

        it.close();
        assert_eq!(it.current(), Some(5.0));
        assert_eq!(it.next(), None);
        assert_eq!(it.current(), Some(5.0));
    }

    #[test]
    fn rejects_zero_period() {
        assert_eq!(
            RestartableMovingSumAbs2::new(vec![1.0_f64], 0).err().map(|e| e.to_string()),
            Some("invalid argument. Must provide a positive integer. Value: `0`.".to_string())
        );
    }
}
