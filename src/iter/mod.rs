use num_traits::Float;

use crate::{Error, MovingSumAbs2, Period};

mod moving_sumabs2_iter;
pub use moving_sumabs2_iter::MovingSumAbs2Iter;

mod restartable;
pub use restartable::RestartableMovingSumAbs2;

mod try_moving_sumabs2_iter;
pub use try_moving_sumabs2_iter::TryMovingSumAbs2Iter;

/// Lifecycle of a transformer. `Done` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    Active,
    Done,
}

/// Accumulator plus lifecycle shared by the iterator adapters
#[derive(Debug, Clone)]
pub(crate) struct Transform<F> {
    acc: MovingSumAbs2<F>,
    state: State,
}

impl<F: Float + Default> Transform<F> {
    pub(crate) fn new(period: Period) -> Result<Self, Error> {
        let acc = MovingSumAbs2::with_period(period)?;
        tracing::debug!(period = period.get(), "created moving sumabs2 transform");
        Ok(Self {
            acc,
            state: State::Active,
        })
    }

    #[inline]
    pub(crate) fn push(&mut self, value: F) -> F {
        self.acc.update(value)
    }

    #[inline]
    pub(crate) fn current(&self) -> Option<F> {
        self.acc.sum()
    }

    #[inline]
    pub(crate) fn period(&self) -> usize {
        self.acc.period()
    }
}

impl<F> Transform<F> {
    #[inline]
    pub(crate) fn is_done(&self) -> bool {
        self.state == State::Done
    }

    pub(crate) fn finish(&mut self, reason: &'static str) {
        if self.state == State::Active {
            self.state = State::Done;
            tracing::debug!(reason, "moving sumabs2 transform done");
        }
    }
}
