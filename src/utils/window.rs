use alloc::{boxed::Box, collections::TryReserveError, vec::Vec};

use core::num::NonZeroUsize;

/// A fixed-size circular buffer that stores a sequence of values.
///
/// The buffer has a fixed size and can store a maximum of `period` values.
/// When the buffer is full, new values overwrite the oldest values in the buffer.
/// Slots that were never written hold `T::default()`.
#[derive(Debug, Clone)]
pub struct Window<T> {
    /// The buffer that stores the values
    buf: Box<[T]>,
    /// The period of the window
    period: usize,
    /// The slot the next value is written to
    pos: usize,
    /// Whether the buffer has hit full once
    full: bool,
}

impl<T> Window<T> {
    /// Creates a new window with the specified period
    ///
    /// # Returns
    ///
    /// * `Result<Self, TryReserveError>` - The window, or the allocation error if
    ///   `period` slots cannot be allocated
    pub fn new(period: NonZeroUsize) -> Result<Self, TryReserveError>
    where
        T: Default + Clone,
    {
        let period = period.get();
        let mut buf = Vec::new();
        buf.try_reserve_exact(period)?;
        buf.resize(period, T::default());

        Ok(Self {
            buf: buf.into_boxed_slice(),
            pos: 0,
            full: false,
            period,
        })
    }

    /// Clears the buffer, resetting its state.
    pub fn reset(&mut self)
    where
        T: Default + Copy,
    {
        self.buf.fill(T::default());
        self.pos = 0;
        self.full = false;
    }

    /// Returns the current number of written elements in the buffer.
    pub const fn len(&self) -> usize {
        if self.full { self.period } else { self.pos }
    }

    /// Returns the index of the slot the next value will be written to.
    ///
    /// # Returns
    ///
    /// * `usize` - The cursor position in the buffer
    pub const fn index(&self) -> usize {
        self.pos
    }

    /// Returns the value the next call to [`Window::next`] will evict
    ///
    /// # Returns
    ///
    /// * `T` - The value stored in the slot under the cursor
    pub fn outgoing(&self) -> T
    where
        T: Copy,
    {
        self.buf[self.pos]
    }

    /// Pushes a new value into the window and returns the value that was evicted
    ///
    /// # Arguments
    ///
    /// * `value` - The value to push into the window
    ///
    /// # Returns
    ///
    /// * `T` - The value that was evicted from the window
    pub const fn next(&mut self, value: T) -> T {
        let prev = core::mem::replace(&mut self.buf[self.pos], value);

        self.pos = (self.pos + 1) % self.period;

        if self.pos == 0 {
            self.full = true;
        }
        prev
    }

    /// Returns an iterator over the written elements in logical (oldest to newest) order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let start = if self.full { self.pos } else { 0 };
        (0..self.len()).map(move |i| &self.buf[(start + i) % self.period])
    }

    /// Returns an iterator over every slot except the one under the cursor,
    /// in slot order.
    pub fn others(&self) -> impl Iterator<Item = &T> {
        let pos = self.pos;
        self.buf
            .iter()
            .enumerate()
            .filter_map(move |(i, v)| (i != pos).then_some(v))
    }

    /// Returns a slice of all slots in the buffer, in storage order.
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_ref()
    }
}
