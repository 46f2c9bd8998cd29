use num_traits::Float;

/// An item an upstream iterator can feed into a moving window
///
/// Numeric items resolve to `Some(value)`. Items that carry no number, such as
/// `None`, resolve to `None` and enter the window as NaN instead of
/// interrupting the stream.
pub trait Numeric {
    /// The floating point type the window is computed in
    type Float: Float + Default;

    /// Resolves the item to a number, or `None` if it is not numeric
    fn into_sample(self) -> Option<Self::Float>;

    /// Resolves the item to a number, substituting NaN for non-numeric items
    #[inline]
    fn into_sample_or_nan(self) -> Self::Float
    where
        Self: Sized,
    {
        self.into_sample().unwrap_or_else(<Self::Float as Float>::nan)
    }
}

macro_rules! impl_numeric {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                type Float = $t;

                #[inline]
                fn into_sample(self) -> Option<$t> {
                    Some(self)
                }
            }

            impl Numeric for &$t {
                type Float = $t;

                #[inline]
                fn into_sample(self) -> Option<$t> {
                    Some(*self)
                }
            }

            impl Numeric for Option<$t> {
                type Float = $t;

                #[inline]
                fn into_sample(self) -> Option<$t> {
                    self
                }
            }

            impl Numeric for Option<&$t> {
                type Float = $t;

                #[inline]
                fn into_sample(self) -> Option<$t> {
                    self.copied()
                }
            }
        )*
    };
}

impl_numeric!(f32, f64);
