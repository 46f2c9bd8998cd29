#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![allow(clippy::len_without_is_empty)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

extern crate alloc;

pub(crate) type Kbn<T> = compensated_summation::KahanBabuskaNeumaier<T>;

mod utils;
pub(crate) use utils::{Window, helper};

mod error;
pub use error::Error;

mod period;
pub use period::Period;

mod traits;
pub use traits::{MovingSumAbs2Ext, Numeric};

mod moving_sumabs2;
pub use moving_sumabs2::MovingSumAbs2;

mod iter;
pub use iter::{MovingSumAbs2Iter, RestartableMovingSumAbs2, TryMovingSumAbs2Iter};
