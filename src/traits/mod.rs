mod numeric;
pub use numeric::Numeric;

mod moving_sumabs2_ext;
pub use moving_sumabs2_ext::MovingSumAbs2Ext;
