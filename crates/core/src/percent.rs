//! Integer percentage of a measurement relative to the baseline.

use crate::timer::Millis;

/// `floor(100 * measured / baseline)` in integer arithmetic.
///
/// Scaling by 100 before dividing keeps the whole-percent digits without
/// floating point. Returns `None` when the baseline is zero or the scaled
/// value overflows.
///
/// # Examples
///
/// ```
/// use ctbench_core::{percent_relative, Millis};
///
/// assert_eq!(percent_relative(Millis::new(3), Millis::new(7)), Some(233));
/// assert_eq!(percent_relative(Millis::ZERO, Millis::new(7)), None);
/// ```
#[must_use]
pub fn percent_relative(baseline: Millis, measured: Millis) -> Option<u64> {
    measured
        .as_u64()
        .checked_mul(100)?
        .checked_div(baseline.as_u64())
}
