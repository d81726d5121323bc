//! Parameter schedule shared by the curve and tangent samplers.
use num_traits::{Float, ToPrimitive};

/// Convert a count or coefficient into the scalar type of a point.
/// Every primitive float can represent any integer (possibly rounded), NaN is unreachable for them.
pub(crate) fn scalar<T: Float, N: ToPrimitive>(n: N) -> T {
    T::from(n).unwrap_or_else(T::nan)
}

/// Parameters `t_i = i / count` for `i = 1..=count`.
/// The schedule starts one step in, at `1 / count`, and ends exactly at `t = 1`; `t = 0` is never produced.
/// A count of zero yields an empty schedule.
pub fn parameters<T: Float>(count: usize) -> impl Iterator<Item = T> + Clone {
    let denominator: T = scalar(count);
    (1..=count).map(move |i| scalar::<T, _>(i) / denominator)
}
