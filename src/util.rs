/// Emits a `tracing` event at the `TRACE` level if the `tracing` feature is enabled, and expands to nothing otherwise.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}
pub(crate) use trace;

/// Computes the height of a node from the heights of its children, absent children counting as `-1`.
#[inline(always)]
pub(crate) fn height_from_children(left: Option<i32>, right: Option<i32>) -> i32 {
    1 + core::cmp::max(left.unwrap_or(-1), right.unwrap_or(-1))
}
