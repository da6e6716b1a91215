use std::fmt::Debug;

use logtap_core::TapOptions;

use crate::TapChannel;

/// Method-call form of [`crate::tap`], for the end of an expression chain.
///
/// ```rust
/// use logtap::LogTap;
///
/// let total: i32 = [1, 2, 3].iter().sum::<i32>().log_tap_with("sum") * 2;
/// assert_eq!(total, 12);
/// ```
pub trait LogTap: Sized {
    /// Logs `self` on the current console's `log` channel and returns it.
    fn log_tap(self) -> Self;
    /// Logs `self` with `options` on the current console's `log` channel and returns it.
    fn log_tap_with<'a>(self, options: impl Into<TapOptions<'a>>) -> Self;
    /// Logs `self` on the given channel and returns it.
    fn log_tap_in(self, channel: &TapChannel) -> Self;
}

impl<T: Debug> LogTap for T {
    #[track_caller]
    fn log_tap(self) -> Self {
        crate::tap(self)
    }

    #[track_caller]
    fn log_tap_with<'a>(self, options: impl Into<TapOptions<'a>>) -> Self {
        crate::tap_with(self, options)
    }

    #[track_caller]
    fn log_tap_in(self, channel: &TapChannel) -> Self {
        channel.tap(self)
    }
}
