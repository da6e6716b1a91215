//! # logtap
//! Log a value inline and get it back.
//!
//! Console methods return nothing, so logging a value usually means pulling it
//! out of the expression it lives in. [`tap`] logs the value and returns it,
//! so it can wrap any sub-expression in place.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! logtap = "0.1.0"
//! ```
//!
//! ```rust
//! use logtap::{tap, tap_with, TapOptions};
//!
//! let area = tap(3) * tap_with(4, "height");
//! // logs `3 - <file>:<line>`, then `height 4 - <file>:<line>`
//! assert_eq!(area, 12);
//!
//! let quiet = tap_with(vec![1, 2], TapOptions::new().with_label("ids").no_location());
//! // logs `ids [1, 2]`
//! assert_eq!(quiet, [1, 2]);
//! ```
//!
//! Records go through the `log` facade by default, so any `log` backend
//! prints them.
//!
//! ## Channels
//! A [`Console`] exposes one [`TapChannel`] per channel of its host, each able
//! to log plain messages and to tap values.
//!
//! ```rust
//! use logtap::Console;
//!
//! let console = Console::default();
//! let retries = console.warn().tap_with(3, "retries left");
//! console.error().log(format_args!("giving up after {retries} retries"));
//! assert!(console.channel("table").is_err());
//! ```
//!
//! ## Installing a console
//! [`tap`] uses the process-wide console when one is installed, and a default
//! console over the `log` facade otherwise. Installing hands back the previous
//! console so it can be restored.
//!
//! ```rust
//! use logtap::console_config;
//!
//! let previous = console_config()
//!     .with_stdio()
//!     .init_global();
//! logtap::tap("printed on stdout");
//! assert!(logtap::installed().is_some());
//! match previous {
//!     Some(previous) => { logtap::install(previous); }
//!     None => { logtap::uninstall(); }
//! }
//! ```

mod console;
mod ext;

use std::{
    fmt::Debug,
    sync::{Arc, LazyLock, PoisonError, RwLock},
};

pub use console::{Console, ConsoleBuilder, TapChannel, console_config};
pub use ext::LogTap;
pub use logtap_core::{
    CallSite, Captured, Channel, Host, LogHost, RecordingHost, StdioHost, TapError, TapOptions,
    TapRecord,
};

/// Process-wide console, unset until [`install`] is called.
static INSTALLED_CONSOLE: LazyLock<RwLock<Option<Arc<Console>>>> =
    LazyLock::new(|| RwLock::new(None));

/// Console used by [`tap`] while nothing is installed.
static DEFAULT_CONSOLE: LazyLock<Arc<Console>> = LazyLock::new(|| Arc::new(Console::default()));

/// Installs `console` process-wide and returns the one it replaces.
pub fn install(console: impl Into<Arc<Console>>) -> Option<Arc<Console>> {
    INSTALLED_CONSOLE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .replace(console.into())
}

/// Removes the process-wide console and returns it.
pub fn uninstall() -> Option<Arc<Console>> {
    INSTALLED_CONSOLE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .take()
}

/// The process-wide console, if one is installed.
pub fn installed() -> Option<Arc<Console>> {
    INSTALLED_CONSOLE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// The console [`tap`] emits through: the installed one, or the default one.
pub fn console() -> Arc<Console> {
    installed().unwrap_or_else(|| Arc::clone(&DEFAULT_CONSOLE))
}

/// Logs `value` on the `log` channel and returns it.
///
/// The record holds the value's `Debug` form followed by the caller's
/// location, ` - <file>:<line>`.
#[track_caller]
pub fn tap<T: Debug>(value: T) -> T {
    console().tap(value)
}

/// Logs `value` on the `log` channel and returns it.
///
/// `options` is a [`TapOptions`], a bare label, or `()` for the defaults.
#[track_caller]
pub fn tap_with<'a, T: Debug>(value: T, options: impl Into<TapOptions<'a>>) -> T {
    console().tap_with(value, options)
}
