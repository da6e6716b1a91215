//! # logtap-core
//! Core utilities for logtap - channels, call sites, emitted records and the
//! hosts records are emitted through.

mod channel;
mod config;
mod error;
mod host;
mod location;
mod options;
mod record;

pub use channel::Channel;
pub use config::{LOGTAP_CONFIG, LogTapConfig};
pub use error::TapError;
pub use host::{Captured, Host, LogHost, RecordingHost, StdioHost};
pub use location::CallSite;
pub use options::TapOptions;
pub use record::{Segment, TapRecord};
