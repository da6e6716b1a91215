use std::{borrow::Cow, fmt};

use log::Level;

/// A named logging channel, one per method of a console object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Channel {
    Log,
    Info,
    Warn,
    Error,
    Debug,
    Trace,
    /// Any channel a host exposes beyond the standard set.
    Other(Cow<'static, str>),
}

impl Channel {
    /// The closed set of channels every host accepts, in console order.
    pub const STANDARD: [Channel; 6] = [
        Channel::Log,
        Channel::Info,
        Channel::Warn,
        Channel::Error,
        Channel::Debug,
        Channel::Trace,
    ];

    /// Builds a channel from a name, keeping a `'static` name without copying it.
    ///
    /// Standard names map to their variant, so `Channel::other("warn") == Channel::Warn`.
    pub fn other(name: impl Into<Cow<'static, str>>) -> Self {
        Channel::Other(name.into()).normalize()
    }

    /// Builds a channel from a borrowed name, copying it when it is not standard.
    pub fn from_name(name: &str) -> Self {
        Self::standard(name).unwrap_or_else(|| Channel::Other(Cow::Owned(name.to_owned())))
    }

    /// Maps a [`Channel::Other`] carrying a standard name to that standard variant.
    ///
    /// `Other` is a public variant, so `Channel::Other("warn".into())` can be built
    /// directly; consoles and hosts normalize every channel they are handed.
    pub fn normalize(self) -> Self {
        match self {
            Channel::Other(name) => Self::standard(&name).unwrap_or(Channel::Other(name)),
            standard => standard,
        }
    }

    fn standard(name: &str) -> Option<Self> {
        match name {
            "log" => Some(Channel::Log),
            "info" => Some(Channel::Info),
            "warn" => Some(Channel::Warn),
            "error" => Some(Channel::Error),
            "debug" => Some(Channel::Debug),
            "trace" => Some(Channel::Trace),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Channel::Log => "log",
            Channel::Info => "info",
            Channel::Warn => "warn",
            Channel::Error => "error",
            Channel::Debug => "debug",
            Channel::Trace => "trace",
            Channel::Other(name) => name,
        }
    }

    /// Severity used when the channel is forwarded to the `log` facade.
    pub fn level(&self) -> Level {
        match self {
            Channel::Error => Level::Error,
            Channel::Warn => Level::Warn,
            Channel::Debug => Level::Debug,
            Channel::Trace => Level::Trace,
            Channel::Log | Channel::Info | Channel::Other(_) => Level::Info,
        }
    }

    pub fn is_standard(&self) -> bool {
        !matches!(self, Channel::Other(_))
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for Channel {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}
