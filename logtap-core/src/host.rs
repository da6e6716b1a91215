use std::{
    io::{self, Write},
    sync::{Arc, Mutex, PoisonError},
};

use chrono::Utc;
use colored::Colorize;

use crate::{CallSite, Channel, TapRecord, config::LOGTAP_CONFIG};

/// The console-like facility records are emitted through.
pub trait Host: Send + Sync {
    /// Channels exposed by this host. Every host accepts [`Channel::STANDARD`];
    /// implementations list extra [`Channel::Other`] channels here.
    fn channels(&self) -> Vec<Channel> {
        Channel::STANDARD.to_vec()
    }

    /// Emits one record on `record.channel()`. Emission is fire-and-forget.
    fn emit(&self, record: &TapRecord<'_>);
}

impl<H: Host + ?Sized> Host for Arc<H> {
    fn channels(&self) -> Vec<Channel> {
        (**self).channels()
    }

    fn emit(&self, record: &TapRecord<'_>) {
        (**self).emit(record)
    }
}

/// Host forwarding every record to the `log` facade.
///
/// The channel picks the level, the call site fills the record's file and line.
/// [`Channel::Other`] channels log under the `logtap::<name>` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHost;

impl Host for LogHost {
    fn emit(&self, record: &TapRecord<'_>) {
        let channel = record.channel();
        let level = channel.level();
        if level > log::max_level() {
            return;
        }
        let target = match channel {
            Channel::Other(name) => format!("logtap::{name}"),
            _ => "logtap".to_owned(),
        };
        let call_site = record.call_site();
        log::logger().log(
            &log::Record::builder()
                .args(format_args!("{record}"))
                .level(level)
                .target(&target)
                .file_static(call_site.map(|site| site.file()))
                .line(call_site.map(|site| site.line()))
                .build(),
        );
    }
}

type SharedWriter = Mutex<Box<dyn Write + Send>>;

/// Host writing timestamped lines straight to stdout and stderr, the way a
/// terminal console does: `warn` and `error` go to stderr, everything else to stdout.
pub struct StdioHost {
    out: SharedWriter,
    err: SharedWriter,
    extra_channels: Vec<Channel>,
    name: Option<String>,
    colors: bool,
}

impl Default for StdioHost {
    fn default() -> Self {
        Self::new()
    }
}

impl StdioHost {
    pub fn new() -> Self {
        Self {
            out: Mutex::new(Box::new(io::stdout())),
            err: Mutex::new(Box::new(io::stderr())),
            extra_channels: Vec::new(),
            name: None,
            colors: LOGTAP_CONFIG.COLOR,
        }
    }
    /// Writes to the given writers instead of the process streams. Colors are off.
    pub fn with_writers<O, E>(out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
            extra_channels: Vec::new(),
            name: None,
            colors: false,
        }
    }
    /// Exposes one more channel. Standard channels are always exposed.
    pub fn with_channel(mut self, channel: Channel) -> Self {
        let channel = channel.normalize();
        if !channel.is_standard() && !self.extra_channels.contains(&channel) {
            self.extra_channels.push(channel);
        }
        self
    }
    /// Sets a name printed in every line
    pub fn with_name(self, name: &str) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }
    /// Dynamically set the colors flag.
    pub fn with_colors(self, yes: bool) -> Self {
        Self {
            colors: yes,
            ..self
        }
    }
    /// Disable colors
    pub fn no_colors(self) -> Self {
        self.with_colors(false)
    }
}

impl std::fmt::Debug for StdioHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StdioHost")
            .field("extra_channels", &self.extra_channels)
            .field("name", &self.name)
            .field("colors", &self.colors)
            .finish_non_exhaustive()
    }
}

fn format_log(record: &TapRecord<'_>, name: Option<&str>, colors: bool) -> String {
    let time = Utc::now().format("%Y-%m-%dT%H:%M:%S%.3f");
    let channel = record.channel();
    let plain = channel.name().to_uppercase();
    let tag = if colors {
        let tag = plain.as_str();
        match channel {
            Channel::Error => tag.red(),
            Channel::Warn => tag.yellow(),
            Channel::Info => tag.green(),
            Channel::Debug => tag.blue(),
            Channel::Trace => tag.purple(),
            Channel::Log => tag.white(),
            Channel::Other(_) => tag.cyan(),
        }
        .to_string()
    } else {
        plain
    };
    if let Some(name) = name {
        format!("[{time} {name} {tag}] {record}")
    } else {
        format!("[{time} {tag}] {record}")
    }
}

impl Host for StdioHost {
    fn channels(&self) -> Vec<Channel> {
        Channel::STANDARD
            .into_iter()
            .chain(self.extra_channels.iter().cloned())
            .collect()
    }

    fn emit(&self, record: &TapRecord<'_>) {
        let line = format_log(record, self.name.as_deref(), self.colors);
        let writer = match record.channel() {
            Channel::Warn | Channel::Error => &self.err,
            _ => &self.out,
        };
        let mut writer = writer.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{line}").ok();
        writer.flush().ok();
    }
}

/// An emission kept by [`RecordingHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    pub channel: Channel,
    /// Each segment rendered on its own, in output order.
    pub segments: Vec<String>,
    /// The whole record as a single line.
    pub line: String,
    pub call_site: Option<CallSite>,
}

/// Host keeping every emission in memory instead of printing it.
#[derive(Debug, Default)]
pub struct RecordingHost {
    extra_channels: Vec<Channel>,
    captured: Mutex<Vec<Captured>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }
    /// Exposes one more channel. Standard channels are always exposed.
    pub fn with_channel(mut self, channel: Channel) -> Self {
        let channel = channel.normalize();
        if !channel.is_standard() && !self.extra_channels.contains(&channel) {
            self.extra_channels.push(channel);
        }
        self
    }
    /// Copy of everything emitted so far.
    pub fn captured(&self) -> Vec<Captured> {
        self.captured
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
    /// Drains everything emitted so far.
    pub fn take(&self) -> Vec<Captured> {
        std::mem::take(&mut *self.captured.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Host for RecordingHost {
    fn channels(&self) -> Vec<Channel> {
        Channel::STANDARD
            .into_iter()
            .chain(self.extra_channels.iter().cloned())
            .collect()
    }

    fn emit(&self, record: &TapRecord<'_>) {
        let captured = Captured {
            channel: record.channel().clone(),
            segments: record.segments().iter().map(ToString::to_string).collect(),
            line: record.to_string(),
            call_site: record.call_site(),
        };
        self.captured
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(captured);
    }
}
