use std::{
    fmt::{self, Debug},
    panic::Location,
    sync::Arc,
};

use logtap_core::{CallSite, Channel, Host, LogHost, StdioHost, TapError, TapOptions, TapRecord};

/// A channel of a [`Console`], able to log plain messages and to tap values.
#[derive(Clone)]
pub struct TapChannel {
    channel: Channel,
    host: Arc<dyn Host>,
}

impl TapChannel {
    fn new(channel: Channel, host: Arc<dyn Host>) -> Self {
        Self { channel, host }
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    pub fn name(&self) -> &str {
        self.channel.name()
    }

    /// Logs a plain message on this channel, exactly as the host would.
    ///
    /// ```rust
    /// let console = logtap::Console::default();
    /// console.warn().log(format_args!("disk at {}%", 93));
    /// ```
    #[track_caller]
    pub fn log(&self, args: fmt::Arguments<'_>) {
        let call_site = CallSite::caller().ok();
        self.host.emit(&TapRecord::text(&self.channel, &args, call_site));
    }

    /// Logs `value` on this channel with default options and returns it.
    #[track_caller]
    pub fn tap<T: Debug>(&self, value: T) -> T {
        self.emit_tap(value, TapOptions::default(), Location::caller())
    }

    /// Logs `value` on this channel and returns it.
    ///
    /// `options` is a [`TapOptions`], a bare label, or `()`.
    #[track_caller]
    pub fn tap_with<'a, T: Debug>(&self, value: T, options: impl Into<TapOptions<'a>>) -> T {
        self.emit_tap(value, options.into(), Location::caller())
    }

    fn emit_tap<T: Debug>(
        &self,
        value: T,
        options: TapOptions<'_>,
        location: &'static Location<'static>,
    ) -> T {
        // Without a usable call site the location segment is left out.
        let call_site = CallSite::resolve(location).ok();
        self.host.emit(&TapRecord::tap(&self.channel, &value, &options, call_site));
        value
    }
}

impl Debug for TapChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TapChannel").field(&self.channel).finish()
    }
}

/// A host's channels, each able to tap, plus a top-level tap bound to `log`.
///
/// The channel set is read from [`Host::channels`] once, when the console is
/// built: the six standard channels first, then the host's extra channels.
/// The host itself is only shared, never modified.
pub struct Console {
    host: Arc<dyn Host>,
    channels: Vec<TapChannel>,
}

impl Console {
    pub fn new<H: Host + 'static>(host: H) -> Self {
        Self::from_shared(Arc::new(host))
    }

    pub fn from_shared(host: Arc<dyn Host>) -> Self {
        let mut names = Channel::STANDARD.to_vec();
        for channel in host.channels() {
            let channel = channel.normalize();
            if !names.iter().any(|known| known.name() == channel.name()) {
                names.push(channel);
            }
        }
        let channels = names
            .into_iter()
            .map(|channel| TapChannel::new(channel, Arc::clone(&host)))
            .collect();
        Self { host, channels }
    }

    pub fn host(&self) -> &Arc<dyn Host> {
        &self.host
    }

    pub fn channels(&self) -> impl Iterator<Item = &TapChannel> {
        self.channels.iter()
    }

    pub fn get(&self, channel: &Channel) -> Option<&TapChannel> {
        self.channels.iter().find(|c| c.name() == channel.name())
    }

    /// Looks a channel up by name.
    pub fn channel(&self, name: &str) -> Result<&TapChannel, TapError> {
        self.get(&Channel::from_name(name))
            .ok_or_else(|| TapError::InvalidChannel(name.to_owned()))
    }

    fn standard(&self, channel: Channel) -> &TapChannel {
        let index = Channel::STANDARD
            .iter()
            .position(|c| *c == channel)
            .unwrap_or_default();
        &self.channels[index]
    }

    pub fn log(&self) -> &TapChannel {
        self.standard(Channel::Log)
    }
    pub fn info(&self) -> &TapChannel {
        self.standard(Channel::Info)
    }
    pub fn warn(&self) -> &TapChannel {
        self.standard(Channel::Warn)
    }
    pub fn error(&self) -> &TapChannel {
        self.standard(Channel::Error)
    }
    pub fn debug(&self) -> &TapChannel {
        self.standard(Channel::Debug)
    }
    pub fn trace(&self) -> &TapChannel {
        self.standard(Channel::Trace)
    }

    /// Logs `value` on the `log` channel and returns it.
    #[track_caller]
    pub fn tap<T: Debug>(&self, value: T) -> T {
        self.log().tap(value)
    }

    /// Logs `value` on the `log` channel with `options` and returns it.
    #[track_caller]
    pub fn tap_with<'a, T: Debug>(&self, value: T, options: impl Into<TapOptions<'a>>) -> T {
        self.log().tap_with(value, options)
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new(LogHost)
    }
}

impl Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field(
                "channels",
                &self.channels.iter().map(TapChannel::name).collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

/// Builder for configuring and creating a [`Console`].
#[derive(Default)]
pub struct ConsoleBuilder {
    host: Option<Arc<dyn Host>>,
}

impl ConsoleBuilder {
    /// Sets the host records are emitted through. Defaults to [`LogHost`].
    pub fn with_host<H: Host + 'static>(self, host: H) -> Self {
        Self {
            host: Some(Arc::new(host)),
        }
    }
    /// Sets a host shared with other owners.
    pub fn with_shared_host(self, host: Arc<dyn Host>) -> Self {
        Self { host: Some(host) }
    }
    /// Prints straight to stdout and stderr instead of going through `log`.
    pub fn with_stdio(self) -> Self {
        self.with_host(StdioHost::new())
    }

    pub fn build(self) -> Console {
        match self.host {
            Some(host) => Console::from_shared(host),
            None => Console::default(),
        }
    }

    /// Builds the console and installs it process-wide.
    /// Returns the console installed before, to hand back to [`crate::install`] if needed.
    pub fn init_global(self) -> Option<Arc<Console>> {
        crate::install(self.build())
    }
}

/// Returns a default ConsoleBuilder for configuring a console.
pub fn console_config() -> ConsoleBuilder {
    ConsoleBuilder::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use logtap_core::RecordingHost;
    use std::borrow::Cow;

    fn recording_console() -> (Arc<RecordingHost>, Console) {
        let host = Arc::new(RecordingHost::new().with_channel(Channel::other("table")));
        let console = console_config().with_shared_host(host.clone()).build();
        (host, console)
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_tap_returns_value_unchanged() {
        let (_host, console) = recording_console();
        assert_eq!(console.tap(0), 0);
        assert_eq!(console.tap(""), "");
        assert!(!console.tap(false));
        assert_eq!(console.tap(None::<u8>), None);
        assert_eq!(console.tap(vec![1, 2, 3]), vec![1, 2, 3]);
        assert_eq!(console.tap(Point { x: 1, y: -1 }), Point { x: 1, y: -1 });
        let owned = String::from("moved through");
        let ptr = owned.as_ptr();
        let back = console.tap(owned);
        assert_eq!(back.as_ptr(), ptr);
    }

    #[test]
    fn test_falsy_values_are_emitted() {
        let (host, console) = recording_console();
        console.tap_with(0, "");
        console.tap_with(false, ());
        console.tap_with("", TapOptions::new().no_location());
        let captured = host.take();
        assert_eq!(captured[0].segments[0], "0");
        assert_eq!(captured[1].segments[0], "false");
        assert_eq!(captured[2].segments, ["\"\""]);
    }

    #[test]
    fn test_label_shorthand_equivalence() {
        let (host, console) = recording_console();
        console.tap_with(5, "mylabel");
        console.tap_with(5, TapOptions::new().with_label("mylabel"));
        let captured = host.take();
        assert_eq!(captured[0].segments[..2], captured[1].segments[..2]);
        assert_eq!(captured[0].segments.len(), 3);
        assert_eq!(captured[1].segments.len(), 3);
        assert_eq!(captured[0].segments[0], "mylabel");
    }

    #[test]
    fn test_location_suppression() {
        let (host, console) = recording_console();
        console.tap_with(9, TapOptions::new().no_location());
        console.tap_with(9, TapOptions::new().with_label("x").no_location());
        let captured = host.take();
        assert_eq!(captured[0].segments, ["9"]);
        assert_eq!(captured[1].segments, ["x", "9"]);
        assert_eq!(captured[1].line, "x 9");
    }

    #[test]
    fn test_default_options() {
        let (host, console) = recording_console();
        let line = line!() + 1;
        console.tap('a');
        console.tap_with('a', TapOptions::default());
        let captured = host.take();
        assert_eq!(captured[0].segments.len(), 2);
        assert_eq!(captured[0].segments[0], "'a'");
        assert_eq!(captured[0].segments[1], format!(" - console.rs:{line}"));
        assert_eq!(captured[1].segments.len(), 2);
    }

    #[test]
    fn test_location_is_the_caller() {
        let (host, console) = recording_console();
        let line = line!() + 1;
        console.warn().tap_with(1, "here");
        let captured = host.take();
        let site = captured[0].call_site.unwrap();
        assert_eq!(site.file_name(), "console.rs");
        assert_eq!(site.line(), line);
        assert_eq!(captured[0].line, format!("here 1 - console.rs:{line}"));
    }

    #[test]
    fn test_channel_binding() {
        let (host, console) = recording_console();
        console.warn().tap("w");
        console.error().tap("e");
        console.tap("l");
        console.channel("table").unwrap().tap("t");
        let channels: Vec<_> = host.take().into_iter().map(|c| c.channel).collect();
        assert_eq!(
            channels,
            [Channel::Warn, Channel::Error, Channel::Log, Channel::other("table")]
        );
    }

    #[test]
    fn test_every_channel_is_bound_to_itself() {
        let (host, console) = recording_console();
        for channel in console.channels() {
            channel.tap(channel.name());
        }
        for captured in host.take() {
            assert_eq!(captured.segments[0], format!("{:?}", captured.channel.name()));
        }
    }

    struct RawChannelHost(RecordingHost);

    impl Host for RawChannelHost {
        fn channels(&self) -> Vec<Channel> {
            vec![
                Channel::Other(Cow::Borrowed("warn")),
                Channel::Other(Cow::Borrowed("table")),
                Channel::Other(Cow::Owned(String::from("table"))),
            ]
        }

        fn emit(&self, record: &TapRecord<'_>) {
            self.0.emit(record)
        }
    }

    #[test]
    fn test_raw_standard_names_do_not_duplicate_channels() {
        let host = Arc::new(RawChannelHost(RecordingHost::new()));
        let console = Console::from_shared(host.clone());
        let names: Vec<_> = console.channels().map(TapChannel::name).collect();
        assert_eq!(names, ["log", "info", "warn", "error", "debug", "trace", "table"]);

        console.channel("warn").unwrap().tap(1);
        console.get(&Channel::Other(Cow::Borrowed("warn"))).unwrap().tap(2);
        let channels: Vec<_> = host.0.take().into_iter().map(|c| c.channel).collect();
        assert_eq!(channels, [Channel::Warn, Channel::Warn]);
    }

    #[test]
    fn test_invalid_channel() {
        let (_host, console) = recording_console();
        assert_eq!(
            console.channel("dir").unwrap_err(),
            TapError::InvalidChannel("dir".into())
        );
        assert!(console.get(&Channel::other("dir")).is_none());
    }

    #[test]
    fn test_channel_set_is_fixed_at_build() {
        let (host, console) = recording_console();
        let names: Vec<_> = console.channels().map(TapChannel::name).collect();
        assert_eq!(names, ["log", "info", "warn", "error", "debug", "trace", "table"]);
        assert_eq!(host.channels().len(), names.len());
        assert_eq!(format!("{console:?}").matches('"').count(), 14);
    }

    #[test]
    fn test_host_is_left_untouched() {
        let (host, console) = recording_console();
        let before = host.channels();
        let other = Console::from_shared(host.clone());
        assert_eq!(host.channels(), before);

        let channel = Channel::Info;
        let message = "direct";
        host.emit(&TapRecord::text(&channel, &message, None));
        console.info().log(format_args!("through {}", "console"));
        other.info().log(format_args!("through other"));
        let lines: Vec<_> = host.take().into_iter().map(|c| c.line).collect();
        assert_eq!(lines, ["direct", "through console", "through other"]);
    }

    #[test]
    fn test_plain_log_has_no_location_segment() {
        let (host, console) = recording_console();
        console.error().log(format_args!("failed: {}", 3));
        let captured = host.take();
        assert_eq!(captured[0].segments, ["failed: 3"]);
        assert_eq!(captured[0].call_site.unwrap().file_name(), "console.rs");
    }

    #[test]
    fn test_builder_defaults_to_log_host() {
        let console = console_config().build();
        assert_eq!(console.channels().count(), 6);
        assert_eq!(console.tap(3), 3);
    }
}
