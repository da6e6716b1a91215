use std::fmt::{self, Debug, Display};

use crate::{CallSite, Channel, TapOptions};

/// One member of the ordered output of an emission.
#[derive(Clone, Copy)]
pub enum Segment<'a> {
    Label(&'a str),
    Value(&'a dyn Debug),
    Text(&'a dyn Display),
    Location(CallSite),
}

impl Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Label(label) => f.write_str(label),
            Segment::Value(value) => write!(f, "{value:?}"),
            Segment::Text(text) => write!(f, "{text}"),
            Segment::Location(site) => write!(f, "{site}"),
        }
    }
}

impl Debug for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Label(label) => f.debug_tuple("Label").field(label).finish(),
            Segment::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Segment::Text(text) => f.debug_tuple("Text").field(&text.to_string()).finish(),
            Segment::Location(site) => f.debug_tuple("Location").field(site).finish(),
        }
    }
}

/// Everything a host needs to emit one log record on a channel.
#[derive(Debug, Clone)]
pub struct TapRecord<'a> {
    channel: &'a Channel,
    segments: Vec<Segment<'a>>,
    call_site: Option<CallSite>,
}

impl<'a> TapRecord<'a> {
    /// Record of a tapped value: label if any, the value itself, then the call site
    /// when the options ask for it.
    pub fn tap(
        channel: &'a Channel,
        value: &'a dyn Debug,
        options: &'a TapOptions<'_>,
        call_site: Option<CallSite>,
    ) -> Self {
        let mut segments = Vec::with_capacity(3);
        if let Some(label) = options.label() {
            segments.push(Segment::Label(label));
        }
        // The value is pushed unconditionally, whatever it renders to.
        segments.push(Segment::Value(value));
        if options.location()
            && let Some(site) = call_site
        {
            segments.push(Segment::Location(site));
        }
        Self {
            channel,
            segments,
            call_site,
        }
    }

    /// Record of a plain message, as the channel's own logging method emits it.
    pub fn text(channel: &'a Channel, text: &'a dyn Display, call_site: Option<CallSite>) -> Self {
        Self {
            channel,
            segments: vec![Segment::Text(text)],
            call_site,
        }
    }

    pub fn channel(&self) -> &Channel {
        self.channel
    }

    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Where the emission was requested, whether or not it is printed.
    pub fn call_site(&self) -> Option<CallSite> {
        self.call_site
    }
}

impl Display for TapRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            // The location carries its own ` - ` separator.
            if !first && !matches!(segment, Segment::Location(_)) {
                f.write_str(" ")?;
            }
            write!(f, "{segment}")?;
            first = false;
        }
        Ok(())
    }
}
