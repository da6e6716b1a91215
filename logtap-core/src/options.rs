use std::borrow::Cow;

use crate::config::LOGTAP_CONFIG;

/// Options of a single tap: an optional label and whether to append the call site.
///
/// A bare string converts into options carrying that label, and `()` into the
/// defaults, so both `tap_with(v, "label")` and `tap_with(v, ())` read naturally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapOptions<'a> {
    label: Cow<'a, str>,
    location: bool,
}

impl Default for TapOptions<'_> {
    fn default() -> Self {
        Self {
            label: Cow::Borrowed(""),
            location: LOGTAP_CONFIG.LOCATION,
        }
    }
}

impl<'a> TapOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }
    /// Sets the label printed before the value.
    pub fn with_label(self, label: impl Into<Cow<'a, str>>) -> Self {
        Self {
            label: label.into(),
            ..self
        }
    }
    /// Maybe sets a label
    pub fn maybe_with_label(self, label: Option<&'a str>) -> Self {
        Self {
            label: Cow::Borrowed(label.unwrap_or_default()),
            ..self
        }
    }
    /// Leave the call site out of the output.
    pub fn no_location(self) -> Self {
        Self {
            location: false,
            ..self
        }
    }
    /// Dynamically set the location flag.
    pub fn with_location(self, yes: bool) -> Self {
        Self {
            location: yes,
            ..self
        }
    }

    /// The label, or `None` when it is empty.
    pub fn label(&self) -> Option<&str> {
        Some(self.label.as_ref()).filter(|label| !label.is_empty())
    }

    pub fn location(&self) -> bool {
        self.location
    }
}

impl<'a> From<&'a str> for TapOptions<'a> {
    fn from(label: &'a str) -> Self {
        Self::default().with_label(label)
    }
}

impl From<String> for TapOptions<'_> {
    fn from(label: String) -> Self {
        Self::default().with_label(label)
    }
}

impl<'a> From<&'a String> for TapOptions<'a> {
    fn from(label: &'a String) -> Self {
        Self::default().with_label(label.as_str())
    }
}

impl From<()> for TapOptions<'_> {
    fn from(_: ()) -> Self {
        Self::default()
    }
}
