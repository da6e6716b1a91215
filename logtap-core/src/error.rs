/// Errors surfaced by taps and consoles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TapError {
    /// The console has no channel with this name.
    #[error("no channel named `{0}` on this console")]
    InvalidChannel(String),
    /// The caller location carried no usable file name.
    #[error("unable to resolve the caller location")]
    LocationUnresolvable,
}
