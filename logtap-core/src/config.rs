use std::sync::LazyLock;

use derive_from_env::FromEnv;

#[derive(FromEnv)]
#[from_env(prefix = "LOGTAP")]
#[allow(non_snake_case)]
struct LocationVar {
    #[from_env(default = "true")]
    LOCATION: bool,
}

#[derive(FromEnv)]
#[from_env(prefix = "LOGTAP")]
#[allow(non_snake_case)]
struct ColorVar {
    #[from_env(default = "true")]
    COLOR: bool,
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogTapConfig {
    /// Whether taps append the caller location when the options do not say otherwise.
    pub LOCATION: bool,
    /// Whether `StdioHost::new` colors level names.
    pub COLOR: bool,
}

impl Default for LogTapConfig {
    fn default() -> Self {
        Self {
            LOCATION: true,
            COLOR: true,
        }
    }
}

impl LogTapConfig {
    /// Reads `LOGTAP_LOCATION` and `LOGTAP_COLOR`.
    /// Each variable is parsed on its own; a malformed one keeps its default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            LOCATION: LocationVar::from_env()
                .map(|var| var.LOCATION)
                .unwrap_or(defaults.LOCATION),
            COLOR: ColorVar::from_env()
                .map(|var| var.COLOR)
                .unwrap_or(defaults.COLOR),
        }
    }
}

pub static LOGTAP_CONFIG: LazyLock<LogTapConfig> = LazyLock::new(LogTapConfig::from_env);
