use std::{fmt, panic::Location};

use crate::TapError;

/// Source position of the code that called a tap.
///
/// Captured at the public boundary with `#[track_caller]` and passed down
/// explicitly, so the reported position never depends on how many wrapper
/// frames sit between the caller and the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    file: &'static str,
    line: u32,
}

impl CallSite {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Turns a caller location into a call site, failing when it has no file name.
    pub fn resolve(location: &Location<'static>) -> Result<Self, TapError> {
        if file_name(location.file()).is_empty() {
            return Err(TapError::LocationUnresolvable);
        }
        Ok(Self::new(location.file(), location.line()))
    }

    /// Call site of whoever called the enclosing `#[track_caller]` function.
    #[track_caller]
    pub fn caller() -> Result<Self, TapError> {
        Self::resolve(Location::caller())
    }

    /// Full source path as recorded by the compiler.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// Last path segment of [`CallSite::file`].
    pub fn file_name(&self) -> &'static str {
        file_name(self.file)
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " - {}:{}", self.file_name(), self.line)
    }
}

fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_strips_directories() {
        assert_eq!(CallSite::new("src/bin/main.rs", 3).file_name(), "main.rs");
        assert_eq!(CallSite::new("C:\\work\\app\\lib.rs", 3).file_name(), "lib.rs");
        assert_eq!(CallSite::new("lib.rs", 3).file_name(), "lib.rs");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            CallSite::new("/home/me/project/src/parser.rs", 42).to_string(),
            " - parser.rs:42"
        );
    }

    #[test]
    fn test_caller_points_here() {
        let line = line!() + 1;
        let site = CallSite::caller().unwrap();
        assert_eq!(site.file_name(), "location.rs");
        assert_eq!(site.line(), line);
    }

    #[test]
    fn test_resolve_reads_file_and_line() {
        let location = Location::caller();
        let site = CallSite::resolve(location).unwrap();
        assert_eq!(site.file(), location.file());
        assert_eq!(site.line(), location.line());
    }

    #[test]
    fn test_trailing_separator_leaves_no_file_name() {
        assert_eq!(CallSite::new("src/", 1).file_name(), "");
    }
}
