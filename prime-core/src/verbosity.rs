//! Output verbosity shared by logging setup and backend invocations.

use std::fmt;

/// How chatty the generator and its backends should be.
///
/// The level is decided once from the command line and then handed to
/// whatever needs it; nothing reads a global logger level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Only warnings and errors.
    Quiet,
    /// Progress messages.
    #[default]
    Normal,
    /// Resolved invocations and bookkeeping details.
    Debug,
    /// Everything, including every deleted file.
    Trace,
}

impl Verbosity {
    /// Map `-v` occurrences (and `--quiet`) to a verbosity.
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Verbosity::Quiet;
        }
        match verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    /// Directive usable as a `tracing_subscriber::EnvFilter`.
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "warn",
            Verbosity::Normal => "info",
            Verbosity::Debug => "debug",
            Verbosity::Trace => "trace",
        }
    }

    /// Value for a backend `--log-level` flag, if this level warrants one.
    pub fn backend_log_level(&self) -> Option<&'static str> {
        match self {
            Verbosity::Debug => Some("debug"),
            Verbosity::Trace => Some("trace"),
            Verbosity::Quiet | Verbosity::Normal => None,
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.filter_directive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(Verbosity::from_flags(0, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(1, false), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(2, false), Verbosity::Trace);
        assert_eq!(Verbosity::from_flags(5, false), Verbosity::Trace);
        assert_eq!(Verbosity::from_flags(3, true), Verbosity::Quiet);
    }

    #[test]
    fn test_backend_log_level_only_when_verbose() {
        assert_eq!(Verbosity::Quiet.backend_log_level(), None);
        assert_eq!(Verbosity::Normal.backend_log_level(), None);
        assert_eq!(Verbosity::Debug.backend_log_level(), Some("debug"));
        assert_eq!(Verbosity::Trace.backend_log_level(), Some("trace"));
    }

    #[test]
    fn test_display_matches_directive() {
        assert_eq!(Verbosity::Trace.to_string(), "trace");
        assert_eq!(Verbosity::Normal.to_string(), "info");
    }
}
