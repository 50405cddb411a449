use primelib_core::Verbosity;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// Install the stderr subscriber.
///
/// A non-empty `RUST_LOG` wins. Otherwise the level follows the command line:
/// - `--quiet`: warnings and errors
/// - default: progress (info)
/// - `-v`: resolved invocations and manifest details (debug)
/// - `-vv`: every command line and deleted file (trace)
pub fn init(verbosity: Verbosity) {
    if let Err(err) = install(verbosity) {
        eprintln!("warning: failed to install logger: {err}");
    }
}

fn directive(verbosity: Verbosity, rust_log: Option<String>) -> String {
    match rust_log {
        Some(filter) if !filter.trim().is_empty() => filter,
        _ => verbosity.filter_directive().to_string(),
    }
}

fn install(verbosity: Verbosity) -> Result<(), TryInitError> {
    let directive = directive(verbosity, std::env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let detailed = verbosity >= Verbosity::Trace;
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(detailed)
                .with_file(detailed)
                .with_line_number(detailed)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_wins_unless_blank() {
        assert_eq!(
            directive(Verbosity::Debug, Some("primelib=trace".to_string())),
            "primelib=trace"
        );
        assert_eq!(directive(Verbosity::Debug, Some("  ".to_string())), "debug");
        assert_eq!(directive(Verbosity::Quiet, None), "warn");
    }

    #[test]
    fn test_second_install_reports_error() {
        let _ = install(Verbosity::Normal);

        assert!(install(Verbosity::Normal).is_err());
        // reported, not fatal
        init(Verbosity::Normal);
    }
}
