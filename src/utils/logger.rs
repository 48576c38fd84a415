use crate::domain::model::LogLevel;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Diagnostic output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagnosticFormat {
    #[default]
    Compact,
    Json,
}

fn default_filter(level: LogLevel) -> EnvFilter {
    // RUST_LOG 優先
    let directive = if level <= LogLevel::DEBUG {
        "cnc_launch=debug"
    } else if level <= LogLevel::INFO {
        "cnc_launch=info"
    } else {
        "cnc_launch=warn"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

/// Installs the global diagnostics subscriber. Output goes to stderr so it
/// never interleaves with what the user-facing `Logger` prints on stdout.
/// Calling it twice is harmless; the second registration is ignored.
pub fn init_diagnostics(level: LogLevel, format: DiagnosticFormat) {
    let filter = default_filter(level);

    let result = match format {
        DiagnosticFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .try_init(),
        DiagnosticFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("Diagnostics subscriber already installed");
    }
}
