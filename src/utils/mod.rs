use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Directives used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_DIRECTIVES: &str = "expense_tracker=warn,expense_core=warn";

/// Initializes the global tracing subscriber. Logs go to stderr so they never
/// interleave with menu output on stdout.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVES));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
