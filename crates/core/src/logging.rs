use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Install a `fmt` subscriber filtered by `RUST_LOG`, defaulting this crate to `info`.
///
/// Safe to call more than once; only the first call has an effect. Does nothing
/// if the host application already installed a global subscriber.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "expense_stats_core=info".parse() {
            filter = filter.add_directive(directive);
        }

        if fmt().with_env_filter(filter).try_init().is_ok() {
            tracing::info!("expense-stats-core tracing initialized.");
        }
    });
}
