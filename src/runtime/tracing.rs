/// Initializes structured logging for the whole process.
///
/// Verbosity is controlled via `RUST_LOG` (`info` shows connection and
/// per-send lines, `debug` adds operator commands and tick delays).
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
