use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber for the binary.
///
/// `RUST_LOG` wins when set; otherwise `default_filter` applies, e.g.
/// `campus_registry=info,tower_http=info`. Call once, at startup.
pub fn setup_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
