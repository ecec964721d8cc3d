use tracing_subscriber::EnvFilter;

/// Send diagnostics to stderr. `RUST_LOG` wins; otherwise `--verbose` picks debug.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose {
        "warn,jejusitemap=debug"
    } else {
        "warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (tests, embedding) keeps the existing subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
