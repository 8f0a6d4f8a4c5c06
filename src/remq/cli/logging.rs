use env_logger::{Builder, Env, Target};

/// Logs go to stderr so stdout stays a single JSON value.
pub fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };

    Builder::from_env(Env::default().default_filter_or(filter))
        .target(Target::Stderr)
        .format_timestamp(None)
        .init();
}
