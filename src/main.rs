//! gotestmain CLI entry point

fn main() {
    // Logs go to stderr; the default stays at `warn` so a driver printed to stdout is not interleaved with chatter.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    gotestmain::cli::run();
}
