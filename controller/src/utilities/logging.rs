use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    // RUST_LOG=fleet=debug,controller=debug
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(true)
        .compact()
        .try_init();
}
