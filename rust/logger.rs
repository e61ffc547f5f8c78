use std::env;
use tracing_subscriber::EnvFilter;

pub fn init_logging() {
    let level = env::var("LOG_LEVEL").unwrap_or_else(|_| "DEBUG".to_string());
    let level = level.to_lowercase();

    // Without RUST_LOG only this crate's events pass, so reqwest/hyper stay quiet.
    let filter = match env::var("RUST_LOG") {
        Ok(rust_log) => EnvFilter::new(rust_log),
        Err(_) => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
