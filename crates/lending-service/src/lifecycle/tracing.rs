/// Installs the global `tracing` subscriber.
///
/// Verbosity comes from `RUST_LOG`:
///
/// ```bash
/// RUST_LOG=info cargo run                       # reservations, refusals, lifecycle
/// RUST_LOG=debug cargo run                      # every request, cache hits and misses
/// RUST_LOG=lending_core=debug,info cargo run    # engine detail only
/// ```
///
/// Call once per process; a second call panics inside `init`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
