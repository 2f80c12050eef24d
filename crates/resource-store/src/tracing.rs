//! # Tracing Setup
//!
//! Structured logging for the store system: container lifecycle at `info`,
//! per-operation traces at `debug`, rejected operations at `warn`.

/// Initializes the tracing subscriber with environment-based filtering.
///
/// Verbosity is controlled via `RUST_LOG`:
/// - `RUST_LOG=info` — lifecycle events
/// - `RUST_LOG=debug` — every dispatch and settlement with generations
/// - `RUST_LOG=resource_store=debug` — framework internals only
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
