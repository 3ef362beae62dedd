//! # Logging
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden (`with_target(false)`); records carry
//! `entity_type`, `id`, `from`/`to` and `size` fields instead.
//!
//! ```bash
//! # Actor lifecycle, transitions and timer firings
//! RUST_LOG=info cargo run
//!
//! # Every request with its payload
//! RUST_LOG=debug cargo run
//!
//! # Only the order board
//! RUST_LOG=partner_ops::order_board=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` a pickup followed by automatic delivery reads:
//!
//! ```text
//! INFO Transitioned id=ORD-1026 from=ready to=picked_up
//! INFO Transitioned id=ORD-1026 from=picked_up to=delivered
//! INFO Auto-advanced to delivered id=ORD-1026
//! ```
//!
//! Rejected or failed operations log at `warn`.

/// Initializes the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
