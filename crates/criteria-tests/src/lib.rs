//! End-to-end assembly tests: realistic criteria types compiled all the
//! way to SQL text, parameter bags and split markers.

#![allow(dead_code)]

pub mod fixtures;

mod joins;

/// Opt-in tracing output for test debugging, driven by `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
