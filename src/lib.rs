// src/lib.rs
// Public library surface for the two binaries and integration tests.

pub mod bot;
pub mod classify;
pub mod config;
pub mod extract;
pub mod feed;
pub mod fetch;

// ---- Re-exports for stable public API ----
pub use crate::classify::{classify, Role, RoleAssignment};
pub use crate::feed::{assemble_feed, guess_mime};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compact tracing output; `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}
