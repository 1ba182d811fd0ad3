// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod config;
pub mod runtime;
pub mod session;
pub mod stats;
pub mod texts;
pub mod util;

/// Timer granularity: elapsed time advances in half-second steps.
pub const TICK_RATE_MS: u64 = 500;
