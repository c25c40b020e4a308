//! Initialization logic for the logging setup that is shared between the
//! binaries, plus a panic hook that routes panics through `tracing`.
pub mod tracing;
