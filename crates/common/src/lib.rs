//! Reusable bits shared by the binaries, such as initializing the tracing
//! framework and reading environment overrides.

pub mod env;
pub mod logging;
