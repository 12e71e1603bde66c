//! Configuration for the bridge tooling.

mod config;

pub use config::*;
