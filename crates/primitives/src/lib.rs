//! Collection of addresses and parameter types shared by the bridge actions.

pub mod constants;
pub mod options;
pub mod params;
