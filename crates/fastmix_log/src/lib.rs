//! Logging for the fastmix crates.
//!
//! Library code logs through the macros re-exported here so that the choice of
//! logging backend is left to the final binary.

pub use log::{debug, error, info, warn};
