//! repokit core - shared paths and configuration
//!
//! Kept separate from the generator so the config format can be read
//! without pulling in the embedded artifact text.

pub mod config;
pub mod paths;

pub use config::{Config, SummaryConfig};
pub use paths::Paths;
