//! Configuration for building providers from a file.
//!
//! This module provides:
//! - `ProvidersConfig`: A list of inputs loaded from YAML or JSON
//! - `InputConfig`: One input file with an optional explicit mode

mod providers;

pub use providers::{InputConfig, ProvidersConfig};
