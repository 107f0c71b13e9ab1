//! The validated, immutable configuration for one modernization run.
//!
//! A [`ConfigBuilder`] accumulates candidate values (each setter either
//! validated immediately or backed by a default from [`crate::settings`]),
//! then finalizes exactly once into a read-only [`Config`] that every
//! downstream layer shares for the remainder of the run.

mod builder;
mod error;
mod model;

pub use builder::ConfigBuilder;
pub use error::ConfigError;
pub use model::Config;
