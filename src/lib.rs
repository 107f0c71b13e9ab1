pub mod config;
pub mod context;
pub mod debug;
pub mod model;
pub mod settings;
mod error;

pub use config::{Config, ConfigBuilder, ConfigError};
pub use context::RunContext;
pub use error::Error;
pub use model::{Plugin, Recipe};
