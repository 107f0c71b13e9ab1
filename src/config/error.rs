use thiserror::Error;

/// Invalid-configuration failure.
///
/// Raised synchronously, either by the offending setter call or by
/// [`ConfigBuilder::build`](super::ConfigBuilder::build); there is no
/// partial-success mode.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("version cannot be empty")]
    EmptyVersion,

    #[error("plugins list cannot be empty")]
    EmptyPlugins,
}
