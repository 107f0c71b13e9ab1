//! Run context handed to the collaborator layers.

use crate::{Config, Error};

/// Read-only handle to the configuration of one modernization run.
///
/// The recipe engine, the source-control integration, and the metadata-fetch
/// layer all borrow the same finished [`Config`] through this context; none
/// of them can mutate it. The context lives exactly as long as the run.
///
/// ## Example
///
/// ```
/// use modernizer_core::{Config, Plugin, RunContext};
///
/// let config = Config::builder()
///     .version("2.0")?
///     .plugins(vec![Plugin::new("git-client")])?
///     .build()?;
///
/// let ctx = RunContext::builder().with_config(config).build()?;
/// assert_eq!(ctx.config().version(), "2.0");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct RunContext {
    config: Config,
}

impl RunContext {
    /// Creates a new builder for constructing a `RunContext`.
    pub fn builder() -> RunContextBuilder {
        RunContextBuilder { config: None }
    }

    /// Returns the run's configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Builder for constructing a [`RunContext`].
#[derive(Debug)]
#[must_use = "builders do nothing until .build() is called"]
pub struct RunContextBuilder {
    config: Option<Config>,
}

impl RunContextBuilder {
    /// Attaches the finished configuration to the run context.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the `RunContext`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConfig`] if no configuration was provided.
    pub fn build(self) -> Result<RunContext, Error> {
        Ok(RunContext {
            config: self.config.ok_or(Error::MissingConfig)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Plugin;

    #[test]
    fn test_context_requires_config() {
        let result = RunContext::builder().build();
        assert!(matches!(result, Err(Error::MissingConfig)));
    }

    #[test]
    fn test_context_exposes_config() {
        let config = Config::builder()
            .version("2.0")
            .unwrap()
            .plugins(vec![Plugin::new("plugin-a")])
            .unwrap()
            .build()
            .unwrap();

        let ctx = RunContext::builder().with_config(config).build().unwrap();
        assert_eq!(ctx.config().version(), "2.0");
        assert_eq!(ctx.config().plugins().len(), 1);
    }
}
