use std::path::PathBuf;

use tracing::debug;

use super::{Config, ConfigError};
use crate::model::{Plugin, Recipe};
use crate::settings;

/// Fluent staging area for a [`Config`].
///
/// Every optional field starts at its [`crate::settings`] default; `version`
/// and `plugins` have no default and must be supplied. Setters for defaulted
/// fields take an `Option` and treat `None` as "keep the current value", so
/// a default can be raised by an explicit call but never erased. Boolean
/// setters overwrite unconditionally.
///
/// ## Example
///
/// ```
/// use modernizer_core::{Config, Plugin};
///
/// let config = Config::builder()
///     .version("2.0")?
///     .plugins(vec![Plugin::new("git-client")])?
///     .dry_run(true)
///     .build()?;
///
/// assert!(config.is_dry_run());
/// assert!(config.is_remove_forks());
/// # Ok::<(), modernizer_core::ConfigError>(())
/// ```
#[derive(Debug)]
#[must_use = "builders do nothing until .build() is called"]
pub struct ConfigBuilder {
    version: Option<String>,
    plugins: Vec<Plugin>,
    recipes: Vec<Recipe>,
    jenkins_update_center: String,
    jenkins_plugin_versions: String,
    plugin_health_score: String,
    plugin_stats_installations: String,
    cache_path: PathBuf,
    maven_home: PathBuf,
    github_owner: String,
    github_app_id: Option<i64>,
    github_app_source_installation_id: Option<i64>,
    github_app_target_installation_id: Option<i64>,
    dry_run: bool,
    skip_push: bool,
    skip_build: bool,
    draft: bool,
    skip_pull_request: bool,
    remove_local_data: bool,
    remove_forks: bool,
    export_datatables: bool,
}

impl ConfigBuilder {
    /// Creates a builder seeded with the [`crate::settings`] defaults.
    pub fn new() -> Self {
        Self {
            version: None,
            plugins: Vec::new(),
            recipes: Vec::new(),
            jenkins_update_center: settings::DEFAULT_UPDATE_CENTER_URL.to_string(),
            jenkins_plugin_versions: settings::DEFAULT_PLUGIN_VERSIONS_URL.to_string(),
            plugin_health_score: settings::DEFAULT_HEALTH_SCORE_URL.to_string(),
            plugin_stats_installations: settings::DEFAULT_INSTALLATION_STATS_URL.to_string(),
            cache_path: settings::default_cache_path(),
            maven_home: settings::default_maven_home(),
            github_owner: settings::github_owner(),
            github_app_id: None,
            github_app_source_installation_id: None,
            github_app_target_installation_id: None,
            dry_run: false,
            skip_push: false,
            skip_build: false,
            draft: false,
            skip_pull_request: false,
            remove_local_data: false,
            remove_forks: true,
            export_datatables: false,
        }
    }

    /// Sets the tool version.
    ///
    /// # Errors
    ///
    /// Rejects an empty version immediately; the builder is consumed and a
    /// fresh one is needed to retry.
    pub fn version(mut self, version: impl Into<String>) -> Result<Self, ConfigError> {
        let version = version.into();
        if version.is_empty() {
            return Err(ConfigError::EmptyVersion);
        }
        self.version = Some(version);
        Ok(self)
    }

    /// Sets the target plugins, replacing any previous selection.
    ///
    /// # Errors
    ///
    /// Rejects an empty list immediately; at least one target plugin is
    /// required for every run mode.
    pub fn plugins(mut self, plugins: Vec<Plugin>) -> Result<Self, ConfigError> {
        if plugins.is_empty() {
            return Err(ConfigError::EmptyPlugins);
        }
        self.plugins = plugins;
        Ok(self)
    }

    /// Selects the recipes to apply, in order.
    ///
    /// Not calling this and passing an empty list mean the same thing: no
    /// recipes selected.
    pub fn recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.recipes = recipes;
        self
    }

    /// Overrides the update center endpoint; `None` keeps the current value.
    pub fn jenkins_update_center(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.jenkins_update_center = url;
        }
        self
    }

    /// Overrides the plugin version history endpoint; `None` keeps the
    /// current value.
    pub fn jenkins_plugin_versions(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.jenkins_plugin_versions = url;
        }
        self
    }

    /// Overrides the health score endpoint; `None` keeps the current value.
    pub fn plugin_health_score(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.plugin_health_score = url;
        }
        self
    }

    /// Overrides the installation statistics endpoint; `None` keeps the
    /// current value.
    pub fn plugin_stats_installations(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.plugin_stats_installations = url;
        }
        self
    }

    /// Overrides the cache directory; `None` keeps the current value.
    pub fn cache_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.cache_path = path;
        }
        self
    }

    /// Overrides the Maven installation; `None` keeps the current value.
    pub fn maven_home(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.maven_home = path;
        }
        self
    }

    /// Overrides the fork owner; `None` keeps the current value.
    pub fn github_owner(mut self, owner: Option<String>) -> Self {
        if let Some(owner) = owner {
            self.github_owner = owner;
        }
        self
    }

    /// Sets the GitHub App id; `None` keeps the current value, so an id set
    /// earlier cannot be cleared back to "no App identity".
    pub fn github_app_id(mut self, id: Option<i64>) -> Self {
        if let Some(id) = id {
            self.github_app_id = Some(id);
        }
        self
    }

    /// Sets the source-side installation id; `None` keeps the current value.
    pub fn github_app_source_installation_id(mut self, id: Option<i64>) -> Self {
        if let Some(id) = id {
            self.github_app_source_installation_id = Some(id);
        }
        self
    }

    /// Sets the target-side installation id; `None` keeps the current value.
    pub fn github_app_target_installation_id(mut self, id: Option<i64>) -> Self {
        if let Some(id) = id {
            self.github_app_target_installation_id = Some(id);
        }
        self
    }

    /// Compute and log changes without touching any remote state.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Skip pushing branches to the fork.
    pub fn skip_push(mut self, skip_push: bool) -> Self {
        self.skip_push = skip_push;
        self
    }

    /// Skip the verification build after applying recipes.
    pub fn skip_build(mut self, skip_build: bool) -> Self {
        self.skip_build = skip_build;
        self
    }

    /// Open pull requests as drafts.
    pub fn draft(mut self, draft: bool) -> Self {
        self.draft = draft;
        self
    }

    /// Skip opening pull requests entirely.
    pub fn skip_pull_request(mut self, skip_pull_request: bool) -> Self {
        self.skip_pull_request = skip_pull_request;
        self
    }

    /// Delete local checkouts and cached metadata after the run.
    pub fn remove_local_data(mut self, remove_local_data: bool) -> Self {
        self.remove_local_data = remove_local_data;
        self
    }

    /// Delete forks once their pull requests are merged or closed.
    pub fn remove_forks(mut self, remove_forks: bool) -> Self {
        self.remove_forks = remove_forks;
        self
    }

    /// Export collected metadata as datatables at the end of the run.
    pub fn export_datatables(mut self, export_datatables: bool) -> Self {
        self.export_datatables = export_datatables;
        self
    }

    /// Finalizes the builder into an immutable [`Config`].
    ///
    /// Required fields are re-checked here regardless of what the setters
    /// already enforced; this gate is what guarantees no `Config` exists
    /// with an empty version or plugin list, whichever path populated the
    /// builder.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyVersion`] or [`ConfigError::EmptyPlugins`]
    /// when the corresponding field is missing or empty.
    pub fn build(self) -> Result<Config, ConfigError> {
        let version = self
            .version
            .filter(|version| !version.is_empty())
            .ok_or(ConfigError::EmptyVersion)?;
        if self.plugins.is_empty() {
            return Err(ConfigError::EmptyPlugins);
        }

        debug!(
            version = %version,
            plugins = self.plugins.len(),
            recipes = self.recipes.len(),
            "configuration finalized"
        );

        Ok(Config {
            version,
            plugins: self.plugins,
            recipes: self.recipes,
            jenkins_update_center: self.jenkins_update_center,
            jenkins_plugin_versions: self.jenkins_plugin_versions,
            plugin_health_score: self.plugin_health_score,
            plugin_stats_installations: self.plugin_stats_installations,
            cache_path: self.cache_path,
            maven_home: self.maven_home,
            github_owner: self.github_owner,
            github_app_id: self.github_app_id,
            github_app_source_installation_id: self.github_app_source_installation_id,
            github_app_target_installation_id: self.github_app_target_installation_id,
            dry_run: self.dry_run,
            skip_push: self.skip_push,
            skip_build: self.skip_build,
            draft: self.draft,
            skip_pull_request: self.skip_pull_request,
            remove_local_data: self.remove_local_data,
            remove_forks: self.remove_forks,
            export_datatables: self.export_datatables,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
