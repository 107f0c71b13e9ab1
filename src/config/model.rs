use std::path::{Path, PathBuf};

use super::ConfigBuilder;
use crate::model::{Plugin, Recipe};
use crate::{debug, settings};

/// Immutable snapshot of every parameter for one modernization run.
///
/// Built once through [`ConfigBuilder`]; no setter exists afterwards, so a
/// finished `Config` is safe for unsynchronized concurrent reads. The only
/// state with a broader lifetime is the process-wide debug flag, surfaced
/// here through [`is_debug`](Self::is_debug).
#[derive(Debug, Clone)]
pub struct Config {
    pub(super) version: String,
    pub(super) plugins: Vec<Plugin>,
    pub(super) recipes: Vec<Recipe>,
    pub(super) jenkins_update_center: String,
    pub(super) jenkins_plugin_versions: String,
    pub(super) plugin_health_score: String,
    pub(super) plugin_stats_installations: String,
    pub(super) cache_path: PathBuf,
    pub(super) maven_home: PathBuf,
    pub(super) github_owner: String,
    pub(super) github_app_id: Option<i64>,
    pub(super) github_app_source_installation_id: Option<i64>,
    pub(super) github_app_target_installation_id: Option<i64>,
    pub(super) dry_run: bool,
    pub(super) skip_push: bool,
    pub(super) skip_build: bool,
    pub(super) draft: bool,
    pub(super) skip_pull_request: bool,
    pub(super) remove_local_data: bool,
    pub(super) remove_forks: bool,
    pub(super) export_datatables: bool,
}

impl Config {
    /// Creates a new builder seeded with the [`crate::settings`] defaults.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Tool version recorded in generated metadata and pull requests.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Target plugins, in the order they were supplied. Never empty.
    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }

    /// Recipes to apply, in order. Empty means no recipes selected.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Whether this run only fetches metadata and applies no transformation.
    ///
    /// True exactly when the recipe list contains a single entry naming the
    /// reserved metadata-fetch recipe. Recomputed on every call.
    pub fn is_fetch_metadata_only(&self) -> bool {
        self.recipes.len() == 1 && self.recipes[0].name() == settings::FETCH_METADATA_RECIPE
    }

    /// Update center endpoint.
    pub fn jenkins_update_center(&self) -> &str {
        &self.jenkins_update_center
    }

    /// Plugin version history endpoint.
    pub fn jenkins_plugin_versions(&self) -> &str {
        &self.jenkins_plugin_versions
    }

    /// Plugin health score endpoint.
    pub fn plugin_health_score(&self) -> &str {
        &self.plugin_health_score
    }

    /// Installation statistics endpoint.
    pub fn plugin_stats_installations(&self) -> &str {
        &self.plugin_stats_installations
    }

    /// Directory where fetched metadata and checkouts are cached.
    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    /// Maven installation used by the build runner.
    pub fn maven_home(&self) -> &Path {
        &self.maven_home
    }

    /// Owner forks are pushed to.
    pub fn github_owner(&self) -> &str {
        &self.github_owner
    }

    /// GitHub App id, or `None` when not running under an App identity.
    pub fn github_app_id(&self) -> Option<i64> {
        self.github_app_id
    }

    /// Installation id on the source side, when using a GitHub App identity.
    pub fn github_app_source_installation_id(&self) -> Option<i64> {
        self.github_app_source_installation_id
    }

    /// Installation id on the target side, when using a GitHub App identity.
    pub fn github_app_target_installation_id(&self) -> Option<i64> {
        self.github_app_target_installation_id
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn is_skip_push(&self) -> bool {
        self.skip_push
    }

    pub fn is_skip_build(&self) -> bool {
        self.skip_build
    }

    pub fn is_draft(&self) -> bool {
        self.draft
    }

    pub fn is_skip_pull_request(&self) -> bool {
        self.skip_pull_request
    }

    pub fn is_remove_local_data(&self) -> bool {
        self.remove_local_data
    }

    pub fn is_remove_forks(&self) -> bool {
        self.remove_forks
    }

    pub fn is_export_datatables(&self) -> bool {
        self.export_datatables
    }

    /// Whether debug logging is enabled, read from the process-wide flag.
    pub fn is_debug(&self) -> bool {
        debug::debug_enabled()
    }
}
