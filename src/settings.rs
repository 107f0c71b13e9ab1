//! Process-wide default values used to seed unset builder fields.
//!
//! Pure data apart from a handful of environment lookups; nothing here
//! fails. A missing or empty variable simply falls back to the built-in
//! default.

use std::path::PathBuf;

use tracing::trace;

/// Update center catalog queried for the current plugin baseline.
pub const DEFAULT_UPDATE_CENTER_URL: &str =
    "https://updates.jenkins.io/current/update-center.actual.json";

/// Per-plugin version history document.
pub const DEFAULT_PLUGIN_VERSIONS_URL: &str =
    "https://updates.jenkins.io/current/plugin-versions.json";

/// Plugin health score API.
pub const DEFAULT_HEALTH_SCORE_URL: &str = "https://plugin-health.jenkins.io/api/scores";

/// Installation statistics feed.
pub const DEFAULT_INSTALLATION_STATS_URL: &str =
    "https://stats.jenkins.io/plugin-installation-trend/latest-installation-stats.json";

/// Owner the tool's forks are pushed to when none is configured.
pub const DEFAULT_GITHUB_OWNER: &str = "jenkins-infra";

/// Name of the reserved recipe that fetches metadata without transforming
/// anything. A run whose recipe list is exactly this recipe is a
/// metadata-only run (see [`crate::Config::is_fetch_metadata_only`]).
pub const FETCH_METADATA_RECIPE: &str = "io.jenkins.tools.pluginmodernizer.FetchMetadata";

/// GitHub owner, honoring the `GH_OWNER` environment override.
pub fn github_owner() -> String {
    owner_from(std::env::var("GH_OWNER").ok())
}

/// Directory used to cache fetched metadata between steps of a run.
///
/// Honors the `CACHE_DIR` environment override, otherwise
/// `$HOME/.cache/plugin-modernizer`.
pub fn default_cache_path() -> PathBuf {
    cache_path_from(env_path("CACHE_DIR"))
}

/// Maven installation used by the build runner.
///
/// Resolution order: `MAVEN_HOME`, then `M2_HOME`, then `/usr/share/maven`.
pub fn default_maven_home() -> PathBuf {
    maven_home_from(env_path("MAVEN_HOME"), env_path("M2_HOME"))
}

fn owner_from(override_owner: Option<String>) -> String {
    match override_owner {
        Some(owner) if !owner.is_empty() => {
            trace!(owner = %owner, "using GH_OWNER override");
            owner
        }
        _ => DEFAULT_GITHUB_OWNER.to_string(),
    }
}

fn cache_path_from(override_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = override_dir {
        trace!(path = %dir.display(), "using CACHE_DIR override");
        return dir;
    }
    home_dir().join(".cache").join("plugin-modernizer")
}

fn maven_home_from(maven_home: Option<PathBuf>, m2_home: Option<PathBuf>) -> PathBuf {
    maven_home
        .or(m2_home)
        .unwrap_or_else(|| PathBuf::from("/usr/share/maven"))
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_path_honors_override() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            cache_path_from(Some(dir.path().to_path_buf())),
            dir.path()
        );
    }

    #[test]
    fn test_cache_path_fallback_under_home() {
        let fallback = cache_path_from(None);
        assert!(fallback.ends_with(".cache/plugin-modernizer"));
    }

    #[test]
    fn test_maven_home_resolution_order() {
        assert_eq!(
            maven_home_from(None, None),
            PathBuf::from("/usr/share/maven")
        );
        assert_eq!(
            maven_home_from(None, Some(PathBuf::from("/opt/m2"))),
            PathBuf::from("/opt/m2")
        );
        assert_eq!(
            maven_home_from(Some(PathBuf::from("/opt/maven")), Some(PathBuf::from("/opt/m2"))),
            PathBuf::from("/opt/maven")
        );
    }

    #[test]
    fn test_owner_override() {
        assert_eq!(owner_from(Some("example-org".to_string())), "example-org");
        assert_eq!(owner_from(Some(String::new())), DEFAULT_GITHUB_OWNER);
        assert_eq!(owner_from(None), DEFAULT_GITHUB_OWNER);
    }
}
