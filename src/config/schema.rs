//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! All types derive Serde traits for deserialization from config files.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Root configuration for the mirrorlist server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MirrorlistConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Mirror table: release → repo → arch → URL templates.
    pub mirrors: MirrorMap,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Repository channel → architecture table.
pub type RepoMap = HashMap<String, ArchMap>;

/// Architecture → ordered mirror URL templates.
pub type ArchMap = HashMap<String, Vec<String>>;

/// Reserved fallback key at every level of the mirror table.
pub const WILDCARD: &str = "*";

/// Three-level mirror table: release → repo → arch → URL templates.
///
/// Lookup-only after load. Repo keys are stored in lowercase; release and
/// arch keys are matched case-sensitively as written.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MirrorMap(HashMap<String, RepoMap>);

impl MirrorMap {
    /// Insert a URL template list for a (release, repo, arch) triple.
    ///
    /// The repo key is lowercased on the way in.
    pub fn insert(&mut self, release: &str, repo: &str, arch: &str, urls: Vec<String>) {
        self.0
            .entry(release.to_string())
            .or_default()
            .entry(repo.to_lowercase())
            .or_default()
            .insert(arch.to_string(), urls);
    }

    /// The release level of the table.
    pub fn releases(&self) -> &HashMap<String, RepoMap> {
        &self.0
    }

    /// Number of configured releases (wildcard entry included).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase all repo keys.
    ///
    /// Applied once at load time so lookups can assume the invariant.
    pub fn normalized(self) -> Self {
        Self(
            self.0
                .into_iter()
                .map(|(release, repos)| {
                    let repos = repos
                        .into_iter()
                        .map(|(repo, archs)| (repo.to_lowercase(), archs))
                        .collect();
                    (release, repos)
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_mirror_table() {
        let yaml = r#"
listener:
  bind_address: "127.0.0.1:8000"
mirrors:
  "7":
    os:
      x86_64:
        - http://mirror.example/centos/7/os/x86_64/
  "*":
    "*":
      "*":
        - http://default/
"#;
        let config: MirrorlistConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:8000");
        assert_eq!(config.mirrors.len(), 2);

        let repos = &config.mirrors.releases()["7"];
        assert_eq!(
            repos["os"]["x86_64"],
            vec!["http://mirror.example/centos/7/os/x86_64/"]
        );
        assert_eq!(config.mirrors.releases()["*"]["*"]["*"], vec!["http://default/"]);
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let config: MirrorlistConfig = serde_yaml::from_str("mirrors: {}").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.timeouts.request_secs, 30);
        assert!(config.observability.metrics_enabled);
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn normalization_lowercases_repo_keys() {
        let yaml = r#"
"7":
  BaseOS:
    x86_64: ["http://a/"]
"#;
        let mirrors: MirrorMap = serde_yaml::from_str(yaml).unwrap();
        let mirrors = mirrors.normalized();

        assert!(mirrors.releases()["7"].contains_key("baseos"));
        assert!(!mirrors.releases()["7"].contains_key("BaseOS"));
    }

    #[test]
    fn insert_lowercases_repo_keys() {
        let mut mirrors = MirrorMap::default();
        mirrors.insert("9", "AppStream", "aarch64", vec!["http://a/".to_string()]);
        assert!(mirrors.releases()["9"].contains_key("appstream"));
    }
}
