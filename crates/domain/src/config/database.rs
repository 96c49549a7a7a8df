use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Seconds between sweeps that drop expired directory entries.
    #[serde(default = "default_purge_interval_secs")]
    pub purge_interval_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
            purge_interval_secs: default_purge_interval_secs(),
        }
    }
}

fn default_db_path() -> String {
    "./hearth-dns.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_purge_interval_secs() -> u64 {
    60
}
