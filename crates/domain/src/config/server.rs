use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    #[serde(default = "default_web_port")]
    pub web_port: u16,

    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Directory holding the built web UI (served with an `index.html` fallback)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,

    /// When set, mutating API calls must carry a matching `X-Api-Key` header
    pub api_key: Option<String>,
}

fn default_dns_port() -> u16 {
    53
}

fn default_web_port() -> u16 {
    8080
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_static_dir() -> String {
    "web/dist".to_string()
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dns_port: default_dns_port(),
            web_port: default_web_port(),
            bind_address: default_bind_address(),
            static_dir: default_static_dir(),
            cors_allowed_origins: default_cors_origins(),
            api_key: None,
        }
    }
}
