use std::path::PathBuf;

use serde::Deserialize;

fn default_backend_url() -> String {
    "http://localhost:5000".to_string()
}

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data_dir: PathBuf,
    #[serde(default)]
    pub config_dir: PathBuf,
    /// Base URL of the backend that fronts VLC
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::new(),
            config_dir: PathBuf::new(),
            backend_url: default_backend_url(),
        }
    }
}
