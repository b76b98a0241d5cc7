use std::{env, path::PathBuf};

use directories::ProjectDirs;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase().to_string();
    pub static ref DATA_FOLDER: Option<PathBuf> =
        env::var(format!("{}_DATA", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
    pub static ref CONFIG_FOLDER: Option<PathBuf> =
        env::var(format!("{}_CONFIG", PROJECT_NAME.clone()))
            .ok()
            .map(PathBuf::from);
}

/// Where the log file goes and where config files are looked up.
///
/// Path priority:
/// 1. Path specified via --data or --config
/// 2. Environment variable set via VLCREMOTE_DATA or VLCREMOTE_CONFIG
/// 3. XDG paths
/// 4. ./.data and ./.config
///
/// `config` is `None` when `--no-config` was given; only the built-in defaults are used then.
#[derive(Clone, Debug)]
pub struct PathConfig {
    pub data: PathBuf,
    pub config: Option<PathBuf>,
}

impl PathConfig {
    pub fn get_data_dir() -> PathBuf {
        if let Some(s) = DATA_FOLDER.clone() {
            s
        } else if let Some(proj_dirs) = Self::project_directory() {
            proj_dirs.data_local_dir().to_path_buf()
        } else {
            PathBuf::from(".").join(".data")
        }
    }

    pub fn get_config_dir() -> PathBuf {
        if let Some(s) = CONFIG_FOLDER.clone() {
            s
        } else if let Some(proj_dirs) = Self::project_directory() {
            proj_dirs.config_local_dir().to_path_buf()
        } else {
            PathBuf::from(".").join(".config")
        }
    }

    fn project_directory() -> Option<ProjectDirs> {
        ProjectDirs::from("net", "vlcremote", env!("CARGO_PKG_NAME"))
    }

    pub fn new(data_str: Option<String>, config_str: Option<String>, no_config: bool) -> Self {
        let data = data_str.map_or_else(Self::get_data_dir, PathBuf::from);
        let config = if no_config {
            None
        } else {
            Some(config_str.map_or_else(Self::get_config_dir, PathBuf::from))
        };
        Self { data, config }
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self::new(None, None, false)
    }
}
