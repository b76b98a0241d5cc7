pub mod appconfig;
pub mod behaviourconfig;
pub mod keybindings;
pub mod keyparser;
pub mod pathconfig;
pub mod remoteconfig;

use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use serde::Deserialize;
use tracing::{error, info};

use crate::{
    action::{useraction::UserAction, Mode},
    config::{
        appconfig::AppConfig, behaviourconfig::BehaviourConfig, keybindings::KeyBindings,
        pathconfig::PathConfig,
    },
};

const CONFIG: &str = include_str!("../.config/config.json5");

#[derive(Clone, Debug, Default, Deref, DerefMut, Deserialize)]
pub struct ModeKeyBindings(pub HashMap<Mode, KeyBindings<UserAction>>);

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub behaviour: BehaviourConfig,
    #[serde(default)]
    pub keybindings: ModeKeyBindings,
}

impl Config {
    /// Loads the user's config file, if any, and fills in everything it leaves out from the
    /// built-in defaults. `backend` overrides `backend_url` from the file.
    pub fn new(paths: PathConfig, backend: Option<String>) -> Result<Self, config::ConfigError> {
        let default_config: Config =
            json5::from_str(CONFIG).map_err(|e| config::ConfigError::Message(e.to_string()))?;
        let mut builder = config::Config::builder()
            .set_default("data_dir", paths.data.to_string_lossy().to_string())?;

        if let Some(config_dir) = &paths.config {
            builder =
                builder.set_default("config_dir", config_dir.to_string_lossy().to_string())?;
            let config_files = [
                ("config.json5", config::FileFormat::Json5),
                ("config.json", config::FileFormat::Json),
                ("config.yaml", config::FileFormat::Yaml),
                ("config.toml", config::FileFormat::Toml),
                ("config.ini", config::FileFormat::Ini),
            ];
            let mut found_config = false;
            for (file, format) in &config_files {
                let path = config_dir.join(file);
                if path.exists() {
                    info!("Loading config from {}", path.display());
                    found_config = true;
                }
                builder = builder.add_source(config::File::from(path).format(*format).required(false));
            }
            if !found_config {
                error!(
                    "No configuration file found in {}. Using defaults",
                    config_dir.display()
                );
            }
        }
        if let Some(url) = backend {
            builder = builder.set_override("backend_url", url)?;
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_keybindings(default_config.keybindings);
        Ok(cfg)
    }

    fn merge_keybindings(&mut self, defaults: ModeKeyBindings) {
        // Add user config on top of the default config
        for (mode, default_bindings) in defaults.0.into_iter() {
            let user_bindings = self.keybindings.entry(mode).or_default();
            for (key, cmd) in default_bindings.0.into_iter() {
                user_bindings.entry(key).or_insert(cmd);
            }
        }

        // Add Common keybindings to all other modes
        let common = self.keybindings.get(&Mode::Common).cloned();
        if let Some(common_binds) = common {
            for (mode, bindings) in self.keybindings.iter_mut() {
                if Mode::Common == *mode {
                    continue;
                };
                for (key, cmd) in common_binds.iter() {
                    bindings.entry(key.clone()).or_insert_with(|| cmd.clone());
                }
            }
        };
    }
}
