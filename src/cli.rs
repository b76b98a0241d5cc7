use clap::Parser;

use crate::config::pathconfig::PathConfig;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Tick rate, i.e. number of ticks per second
    #[arg(short, long, value_name = "FLOAT", default_value_t = 10.0)]
    pub tick_rate: f64,

    /// Frame rate, i.e. number of frames per second
    #[arg(short, long, value_name = "FLOAT", default_value_t = 30.0)]
    pub frame_rate: f64,

    /// Specifies the *directory* of the config to load. This directory is expected to contain
    /// files like "config.json5".
    #[arg(short, long)]
    pub config: Option<String>,

    /// Specifies the *directory* the log file is written to.
    #[arg(short, long)]
    pub data: Option<String>,

    /// Do not use any config other than the preset. Incompatible with --config.
    #[arg(long, default_value_t = false)]
    pub no_config: bool,

    /// Base URL of the backend, e.g. http://192.168.0.10:5000. Overrides `backend_url`.
    #[arg(short, long, value_name = "URL")]
    pub backend: Option<String>,
}

impl Cli {
    pub fn is_valid(&self) -> Option<String> {
        if self.config.is_some() && self.no_config {
            return Some("Incompatible flags set: --config and --no-config".to_string());
        };
        if self.tick_rate <= 0.0 || self.frame_rate <= 0.0 {
            return Some("Tick rate and frame rate must be positive".to_string());
        }
        None
    }

    pub fn paths(&self) -> PathConfig {
        PathConfig::new(self.data.clone(), self.config.clone(), self.no_config)
    }
}

const VERSION_MESSAGE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "-",
    env!("VERGEN_GIT_DESCRIBE"),
    " (",
    env!("VERGEN_BUILD_DATE"),
    ")"
);

pub fn version() -> String {
    let author = clap::crate_authors!();

    let config_dir_path = PathConfig::get_config_dir().display().to_string();
    let data_dir_path = PathConfig::get_data_dir().display().to_string();

    format!(
        "\
{VERSION_MESSAGE}

Authors: {author}

Config directory: {config_dir_path}
Data directory: {data_dir_path}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_conflicts() {
        let cli = Cli::parse_from(["vlcremote", "--config", "/tmp", "--no-config"]);
        assert!(cli.is_valid().is_some());
        let cli = Cli::parse_from(["vlcremote", "-b", "http://tv.local:5000", "-t", "4"]);
        assert!(cli.is_valid().is_none());
        assert_eq!(cli.backend.as_deref(), Some("http://tv.local:5000"));
        let cli = Cli::parse_from(["vlcremote", "--frame-rate", "0"]);
        assert!(cli.is_valid().is_some());
    }
}
