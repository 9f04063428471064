use duration_str::deserialize_option_duration;
use serde::Deserialize;
use std::{path::PathBuf, time::Duration};

const DEFAULT_CONFIG_FILE: &str = include_str!("tagmix.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub catalog: Option<Catalog>,
    pub observer: Option<Observer>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Catalog {
    pub seed_file: Option<PathBuf>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Observer {
    pub enabled: bool,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub slow_operation: Option<Duration>,
}

impl Default for Observer {
    fn default() -> Self {
        Config::default().observer.expect("Observer configuration")
    }
}
