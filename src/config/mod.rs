use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "tagmix.toml";

const ENV_NAME_SEED_FILE: &str = "TAGMIX_SEED_FILE";

pub struct Config {
    pub catalog: Catalog,
    pub observer: Observer,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(seed_file) = env::var(ENV_NAME_SEED_FILE) {
            cfg.catalog.seed_file = Some(seed_file.into());
        }
        Ok(cfg)
    }
}

pub struct Catalog {
    /// TOML file with tags and playlists to import.
    pub seed_file: Option<PathBuf>,
}

pub struct Observer {
    pub enabled: bool,
    pub slow_operation: Option<Duration>,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { catalog, observer } = from;

        let raw::Catalog { seed_file } = catalog.unwrap_or_default();
        if seed_file
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            return Err(anyhow!("Empty seed file path"));
        }
        let catalog = Catalog { seed_file };

        let raw::Observer {
            enabled,
            slow_operation,
        } = observer.unwrap_or_default();
        if !enabled && slow_operation.is_some() {
            log::debug!("Observer disabled => ignore slow operation threshold");
        }
        let observer = Observer {
            enabled,
            slow_operation: slow_operation.filter(|_| enabled),
        };

        Ok(Self { catalog, observer })
    }
}
