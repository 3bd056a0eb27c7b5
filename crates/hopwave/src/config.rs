use crate::events::AppEvent;
use async_channel::Sender;
use directories::ProjectDirs;
use hopwave_core::IndicatorConfig;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub linear: IndicatorConfig,
    #[serde(default)]
    pub wave: IndicatorConfig,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "hopwave", "hopwave").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// The config file to load and watch. An explicit path is made absolute,
/// since the watcher reports absolute event paths.
pub fn resolve_config_path(path: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    match path {
        Some(path) => Ok(std::path::absolute(path)?),
        None => get_config_path(),
    }
}

/// Reads `path` if it exists, then applies `HOPWAVE__<SECTION>__<KEY>` overrides.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("HOPWAVE")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default(path: &Path) -> Config {
    match load_config(path) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Using default configuration: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> Result<PathBuf, ConfigError> {
    let path = get_config_path()?;
    write_default_config_to(&path)?;
    Ok(path)
}

fn write_default_config_to(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(())
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

pub async fn run_async_watcher(tx: Sender<AppEvent>, config_path: PathBuf) {
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", e);
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hopwave_core::Color;

    fn parse(toml: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_default_config_parses() {
        let config = parse(DEFAULT_CONFIG);
        assert_eq!(config.linear.circle_count, 4);
        assert_eq!(config.linear.radius, 15.0);
        assert_eq!(config.linear.colors.len(), 4);
        assert_eq!(config.wave.wave_height, 160.0);
        assert_eq!(config.wave.colors.len(), 4);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse(
            r##"
[wave]
circle_count = 6
colors = ["#ff0000"]
"##,
        );
        assert_eq!(config.wave.circle_count, 6);
        assert_eq!(config.wave.color(0), Color::from_argb(0xff, 0xff, 0, 0));
        assert_eq!(config.wave.color(5), Color::black());
        assert_eq!(config.linear, IndicatorConfig::default());
    }

    #[test]
    fn test_explicit_path_is_made_absolute() {
        let path = resolve_config_path(Some(PathBuf::from("hopwave.toml"))).unwrap();
        assert!(path.is_absolute());
        assert_eq!(path, std::env::current_dir().unwrap().join("hopwave.toml"));

        let absolute = std::env::temp_dir().join("hopwave.toml");
        assert_eq!(resolve_config_path(Some(absolute.clone())).unwrap(), absolute);
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let path = std::env::temp_dir().join("hopwave-test-missing/config.toml");
        let config = load_config(&path).unwrap();
        assert_eq!(config.linear.circle_count, 4);
    }

    #[test]
    fn test_write_default_config_keeps_existing_file() {
        let dir = std::env::temp_dir().join(format!("hopwave-test-{}", std::process::id()));
        let path = dir.join("config.toml");

        write_default_config_to(&path).unwrap();
        assert_eq!(fs_err::read_to_string(&path).unwrap(), DEFAULT_CONFIG);

        fs_err::write(&path, "[linear]\ncircle_count = 7\n").unwrap();
        write_default_config_to(&path).unwrap();
        assert_eq!(load_config(&path).unwrap().linear.circle_count, 7);

        fs_err::remove_dir_all(&dir).unwrap();
    }
}
