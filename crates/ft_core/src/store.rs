use crate::CoreError;
use once_cell::sync::Lazy;
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};

static STORE: Lazy<ConfigStore> = Lazy::new(ConfigStore::default);

pub fn set_local_config<T: Serialize>(name: &str, val: &T) -> Result<(), CoreError> {
    STORE.write(name, val)
}

pub fn get_local_config<T: DeserializeOwned>(name: &str) -> Option<T> {
    STORE.read(name)
}

pub fn store() -> &'static ConfigStore {
    &STORE
}

pub const CONFIG_DIR_NAME: &str = "config";

#[derive(Debug, Clone)]
pub struct ConfigStore {
    config_dir: PathBuf,
}

impl Default for ConfigStore {
    fn default() -> Self {
        let config_dir = match directories_next::ProjectDirs::from("com", "fadetext", "fadetext") {
            Some(app_dirs) => app_dirs.config_dir().to_path_buf(),
            // Fallback to current working directory if no HOME is present
            None => CONFIG_DIR_NAME.into(),
        };

        Self { config_dir }
    }
}

impl ConfigStore {
    pub fn at(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    pub fn create_req_dirs(&self) -> Result<(), CoreError> {
        std::fs::create_dir_all(self.config_dir())?;
        Ok(())
    }

    pub fn write<T: Serialize>(&self, name: &str, val: &T) -> Result<(), CoreError> {
        let raw = serde_json::to_vec_pretty(val)?;
        std::fs::write(self.config_dir().join(name), raw)?;
        Ok(())
    }

    /// `None` when the file is missing or does not parse.
    pub fn read<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let path = self.config_dir().join(name);
        let raw = std::fs::read(&path).ok()?;
        serde_json::from_slice(&raw)
            .map_err(|err| tracing::warn!("ignoring {}: {err}", path.display()))
            .ok()
    }

    #[inline(always)]
    pub fn config_dir(&self) -> &Path {
        self.config_dir.as_path()
    }
}
