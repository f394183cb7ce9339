// src/config.rs

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{
    APP_DIR, CONFIG_DIR_ENV, SETTINGS_FILENAME, USAGE_ARCHIVE_FILENAME, USAGE_LOG_FILENAME,
};
use crate::models::Settings;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No se pudo encontrar el directorio de configuración del sistema.")]
    NoConfigDir,
    #[error("No se pudo crear el directorio de configuración en {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("No se pudo leer {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error al parsear TOML en '{path}': {source}")]
    TomlParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

type ConfigResult<T> = Result<T, ConfigError>;

/// Devuelve la ruta al directorio de configuración de galias.
/// Lo crea si no existe.
pub fn get_config_dir() -> ConfigResult<PathBuf> {
    let config_path = match env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join(APP_DIR),
    };
    log::info!("Directorio de config: {:?}", config_path);
    if !config_path.exists() {
        fs::create_dir_all(&config_path).map_err(|source| ConfigError::CreateDir {
            path: config_path.clone(),
            source,
        })?;
    }

    Ok(config_path)
}

pub fn usage_log_path(config_dir: &Path) -> PathBuf {
    config_dir.join(USAGE_LOG_FILENAME)
}

pub fn usage_archive_path(config_dir: &Path) -> PathBuf {
    config_dir.join(USAGE_ARCHIVE_FILENAME)
}

/// Carga `galias.toml`. Si no existe, devuelve los ajustes por defecto.
pub fn load_settings(config_dir: &Path) -> ConfigResult<Settings> {
    let path = config_dir.join(SETTINGS_FILENAME);
    if !path.exists() {
        log::debug!("No existe {:?}; se usan los ajustes por defecto.", path);
        return Ok(Settings::default());
    }
    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: path.display().to_string(),
        source,
    })
}
