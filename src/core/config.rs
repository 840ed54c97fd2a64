/*
 * Manages application-level configuration, currently the path of the last
 * opened scene document so the CLI can be re-run without repeating the
 * argument. Uses a trait (`ConfigManagerOperations`) so callers can inject
 * mock storage in tests; the concrete `CoreConfigManager` persists a plain
 * text file in the platform-local configuration directory resolved through
 * `path_utils`.
 */
use crate::core::path_utils;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

const LAST_DOCUMENT_PATH_FILENAME: &str = "last_document_path.txt";

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    NoConfigDirectory,
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Configuration I/O error: {e}"),
            ConfigError::NoConfigDirectory => {
                write!(f, "Could not determine configuration directory")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::NoConfigDirectory => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

pub trait ConfigManagerOperations: Send + Sync {
    fn load_last_document_path(&self, app_name: &str) -> Result<Option<PathBuf>>;
    fn save_last_document_path(&self, app_name: &str, document_path: Option<&Path>) -> Result<()>;
}

pub struct CoreConfigManager {}

impl CoreConfigManager {
    pub fn new() -> Self {
        CoreConfigManager {}
    }
}

impl Default for CoreConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManagerOperations for CoreConfigManager {
    /*
     * Reads the last opened document path from the app's config directory.
     * A missing or empty file is `Ok(None)`, not an error.
     */
    fn load_last_document_path(&self, app_name: &str) -> Result<Option<PathBuf>> {
        let config_dir = path_utils::get_base_app_config_local_dir(app_name)
            .ok_or(ConfigError::NoConfigDirectory)?;
        let file_path = config_dir.join(LAST_DOCUMENT_PATH_FILENAME);

        if !file_path.exists() {
            log::debug!("CoreConfigManager: No last document file at {file_path:?}.");
            return Ok(None);
        }

        let mut file = File::open(&file_path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let trimmed = contents.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            log::debug!("CoreConfigManager: Loaded last document path '{trimmed}'.");
            Ok(Some(PathBuf::from(trimmed)))
        }
    }

    /*
     * Writes the last opened document path; passing `None` clears the
     * stored value.
     */
    fn save_last_document_path(&self, app_name: &str, document_path: Option<&Path>) -> Result<()> {
        let config_dir = path_utils::get_base_app_config_local_dir(app_name)
            .ok_or(ConfigError::NoConfigDirectory)?;
        let file_path = config_dir.join(LAST_DOCUMENT_PATH_FILENAME);

        let mut file = File::create(&file_path)?;
        if let Some(path) = document_path {
            file.write_all(path.to_string_lossy().as_bytes())?;
        } else {
            file.write_all(b"")?;
        }
        log::debug!("CoreConfigManager: Saved last document path {document_path:?} to {file_path:?}.");
        Ok(())
    }
}
