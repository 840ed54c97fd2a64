/*
 * Path helpers for the application's own storage. Centralizes resolution of
 * the platform-specific local configuration directory so callers never build
 * those paths by hand.
 */
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/*
 * Resolves (and creates if needed) the local, non-roaming configuration
 * directory for `app_name`. No organization qualifier is used; the directory
 * lands directly under the user's local application data root. Returns
 * `None` when the platform directory cannot be determined or created.
 */
pub fn get_base_app_config_local_dir(app_name: &str) -> Option<PathBuf> {
    ProjectDirs::from("", "", app_name).and_then(|proj_dirs| {
        let config_path = proj_dirs.config_local_dir();
        if !config_path.exists() {
            if let Err(e) = fs::create_dir_all(config_path) {
                log::error!("PathUtils: Failed to create config directory {config_path:?}: {e}");
                return None;
            }
            log::debug!("PathUtils: Created config directory {config_path:?}.");
        }
        Some(config_path.to_path_buf())
    })
}
