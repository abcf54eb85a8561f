use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::{ProjectDirs, UserDirs};
use serde_json::Error as SerdeError;
use tracing::{debug, warn};

use crate::domain::app_state::PersistedState;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "BlackGrid";
const APP_NAME: &str = "DealAnalyzer";

/// Overrides where spreadsheets are exported to.
pub const EXPORT_DIR_ENV: &str = "BLACKGRID_EXPORT_DIR";

fn data_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join("state.json"))
}

pub fn load_persisted_state() -> Option<PersistedState> {
    load_from(&data_file()?)
}

pub fn save_persisted_state(state: &PersistedState) -> Result<(), PersistSaveError> {
    let path = data_file().ok_or(PersistSaveError::StorageUnavailable)?;
    save_to(&path, state)
}

/// A missing or malformed file yields `None` so the app starts on defaults.
fn load_from(path: &Path) -> Option<PersistedState> {
    let data = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&data) {
        Ok(state) => {
            debug!(path = %path.display(), "loaded persisted state");
            Some(state)
        }
        Err(err) => {
            warn!(path = %path.display(), "ignoring unreadable state file: {err}");
            None
        }
    }
}

fn save_to(path: &Path, state: &PersistedState) -> Result<(), PersistSaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    debug!(path = %path.display(), "saved persisted state");
    Ok(())
}

/// Directory exported workbooks land in: the env override, then the user's
/// downloads folder, then the working directory.
pub fn export_dir() -> Option<PathBuf> {
    resolve_export_dir(env::var_os(EXPORT_DIR_ENV).map(PathBuf::from), || {
        UserDirs::new().and_then(|dirs| dirs.download_dir().map(|dir| dir.to_path_buf()))
    })
}

fn resolve_export_dir(
    configured: Option<PathBuf>,
    downloads: impl FnOnce() -> Option<PathBuf>,
) -> Option<PathBuf> {
    configured
        .filter(|dir| !dir.as_os_str().is_empty())
        .or_else(downloads)
        .or_else(|| env::current_dir().ok())
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Theme;

    fn scratch_file(name: &str) -> PathBuf {
        env::temp_dir()
            .join(format!("blackgrid-state-{name}-{}", std::process::id()))
            .join("state.json")
    }

    #[test]
    fn saved_state_loads_back() {
        let path = scratch_file("roundtrip");
        let state = PersistedState { theme: Theme::Light };

        save_to(&path, &state).unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded.theme, Theme::Light);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_state_file_is_none() {
        assert!(load_from(&scratch_file("missing")).is_none());
    }

    #[test]
    fn malformed_state_file_is_none() {
        let path = scratch_file("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ theme: ").unwrap();

        assert!(load_from(&path).is_none());

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn configured_export_dir_wins() {
        let dir = resolve_export_dir(Some(PathBuf::from("/tmp/deals")), || {
            Some(PathBuf::from("/home/me/Downloads"))
        });
        assert_eq!(dir, Some(PathBuf::from("/tmp/deals")));
    }

    #[test]
    fn blank_override_falls_back_to_downloads() {
        let dir = resolve_export_dir(Some(PathBuf::new()), || {
            Some(PathBuf::from("/home/me/Downloads"))
        });
        assert_eq!(dir, Some(PathBuf::from("/home/me/Downloads")));
    }

    #[test]
    fn no_downloads_uses_working_directory() {
        let dir = resolve_export_dir(None, || None);
        assert_eq!(dir, env::current_dir().ok());
    }
}
