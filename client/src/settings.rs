//! Optional settings overrides read from disk at startup.

use std::{fs, io, path::Path};

use shared::{SettingsError, SimSettings};
use thiserror::Error;

/// Environment variable that points at an alternative settings file.
pub const SETTINGS_PATH_ENV: &str = "OPEN_WORLD_SETTINGS";

/// Settings file looked up in the working directory when the env var is unset.
pub const DEFAULT_SETTINGS_PATH: &str = "settings.json";

#[derive(Debug, Error)]
pub enum SettingsLoadError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(#[from] SettingsError),
}

/// Read and validate settings from `path`.
///
/// Returns `Ok(None)` if the file does not exist. Missing fields fall back to defaults.
pub fn load_settings(path: &Path) -> Result<Option<SimSettings>, SettingsLoadError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    let settings: SimSettings = serde_json::from_str(&text)?;
    settings.validate()?;
    Ok(Some(settings))
}

/// Settings for this run: the override file if it loads cleanly, defaults otherwise.
pub fn resolve_settings() -> SimSettings {
    let path = std::env::var(SETTINGS_PATH_ENV).unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.into());

    match load_settings(Path::new(&path)) {
        Ok(Some(settings)) => {
            log::info!("loaded settings from {path}");
            settings
        }
        Ok(None) => SimSettings::default(),
        Err(err) => {
            log::warn!("ignoring {path}: {err}");
            SimSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("open_world_{}_{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let path = std::env::temp_dir().join("open_world_definitely_missing.json");
        assert!(matches!(load_settings(&path), Ok(None)));
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let path = temp_file(
            "partial.json",
            r#"{ "movement": { "walk_speed": 4.0 }, "camera": { "smoothing": { "mode": "frame_rate_independent", "reference_hz": 60.0 } } }"#,
        );
        let settings = load_settings(&path).unwrap().unwrap();
        assert_eq!(settings.movement.walk_speed, 4.0);
        assert_eq!(settings.movement.sprint_speed, 10.0);
        assert_eq!(
            settings.camera.smoothing,
            shared::CameraSmoothing::FrameRateIndependent { reference_hz: 60.0 }
        );
        fs::remove_file(path).ok();
    }

    #[test]
    fn broken_json_is_a_parse_error() {
        let path = temp_file("broken.json", "{ movement: ");
        assert!(matches!(
            load_settings(&path),
            Err(SettingsLoadError::Parse(_))
        ));
        fs::remove_file(path).ok();
    }

    #[test]
    fn invalid_values_are_rejected() {
        let path = temp_file("invalid.json", r#"{ "world": { "radius": -5.0 } }"#);
        assert!(matches!(
            load_settings(&path),
            Err(SettingsLoadError::Invalid(_))
        ));
        fs::remove_file(path).ok();
    }
}
