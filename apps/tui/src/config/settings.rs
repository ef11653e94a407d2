use metafinder_core::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Per-device preferences. Never part of a shared link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: Theme,
}

/// Missing or unreadable settings fall back to defaults.
pub fn load_settings(path: &Path) -> Settings {
    let Ok(raw) = fs::read_to_string(path) else {
        return Settings::default();
    };
    serde_json::from_str(&raw).unwrap_or_else(|error| {
        tracing::warn!(path = %path.display(), %error, "ignoring unreadable settings");
        Settings::default()
    })
}

pub fn save_settings(path: &Path, settings: &Settings) -> color_eyre::eyre::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(settings)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_disk() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("settings.json");

        save_settings(&path, &Settings { theme: Theme::Light })
            .map_err(|error| error.to_string())?;
        assert_eq!(load_settings(&path).theme, Theme::Light);
        Ok(())
    }

    #[test]
    fn missing_or_broken_files_give_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("settings.json");
        assert_eq!(load_settings(&path), Settings::default());

        fs::write(&path, "{ not json")?;
        assert_eq!(load_settings(&path), Settings::default());

        fs::write(&path, "{}")?;
        assert_eq!(load_settings(&path).theme, Theme::Dark);
        Ok(())
    }
}
