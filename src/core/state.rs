//! Persisted batch settings
//!
//! Defaults for the batch run, stored as JSON in the platform data
//! directory. CLI flags override whatever is stored here.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Batch defaults
///
/// Persisted to the platform data directory as settings.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSettings {
    /// Wipe the output root before converting
    #[serde(default = "default_clean_output")]
    pub clean_output: bool,
    /// Explicit converter executable to use instead of searching PATH
    #[serde(default)]
    pub converter: Option<PathBuf>,
}

fn default_clean_output() -> bool {
    true
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            clean_output: true,
            converter: None,
        }
    }
}

impl BatchSettings {
    const SETTINGS_FILE: &'static str = "settings.json";

    /// Get the app data directory
    fn get_app_data_dir() -> Result<PathBuf, String> {
        let data_dir =
            dirs::data_dir().ok_or_else(|| "Could not determine data directory".to_string())?;

        let app_dir = data_dir.join("fsbconv");

        // Create directory if it doesn't exist
        if !app_dir.exists() {
            std::fs::create_dir_all(&app_dir)
                .map_err(|e| format!("Failed to create app data directory: {}", e))?;
        }

        Ok(app_dir)
    }

    /// Load settings from disk, or return defaults if not found
    ///
    /// On first run the defaults are written out so the file exists.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(settings) => {
                log::debug!("Loaded batch settings from disk");
                settings
            }
            Err(e) => {
                log::debug!("Using default batch settings: {}", e);
                let settings = Self::default();
                if let Err(e) = settings.save() {
                    log::debug!("Could not write default settings: {}", e);
                }
                settings
            }
        }
    }

    fn try_load() -> Result<Self, String> {
        let app_dir = Self::get_app_data_dir()?;
        let settings_path = app_dir.join(Self::SETTINGS_FILE);

        if !settings_path.exists() {
            return Err("Settings file not found".to_string());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| format!("Failed to read settings: {}", e))?;

        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse settings: {}", e))
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), String> {
        let app_dir = Self::get_app_data_dir()?;
        let settings_path = app_dir.join(Self::SETTINGS_FILE);

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        std::fs::write(&settings_path, json)
            .map_err(|e| format!("Failed to write settings: {}", e))?;

        log::debug!("Saved batch settings to {:?}", settings_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = BatchSettings::default();
        assert!(settings.clean_output);
        assert!(settings.converter.is_none());
    }

    #[test]
    fn test_settings_serialize() {
        let settings = BatchSettings {
            clean_output: false,
            converter: Some(PathBuf::from("/opt/vgmstream/vgmstream-cli")),
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("clean_output"));
        assert!(json.contains("vgmstream-cli"));
    }

    #[test]
    fn test_settings_deserialize() {
        let json = r#"{"clean_output":false,"converter":"/usr/local/bin/vgmstream-cli"}"#;
        let settings: BatchSettings = serde_json::from_str(json).unwrap();
        assert!(!settings.clean_output);
        assert_eq!(
            settings.converter,
            Some(PathBuf::from("/usr/local/bin/vgmstream-cli"))
        );
    }

    #[test]
    fn test_settings_deserialize_missing_fields() {
        // Older settings files may lack newer fields
        let settings: BatchSettings = serde_json::from_str("{}").unwrap();
        assert!(settings.clean_output);
        assert!(settings.converter.is_none());
    }
}
