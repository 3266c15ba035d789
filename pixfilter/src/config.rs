use anyhow::{Context, Result};
use log::{debug, info};
use pixel_filter::FilterSettings;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct Config {
    #[serde(default)]
    pub filter: FilterSettings,

    #[serde(default)]
    pub canvas: CanvasSize,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CanvasSize {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Config {
    /// Loads the configuration file, or the defaults when no path is given.
    ///
    /// A path that does not exist yet is created with the default settings.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        };

        let config = match fs::read_to_string(path) {
            Ok(text) => toml::from_str::<Config>(&text)
                .with_context(|| format!("parse config file {} failed", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let config = Self::default();
                config.save_to(path)?;
                info!("created default config file {}", path.display());
                config
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("read config file {} failed", path.display()));
            }
        };

        debug!("{:?}", config);
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let text = toml::to_string_pretty(self)?;
        fs::write(path, text)
            .with_context(|| format!("write config file {} failed", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_without_path() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.filter, FilterSettings::default());
        assert_eq!(config.canvas, CanvasSize::default());
    }

    #[test]
    fn test_load_partial_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("pixfilter.toml");
        fs::write(
            &path,
            "[filter]\nbrightness_shift = 20.0\n\n[filter.weights]\nred = 0.5\n\n[canvas]\nwidth = 10\n",
        )?;

        let config = Config::load(Some(path.as_path()))?;
        assert_eq!(config.filter.brightness_shift, 20.0);
        assert_eq!(config.filter.weights.red, 0.5);
        assert_eq!(config.filter.weights.green, 0.33);
        assert!((config.filter.threshold - 85.0).abs() < 1e-4);
        assert_eq!(config.canvas.width, Some(10));
        assert_eq!(config.canvas.height, None);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_created() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("pixfilter.toml");

        assert!(!path.exists());
        let config = Config::load(Some(path.as_path()))?;
        assert_eq!(config.filter, FilterSettings::default());
        assert!(path.exists());

        fs::write(&path, "[filter]\nthreshold = 120.0\n")?;
        let reloaded = Config::load(Some(path.as_path()))?;
        assert_eq!(reloaded.filter.threshold, 120.0);
        Ok(())
    }

    #[test]
    fn test_invalid_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("pixfilter.toml");
        fs::write(&path, "[filter]\nthreshold = \"high\"\n")?;

        assert!(Config::load(Some(path.as_path())).is_err());
        Ok(())
    }
}
