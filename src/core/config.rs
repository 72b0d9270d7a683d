use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "audio_manifest.yml";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base for `stories_path` and `audio_dir`.
    #[serde(default = "default_project_root")]
    pub project_root: PathBuf,

    #[serde(default = "default_stories_path")]
    pub stories_path: PathBuf,

    #[serde(default = "default_audio_dir")]
    pub audio_dir: PathBuf,

    /// Relative to the working directory, not to `project_root`.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_root: default_project_root(),
            stories_path: default_stories_path(),
            audio_dir: default_audio_dir(),
            output_path: default_output_path(),
        }
    }
}

fn default_project_root() -> PathBuf {
    PathBuf::from(".")
}
fn default_stories_path() -> PathBuf {
    ["app", "src", "main", "assets", "stories.json"].iter().collect()
}
fn default_audio_dir() -> PathBuf {
    ["app", "src", "main", "assets", "audio"].iter().collect()
}
fn default_output_path() -> PathBuf {
    PathBuf::from("audio_generation_list.txt")
}

impl Config {
    /// Loads `audio_manifest.yml` from the working directory, or defaults if
    /// there is none.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("{} not found, using default paths", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(content)?)
    }

    pub fn stories_file(&self) -> PathBuf {
        self.project_root.join(&self.stories_path)
    }

    pub fn audio_directory(&self) -> PathBuf {
        self.project_root.join(&self.audio_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let config = Config::load_from(&temp_dir.path().join(CONFIG_FILE))?;

        assert_eq!(config, Config::default());
        assert_eq!(
            config.stories_file(),
            Path::new(".").join("app/src/main/assets/stories.json")
        );
        assert_eq!(config.output_path, PathBuf::from("audio_generation_list.txt"));
        Ok(())
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() -> Result<()> {
        let config = Config::from_yaml("project_root: /srv/thebet\noutput_path: out/list.txt\n")?;

        assert_eq!(config.output_path, PathBuf::from("out/list.txt"));
        assert_eq!(
            config.audio_directory(),
            PathBuf::from("/srv/thebet").join("app/src/main/assets/audio")
        );
        Ok(())
    }

    #[test]
    fn test_bad_yaml_names_the_file() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "project_root: [unclosed")?;

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{}", err).contains(CONFIG_FILE));
        Ok(())
    }
}
