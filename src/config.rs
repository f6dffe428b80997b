use crate::highscore;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub(crate) struct Config {
    /// Colors used for the board
    pub(crate) theme: Theme,

    /// Settings about data files
    pub(crate) files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("sidewinder").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return the filepath at which the high score should be stored: the file
    /// given in the configuration or, if that is not set, the default
    /// high-score file path.  Return `None` if no path is present in the
    /// configuration and the default path could not be computed.
    pub(crate) fn high_score_file(&self) -> Option<Cow<'_, Path>> {
        self.files
            .high_score_file
            .as_deref()
            .map(Cow::from)
            .or_else(|| highscore::default_path().map(Cow::from))
    }
}

/// Colors for the pieces on the board
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub(crate) struct Theme {
    pub(crate) snake: Color,
    pub(crate) apple: Color,
    pub(crate) border: Color,
}

impl Default for Theme {
    fn default() -> Theme {
        Theme {
            snake: Color::Green,
            apple: Color::LightRed,
            border: Color::Reset,
        }
    }
}

impl Theme {
    pub(crate) fn snake_style(&self) -> Style {
        Style::new().fg(self.snake).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn apple_style(&self) -> Style {
        Style::new().fg(self.apple)
    }

    pub(crate) fn border_style(&self) -> Style {
        Style::new().fg(self.border)
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which the high score should be stored
    pub(crate) high_score_file: Option<PathBuf>,

    /// Whether to load & save the high score at all
    pub(crate) save_high_score: bool,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            high_score_file: None,
            save_high_score: true,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_allowed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let config = Config::load(&path, true).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_missing_required() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn load_full() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs_err::write(
            &path,
            concat!(
                "[theme]\n",
                "snake = \"cyan\"\n",
                "apple = \"yellow\"\n",
                "\n",
                "[files]\n",
                "high-score-file = \"scores/best.txt\"\n",
                "save-high-score = false\n",
            ),
        )
        .unwrap();
        let config = Config::load(&path, false).unwrap();
        assert_eq!(config.theme.snake, Color::Cyan);
        assert_eq!(config.theme.apple, Color::Yellow);
        assert_eq!(config.theme.border, Color::Reset);
        assert_eq!(
            config.files.high_score_file,
            Some(PathBuf::from("scores/best.txt"))
        );
        assert!(!config.files.save_high_score);
        assert_eq!(
            config.high_score_file(),
            Some(Cow::from(Path::new("scores/best.txt")))
        );
    }

    #[test]
    fn load_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs_err::write(&path, "theme = 42\n").unwrap();
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Parse(_))
        ));
    }
}
