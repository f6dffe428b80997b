//! Persistence for the high score: a single non-negative integer stored as
//! decimal ASCII in a file of its own.
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Return the default high-score file path
pub(crate) fn default_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("sidewinder").join("highscore"))
}

/// Read the high score from disk.  A missing file is not an error: it means
/// no high score has been recorded yet, and 0 is returned.
pub(crate) fn load(path: Option<&Path>) -> Result<u32, LoadError> {
    let path = path.ok_or_else(LoadError::no_path)?;
    let src = match fs_err::read_to_string(path) {
        Ok(src) => src,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(LoadError::read(e)),
    };
    src.trim().parse::<u32>().map_err(LoadError::parse)
}

/// Write the high score to disk, creating parent directories as needed.
pub(crate) fn save(path: Option<&Path>, best: u32) -> Result<(), SaveError> {
    let path = path.ok_or_else(SaveError::no_path)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
    }
    fs_err::write(path, format!("{best}\n")).map_err(SaveError::write)?;
    Ok(())
}

/// Reset the recorded high score to 0
pub(crate) fn reset(path: Option<&Path>) -> Result<(), SaveError> {
    save(path, 0)
}

#[derive(Debug, Error)]
#[error("Failed to save high score to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn no_path() -> Self {
        SaveError(SaveErrorSource::NoPath)
    }

    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to write high-score file")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read high score from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn no_path() -> Self {
        LoadError(LoadErrorSource::NoPath)
    }

    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn parse(e: ParseIntError) -> Self {
        LoadError(LoadErrorSource::Parse(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to determine path to local data directory")]
    NoPath,
    #[error("failed to read high-score file")]
    Read(#[source] std::io::Error),
    #[error("high-score file does not contain an integer")]
    Parse(#[source] ParseIntError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore");
        assert_eq!(load(Some(&path)).unwrap(), 0);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore");
        save(Some(&path), 12).unwrap();
        assert_eq!(fs_err::read_to_string(&path).unwrap(), "12\n");
        assert_eq!(load(Some(&path)).unwrap(), 12);
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("snake").join("highscore");
        save(Some(&path), 7).unwrap();
        assert_eq!(load(Some(&path)).unwrap(), 7);
    }

    #[test]
    fn reset_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore");
        save(Some(&path), 55).unwrap();
        reset(Some(&path)).unwrap();
        assert_eq!(load(Some(&path)).unwrap(), 0);
    }

    #[test]
    fn load_trims_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore");
        fs_err::write(&path, " 21\n").unwrap();
        assert_eq!(load(Some(&path)).unwrap(), 21);
    }

    #[test]
    fn load_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore");
        fs_err::write(&path, "not a number\n").unwrap();
        assert!(load(Some(&path)).is_err());
    }

    #[test]
    fn load_no_path() {
        assert!(load(None).is_err());
    }
}
