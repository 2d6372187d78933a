use std::env;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

/// File name of the log inside the log directory.
const LOG_FILE: &str = "imagevert.log";

/// The fixed log directory, `.imagevert/logs` under the home directory.
pub(crate) fn base_dir() -> Result<PathBuf> {
    let mut dir = env::home_dir().context("Get home directory")?;
    dir.push(".imagevert");
    dir.push("logs");
    Ok(dir)
}

/// Ensure the log directory exists and open the log file inside it for
/// appending.
pub(crate) fn open(dir: &Path) -> Result<File> {
    fs::create_dir_all(dir)
        .with_context(|| anyhow!("Failed to create log directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE);

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| anyhow!("Failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn open_bootstraps_the_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("state").join("logs");

        let mut file = open(&dir).unwrap();
        writeln!(file, "first").unwrap();

        assert!(dir.is_dir());
        assert!(dir.join(LOG_FILE).is_file());
    }

    #[test]
    fn open_appends_to_an_existing_log() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().to_path_buf();

        writeln!(open(&dir).unwrap(), "first").unwrap();
        writeln!(open(&dir).unwrap(), "second").unwrap();

        let contents = fs::read_to_string(dir.join(LOG_FILE)).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }
}
