use std::fs;
use std::io;
use std::path::PathBuf;

use crate::ext;
use crate::tasks::{Task, Tasks};

/// Configuration for conversions.
pub(crate) struct Config {
    /// Directory to scan for files to convert.
    pub(crate) path: PathBuf,
    /// Extension identifying files to convert, without the leading dot.
    pub(crate) from_ext: String,
    /// Extension of converted files, without the leading dot.
    pub(crate) to_ext: String,
    /// If set, overwrite existing files without prompting.
    pub(crate) overwrite: bool,
}

impl Config {
    /// Populate tasks with one conversion per file in the configured
    /// directory whose name ends with `.{from_ext}`.
    ///
    /// The directory is listed exactly once, before any conversion runs, so
    /// files produced later are never picked up as new sources. Fails with
    /// the underlying error if the directory cannot be listed.
    pub(crate) fn populate(&self, tasks: &mut Tasks) -> io::Result<()> {
        for entry in fs::read_dir(&self.path)? {
            let entry = entry?;

            if !entry.file_type()?.is_file() {
                continue;
            }

            let name = entry.file_name();

            let Some(name) = name.to_str() else {
                continue;
            };

            let Some(stem) = ext::strip_suffix(name, &self.from_ext) else {
                continue;
            };

            let to_name = ext::with_ext(stem, &self.to_ext);
            let to = self.path.join(&to_name);
            let exists = to.exists();

            tasks.tasks.push(Task {
                from: entry.path(),
                to,
                from_name: name.to_owned(),
                to_name,
                exists,
            });
        }

        Ok(())
    }
}
