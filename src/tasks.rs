use std::path::PathBuf;

/// A planned conversion of a single file.
pub(crate) struct Task {
    /// Path of the file to convert.
    pub(crate) from: PathBuf,
    /// Path the converted file will be written to.
    pub(crate) to: PathBuf,
    /// File name of the source, for reporting.
    pub(crate) from_name: String,
    /// File name of the output, for reporting.
    pub(crate) to_name: String,
    /// Whether the output path already existed when the task was planned.
    pub(crate) exists: bool,
}

/// Collection of planned conversions, in directory-listing order.
pub(crate) struct Tasks {
    pub(crate) tasks: Vec<Task>,
}

impl Tasks {
    pub(crate) fn new() -> Self {
        Self { tasks: Vec::new() }
    }
}
