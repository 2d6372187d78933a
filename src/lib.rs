//! A tool to perform batch conversion of images.
//!
//! The first argument is a directory which will be scanned for files to
//! convert. Every file whose name ends with the source extension is decoded
//! and written back under the same name with the target extension, into the
//! same directory. The actual decoding and encoding is delegated to the
//! [`image`] crate, so any format it understands can be used on either side.
//!
//! If a target file already exists, the tool asks before overwriting it
//! unless `--overwrite` is specified.
//!
//! Everything the tool reports is mirrored to a log file under
//! `~/.imagevert/logs`.
//!
//! <br>
//!
//! ## Usage
//!
//! Convert every `.png` file in `photos` to `.jpg`:
//!
//! ```sh
//! imagevert photos png jpg
//! ```
//!
//! To overwrite existing files without being asked:
//!
//! ```sh
//! imagevert photos png jpg --overwrite
//! ```

pub mod cli;
mod config;
mod convert;
mod ext;
mod logs;
mod out;
mod prompt;
mod tasks;
