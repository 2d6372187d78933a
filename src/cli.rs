use std::io;
use std::path::PathBuf;

use anyhow::{Result, ensure};
use clap::Parser;
use termcolor::{ColorChoice, StandardStream};

use crate::config::Config;
use crate::convert;
use crate::ext;
use crate::logs;
use crate::out::{Colors, Out, critical, debug, info, warn};
use crate::prompt::{self, Answer};
use crate::tasks::{Task, Tasks};

/// A tool to perform batch conversion of images.
#[derive(Parser, Debug)]
pub struct Imagevert {
    /// Path to the directory containing the images to convert.
    path: PathBuf,
    /// Extension of the files that need to be converted.
    source_extension: String,
    /// Extension of the newly created files.
    target_extension: String,
    /// If set, always overwrite existing files without prompting.
    #[arg(short = 'o', long)]
    overwrite: bool,
}

/// Entry for `imagevert`.
///
/// See [`crate`] documentation.
pub fn entry(opts: &Imagevert) -> Result<()> {
    let from_ext = ext::normalize(&opts.source_extension);
    let to_ext = ext::normalize(&opts.target_extension);

    ensure!(!from_ext.is_empty(), "Source extension must not be empty");
    ensure!(!to_ext.is_empty(), "Target extension must not be empty");

    let dir = logs::base_dir()?;
    let mut log = logs::open(&dir)?;

    let cols = Colors::new();

    let o = StandardStream::stdout(ColorChoice::Auto);
    let mut o = o.lock();
    let mut o = Out::new(&cols, &mut o, &mut log);

    info!(o, "Starting process");
    debug!(o, "Got args: {opts:?}");

    let config = Config {
        path: opts.path.clone(),
        from_ext: from_ext.to_owned(),
        to_ext: to_ext.to_owned(),
        overwrite: opts.overwrite,
    };

    run(&mut o, &config, &mut |_| {
        prompt::ask("File already exists, overwrite?", Answer::Yes)
    })
}

/// Plan and perform conversions.
///
/// When an output file already exists and overwriting has not been forced,
/// `confirm` decides the fate of that task. A failure to list the directory
/// is reported as critical and ends the run cleanly with nothing converted.
/// Every other failure propagates.
fn run(
    o: &mut Out<'_>,
    config: &Config,
    confirm: &mut dyn FnMut(&Task) -> io::Result<Answer>,
) -> Result<()> {
    info!(o, "Trying to list the given directory");

    let mut tasks = Tasks::new();

    if let Err(e) = config.populate(&mut tasks) {
        critical!(
            o,
            "Failed to list {}, verify the given path: {e}",
            config.path.display()
        );

        return Ok(());
    }

    info!(o, "Directory listed, converting images");

    for task in &tasks.tasks {
        if task.exists && !config.overwrite {
            let answer = confirm(task)?;

            if !answer.is_yes() {
                warn!(
                    o,
                    "User denied overwriting of file {}, skipping it", task.to_name
                );

                continue;
            }
        }

        info!(o, "Converting {} to {}", task.from_name, task.to_name);
        convert::convert(&task.from, &task.to)?;
    }

    info!(o, "Job finished");
    Ok(())
}
