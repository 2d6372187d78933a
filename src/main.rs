//! A tool to perform batch conversion of images.
//!
//! See [`imagevert`] documentation for more information.

use anyhow::Result;
use clap::Parser;

/// A tool to perform batch conversion of images.
#[derive(Parser)]
#[command(about, version, max_term_width = 80)]
struct Opts {
    #[command(flatten)]
    inner: imagevert::cli::Imagevert,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    imagevert::cli::entry(&opts.inner)
}
