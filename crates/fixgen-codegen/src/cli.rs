use clap::Parser;
use std::path::PathBuf;

/// Compiles a QuickFIX-style XML dictionary into a C header and source pair.
#[derive(Debug, Parser)]
#[command(name = "fixgen", version, about)]
pub struct Args {
    /// Path to the input XML dictionary.
    pub input: PathBuf,

    /// Directory the generated header is written into. Must already exist.
    #[arg(long = "header-dir", short = 'i', default_value = "include")]
    pub header_dir: PathBuf,

    /// Directory the generated source file is written into. Must already exist.
    #[arg(long = "source-dir", short = 's', default_value = "src")]
    pub source_dir: PathBuf,
}
