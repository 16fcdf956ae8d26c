use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions that originate in the CLI/emitter crate, layered on top
/// of the dictionary crate's own [`fixgen_dictionary::ParseError`].
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("BadOutputDir: `{0:?}` does not exist or is not a directory")]
    BadOutputDir(PathBuf),

    #[error(transparent)]
    Parse(#[from] fixgen_dictionary::ParseError),

    #[error("DuplicateMsgType: `{name}` reuses msgtype `{msgtype}`")]
    DuplicateMsgType { name: String, msgtype: String },
}

pub type CliResult<T> = Result<T, CliError>;
