use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("input file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    #[error("cannot read input file '{}': {}", .path.display(), .source)]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no solution for day {0}")]
    Unsolved(u8),
}

impl Error {
    pub fn from_io(path: PathBuf, source: std::io::Error) -> Error {
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::InputNotFound(path)
        } else {
            Error::InputUnreadable {path, source}
        }
    }
}
