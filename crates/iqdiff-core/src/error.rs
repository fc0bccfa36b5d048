use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::compare::Channel;

pub type Result<T> = std::result::Result<T, CmpError>;

#[derive(Debug, Error)]
pub enum CmpError {
    #[error("invalid hex token {token:?}: {fault}")]
    HexToken { token: String, fault: HexFault },

    #[error("invalid float {text:?}: {source}")]
    FloatToken {
        text: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("{}:{line}: {source}", path.display())]
    Line {
        path: PathBuf,
        line: usize,
        #[source]
        source: Box<CmpError>,
    },

    #[error("{channel} length mismatch: decoded={decoded} reference={reference}")]
    LengthMismatch {
        channel: Channel,
        decoded: usize,
        reference: usize,
    },

    #[error("{channel} sample count {num} exceeds sequence length {len}")]
    SampleCountExceeded {
        channel: Channel,
        num: usize,
        len: usize,
    },

    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum HexFault {
    #[error("empty token")]
    Empty,

    #[error("{0}")]
    Digits(#[from] std::num::ParseIntError),

    #[error("needs {bits} bits, word is 25 bits wide")]
    TooWide { bits: u32 },
}

impl CmpError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> CmpError {
        CmpError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Attach a file position to a token-level error (1-based line).
    pub(crate) fn at_line(self, path: &Path, line: usize) -> CmpError {
        CmpError::Line {
            path: path.to_path_buf(),
            line,
            source: Box::new(self),
        }
    }
}
