use alloc::string::String;

use num_bigint::BigUint;
use thiserror::Error;

/// A shift that has no valid result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShiftError {
    /// The empty file is integer 0 and has no predecessor.
    #[error("Cannot compress a zero-length file")]
    EmptyFileOverCompress,

    /// Compressing would need a negative integer.
    #[error(
        "Cannot compress that much. Hint: compressing {max} time(s) will make a zero-length file"
    )]
    InsufficientValue {
        /// The largest number of compressions the file can take.
        max: BigUint,
    },
}

/// A malformed `-C`/`-D` operand.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseShiftError {
    #[error("Argument is empty, expected an integer")]
    Empty,

    #[error("Argument is not an integer: {literal:?}")]
    InvalidDigit { literal: String },
}

/// Everything that can stop the file pipeline.
#[cfg(feature = "std")]
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unable to access file {}", path.display())]
    FileAccess {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Shift(#[from] ShiftError),

    #[error(transparent)]
    InvalidArgument(#[from] ParseShiftError),
}

#[cfg(feature = "std")]
impl Error {
    pub(crate) fn file_access(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    }
}
