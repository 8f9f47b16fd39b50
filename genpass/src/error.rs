use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Library error type for password generation.
#[derive(Debug, Error)]
pub enum Error {
    /// Neither the system word list nor the local fallback could be read.
    #[error("no dictionary available: {} unreadable, fallback {} failed: {source}", .primary.display(), .fallback.display())]
    DictionaryUnavailable {
        primary: PathBuf,
        fallback: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The word list was read but holds no usable words.
    #[error("dictionary {} contains no usable words", .path.display())]
    EmptyDictionary { path: PathBuf },

    /// Word passwords were requested from a dictionary with no entries.
    #[error("dictionary holds no words")]
    NoWords,

    /// `-n` was missing its value, non-numeric or outside the allowed range.
    #[error("password length must be a number >= {min} and <= {max}, got {0:?}", min = crate::MIN_LENGTH, max = crate::MAX_LENGTH)]
    InvalidLength(String),

    /// Too few positions to fit one character of every required class.
    #[error("length {length} cannot hold {required} required character classes")]
    TooShort { length: usize, required: usize },

    /// More characters than a single password may hold.
    #[error("length {length} exceeds the maximum of {max}")]
    TooLong { length: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
