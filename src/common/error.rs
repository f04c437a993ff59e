//! Error types for pagesim.
//!
//! The replacement engine itself cannot fail. Every variant here belongs to
//! the layer that prepares input for it (reading files, validating the frame
//! count, parsing references), and is raised before any replacer runs.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading a reference file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Frame count is not a number or lies outside `[MIN_FRAMES, MAX_FRAMES]`.
    #[error("Number of frames must be between 1 and 10, got {value:?}")]
    InvalidFrameCount { value: String },

    /// A token in the reference string is not a valid page number.
    ///
    /// `position` is the 0-based index of the token in the input.
    #[error("Invalid page reference {token:?} at position {position}")]
    InvalidReference { position: usize, token: String },

    /// The reference string holds more references than the configured bound.
    #[error("Reference string exceeds the maximum of {max} references")]
    TooManyReferences { max: usize },

    /// Policy name is neither `fifo` nor `lru`.
    #[error("Unknown replacement policy {0:?} (expected \"fifo\" or \"lru\")")]
    UnknownPolicy(String),
}
