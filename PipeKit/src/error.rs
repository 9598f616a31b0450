//! Error types for `PipeKit`
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `PipeKit` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    ///
    /// The message is already in the display string, so no `source()` is
    /// exposed and `anyhow` prints a single line.
    #[error("IO error: {0}")]
    Io(std::io::Error),

    // ==================== Color Errors ====================
    /// The color literal is not a recognised hex or `rgb()`/`rgba()` form.
    #[error("invalid color format: {literal}")]
    InvalidColorFormat {
        /// The literal exactly as it was supplied.
        literal: String,
    },

    // ==================== Atlas Errors ====================
    /// Tile dimensions must both be non-zero.
    #[error("invalid tile size {width}x{height}: width and height must be positive")]
    InvalidTileSize {
        /// Requested tile width in pixels.
        width: u32,
        /// Requested tile height in pixels.
        height: u32,
    },

    /// Numbering `tile_count` tiles from `start_index` would run past `u64::MAX`.
    #[error("tile index overflow: {tile_count} tiles starting at {start_index} exceed u64::MAX")]
    IndexOverflow {
        /// Index of the first tile.
        start_index: u64,
        /// Number of tiles in the grid.
        tile_count: u64,
    },

    /// The atlas image could not be opened or decoded.
    #[error("failed to decode image {}: {message}", path.display())]
    ImageDecodeFailed {
        /// The source image path.
        path: PathBuf,
        /// The decoder error message.
        message: String,
    },

    /// A tile could not be encoded or written.
    #[error("failed to write image {}: {message}", path.display())]
    ImageWriteFailed {
        /// The output tile path.
        path: PathBuf,
        /// The encoder error message.
        message: String,
    },
}

impl Error {
    pub(crate) fn invalid_color(literal: &str) -> Self {
        Error::InvalidColorFormat {
            literal: literal.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// A specialized Result type for `PipeKit` operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_error_renders_one_line() {
        let err = Error::from(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            "File exists (os error 17)",
        ));
        assert!(err.source().is_none());

        // anyhow's `Error: ...` report uses Debug, which lists any source chain
        let rendered = format!("{:?}", anyhow::Error::from(err));
        assert!(rendered.starts_with("IO error: File exists (os error 17)"));
        assert!(!rendered.contains("Caused by"), "{rendered}");
    }

    #[test]
    fn test_index_overflow_message() {
        let err = Error::IndexOverflow {
            start_index: u64::MAX,
            tile_count: 2,
        };
        assert_eq!(
            err.to_string(),
            format!("tile index overflow: 2 tiles starting at {} exceed u64::MAX", u64::MAX)
        );
    }
}
