//! Error types shared across the crate.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing colors, mutating pixels, or drawing.
///
/// Every operation fails fast: the error is returned at the offending call
/// and no pixels are mutated before validation has passed.
#[derive(Debug, Error)]
pub enum Error {
    /// Color input that matches none of the accepted forms
    /// (known name, `#RRGGBB`/`#RGB` literal, channel triple).
    #[error("invalid color specification: {0}")]
    InvalidColorSpec(String),

    /// Channel triple with a component outside [0, 255]. Never clamped.
    #[error("color components must be between 0 and 255 but given ({0}, {1}, {2})")]
    ColorRange(i32, i32, i32),

    /// Malformed shape or construction argument (zero dimensions,
    /// empty vertex list, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Pixel coordinate outside the image dimensions.
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} image")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    /// None of the candidate font families is installed.
    #[error("no usable font among candidates: {}", candidates.join(", "))]
    FontUnavailable { candidates: Vec<String> },

    /// The image codec could not read or write the given path.
    #[error("image I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Cairo reported a drawing failure.
    #[error("render backend error: {0}")]
    Render(#[from] cairo::Error),

    /// The backing surface data could not be borrowed.
    #[error("surface access error: {0}")]
    Surface(#[from] cairo::BorrowError),
}
