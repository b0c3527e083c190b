// Every variant says which side of the codec boundary failed.
use std::fmt::{self, Display};
use std::path::PathBuf;

#[derive(Debug)]
pub enum CanvasError {
    /// The input could not be decoded into pixels.
    Decode(image::ImageError),
    /// The pixels could not be encoded or written.
    Encode(image::ImageError),
    /// Reading or writing the file itself failed.
    Io(std::io::Error),
    /// No export format matches the path's extension.
    UnsupportedFormat(PathBuf),
}

pub type Result<T> = std::result::Result<T, CanvasError>;

impl Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasError::Decode(e) => write!(f, "failed to load image: {e}"),
            CanvasError::Encode(e) => write!(f, "failed to save image: {e}"),
            CanvasError::Io(e) => write!(f, "i/o error: {e}"),
            CanvasError::UnsupportedFormat(p) => {
                write!(f, "unsupported image format for {}", p.display())
            }
        }
    }
}

impl std::error::Error for CanvasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CanvasError::Decode(e) | CanvasError::Encode(e) => Some(e),
            CanvasError::Io(e) => Some(e),
            CanvasError::UnsupportedFormat(_) => None,
        }
    }
}

impl From<std::io::Error> for CanvasError {
    fn from(e: std::io::Error) -> Self {
        CanvasError::Io(e)
    }
}

// Bare image errors come from the read side; the export path maps to Encode explicitly.
impl From<image::ImageError> for CanvasError {
    fn from(e: image::ImageError) -> Self {
        match e {
            image::ImageError::IoError(io) => CanvasError::Io(io),
            other => CanvasError::Decode(other),
        }
    }
}
