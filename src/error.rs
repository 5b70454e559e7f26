use std::path::PathBuf;
use thiserror::Error;

use crate::geometry::Rect;

pub type Result<T> = std::result::Result<T, TrellisError>;

#[derive(Error, Debug)]
pub enum TrellisError {
    #[error("Invalid geometry {rect}: width and height must be positive ({reason})")]
    InvalidGeometry { rect: Rect, reason: &'static str },

    #[error("Layout is full: cannot add more than {capacity} controls")]
    CapacityExceeded { capacity: usize },

    #[error("Control index {index} is out of range (layout has {len} controls)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No layout files found in input")]
    NoLayouts,

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),
}
