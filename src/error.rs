use alloc::string::String;

use thiserror::Error;

/// Everything that can go wrong while setting up a viewer.
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Expected an image element, got <{tag}>")]
    NotAnImage { tag: String },

    #[error("Image has no intrinsic size: {width}x{height}")]
    ZeroImageDimension { width: u32, height: u32 },

    #[error("Invalid zoom steps: {0}")]
    InvalidZoomSteps(&'static str),

    #[error("Scrollbar thickness must be finite and non-negative, got {width}x{height}")]
    InvalidScrollbar { width: f64, height: f64 },

    #[cfg(feature = "std")]
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = core::result::Result<T, ViewerError>;
