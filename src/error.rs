//! Error types for atlas loading, extraction and composition

use crate::atlas::AtlasKind;
use crate::geometry::{BodyPart, SkinLayout};
use thiserror::Error;

/// Error raised while loading or working with a texture atlas.
///
/// Every error is surfaced synchronously to the immediate caller. A failed
/// load never yields a partially initialised atlas.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AtlasError {
    /// The input could not be decoded as an image (also covers unreadable files)
    #[error("Bad image data: {0}")]
    Decode(#[from] image::ImageError),
    /// The input text is not valid base64
    #[error("Bad BASE64 string given: {0}")]
    Base64(#[from] base64::DecodeError),
    /// Decoded dimensions are not an accepted size for this atlas kind
    #[error("Bad {kind} size: {width}x{height}")]
    BadSize { kind: AtlasKind, width: u32, height: u32 },
    /// A working canvas could not be allocated
    #[error("Can't create empty image of {width}x{height}")]
    CanvasAllocation { width: u32, height: u32 },
    /// The requested body part has no region in the given layout
    #[error("{layout} layout has no region for {part}")]
    MissingRegion { part: BodyPart, layout: SkinLayout },
}

impl AtlasError {
    /// Short machine-readable name of the error category.
    pub fn error_type(&self) -> &'static str {
        match self {
            AtlasError::Decode(_) => "decode_error",
            AtlasError::Base64(_) => "base64_error",
            AtlasError::BadSize { .. } => "bad_size",
            AtlasError::CanvasAllocation { .. } => "canvas_allocation",
            AtlasError::MissingRegion { .. } => "missing_region",
        }
    }
}
