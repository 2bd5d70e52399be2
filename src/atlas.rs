//! Texture atlas loading and validation
//!
//! An [`Atlas`] owns one decoded texture (skin, cape or cloak) together with
//! its validated dimensions. Loading validates the decoded size against the
//! kind's whitelist and then rewrites legacy layouts into the canonical one,
//! so every atlas handed to a caller is already canonical.

use crate::canvas;
use crate::error::AtlasError;
use crate::geometry::{LEGACY_CAPE, SKIN_BLOCKS};
use crate::normalize;
use image::RgbaImage;
use log::{debug, warn};
use std::fmt;
use std::path::Path;

const SKIN_WIDTHS: [u32; 5] = [64, 128, 256, 512, 1024];
const CAPE_WIDTHS: [u32; 5] = [22, 64, 128, 256, 512];
const CLOAK_WIDTHS: [u32; 6] = [22, 64, 128, 256, 512, 1024];

/// The kind of texture an atlas holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtlasKind {
    Skin,
    Cape,
    Cloak,
}

impl AtlasKind {
    /// Accepted texture widths.
    pub fn allowed_widths(self) -> &'static [u32] {
        match self {
            AtlasKind::Skin => &SKIN_WIDTHS,
            AtlasKind::Cape => &CAPE_WIDTHS,
            AtlasKind::Cloak => &CLOAK_WIDTHS,
        }
    }

    /// Whether a decoded `width`x`height` texture is acceptable.
    ///
    /// The width must be whitelisted and the height equal to the width or
    /// half of it. A 22-wide cape is the one exception: it must be exactly
    /// 22x17.
    pub fn accepts(self, width: u32, height: u32) -> bool {
        if !self.allowed_widths().contains(&width) {
            return false;
        }
        if self == AtlasKind::Cape && width == LEGACY_CAPE.0 {
            return height == LEGACY_CAPE.1;
        }
        height == width || (width % 2 == 0 && height == width / 2)
    }
}

impl fmt::Display for AtlasKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtlasKind::Skin => f.write_str("skin"),
            AtlasKind::Cape => f.write_str("cape"),
            AtlasKind::Cloak => f.write_str("cloak"),
        }
    }
}

/// A decoded, validated and normalized texture.
#[derive(Debug, Clone)]
pub struct Atlas {
    kind: AtlasKind,
    canvas: RgbaImage,
    width: u32,
    height: u32,
    source_size: (u32, u32),
}

impl Atlas {
    /// Validate a decoded canvas and normalize it to the canonical layout.
    pub fn from_canvas(kind: AtlasKind, canvas: RgbaImage) -> Result<Self, AtlasError> {
        let (width, height) = canvas.dimensions();
        if !kind.accepts(width, height) {
            warn!("rejected {} texture of {}x{}", kind, width, height);
            return Err(AtlasError::BadSize { kind, width, height });
        }
        debug!("loaded {} texture {}x{}", kind, width, height);

        let mut atlas = Self { kind, canvas, width, height, source_size: (width, height) };
        normalize::normalize(&mut atlas)?;
        Ok(atlas)
    }

    /// Load from an image file.
    pub fn load_png(kind: AtlasKind, path: impl AsRef<Path>) -> Result<Self, AtlasError> {
        Self::from_canvas(kind, canvas::decode_file(path.as_ref())?)
    }

    /// Load from encoded image bytes.
    pub fn load_bytes(kind: AtlasKind, bytes: &[u8]) -> Result<Self, AtlasError> {
        Self::from_canvas(kind, canvas::decode_bytes(bytes)?)
    }

    /// Load from base64-encoded image bytes.
    pub fn load_base64(kind: AtlasKind, text: &str) -> Result<Self, AtlasError> {
        Self::from_canvas(kind, canvas::decode_base64(text)?)
    }

    /// Which kind of texture this is.
    pub fn kind(&self) -> AtlasKind {
        self.kind
    }

    /// Current (canonical) width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Current (canonical) height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as decoded, before normalization.
    pub fn source_size(&self) -> (u32, u32) {
        self.source_size
    }

    /// Whether loading rewrote a legacy layout.
    pub fn was_normalized(&self) -> bool {
        self.source_size != (self.width, self.height)
    }

    /// Size of one layout block in pixels.
    pub fn block_size(&self) -> u32 {
        self.width / SKIN_BLOCKS
    }

    /// The normalized texture.
    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    /// Swap in a rewritten canvas and take over its dimensions.
    pub(crate) fn replace_canvas(&mut self, canvas: RgbaImage) {
        let (width, height) = canvas.dimensions();
        self.canvas = canvas;
        self.width = width;
        self.height = height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn blank(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([1, 2, 3, 255]))
    }

    #[test]
    fn test_skin_sizes() {
        for w in SKIN_WIDTHS {
            assert!(AtlasKind::Skin.accepts(w, w));
            assert!(AtlasKind::Skin.accepts(w, w / 2));
            assert!(!AtlasKind::Skin.accepts(w, w / 4));
            assert!(!AtlasKind::Skin.accepts(w, w * 2));
        }
        assert!(!AtlasKind::Skin.accepts(22, 17));
        assert!(!AtlasKind::Skin.accepts(32, 32));
        assert!(!AtlasKind::Skin.accepts(2048, 2048));
    }

    #[test]
    fn test_cape_sizes() {
        assert!(AtlasKind::Cape.accepts(22, 17));
        assert!(!AtlasKind::Cape.accepts(22, 11));
        assert!(!AtlasKind::Cape.accepts(22, 22));
        assert!(AtlasKind::Cape.accepts(64, 32));
        assert!(AtlasKind::Cape.accepts(512, 512));
        assert!(!AtlasKind::Cape.accepts(1024, 512));
    }

    #[test]
    fn test_cloak_sizes() {
        assert!(AtlasKind::Cloak.accepts(22, 22));
        assert!(AtlasKind::Cloak.accepts(22, 11));
        assert!(!AtlasKind::Cloak.accepts(22, 17));
        assert!(AtlasKind::Cloak.accepts(1024, 512));
        assert!(!AtlasKind::Cloak.accepts(2048, 1024));
    }

    #[test]
    fn test_narrow_cloak_kept_as_is() {
        for height in [11, 22] {
            let atlas = Atlas::from_canvas(AtlasKind::Cloak, blank(22, height)).unwrap();
            assert_eq!((atlas.width(), atlas.height()), (22, height));
            assert!(!atlas.was_normalized());
        }
    }

    #[test]
    fn test_bad_size_carries_dimensions() {
        let err = Atlas::from_canvas(AtlasKind::Skin, blank(65, 32)).unwrap_err();
        match err {
            AtlasError::BadSize { kind, width, height } => {
                assert_eq!(kind, AtlasKind::Skin);
                assert_eq!((width, height), (65, 32));
            }
            other => panic!("expected BadSize, got {:?}", other),
        }
    }

    #[test]
    fn test_canonical_skin_untouched() {
        let source = blank(64, 64);
        let atlas = Atlas::from_canvas(AtlasKind::Skin, source.clone()).unwrap();
        assert_eq!(atlas.canvas(), &source);
        assert!(!atlas.was_normalized());
        assert_eq!(atlas.block_size(), 4);
    }

    #[test]
    fn test_legacy_skin_normalized() {
        let atlas = Atlas::from_canvas(AtlasKind::Skin, blank(128, 64)).unwrap();
        assert_eq!((atlas.width(), atlas.height()), (128, 128));
        assert_eq!(atlas.source_size(), (128, 64));
        assert!(atlas.was_normalized());
    }

    #[test]
    fn test_replace_canvas_updates_dimensions() {
        let mut atlas = Atlas::from_canvas(AtlasKind::Cloak, blank(64, 32)).unwrap();
        atlas.replace_canvas(blank(128, 64));
        assert_eq!((atlas.width(), atlas.height()), (128, 64));
    }
}
