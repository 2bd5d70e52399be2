//! Cape and cloak textures
//!
//! A canonical cape texture is 2:1. Its top-left `22x17` (at 64px scale)
//! holds the cape itself; everything to the right is the elytra.

use crate::atlas::{Atlas, AtlasKind};
use crate::canvas;
use crate::config::FilterMode;
use crate::error::AtlasError;
use crate::geometry::{cape_regions, Rect};
use image::RgbaImage;
use std::borrow::Cow;
use std::path::Path;

/// A loaded cape, normalized to 2:1 and split into cape and elytra.
#[derive(Debug, Clone)]
pub struct Cape {
    atlas: Atlas,
    cape: RgbaImage,
    elytra: RgbaImage,
    cape_rect: Rect,
    elytra_rect: Rect,
}

impl Cape {
    /// Load from an image file.
    pub fn load_png(path: impl AsRef<Path>) -> Result<Self, AtlasError> {
        Self::from_atlas(Atlas::load_png(AtlasKind::Cape, path)?)
    }

    /// Load from encoded image bytes.
    pub fn load_bytes(bytes: &[u8]) -> Result<Self, AtlasError> {
        Self::from_atlas(Atlas::load_bytes(AtlasKind::Cape, bytes)?)
    }

    /// Load from base64-encoded image bytes.
    pub fn load_base64(text: &str) -> Result<Self, AtlasError> {
        Self::from_atlas(Atlas::load_base64(AtlasKind::Cape, text)?)
    }

    /// Use an already decoded canvas.
    pub fn from_canvas(canvas: RgbaImage) -> Result<Self, AtlasError> {
        Self::from_atlas(Atlas::from_canvas(AtlasKind::Cape, canvas)?)
    }

    fn from_atlas(atlas: Atlas) -> Result<Self, AtlasError> {
        let (cape_rect, elytra_rect) = cape_regions(atlas.width(), atlas.height());
        let cape = canvas::crop(atlas.canvas(), cape_rect)?;
        let elytra = canvas::crop(atlas.canvas(), elytra_rect)?;
        Ok(Self { atlas, cape, elytra, cape_rect, elytra_rect })
    }

    pub fn atlas(&self) -> &Atlas {
        &self.atlas
    }

    /// Normalized texture width.
    pub fn width(&self) -> u32 {
        self.atlas.width()
    }

    /// Normalized texture height.
    pub fn height(&self) -> u32 {
        self.atlas.height()
    }

    /// The cape region as its own canvas.
    pub fn cape(&self) -> &RgbaImage {
        &self.cape
    }

    /// The elytra region as its own canvas.
    pub fn elytra(&self) -> &RgbaImage {
        &self.elytra
    }

    /// Where the cape sits in the normalized texture.
    pub fn cape_rect(&self) -> Rect {
        self.cape_rect
    }

    /// Where the elytra sits in the normalized texture.
    pub fn elytra_rect(&self) -> Rect {
        self.elytra_rect
    }

    /// The full normalized texture with the cape and/or elytra regions shown.
    ///
    /// With both shown the normalized texture itself is returned without
    /// copying. Hidden regions are transparent.
    pub fn full_cape(&self, show_cape: bool, show_elytra: bool) -> Result<Cow<'_, RgbaImage>, AtlasError> {
        if show_cape && show_elytra {
            return Ok(Cow::Borrowed(self.atlas.canvas()));
        }

        let mut full = canvas::allocate(self.width(), self.height())?;
        if show_cape {
            canvas::copy_region(&mut full, &self.cape, self.cape_rect, self.cape_rect.at_origin(), FilterMode::Point);
        }
        if show_elytra {
            canvas::copy_region(&mut full, &self.elytra, self.elytra_rect, self.elytra_rect.at_origin(), FilterMode::Point);
        }
        Ok(Cow::Owned(full))
    }
}

/// A loaded cloak texture.
///
/// Cloaks are 22 to 1024 pixels wide, square or 2:1, and are kept exactly as
/// loaded: no layout rewrite and no cape/elytra split.
#[derive(Debug, Clone)]
pub struct Cloak {
    atlas: Atlas,
}

impl Cloak {
    /// Load from an image file.
    pub fn load_png(path: impl AsRef<Path>) -> Result<Self, AtlasError> {
        Ok(Self { atlas: Atlas::load_png(AtlasKind::Cloak, path)? })
    }

    /// Load from encoded image bytes.
    pub fn load_bytes(bytes: &[u8]) -> Result<Self, AtlasError> {
        Ok(Self { atlas: Atlas::load_bytes(AtlasKind::Cloak, bytes)? })
    }

    /// Load from base64-encoded image bytes.
    pub fn load_base64(text: &str) -> Result<Self, AtlasError> {
        Ok(Self { atlas: Atlas::load_base64(AtlasKind::Cloak, text)? })
    }

    /// Use an already decoded canvas.
    pub fn from_canvas(canvas: RgbaImage) -> Result<Self, AtlasError> {
        Ok(Self { atlas: Atlas::from_canvas(AtlasKind::Cloak, canvas)? })
    }

    pub fn width(&self) -> u32 {
        self.atlas.width()
    }

    pub fn height(&self) -> u32 {
        self.atlas.height()
    }

    /// The cloak texture.
    pub fn cape(&self) -> &RgbaImage {
        self.atlas.canvas()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::TRANSPARENT;
    use image::Rgba;

    fn patterned(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 9, 255]))
    }

    #[test]
    fn test_split_canonical_cape() {
        let source = patterned(64, 32);
        let cape = Cape::from_canvas(source.clone()).unwrap();
        assert_eq!(cape.cape().dimensions(), (22, 17));
        assert_eq!(cape.elytra().dimensions(), (42, 32));
        assert_eq!(cape.cape().get_pixel(21, 16), source.get_pixel(21, 16));
        assert_eq!(cape.elytra().get_pixel(0, 0), source.get_pixel(22, 0));
    }

    #[test]
    fn test_split_scaled_cape() {
        let cape = Cape::from_canvas(patterned(512, 256)).unwrap();
        assert_eq!(cape.cape_rect(), Rect::new(0, 0, 176, 136));
        assert_eq!(cape.elytra_rect(), Rect::new(176, 0, 336, 256));
    }

    #[test]
    fn test_full_cape_only_cape() {
        let source = patterned(64, 32);
        let cape = Cape::from_canvas(source.clone()).unwrap();
        let full = cape.full_cape(true, false).unwrap();
        assert_eq!(full.dimensions(), (64, 32));
        assert_eq!(full.get_pixel(5, 5), source.get_pixel(5, 5));
        assert_eq!(*full.get_pixel(30, 5), TRANSPARENT);
        assert_eq!(*full.get_pixel(5, 20), TRANSPARENT);
    }

    #[test]
    fn test_full_cape_only_elytra() {
        let source = patterned(64, 32);
        let cape = Cape::from_canvas(source.clone()).unwrap();
        let full = cape.full_cape(false, true).unwrap();
        assert_eq!(*full.get_pixel(5, 5), TRANSPARENT);
        assert_eq!(full.get_pixel(30, 5), source.get_pixel(30, 5));
        assert_eq!(full.get_pixel(63, 31), source.get_pixel(63, 31));
    }

    #[test]
    fn test_full_cape_both_borrows() {
        let cape = Cape::from_canvas(patterned(64, 32)).unwrap();
        let full = cape.full_cape(true, true).unwrap();
        assert!(matches!(full, Cow::Borrowed(_)));
    }

    #[test]
    fn test_cloak_keeps_canvas() {
        let source = patterned(1024, 512);
        let cloak = Cloak::from_canvas(source.clone()).unwrap();
        assert_eq!(cloak.cape(), &source);
    }

    #[test]
    fn test_narrow_cloak_sizes() {
        for height in [11, 22] {
            let source = patterned(22, height);
            let cloak = Cloak::from_canvas(source.clone()).unwrap();
            assert_eq!((cloak.width(), cloak.height()), (22, height));
            assert_eq!(cloak.cape(), &source);
        }

        let err = Cloak::from_canvas(patterned(22, 17)).unwrap_err();
        assert!(matches!(err, AtlasError::BadSize { kind: AtlasKind::Cloak, width: 22, height: 17 }));
    }

    #[test]
    fn test_cloak_rejects_bad_ratio() {
        let err = Cloak::from_canvas(patterned(64, 48)).unwrap_err();
        assert!(matches!(err, AtlasError::BadSize { kind: AtlasKind::Cloak, width: 64, height: 48 }));
    }
}
