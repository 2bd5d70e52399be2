//! Player skin textures

use crate::atlas::{Atlas, AtlasKind};
use crate::canvas;
use crate::config::{FilterMode, RenderConfig};
use crate::error::AtlasError;
use crate::extract::{extract_part, SixFaceSet};
use crate::geometry::{frame_map, BodyPart, FrameMap, Rect, SkinLayout};
use crate::preview::{compose_preview, Facing};
use image::RgbaImage;
use std::path::Path;

/// A loaded skin, always in the square canonical layout.
///
/// Half-height (64x32 style) skins are converted while loading, so every
/// accessor sees all four limbs.
///
/// # Examples
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use skinatlas::skin::Skin;
///
/// let legacy = RgbaImage::from_pixel(64, 32, Rgba([200, 150, 100, 255]));
/// let skin = Skin::from_canvas(legacy).unwrap();
/// assert_eq!((skin.width(), skin.height()), (64, 64));
///
/// let head = skin.head().unwrap();
/// assert_eq!(head.front.dimensions(), (8, 8));
/// ```
#[derive(Debug, Clone)]
pub struct Skin {
    atlas: Atlas,
}

impl Skin {
    /// Load from an image file.
    pub fn load_png(path: impl AsRef<Path>) -> Result<Self, AtlasError> {
        Ok(Self { atlas: Atlas::load_png(AtlasKind::Skin, path)? })
    }

    /// Load from encoded image bytes.
    pub fn load_bytes(bytes: &[u8]) -> Result<Self, AtlasError> {
        Ok(Self { atlas: Atlas::load_bytes(AtlasKind::Skin, bytes)? })
    }

    /// Load from base64-encoded image bytes.
    pub fn load_base64(text: &str) -> Result<Self, AtlasError> {
        Ok(Self { atlas: Atlas::load_base64(AtlasKind::Skin, text)? })
    }

    /// Use an already decoded canvas.
    pub fn from_canvas(canvas: RgbaImage) -> Result<Self, AtlasError> {
        Ok(Self { atlas: Atlas::from_canvas(AtlasKind::Skin, canvas)? })
    }

    pub fn atlas(&self) -> &Atlas {
        &self.atlas
    }

    /// Texture width; equal to the height once loaded.
    pub fn width(&self) -> u32 {
        self.atlas.width()
    }

    pub fn height(&self) -> u32 {
        self.atlas.height()
    }

    /// Pixels per layout block (`width / 16`).
    pub fn block_size(&self) -> u32 {
        self.atlas.block_size()
    }

    /// The canonical skin texture.
    pub fn skin(&self) -> &RgbaImage {
        self.atlas.canvas()
    }

    /// The top half of the texture, i.e. the legacy layout.
    pub fn old_skin(&self) -> Result<RgbaImage, AtlasError> {
        let width = self.width();
        let height = self.height().min(width / 2);
        canvas::crop(self.skin(), Rect::sized(width, height))
    }

    /// Extract the six faces of a body part.
    pub fn part(&self, part: BodyPart) -> Result<SixFaceSet, AtlasError> {
        extract_part(self.skin(), SkinLayout::Canonical, part, self.block_size())
    }

    /// Faces of the head.
    pub fn head(&self) -> Result<SixFaceSet, AtlasError> {
        self.part(BodyPart::Head)
    }

    /// Faces of the body.
    pub fn body(&self) -> Result<SixFaceSet, AtlasError> {
        self.part(BodyPart::Body)
    }

    /// Faces of the left arm.
    pub fn left_arm(&self) -> Result<SixFaceSet, AtlasError> {
        self.part(BodyPart::LeftArm)
    }

    /// Faces of the right arm.
    pub fn right_arm(&self) -> Result<SixFaceSet, AtlasError> {
        self.part(BodyPart::RightArm)
    }

    /// Faces of the left leg.
    pub fn left_leg(&self) -> Result<SixFaceSet, AtlasError> {
        self.part(BodyPart::LeftLeg)
    }

    /// Faces of the right leg.
    pub fn right_leg(&self) -> Result<SixFaceSet, AtlasError> {
        self.part(BodyPart::RightLeg)
    }

    /// Front view at the given size, point-sampled.
    pub fn front_preview(&self, width: u32, height: u32) -> Result<RgbaImage, AtlasError> {
        self.preview(Facing::Front, width, height, FilterMode::Point)
    }

    /// Back view at the given size, point-sampled.
    pub fn back_preview(&self, width: u32, height: u32) -> Result<RgbaImage, AtlasError> {
        self.preview(Facing::Back, width, height, FilterMode::Point)
    }

    /// Preview of either side at any size and filter.
    pub fn preview(&self, facing: Facing, width: u32, height: u32, filter: FilterMode) -> Result<RgbaImage, AtlasError> {
        compose_preview(&self.atlas, facing, width, height, filter)
    }

    /// Preview using the size and filter from a render configuration.
    pub fn render_preview(&self, facing: Facing, config: &RenderConfig) -> Result<RgbaImage, AtlasError> {
        self.preview(facing, config.preview.width, config.preview.height, config.filter)
    }

    /// Pixel regions of every part face at this skin's scale.
    pub fn frame_map(&self) -> FrameMap {
        frame_map(self.block_size())
    }
}
