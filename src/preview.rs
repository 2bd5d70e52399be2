//! Flat front/back previews of a skin
//!
//! The preview is a 4x8 cell humanoid template: head on top, arms flanking
//! the body, legs below. Each part's front (or back) face is resized from
//! the skin's block size to the template's cell size.

use crate::atlas::Atlas;
use crate::canvas;
use crate::config::FilterMode;
use crate::error::AtlasError;
use crate::extract::extract_face;
use crate::geometry::{Face, PreviewCell, Rect, SkinLayout, BACK_PREVIEW, FRONT_PREVIEW, PREVIEW_GRID};
use image::RgbaImage;

/// Which side of the model a preview shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    Front,
    Back,
}

impl Facing {
    /// The face of each part shown from this side.
    pub fn face(self) -> Face {
        match self {
            Facing::Front => Face::Front,
            Facing::Back => Face::Back,
        }
    }

    pub fn template(self) -> &'static [PreviewCell] {
        match self {
            Facing::Front => &FRONT_PREVIEW,
            Facing::Back => &BACK_PREVIEW,
        }
    }
}

/// Compose a preview of a canonical skin atlas.
///
/// The output is `(width / 4 * 4) x (height / 8 * 8)`; sizes that leave a
/// zero-sized cell fail with [`AtlasError::CanvasAllocation`].
pub fn compose_preview(
    skin: &Atlas,
    facing: Facing,
    width: u32,
    height: u32,
    filter: FilterMode,
) -> Result<RgbaImage, AtlasError> {
    let (cols, rows) = PREVIEW_GRID;
    let cell_w = width / cols;
    let cell_h = height / rows;
    let mut preview = canvas::allocate(cell_w * cols, cell_h * rows)?;

    let block_size = skin.block_size();
    for cell in facing.template() {
        let face = extract_face(skin.canvas(), SkinLayout::Canonical, cell.part, facing.face(), block_size)?;
        let dst = Rect::new(cell.cell.x * cell_w, cell.cell.y * cell_h, cell.cell.w * cell_w, cell.cell.h * cell_h);
        let src = Rect::sized(face.width(), face.height());
        canvas::copy_region(&mut preview, &face, dst, src, filter);
    }

    Ok(preview)
}
