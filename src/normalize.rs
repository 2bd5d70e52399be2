//! Legacy layout normalization
//!
//! Runs once inside [`Atlas::from_canvas`], after validation and before the
//! atlas is handed out:
//!
//! - Half-height skins become square. The legacy layout stores a single arm
//!   and leg; the missing left limbs are synthesized by mirroring the right
//!   ones, assuming the limbs are texture-symmetric.
//! - 22x17 capes are placed at the origin of a 64x32 canvas.
//! - Square capes are widened to 2:1, doubling the width.
//!
//! Cloaks are kept as loaded.

use crate::atlas::{Atlas, AtlasKind};
use crate::canvas;
use crate::config::FilterMode;
use crate::error::AtlasError;
use crate::extract::extract_part;
use crate::geometry::{Rect, SkinLayout, CAPE_BASE, LEGACY_CAPE, MIRRORED_LIMBS};
use image::RgbaImage;
use log::debug;

pub(crate) fn normalize(atlas: &mut Atlas) -> Result<(), AtlasError> {
    match atlas.kind() {
        AtlasKind::Skin => normalize_skin(atlas),
        AtlasKind::Cape => normalize_cape(atlas),
        AtlasKind::Cloak => Ok(()),
    }
}

fn normalize_skin(atlas: &mut Atlas) -> Result<(), AtlasError> {
    if SkinLayout::detect(atlas.width(), atlas.height()) == SkinLayout::Canonical {
        return Ok(());
    }

    let square = square_legacy_skin(atlas.canvas(), atlas.block_size())?;
    debug!("converted legacy skin {}x{} to {}x{}", atlas.width(), atlas.height(), square.width(), square.height());
    atlas.replace_canvas(square);
    Ok(())
}

/// Rewrite a half-height legacy skin into the square canonical layout.
///
/// The legacy texture lands unchanged in the top half. Each right limb is
/// extracted, mirrored and written to its left counterpart's slots, with the
/// mirrored left/right side faces trading places.
pub fn square_legacy_skin(legacy: &RgbaImage, block_size: u32) -> Result<RgbaImage, AtlasError> {
    let width = legacy.width();
    let mut square = canvas::allocate(width, width)?;
    let top_half = Rect::sized(width, legacy.height());
    canvas::copy_region(&mut square, legacy, top_half, top_half, FilterMode::Point);

    for (source, target) in MIRRORED_LIMBS {
        let mut faces = extract_part(legacy, SkinLayout::Legacy, source, block_size)?;
        faces.flip_horizontal();

        let layout = SkinLayout::Canonical;
        let table = layout.part(target).ok_or(AtlasError::MissingRegion { part: target, layout })?;
        for (face, image) in faces.into_faces() {
            let dst = table.face(face.mirrored()).to_pixels(block_size);
            let src = Rect::sized(image.width(), image.height());
            canvas::copy_region(&mut square, &image, dst, src, FilterMode::Point);
        }
    }

    Ok(square)
}

fn normalize_cape(atlas: &mut Atlas) -> Result<(), AtlasError> {
    let (width, height) = (atlas.width(), atlas.height());

    if (width, height) == LEGACY_CAPE {
        let mut wide = canvas::allocate(CAPE_BASE.0, CAPE_BASE.1)?;
        let legacy = Rect::sized(width, height);
        canvas::copy_region(&mut wide, atlas.canvas(), legacy, legacy, FilterMode::Point);
        debug!("converted legacy {} {}x{} to {}x{}", atlas.kind(), width, height, CAPE_BASE.0, CAPE_BASE.1);
        atlas.replace_canvas(wide);
    } else if width == height {
        let mut wide = canvas::allocate(width * 2, height)?;
        let square = Rect::sized(width, height);
        canvas::copy_region(&mut wide, atlas.canvas(), square, square, FilterMode::Point);
        debug!("widened square {} {}x{} to {}x{}", atlas.kind(), width, height, width * 2, height);
        atlas.replace_canvas(wide);
    }

    Ok(())
}
