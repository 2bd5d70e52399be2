//! Body part extraction
//!
//! Cuts the six faces of a body part out of a skin canvas using the
//! geometry table of the canvas's layout. Extraction only reads the source;
//! every face is a freshly allocated canvas owned by the caller.

use crate::canvas;
use crate::error::AtlasError;
use crate::geometry::{BodyPart, Face, SkinLayout};
use image::RgbaImage;

/// The six face images of one body part.
#[derive(Debug, Clone, PartialEq)]
pub struct SixFaceSet {
    pub right: RgbaImage,
    pub front: RgbaImage,
    pub left: RgbaImage,
    pub back: RgbaImage,
    pub top: RgbaImage,
    pub bottom: RgbaImage,
}

impl SixFaceSet {
    pub fn face(&self, face: Face) -> &RgbaImage {
        match face {
            Face::Right => &self.right,
            Face::Front => &self.front,
            Face::Left => &self.left,
            Face::Back => &self.back,
            Face::Top => &self.top,
            Face::Bottom => &self.bottom,
        }
    }

    pub fn face_mut(&mut self, face: Face) -> &mut RgbaImage {
        match face {
            Face::Right => &mut self.right,
            Face::Front => &mut self.front,
            Face::Left => &mut self.left,
            Face::Back => &mut self.back,
            Face::Top => &mut self.top,
            Face::Bottom => &mut self.bottom,
        }
    }

    /// Faces in texture order (right, front, left, back, top, bottom).
    pub fn iter(&self) -> impl Iterator<Item = (Face, &RgbaImage)> + '_ {
        Face::ALL.into_iter().map(move |face| (face, self.face(face)))
    }

    /// Mirror every face left to right in place.
    pub fn flip_horizontal(&mut self) {
        for face in Face::ALL {
            canvas::flip_horizontal(self.face_mut(face));
        }
    }

    /// Take the faces out as an array in texture order.
    pub fn into_faces(self) -> [(Face, RgbaImage); 6] {
        [
            (Face::Right, self.right),
            (Face::Front, self.front),
            (Face::Left, self.left),
            (Face::Back, self.back),
            (Face::Top, self.top),
            (Face::Bottom, self.bottom),
        ]
    }
}

/// Extract all six faces of `part` from a canvas laid out as `layout`.
pub fn extract_part(
    source: &RgbaImage,
    layout: SkinLayout,
    part: BodyPart,
    block_size: u32,
) -> Result<SixFaceSet, AtlasError> {
    let table = layout.part(part).ok_or(AtlasError::MissingRegion { part, layout })?;
    let cut = |face: Face| canvas::crop(source, table.face(face).to_pixels(block_size));

    Ok(SixFaceSet {
        right: cut(Face::Right)?,
        front: cut(Face::Front)?,
        left: cut(Face::Left)?,
        back: cut(Face::Back)?,
        top: cut(Face::Top)?,
        bottom: cut(Face::Bottom)?,
    })
}

/// Extract a single face of `part`.
pub fn extract_face(
    source: &RgbaImage,
    layout: SkinLayout,
    part: BodyPart,
    face: Face,
    block_size: u32,
) -> Result<RgbaImage, AtlasError> {
    let table = layout.part(part).ok_or(AtlasError::MissingRegion { part, layout })?;
    canvas::crop(source, table.face(face).to_pixels(block_size))
}
