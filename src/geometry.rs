//! Geometry tables for skin and cape texture layouts
//!
//! Every face of every body part lives at a fixed offset in the texture,
//! expressed in blocks. A block is `width / 16` pixels for skins, so the same
//! tables serve 64px through 1024px textures.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Number of blocks across a skin texture.
pub const SKIN_BLOCKS: u32 = 16;

/// Canonical cape texture size at 1x scale.
pub const CAPE_BASE: (u32, u32) = (64, 32);

/// Cape (as opposed to elytra) portion of a canonical cape texture at 1x scale.
pub const CAPE_FRAME: (u32, u32) = (22, 17);

/// Size of the legacy cape texture.
pub const LEGACY_CAPE: (u32, u32) = (22, 17);

/// Preview template size in cells (columns, rows).
pub const PREVIEW_GRID: (u32, u32) = (4, 8);

/// A rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size anchored at the origin.
    pub const fn sized(w: u32, h: u32) -> Self {
        Self { x: 0, y: 0, w, h }
    }

    /// Same size, moved to the origin.
    pub const fn at_origin(self) -> Self {
        Self { x: 0, y: 0, ..self }
    }
}

/// A rectangle in blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl BlockRect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Convert to pixels for the given block size.
    pub const fn to_pixels(self, block_size: u32) -> Rect {
        Rect::new(self.x * block_size, self.y * block_size, self.w * block_size, self.h * block_size)
    }
}

/// Body parts of the humanoid model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BodyPart {
    Head,
    Body,
    RightArm,
    LeftArm,
    RightLeg,
    LeftLeg,
}

impl BodyPart {
    pub const ALL: [BodyPart; 6] = [
        BodyPart::Head,
        BodyPart::Body,
        BodyPart::RightArm,
        BodyPart::LeftArm,
        BodyPart::RightLeg,
        BodyPart::LeftLeg,
    ];

    /// Identifier used in region maps and output file names.
    pub fn key(self) -> &'static str {
        match self {
            BodyPart::Head => "head",
            BodyPart::Body => "body",
            BodyPart::RightArm => "right_arm",
            BodyPart::LeftArm => "left_arm",
            BodyPart::RightLeg => "right_leg",
            BodyPart::LeftLeg => "left_leg",
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BodyPart::Head => "head",
            BodyPart::Body => "body",
            BodyPart::RightArm => "right arm",
            BodyPart::LeftArm => "left arm",
            BodyPart::RightLeg => "right leg",
            BodyPart::LeftLeg => "left leg",
        };
        f.write_str(name)
    }
}

/// The six projections of a body part cuboid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    Right,
    Front,
    Left,
    Back,
    Top,
    Bottom,
}

impl Face {
    /// Faces in texture order: the side strip left to right, then top and bottom.
    pub const ALL: [Face; 6] = [Face::Right, Face::Front, Face::Left, Face::Back, Face::Top, Face::Bottom];

    pub fn key(self) -> &'static str {
        match self {
            Face::Right => "right",
            Face::Front => "front",
            Face::Left => "left",
            Face::Back => "back",
            Face::Top => "top",
            Face::Bottom => "bottom",
        }
    }

    /// The face that lands here when the part is mirrored left to right.
    pub fn mirrored(self) -> Face {
        match self {
            Face::Right => Face::Left,
            Face::Left => Face::Right,
            other => other,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Where each face of one body part lives, in blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartLayout {
    pub right: BlockRect,
    pub front: BlockRect,
    pub left: BlockRect,
    pub back: BlockRect,
    pub top: BlockRect,
    pub bottom: BlockRect,
}

impl PartLayout {
    /// Unfolded cuboid of `w`x`h`x`d` blocks whose net starts at `(x, y)`.
    ///
    /// Top and bottom sit on the first row, right/front/left/back share the
    /// strip below it.
    pub const fn cuboid(x: u32, y: u32, w: u32, h: u32, d: u32) -> Self {
        Self {
            right: BlockRect::new(x, y + d, d, h),
            front: BlockRect::new(x + d, y + d, w, h),
            left: BlockRect::new(x + d + w, y + d, d, h),
            back: BlockRect::new(x + 2 * d + w, y + d, w, h),
            top: BlockRect::new(x + d, y, w, d),
            bottom: BlockRect::new(x + d + w, y, w, d),
        }
    }

    pub const fn face(&self, face: Face) -> BlockRect {
        match face {
            Face::Right => self.right,
            Face::Front => self.front,
            Face::Left => self.left,
            Face::Back => self.back,
            Face::Top => self.top,
            Face::Bottom => self.bottom,
        }
    }
}

pub const HEAD: PartLayout = PartLayout::cuboid(0, 0, 2, 2, 2);
pub const BODY: PartLayout = PartLayout::cuboid(4, 4, 2, 3, 1);
pub const RIGHT_LEG: PartLayout = PartLayout::cuboid(0, 4, 1, 3, 1);
pub const RIGHT_ARM: PartLayout = PartLayout::cuboid(10, 4, 1, 3, 1);
pub const LEFT_LEG: PartLayout = PartLayout::cuboid(4, 12, 1, 3, 1);
pub const LEFT_ARM: PartLayout = PartLayout::cuboid(8, 12, 1, 3, 1);

/// Limbs the legacy layout stores once, paired with the mirror image the
/// canonical layout expects.
pub const MIRRORED_LIMBS: [(BodyPart, BodyPart); 2] =
    [(BodyPart::RightLeg, BodyPart::LeftLeg), (BodyPart::RightArm, BodyPart::LeftArm)];

/// Skin texture layout versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkinLayout {
    /// Half-height texture with a single arm and leg
    Legacy,
    /// Square texture with all four limbs
    Canonical,
}

impl SkinLayout {
    /// Detect the layout from decoded dimensions.
    pub fn detect(width: u32, height: u32) -> Self {
        if height == width {
            SkinLayout::Canonical
        } else {
            SkinLayout::Legacy
        }
    }

    /// Texture height in blocks.
    pub fn height_blocks(self) -> u32 {
        match self {
            SkinLayout::Legacy => SKIN_BLOCKS / 2,
            SkinLayout::Canonical => SKIN_BLOCKS,
        }
    }

    /// Face table for a body part, if this layout stores it.
    pub fn part(self, part: BodyPart) -> Option<&'static PartLayout> {
        match (self, part) {
            (_, BodyPart::Head) => Some(&HEAD),
            (_, BodyPart::Body) => Some(&BODY),
            (_, BodyPart::RightArm) => Some(&RIGHT_ARM),
            (_, BodyPart::RightLeg) => Some(&RIGHT_LEG),
            (SkinLayout::Canonical, BodyPart::LeftArm) => Some(&LEFT_ARM),
            (SkinLayout::Canonical, BodyPart::LeftLeg) => Some(&LEFT_LEG),
            (SkinLayout::Legacy, _) => None,
        }
    }
}

impl fmt::Display for SkinLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkinLayout::Legacy => f.write_str("legacy"),
            SkinLayout::Canonical => f.write_str("canonical"),
        }
    }
}

/// Cape and elytra regions of a normalized cape texture.
pub fn cape_regions(width: u32, height: u32) -> (Rect, Rect) {
    let cape_w = CAPE_FRAME.0 * (width / CAPE_BASE.0);
    let cape_h = CAPE_FRAME.1 * (height / CAPE_BASE.1);
    let cape = Rect::sized(cape_w, cape_h);
    let elytra = Rect::new(cape_w, 0, width - cape_w, height);
    (cape, elytra)
}

/// One cell of the preview template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewCell {
    pub part: BodyPart,
    pub cell: BlockRect,
}

const fn cell(part: BodyPart, x: u32, y: u32, w: u32, h: u32) -> PreviewCell {
    PreviewCell { part, cell: BlockRect::new(x, y, w, h) }
}

/// Front view: the model's right side is on the viewer's left.
pub const FRONT_PREVIEW: [PreviewCell; 6] = [
    cell(BodyPart::Head, 1, 0, 2, 2),
    cell(BodyPart::RightArm, 0, 2, 1, 3),
    cell(BodyPart::LeftArm, 3, 2, 1, 3),
    cell(BodyPart::Body, 1, 2, 2, 3),
    cell(BodyPart::RightLeg, 1, 5, 1, 3),
    cell(BodyPart::LeftLeg, 2, 5, 1, 3),
];

/// Back view: sides swap.
pub const BACK_PREVIEW: [PreviewCell; 6] = [
    cell(BodyPart::Head, 1, 0, 2, 2),
    cell(BodyPart::LeftArm, 0, 2, 1, 3),
    cell(BodyPart::RightArm, 3, 2, 1, 3),
    cell(BodyPart::Body, 1, 2, 2, 3),
    cell(BodyPart::LeftLeg, 1, 5, 1, 3),
    cell(BodyPart::RightLeg, 2, 5, 1, 3),
];

/// Pixel regions of a canonical skin, keyed as `"<part>.<face>"`.
#[derive(Debug, Clone, Serialize)]
pub struct FrameMap {
    pub block_size: u32,
    pub size: [u32; 2],
    pub frames: BTreeMap<String, Rect>,
}

impl FrameMap {
    /// Pretty-printed JSON, the form written next to exported faces.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Build the region map of the canonical layout for a block size.
pub fn frame_map(block_size: u32) -> FrameMap {
    let mut frames = BTreeMap::new();
    for part in BodyPart::ALL {
        if let Some(layout) = SkinLayout::Canonical.part(part) {
            for face in Face::ALL {
                let key = format!("{}.{}", part.key(), face.key());
                frames.insert(key, layout.face(face).to_pixels(block_size));
            }
        }
    }
    let side = SKIN_BLOCKS * block_size;
    FrameMap { block_size, size: [side, side], frames }
}
