//! skinatlas - Minecraft skin and cape texture atlases
//!
//! This library provides functionality to:
//! - Load skin, cape and cloak textures from files, bytes or base64
//! - Validate texture sizes and convert legacy layouts to the canonical ones
//! - Extract the six faces of every body part
//! - Compose flat front/back previews
//! - Split capes into cape and elytra

pub mod atlas;
pub mod batch;
pub mod canvas;
pub mod cape;
pub mod config;
pub mod error;
pub mod extract;
pub mod geometry;
pub mod normalize;
pub mod output;
pub mod preview;
pub mod skin;

pub use atlas::{Atlas, AtlasKind};
pub use cape::{Cape, Cloak};
pub use config::{FilterMode, RenderConfig};
pub use error::AtlasError;
pub use extract::SixFaceSet;
pub use geometry::{BodyPart, Face, SkinLayout};
pub use preview::Facing;
pub use skin::Skin;
