//! PNG encoding and file output

use crate::extract::SixFaceSet;
use crate::geometry::Face;
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbaImage};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Encode an RGBA image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, OutputError> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)?;
    Ok(bytes)
}

/// Save an RGBA image to a PNG file, creating parent directories as needed.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    image.save(path)?;
    Ok(())
}

/// Output path for one face: `dir/{name}_{face}.png`.
pub fn face_output_path(dir: &Path, name: &str, face: Face) -> PathBuf {
    dir.join(format!("{}_{}.png", name, face.key()))
}

/// Save all six faces of a part, returning the written paths in face order.
pub fn save_face_set(set: &SixFaceSet, dir: &Path, name: &str) -> Result<Vec<PathBuf>, OutputError> {
    let mut written = Vec::with_capacity(Face::ALL.len());
    for (face, image) in set.iter() {
        let path = face_output_path(dir, name, face);
        save_png(image, &path)?;
        written.push(path);
    }
    Ok(written)
}
