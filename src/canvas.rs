//! Canvas primitives: decoding, allocation, region copies and flips
//!
//! Canvases are plain `RgbaImage`s. Writes never blend: a copied pixel
//! replaces the destination pixel, alpha included.

use crate::config::FilterMode;
use crate::error::AtlasError;
use crate::geometry::Rect;
use base64::Engine;
use image::{imageops, Rgba, RgbaImage};
use std::path::Path;

/// Fill color of freshly allocated canvases
pub const TRANSPARENT: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Largest canvas side that will be allocated.
pub const MAX_CANVAS_SIDE: u32 = 16384;

/// Decode an image file into an RGBA canvas.
pub fn decode_file(path: &Path) -> Result<RgbaImage, AtlasError> {
    Ok(image::open(path)?.to_rgba8())
}

/// Decode in-memory image bytes (any format the `image` crate recognizes).
pub fn decode_bytes(bytes: &[u8]) -> Result<RgbaImage, AtlasError> {
    Ok(image::load_from_memory(bytes)?.to_rgba8())
}

/// Decode base64 text, then the image it contains.
///
/// Whitespace is ignored and a `data:<mime>;base64,` prefix is stripped.
/// Invalid base64 fails before any image decoding is attempted.
pub fn decode_base64(text: &str) -> Result<RgbaImage, AtlasError> {
    let payload = match text.trim_start().strip_prefix("data:") {
        Some(uri) => uri.split_once(',').map_or(uri, |(_, data)| data),
        None => text,
    };
    let cleaned: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = base64::engine::general_purpose::STANDARD.decode(cleaned)?;
    decode_bytes(&bytes)
}

/// Allocate a fully transparent canvas.
pub fn allocate(width: u32, height: u32) -> Result<RgbaImage, AtlasError> {
    if width == 0 || height == 0 || width > MAX_CANVAS_SIDE || height > MAX_CANVAS_SIDE {
        return Err(AtlasError::CanvasAllocation { width, height });
    }
    Ok(RgbaImage::from_pixel(width, height, TRANSPARENT))
}

/// Copy `src_rect` of `src` into `dst_rect` of `dst`.
///
/// Equal sizes are an exact pixel copy; otherwise the region is resampled
/// with `filter`. Parts of either rectangle outside its canvas are clipped.
pub fn copy_region(dst: &mut RgbaImage, src: &RgbaImage, dst_rect: Rect, src_rect: Rect, filter: FilterMode) {
    if dst_rect.w == 0 || dst_rect.h == 0 || src_rect.w == 0 || src_rect.h == 0 {
        return;
    }

    if dst_rect.w == src_rect.w && dst_rect.h == src_rect.h {
        copy_exact(dst, src, dst_rect.x, dst_rect.y, src_rect);
        return;
    }

    let region = imageops::crop_imm(src, src_rect.x, src_rect.y, src_rect.w, src_rect.h).to_image();
    if region.width() == 0 || region.height() == 0 {
        return;
    }
    let resized = imageops::resize(&region, dst_rect.w, dst_rect.h, filter.filter_type());
    imageops::replace(dst, &resized, i64::from(dst_rect.x), i64::from(dst_rect.y));
}

fn copy_exact(dst: &mut RgbaImage, src: &RgbaImage, dst_x: u32, dst_y: u32, src_rect: Rect) {
    let w = src_rect
        .w
        .min(src.width().saturating_sub(src_rect.x))
        .min(dst.width().saturating_sub(dst_x));
    let h = src_rect
        .h
        .min(src.height().saturating_sub(src_rect.y))
        .min(dst.height().saturating_sub(dst_y));

    for y in 0..h {
        for x in 0..w {
            let pixel = *src.get_pixel(src_rect.x + x, src_rect.y + y);
            dst.put_pixel(dst_x + x, dst_y + y, pixel);
        }
    }
}

/// Copy a region into a new canvas of exactly that size.
pub fn crop(src: &RgbaImage, rect: Rect) -> Result<RgbaImage, AtlasError> {
    let mut out = allocate(rect.w, rect.h)?;
    copy_region(&mut out, src, rect.at_origin(), rect, FilterMode::Point);
    Ok(out)
}

/// Mirror a canvas left to right in place.
pub fn flip_horizontal(canvas: &mut RgbaImage) {
    imageops::flip_horizontal_in_place(canvas);
}
