//! Parallel batch processing
//!
//! Atlases share no state, so many textures can be loaded and rendered at
//! once. Results come back in input order, one per input.

use crate::cape::Cape;
use crate::config::RenderConfig;
use crate::error::AtlasError;
use crate::preview::Facing;
use crate::skin::Skin;
use image::RgbaImage;
use log::debug;
use rayon::prelude::*;
use std::path::Path;

/// Load many skin files in parallel.
pub fn load_skins<P>(paths: &[P]) -> Vec<Result<Skin, AtlasError>>
where
    P: AsRef<Path> + Sync,
{
    debug!("loading {} skins", paths.len());
    paths.par_iter().map(|path| Skin::load_png(path)).collect()
}

/// Load many cape files in parallel.
pub fn load_capes<P>(paths: &[P]) -> Vec<Result<Cape, AtlasError>>
where
    P: AsRef<Path> + Sync,
{
    debug!("loading {} capes", paths.len());
    paths.par_iter().map(|path| Cape::load_png(path)).collect()
}

/// Render one preview per skin in parallel.
pub fn render_previews(skins: &[Skin], facing: Facing, config: &RenderConfig) -> Vec<Result<RgbaImage, AtlasError>> {
    debug!("rendering {} {:?} previews at {}x{}", skins.len(), facing, config.preview.width, config.preview.height);
    skins.par_iter().map(|skin| skin.render_preview(facing, config)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::save_png;
    use image::Rgba;
    use tempfile::tempdir;

    #[test]
    fn test_load_skins_keeps_order_and_errors() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.png");
        let legacy = dir.path().join("legacy.png");
        let bad = dir.path().join("bad.png");
        save_png(&RgbaImage::from_pixel(64, 64, Rgba([1, 1, 1, 255])), &good).unwrap();
        save_png(&RgbaImage::from_pixel(64, 32, Rgba([2, 2, 2, 255])), &legacy).unwrap();
        save_png(&RgbaImage::from_pixel(60, 30, Rgba([3, 3, 3, 255])), &bad).unwrap();

        let results = load_skins(&[good, legacy, bad]);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().height(), 64);
        assert_eq!(results[1].as_ref().unwrap().height(), 64);
        assert!(matches!(results[2], Err(AtlasError::BadSize { width: 60, height: 30, .. })));
    }

    #[test]
    fn test_load_capes() {
        let dir = tempdir().unwrap();
        let legacy = dir.path().join("legacy.png");
        save_png(&RgbaImage::from_pixel(22, 17, Rgba([5, 5, 5, 255])), &legacy).unwrap();

        let results = load_capes(&[legacy.as_path(), Path::new("/nonexistent/cape.png")]);
        assert_eq!(results[0].as_ref().unwrap().width(), 64);
        assert!(matches!(results[1], Err(AtlasError::Decode(_))));
    }

    #[test]
    fn test_render_previews() {
        let skins: Vec<Skin> = (0..4)
            .map(|i| Skin::from_canvas(RgbaImage::from_pixel(64, 64, Rgba([i, i, i, 255]))).unwrap())
            .collect();
        let previews = render_previews(&skins, Facing::Front, &RenderConfig::default());
        assert_eq!(previews.len(), 4);
        for preview in previews {
            assert_eq!(preview.unwrap().dimensions(), (64, 128));
        }
    }
}
