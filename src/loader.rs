//! Image loading and pixel grid construction.

use std::path::Path;

use image::imageops::FilterType;
use image::DynamicImage;

/// A single RGB pixel sourced from the decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Row-major pixel matrix matching the (possibly resized) image dimensions.
/// Built once per run and read-only afterwards.
pub type PixelGrid = Vec<Vec<Pixel>>;

/// Errors that can occur while loading an image.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to load image '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// Compute the dimensions an image should be scaled to for a maximum width.
///
/// Returns `None` when the image already fits. Height is scaled
/// proportionally: `round(height * max_width / width)`, floored at 1.
pub fn fit_to_width(width: u32, height: u32, max_width: u32) -> Option<(u32, u32)> {
    if width <= max_width {
        return None;
    }
    let scaled = (height as f32 * (max_width as f32 / width as f32)).round() as u32;
    Some((max_width, scaled.max(1)))
}

/// Load an image from disk and convert it to a pixel grid, downscaling to
/// `max_width` columns when the source is wider.
pub fn load_image(path: &Path, max_width: Option<u32>) -> Result<PixelGrid, LoadError> {
    let img = image::open(path).map_err(|e| LoadError::Decode {
        path: path.display().to_string(),
        source: e,
    })?;

    let img = match max_width.and_then(|max| fit_to_width(img.width(), img.height(), max)) {
        Some((w, h)) => {
            log::debug!(
                "resizing {}x{} to {}x{}",
                img.width(),
                img.height(),
                w,
                h
            );
            img.resize_exact(w, h, FilterType::Triangle)
        }
        None => img,
    };

    Ok(to_grid(&img))
}

/// Flatten a decoded image into a row-major grid of RGB pixels.
pub fn to_grid(img: &DynamicImage) -> PixelGrid {
    let rgb = img.to_rgb8();
    let (w, h) = rgb.dimensions();
    let mut grid = Vec::with_capacity(h as usize);
    for y in 0..h {
        let mut row = Vec::with_capacity(w as usize);
        for x in 0..w {
            let p = rgb.get_pixel(x, y);
            row.push(Pixel {
                r: p[0],
                g: p[1],
                b: p[2],
            });
        }
        grid.push(row);
    }
    grid
}
