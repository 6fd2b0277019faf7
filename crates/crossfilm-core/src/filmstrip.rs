//! Filmstrip border compositing
//!
//! Frames an image between two film-edge strips so the result looks like a
//! frame cut from a roll of film.

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};

use crate::assets;
use crate::error::FilterError;
use crate::verbose_println;

/// Embedded border drawn on the left side.
pub const LEFT_STRIP_ASSET: &str = "strip_left.png";

/// Embedded border drawn on the right side.
pub const RIGHT_STRIP_ASSET: &str = "strip_right.png";

/// Add the embedded filmstrip borders to both sides of `source`.
pub fn filmstrip(source: &RgbaImage) -> Result<RgbaImage, FilterError> {
    let left = assets::decode_asset(LEFT_STRIP_ASSET)?;
    let right = assets::decode_asset(RIGHT_STRIP_ASSET)?;
    compose_filmstrip(source, &left, &right)
}

/// Place `source` between `left` and `right` on a new transparent canvas.
///
/// Both borders are scaled to the source height, keeping their aspect ratio.
/// The canvas is `2 * left_width + source_width` wide: the left border sits at
/// x = 0, the source at x = left_width, and the right border is flush with
/// the right edge. Pasting replaces pixels rather than blending them.
pub fn compose_filmstrip(
    source: &RgbaImage,
    left: &DynamicImage,
    right: &DynamicImage,
) -> Result<RgbaImage, FilterError> {
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return Err(FilterError::EmptyImage { width, height });
    }

    let left = fit_to_height(left, height)?;
    let right = fit_to_height(right, height)?;
    let border_width = left.width();

    let canvas_width = 2 * border_width + width;
    let mut canvas = RgbaImage::from_pixel(canvas_width, height, Rgba([0, 0, 0, 0]));

    verbose_println!(
        "[crossfilm] Filmstrip canvas {}x{} (borders {}px / {}px)",
        canvas_width,
        height,
        border_width,
        right.width()
    );

    imageops::replace(&mut canvas, source, i64::from(border_width), 0);
    imageops::replace(&mut canvas, &left, 0, 0);
    let right_x = i64::from(canvas_width) - i64::from(right.width());
    imageops::replace(&mut canvas, &right, right_x, 0);

    Ok(canvas)
}

/// Resize `strip` to `height` keeping its aspect ratio (Lanczos3).
fn fit_to_height(strip: &DynamicImage, height: u32) -> Result<RgbaImage, FilterError> {
    let (w, h) = (strip.width(), strip.height());
    if w == 0 || h == 0 {
        return Err(FilterError::EmptyImage {
            width: w,
            height: h,
        });
    }

    let rgba = strip.to_rgba8();
    if h == height {
        return Ok(rgba);
    }

    let scaled = (f64::from(w) * f64::from(height) / f64::from(h)).round();
    let new_width = (scaled as u32).max(1);
    Ok(imageops::resize(&rgba, new_width, height, FilterType::Lanczos3))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(color))
    }

    #[test]
    fn test_layout_with_same_height_borders() {
        let source = solid(10, 6, [200, 0, 0, 255]);
        let left = DynamicImage::ImageRgba8(solid(3, 6, [0, 200, 0, 255]));
        let right = DynamicImage::ImageRgba8(solid(3, 6, [0, 0, 200, 255]));

        let out = compose_filmstrip(&source, &left, &right).unwrap();
        assert_eq!(out.dimensions(), (16, 6));

        for y in 0..6 {
            for x in 0..3 {
                assert_eq!(out.get_pixel(x, y), &Rgba([0, 200, 0, 255]));
            }
            for x in 3..13 {
                assert_eq!(out.get_pixel(x, y), &Rgba([200, 0, 0, 255]));
            }
            for x in 13..16 {
                assert_eq!(out.get_pixel(x, y), &Rgba([0, 0, 200, 255]));
            }
        }
    }

    #[test]
    fn test_borders_scaled_to_source_height() {
        let source = solid(20, 40, [1, 2, 3, 255]);
        // 5x10 scales by 4 to 20x40
        let left = DynamicImage::ImageRgba8(solid(5, 10, [9, 9, 9, 255]));
        let right = DynamicImage::ImageRgba8(solid(5, 10, [7, 7, 7, 255]));

        let out = compose_filmstrip(&source, &left, &right).unwrap();
        assert_eq!(out.dimensions(), (2 * 20 + 20, 40));
        assert_eq!(out.get_pixel(20, 20), &Rgba([1, 2, 3, 255]));
        assert_eq!(out.get_pixel(59, 39), &Rgba([7, 7, 7, 255]));
    }

    #[test]
    fn test_narrow_right_border_leaves_transparent_gap() {
        let source = solid(4, 2, [255, 255, 255, 255]);
        let left = DynamicImage::ImageRgba8(solid(3, 2, [10, 10, 10, 255]));
        let right = DynamicImage::ImageRgba8(solid(1, 2, [20, 20, 20, 255]));

        let out = compose_filmstrip(&source, &left, &right).unwrap();
        assert_eq!(out.dimensions(), (10, 2));
        // Canvas width follows the left border; the gap before the right one
        // keeps the transparent background
        assert_eq!(out.get_pixel(7, 0), &Rgba([0, 0, 0, 0]));
        assert_eq!(out.get_pixel(8, 0), &Rgba([0, 0, 0, 0]));
        assert_eq!(out.get_pixel(9, 0), &Rgba([20, 20, 20, 255]));
    }

    #[test]
    fn test_paste_replaces_instead_of_blending() {
        let source = solid(2, 2, [100, 100, 100, 0]);
        let left = DynamicImage::ImageRgba8(solid(1, 2, [0, 0, 0, 255]));
        let right = left.clone();

        let out = compose_filmstrip(&source, &left, &right).unwrap();
        assert_eq!(out.get_pixel(1, 0), &Rgba([100, 100, 100, 0]));
    }

    #[test]
    fn test_empty_source_is_rejected() {
        let left = DynamicImage::ImageRgba8(solid(1, 1, [0, 0, 0, 255]));
        let err = compose_filmstrip(&RgbaImage::new(0, 5), &left, &left).unwrap_err();
        assert!(matches!(err, FilterError::EmptyImage { width: 0, height: 5 }));
    }

    #[test]
    fn test_embedded_filmstrip() {
        let source = solid(30, 50, [128, 64, 32, 255]);
        let out = filmstrip(&source).unwrap();
        assert_eq!(out.height(), 50);
        assert!(out.width() > 30);
        let border = (out.width() - 30) / 2;
        assert_eq!(out.get_pixel(border, 0), &Rgba([128, 64, 32, 255]));
        assert_eq!(out.get_pixel(border + 29, 49), &Rgba([128, 64, 32, 255]));
    }
}
