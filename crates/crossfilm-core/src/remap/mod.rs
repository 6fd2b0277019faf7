//! Pixel remapping through cross-processing curves
//!
//! Each RGBA pixel is mapped channel by channel through the tables built in
//! [`crate::curves`]; alpha is copied. Pixels are independent, so large
//! images are split into chunks and remapped on the rayon pool.


use image::{DynamicImage, Rgba, RgbaImage};
use rayon::prelude::*;

use crate::curves::CrossCurves;
use crate::models::CurveParams;
use crate::verbose_println;

/// Switch to parallel processing above this many pixels
pub(crate) const PARALLEL_THRESHOLD: usize = 100_000;

/// Pixels per parallel work item
const CHUNK_PIXELS: usize = 4096;

/// Map one pixel through the red, green and blue tables, keeping alpha.
#[inline]
pub fn remap_pixel(curves: &CrossCurves, pixel: Rgba<u8>) -> Rgba<u8> {
    let Rgba([r, g, b, a]) = pixel;
    let [r, g, b] = curves.map_rgb(r, g, b);
    Rgba([r, g, b, a])
}

/// Remap every pixel of an RGBA buffer in place.
///
/// Uses parallel processing for images above `PARALLEL_THRESHOLD` pixels.
/// The result does not depend on which path runs.
pub fn remap_rgba_in_place(image: &mut RgbaImage, curves: &CrossCurves) {
    let pixel_count = image.width() as usize * image.height() as usize;
    let data: &mut [u8] = image;

    if pixel_count >= PARALLEL_THRESHOLD {
        data.par_chunks_mut(CHUNK_PIXELS * 4)
            .for_each(|chunk| remap_chunk(chunk, curves));
    } else {
        remap_chunk(data, curves);
    }
}

fn remap_chunk(chunk: &mut [u8], curves: &CrossCurves) {
    for px in chunk.chunks_exact_mut(4) {
        px[0] = curves.red.get(px[0]);
        px[1] = curves.green.get(px[1]);
        px[2] = curves.blue.get(px[2]);
    }
}

/// Apply the cross-processing look to any decoded image.
///
/// The image is converted to 8-bit RGBA, curves are built once from
/// `params`, and every pixel is remapped.
pub fn cross_process(image: &DynamicImage, params: &CurveParams) -> RgbaImage {
    let curves = CrossCurves::from_params(params);
    verbose_println!(
        "[crossfilm] Cross processing {}x{} (midpoint {}, factor {})",
        image.width(),
        image.height(),
        params.midpoint,
        params.factor
    );

    let mut rgba = image.to_rgba8();
    remap_rgba_in_place(&mut rgba, &curves);
    rgba
}
