//! Pixel statistics over decoded PNGs.
//!
//! These are the fixed statistics the acceptance suites assert thresholds
//! on: background/foreground counts, a coarse channel-sum hash for design
//! diversity, brightness centroid for centering, favicon-scale visibility
//! and edge-transition counts for complexity.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::error::Result;

/// Decode a PNG into an RGBA buffer.
pub fn load(path: &Path) -> Result<RgbaImage> {
    Ok(image::open(path)?.to_rgba8())
}

/// Lanczos-shrink to a square thumbnail, with the same tail clearing the
/// render pipeline applies.
pub fn shrink(img: &RgbaImage, size: u32) -> RgbaImage {
    super::downsample(img, size)
}

/// Pixels that differ from `bg` in any channel.
pub fn non_background_count(img: &RgbaImage, bg: Rgba<u8>) -> usize {
    img.pixels().filter(|p| **p != bg).count()
}

pub fn non_background_ratio(img: &RgbaImage, bg: Rgba<u8>) -> f64 {
    let total = (img.width() * img.height()) as f64;
    non_background_count(img, bg) as f64 / total
}

/// Pixels with any opacity at all.
pub fn opaque_count(img: &RgbaImage) -> usize {
    img.pixels().filter(|p| p[3] > 0).count()
}

/// Coarse per-channel sum over a 64×64 thumbnail.
///
/// Two designs colliding on all four sums are treated as visually identical
/// by the diversity checks.
pub fn pixel_hash(img: &RgbaImage) -> [u64; 4] {
    let small = shrink(img, 64);
    let mut sums = [0u64; 4];
    for p in small.pixels() {
        for (i, sum) in sums.iter_mut().enumerate() {
            *sum += p[i] as u64;
        }
    }
    sums
}

/// Brightness-weighted centroid of the lit pixels, or `None` for a blank
/// image.
pub fn brightness_centroid(img: &RgbaImage) -> Option<(f64, f64)> {
    let mut total_x = 0.0;
    let mut total_y = 0.0;
    let mut weight = 0.0;
    for (x, y, p) in img.enumerate_pixels() {
        if p[0] != 0 || p[1] != 0 || p[2] != 0 {
            let brightness = (p[0] as f64 + p[1] as f64 + p[2] as f64) / 3.0;
            total_x += x as f64 * brightness;
            total_y += y as f64 * brightness;
            weight += brightness;
        }
    }
    if weight == 0.0 {
        None
    } else {
        Some((total_x / weight, total_y / weight))
    }
}

/// Pixels whose brightest RGB channel exceeds `threshold`.
pub fn visible_count(img: &RgbaImage, threshold: u8) -> usize {
    img.pixels()
        .filter(|p| p[0].max(p[1]).max(p[2]) > threshold)
        .count()
}

pub fn max_brightness(img: &RgbaImage) -> u8 {
    img.pixels()
        .map(|p| p[0].max(p[1]).max(p[2]))
        .max()
        .unwrap_or(0)
}

/// Count bright/dark toggles scanning each row left to right.
pub fn row_transitions(img: &RgbaImage, brightness_threshold: f64) -> usize {
    let mut transitions = 0;
    for y in 0..img.height() {
        let mut prev_bright = false;
        for x in 0..img.width() {
            let p = img.get_pixel(x, y);
            let bright =
                (p[0] as f64 + p[1] as f64 + p[2] as f64) / 3.0 > brightness_threshold;
            if bright != prev_bright {
                transitions += 1;
            }
            prev_bright = bright;
        }
    }
    transitions
}

/// Lit-pixel counts per quadrant: `[top-left, top-right, bottom-left,
/// bottom-right]`.
pub fn quadrant_counts(img: &RgbaImage) -> [usize; 4] {
    let half_x = img.width() / 2;
    let half_y = img.height() / 2;
    let mut counts = [0usize; 4];
    for (x, y, p) in img.enumerate_pixels() {
        if p[0] != 0 || p[1] != 0 || p[2] != 0 {
            let idx = match (x >= half_x, y >= half_y) {
                (false, false) => 0,
                (true, false) => 1,
                (false, true) => 2,
                (true, true) => 3,
            };
            counts[idx] += 1;
        }
    }
    counts
}

/// Fraction of lit pixels within the outer border band of width
/// `frac * side`.
pub fn border_ratio(img: &RgbaImage, frac: f64) -> f64 {
    let w = img.width();
    let h = img.height();
    let border = (w as f64 * frac) as u32;
    let mut lit = 0usize;
    let mut total = 0usize;
    for (x, y, p) in img.enumerate_pixels() {
        if x < border || x >= w - border || y < border || y >= h - border {
            total += 1;
            if p[0] != 0 || p[1] != 0 || p[2] != 0 {
                lit += 1;
            }
        }
    }
    if total == 0 {
        0.0
    } else {
        lit as f64 / total as f64
    }
}

/// Agreement between the dark and transparent renderings of one design.
///
/// Both images are shrunk to 64×64; "content" means lit RGB on the dark
/// variant and alpha above 10 on the transparent variant. Returns the
/// fraction of thumbnail cells where the two agree.
pub fn variant_match_ratio(dark: &RgbaImage, transparent: &RgbaImage) -> f64 {
    let d = shrink(dark, 64);
    let t = shrink(transparent, 64);
    let mut matches = 0usize;
    let total = (d.width() * d.height()) as usize;
    for (pd, pt) in d.pixels().zip(t.pixels()) {
        let content_d = pd[0] != 0 || pd[1] != 0 || pd[2] != 0;
        let content_t = pt[3] > 10;
        if content_d == content_t {
            matches += 1;
        }
    }
    matches as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(side: u32, fill: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_pixel(side, side, fill)
    }

    #[test]
    fn counts_on_black_square_with_white_block() {
        let mut img = blank(16, Rgba([0, 0, 0, 255]));
        for y in 4..8 {
            for x in 4..8 {
                img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            }
        }
        assert_eq!(non_background_count(&img, Rgba([0, 0, 0, 255])), 16);
        assert_eq!(opaque_count(&img), 256);
        assert_eq!(visible_count(&img, 15), 16);
        assert_eq!(max_brightness(&img), 255);
    }

    #[test]
    fn centroid_of_single_dot() {
        let mut img = blank(16, Rgba([0, 0, 0, 255]));
        img.put_pixel(3, 9, Rgba([200, 200, 200, 255]));
        let (cx, cy) = brightness_centroid(&img).unwrap();
        assert_eq!((cx, cy), (3.0, 9.0));
    }

    #[test]
    fn centroid_of_blank_is_none() {
        let img = blank(8, Rgba([0, 0, 0, 255]));
        assert!(brightness_centroid(&img).is_none());
    }

    #[test]
    fn transitions_count_edges() {
        let mut img = blank(8, Rgba([0, 0, 0, 255]));
        for x in 2..5 {
            img.put_pixel(x, 0, Rgba([255, 255, 255, 255]));
        }
        // One row with a single bright run: enter + exit.
        assert_eq!(row_transitions(&img, 40.0), 2);
    }

    #[test]
    fn quadrants_partition_the_image() {
        let mut img = blank(8, Rgba([0, 0, 0, 255]));
        img.put_pixel(1, 1, Rgba([255, 255, 255, 255]));
        img.put_pixel(6, 6, Rgba([255, 255, 255, 255]));
        assert_eq!(quadrant_counts(&img), [1, 0, 0, 1]);
    }

    #[test]
    fn border_ratio_sees_only_the_band() {
        let mut img = blank(20, Rgba([0, 0, 0, 255]));
        img.put_pixel(10, 10, Rgba([255, 255, 255, 255]));
        assert_eq!(border_ratio(&img, 0.05), 0.0);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        assert!(border_ratio(&img, 0.05) > 0.0);
    }

    #[test]
    fn identical_variants_match_fully() {
        let mut dark = blank(64, Rgba([0, 0, 0, 255]));
        let mut trans = blank(64, Rgba([0, 0, 0, 0]));
        for y in 20..40 {
            for x in 20..40 {
                dark.put_pixel(x, y, Rgba([255, 255, 255, 255]));
                trans.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            }
        }
        assert!(variant_match_ratio(&dark, &trans) > 0.95);
    }
}
