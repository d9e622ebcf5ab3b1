//! Supersampled raster pipeline.
//!
//! Every raster design is drawn with hard edges on a 2048×2048 RGBA canvas
//! and Lanczos-downsampled 4× to the 512×512 deliverable; the downsample is
//! what produces the anti-aliased final strokes. Each design is rendered
//! twice, once on opaque black and once on a fully transparent background.

pub mod draw;
pub mod stats;

use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use log::debug;

use crate::error::Result;

/// Side length of the working canvas.
pub const SUPERSAMPLE: u32 = 2048;
/// Side length of the written PNG.
pub const OUTPUT: u32 = 512;
/// Canvas center coordinate.
pub const CENTER: f64 = (SUPERSAMPLE / 2) as f64;

// Stroke widths in supersampled pixels (~0.25× after downsampling).
pub const THIN: f64 = 5.0;
pub const NORMAL: f64 = 7.0;
pub const MEDIUM: f64 = 10.0;
pub const THICK: f64 = 14.0;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Translucent white; `alpha` outside `0..=255` is clamped.
pub fn white_a(alpha: i32) -> Rgba<u8> {
    Rgba([255, 255, 255, alpha.clamp(0, 255) as u8])
}

/// Background variant of a rendered design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Dark,
    Transparent,
}

impl Background {
    pub fn fill(self) -> Rgba<u8> {
        match self {
            Background::Dark => BLACK,
            Background::Transparent => CLEAR,
        }
    }

    /// File-name suffix for this variant.
    pub fn suffix(self) -> &'static str {
        match self {
            Background::Dark => "dark",
            Background::Transparent => "transparent",
        }
    }

    pub fn both() -> [Background; 2] {
        [Background::Dark, Background::Transparent]
    }
}

/// The in-memory working canvas.
///
/// Pixel writes replace the stored value outright (no source-over blending);
/// translucent strokes only mix with the background during the downsample.
pub struct Canvas {
    img: RgbaImage,
}

impl Canvas {
    pub fn new(bg: Background) -> Self {
        Self {
            img: RgbaImage::from_pixel(SUPERSAMPLE, SUPERSAMPLE, bg.fill()),
        }
    }

    pub(crate) fn put(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < SUPERSAMPLE && (y as u32) < SUPERSAMPLE {
            self.img.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Downsample to the deliverable size.
    pub fn into_output(self) -> RgbaImage {
        downsample(&self.img, OUTPUT)
    }
}

/// Lanczos downsample to a square, one axis per pass with an 8-bit
/// intermediate.
///
/// Channel values of 10 or less in the result are side-lobe tails of the
/// filter, not stroke coverage, and are cleared. The faintest strokes then
/// keep the same footprint on opaque black as on a transparent background
/// instead of trailing a wider lit skirt on the dark variant.
pub(crate) fn downsample(img: &RgbaImage, size: u32) -> RgbaImage {
    let columns = imageops::resize(img, size, img.height(), FilterType::Lanczos3);
    let mut out = imageops::resize(&columns, size, size, FilterType::Lanczos3);
    for p in out.pixels_mut() {
        for channel in p.0.iter_mut() {
            if *channel <= 10 {
                *channel = 0;
            }
        }
    }
    out
}

/// Render one design as its dark + transparent pair and write both PNGs.
///
/// Returns the two written paths, dark first.
pub fn render_pair<F>(out_dir: &Path, name: &str, draw: F) -> Result<Vec<PathBuf>>
where
    F: Fn(&mut Canvas),
{
    let mut written = Vec::with_capacity(2);
    for bg in Background::both() {
        let mut canvas = Canvas::new(bg);
        draw(&mut canvas);
        let path = out_dir.join(format!("{}_{}.png", name, bg.suffix()));
        canvas.into_output().save(&path)?;
        debug!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
