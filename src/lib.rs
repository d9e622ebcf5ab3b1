//! YuanChu asset toolkit
//!
//! Procedural generation of the YuanChu brand-mark set (SVG and supersampled
//! PNG renderings) plus the static myth story pages, together with the pixel
//! statistics and HTML audit helpers the acceptance tests are built on.
//!
//! # Layout
//!
//! - [`svg`] — element-by-element SVG assembly
//! - [`raster`] — 2048×2048 RGBA canvas, drawing ops, Lanczos downsample
//! - [`designs`] — the three logo series and the generation manifest
//! - [`myths`] — the thirteen story pages and the timeline index
//! - [`validate`] — page audit used by the content tests
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> yuanchu_assets::Result<()> {
//! let out = Path::new("logo");
//! yuanchu_assets::designs::raster_set::generate(out)?;
//! yuanchu_assets::designs::svg_set::generate(out)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod geometry;
pub mod svg;

pub mod raster;

pub mod designs;

pub mod myths;

pub mod validate;
