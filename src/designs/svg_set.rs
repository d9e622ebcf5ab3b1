//! SVG series: ten hand-assembled vector marks, v1 through v10.
//!
//! All marks are composed on a 512×512 viewBox around center (256, 256).
//! Unlike the raster series these are resolution independent; the sampled
//! curves (lensing polygons, spiral dots) are emitted as explicit point
//! lists rather than path arcs.

use std::f64::consts::PI;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::Result;
use crate::geometry::{circle_points, polar};
use crate::svg::{rgba, Document};

use super::SVG_FILES;

const SIZE: u32 = 512;
const C: f64 = 256.0;

/// Lensing rings pulled slightly inward, denser toward the center.
fn v1_primordial_blackhole() -> Document {
    let mut doc = Document::new(SIZE);
    doc.background("#000000");
    doc.open_group(r#"fill="none" stroke="white" stroke-width="2""#);

    for i in 0..12 {
        let radius = 40.0 + i as f64 * 28.0;
        let alpha = 255 - i * 18;
        let distortion = (1.0 - (radius / 240.0).powi(2)).max(0.0);
        let r = radius * (1.0 - distortion * 0.15);

        let points = circle_points(C, C, r, 360);
        doc.polygon_outline(&points, &rgba(255, 255, 255, alpha as f64 / 255.0), 2.0);
    }

    doc.circle_fill(C, C, 8.0, "white");
    doc.circle_fill(C, C, 6.0, "white");
    doc.circle_fill(C, C, 4.0, "white");
    doc.close_group();
    doc
}

/// Dashed event horizon with infalling gravity lines.
fn v2_schwarzschild() -> Document {
    let mut doc = Document::new(SIZE);
    doc.background("#000000");
    doc.open_group(r#"fill="none" stroke="rgba(200,200,200,0.8)" stroke-width="2""#);

    for i in 0..60 {
        let rad = (i as f64 * 6.0).to_radians();
        let (x, y) = polar(C, C, 180.0, rad);
        let (ix, iy) = polar(C, C, 108.0, rad);
        doc.line_stroked(x, y, ix, iy, &rgba(200, 200, 200, 0.6));
    }

    doc.circle_fill(C, C, 6.0, "white");
    doc.dashed_circle(C, C, 180.0, &rgba(255, 255, 255, 0.9), 3.0, "8,4");
    doc.circle_stroked(C, C, 220.0, &rgba(100, 100, 100, 0.5));
    doc.close_group();
    doc
}

/// Tao begets one: layered center dot, near-invisible outer ring.
fn v3_tao_one() -> Document {
    let mut doc = Document::new(SIZE);
    doc.background("#000000");
    doc.open_group("");
    doc.comment("singularity");
    doc.circle_fill(C, C, 16.0, "white");
    doc.circle_fill(C, C, 12.0, "white");
    doc.circle_fill(C, C, 8.0, "white");
    doc.circle_fill(C, C, 4.0, "white");
    doc.comment("faint outer ring");
    doc.circle_stroked(C, C, 100.0, &rgba(150, 150, 150, 0.4));
    doc.close_group();
    doc
}

/// One begets two: dot plus two concentric rings.
fn v4_tao_two() -> Document {
    let mut doc = Document::new(SIZE);
    doc.background("#000000");
    doc.open_group(r#"fill="none" stroke="rgba(220,220,220,0.9)" stroke-width="3""#);
    doc.circle_plain(C, C, 80.0);
    doc.circle_plain(C, C, 140.0);
    doc.close_group();
    doc.open_group("");
    doc.circle_fill(C, C, 16.0, "white");
    doc.circle_fill(C, C, 10.0, "white");
    doc.circle_fill(C, C, 5.0, "white");
    doc.close_group();
    doc
}

/// Two begets three: dot, three rings and eight gravity lines.
fn v5_tao_three() -> Document {
    let mut doc = Document::new(SIZE);
    doc.background("#000000");
    doc.open_group(r#"fill="none" stroke="rgba(200,200,200,0.8)" stroke-width="2""#);
    for r in [70.0, 120.0, 170.0] {
        doc.circle_plain(C, C, r);
    }
    doc.close_group();

    doc.open_group(r#"stroke="rgba(100,100,100,0.6)" stroke-width="1""#);
    for angle in (0..360).step_by(45) {
        let rad = (angle as f64).to_radians();
        let (x1, y1) = polar(C, C, 30.0, rad);
        let (x2, y2) = polar(C, C, 200.0, rad);
        doc.line(x1, y1, x2, y2);
    }
    doc.close_group();

    doc.open_group("");
    doc.circle_fill(C, C, 12.0, "white");
    doc.circle_fill(C, C, 6.0, "white");
    doc.close_group();
    doc
}

/// Three begets all things: five fading rings, twelve gravity lines.
fn v6_tao_universe() -> Document {
    let mut doc = Document::new(SIZE);
    doc.background("#000000");
    doc.open_group(r#"fill="none" stroke="rgba(200,200,200,0.7)" stroke-width="2""#);
    for (i, r) in [50.0, 90.0, 130.0, 170.0, 210.0].into_iter().enumerate() {
        let gray = 220 - i as u8 * 25;
        doc.circle_stroked(C, C, r, &rgba(gray, gray, gray, 0.8));
    }
    doc.close_group();

    doc.open_group(r#"stroke="rgba(80,80,80,0.5)" stroke-width="1""#);
    for angle in (0..360).step_by(30) {
        let rad = (angle as f64).to_radians();
        let (x1, y1) = polar(C, C, 20.0, rad);
        let (x2, y2) = polar(C, C, 230.0, rad);
        doc.line(x1, y1, x2, y2);
    }
    doc.close_group();

    doc.open_group("");
    doc.circle_fill(C, C, 12.0, "white");
    doc.circle_fill(C, C, 6.0, "white");
    doc.close_group();
    doc
}

/// Polar grid: sixteen radial spokes over five concentric circles.
fn v7_riemann_geometry() -> Document {
    let mut doc = Document::new(SIZE);
    doc.background("#000000");
    doc.open_group(r#"fill="none" stroke="rgba(150,150,150,0.7)" stroke-width="1.5""#);

    for i in 0..16 {
        let rad = (i as f64 * 22.5).to_radians();
        let (x1, y1) = polar(C, C, 240.0, rad);
        let (x2, y2) = polar(C, C, 40.0, rad);
        doc.line(x1, y1, x2, y2);
    }

    for (i, r) in [60.0, 100.0, 140.0, 180.0, 220.0].into_iter().enumerate() {
        let gray = 180 - i as u8 * 25;
        doc.circle_stroked(C, C, r, &rgba(gray, gray, gray, 0.7));
    }
    doc.close_group();

    doc.open_group("");
    doc.circle_fill(C, C, 10.0, "white");
    doc.close_group();
    doc
}

/// Eight rings bending inward toward the singularity.
fn v8_primordial_singularity() -> Document {
    let mut doc = Document::new(SIZE);
    doc.background("#000000");
    doc.open_group(r#"fill="none" stroke="white" stroke-width="2""#);

    for thickness in 0..8 {
        let r = 120.0 + thickness as f64 * 8.0;
        let bend = 0.92 + thickness as f64 * 0.01;
        let points = circle_points(C, C, r * bend, 360);
        let alpha = 255 - thickness * 25;
        doc.polygon_outline(&points, &rgba(255, 255, 255, alpha as f64 / 255.0), 3.0);
    }
    doc.close_group();

    doc.open_group("");
    doc.circle_fill(C, C, 8.0, "white");
    doc.close_group();
    doc
}

/// Accretion disk as three spiral arms of fading dots.
fn v9_accretion_disk() -> Document {
    let mut doc = Document::new(SIZE);
    doc.background("#000000");
    doc.open_group(r#"fill="white""#);

    for arm in 0..3 {
        for t in 80..220 {
            let angle = t as f64 * 0.03 + arm as f64 * 2.0 * PI / 3.0;
            let r = t as f64 * 0.8;

            // Slight twist along the arm.
            let (x, y) = polar(C, C, r, angle + t as f64 * 0.005);

            let alpha = 1.0 - t as f64 / 220.0;
            let size = (4 - t / 60).max(1);
            doc.circle_fill(x, y, size as f64, &rgba(255, 255, 255, alpha));
        }
    }

    doc.circle_fill(C, C, 15.0, "white");
    doc.circle_fill(C, C, 10.0, "white");
    doc.circle_fill(C, C, 5.0, "white");
    doc.close_group();
    doc
}

/// Taiji with a black-hole center: yang disc solid, yin disc outlined.
fn v10_tao_blackhole() -> Document {
    let mut doc = Document::new(SIZE);
    doc.background("#000000");
    doc.comment("outer ring");
    doc.circle_outline(C, C, 200.0, &rgba(200, 200, 200, 0.8), 3.0);
    doc.comment("yang");
    doc.ellipse_fill(196.0, 256.0, 120.0, 120.0, "white");
    doc.circle_fill(196.0, 226.0, 30.0, "black");
    doc.comment("yin");
    doc.ellipse_outline(316.0, 256.0, 120.0, 120.0, "white", 3.0);
    doc.circle_fill(316.0, 286.0, 30.0, "white");
    doc.comment("singularity");
    doc.circle_fill(C, C, 12.0, "white");
    doc.circle_fill(C, C, 8.0, "white");
    doc.circle_fill(C, C, 4.0, "white");
    doc
}

/// Document builder for an SVG file of this series, by file name.
pub fn design(file: &str) -> Option<fn() -> Document> {
    match file {
        "v1-primordial-blackhole.svg" => Some(v1_primordial_blackhole),
        "v2-schwarzschild.svg" => Some(v2_schwarzschild),
        "v3-tao-one.svg" => Some(v3_tao_one),
        "v4-tao-two.svg" => Some(v4_tao_two),
        "v5-tao-three.svg" => Some(v5_tao_three),
        "v6-tao-universe.svg" => Some(v6_tao_universe),
        "v7-riemann-geometry.svg" => Some(v7_riemann_geometry),
        "v8-primordial-singularity.svg" => Some(v8_primordial_singularity),
        "v9-accretion-disk.svg" => Some(v9_accretion_disk),
        "v10-tao-blackhole.svg" => Some(v10_tao_blackhole),
        _ => None,
    }
}

/// Write the whole series into `out_dir`; returns the 10 written paths.
pub fn generate(out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(SVG_FILES.len());
    for file in SVG_FILES {
        let build = design(file).ok_or_else(|| crate::Error::UnknownDesign(file.to_string()))?;
        info!("writing {}", file);
        let path = out_dir.join(file);
        build().write(&path)?;
        written.push(path);
    }
    Ok(written)
}
