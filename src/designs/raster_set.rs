//! First raster series: eight black-hole marks, v1 through v8.
//!
//! All coordinates are on the 2048 working canvas; stroke widths and dot
//! radii are supersampled pixels. Each design is a pure function of its
//! constants, rendered as a dark + transparent pair.

use std::f64::consts::PI;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::Result;
use crate::geometry::{gravity_offset, rotate, Point};
use crate::raster::{
    render_pair, Canvas, CENTER, NORMAL, SUPERSAMPLE, THIN, WHITE, white_a,
};

use super::RASTER_DESIGNS;

/// Singularity: one dot, one ring.
fn v1_singularity(c: &mut Canvas) {
    c.dot(CENTER, CENTER, 30.0, WHITE);
    c.circle(CENTER, CENTER, 400.0, white_a(210), NORMAL);
}

/// Geodesics arriving from seven directions, bending toward the center.
fn v2_geodesic_convergence(c: &mut Canvas) {
    let n_lines = 7;
    for i in 0..n_lines {
        let base_angle = i as f64 * (360.0 / n_lines as f64);
        let rad_base = base_angle.to_radians();

        let n_samples = 800;
        let mut points: Vec<Point> = Vec::with_capacity(n_samples);
        for t in 0..n_samples {
            let frac = t as f64 / (n_samples - 1) as f64;
            let r_outer = SUPERSAMPLE as f64 * 0.47;
            let r_inner = 40.0;
            let r = r_outer * (1.0 - frac) + r_inner * frac;

            // Bending grows toward the center; alternate direction per line.
            let bend = frac.powf(1.8) * 1.2;
            let direction = if i % 2 == 0 { 1.0 } else { -1.0 };
            let theta = rad_base + bend * direction;

            points.push((CENTER + r * theta.cos(), CENTER + r * theta.sin()));
        }

        let alpha = 180 + (40.0 * (i as f64 * PI / n_lines as f64).sin()) as i32;
        c.polyline(&points, white_a(alpha), THIN);
    }

    c.dot(CENTER, CENTER, 28.0, WHITE);
}

/// A 7×7 floating grid warped by a central gravity well.
fn v3_spacetime_warp(c: &mut Canvas) {
    let n_lines = 7;
    let margin = SUPERSAMPLE as f64 * 0.12;
    let usable = SUPERSAMPLE as f64 - 2.0 * margin;
    let spacing = usable / (n_lines + 1) as f64;
    let strength = 220.0;
    let sigma = 300.0;

    for i in 1..=n_lines {
        let base_x = margin + spacing * i as f64;
        let mut points: Vec<Point> = Vec::with_capacity(600);
        for t in 0..600 {
            let y = margin + usable * t as f64 / 599.0;
            let (ox, oy) = gravity_offset(base_x, y, CENTER, CENTER, strength, sigma);
            points.push((base_x + ox, y + oy));
        }
        let dist_c = (base_x - CENTER).abs();
        let alpha = (230 - (dist_c / 4.0) as i32).max(100);
        c.polyline(&points, white_a(alpha), THIN);
    }

    for i in 1..=n_lines {
        let base_y = margin + spacing * i as f64;
        let mut points: Vec<Point> = Vec::with_capacity(600);
        for t in 0..600 {
            let x = margin + usable * t as f64 / 599.0;
            let (ox, oy) = gravity_offset(x, base_y, CENTER, CENTER, strength, sigma);
            points.push((x + ox, base_y + oy));
        }
        let dist_c = (base_y - CENTER).abs();
        let alpha = (230 - (dist_c / 4.0) as i32).max(100);
        c.polyline(&points, white_a(alpha), THIN);
    }

    c.dot(CENTER, CENTER, 24.0, WHITE);
}

/// Tao begets one, two, three: dot, then 1/2/3 arcs radiating outward.
fn v4_tao_layers(c: &mut Canvas) {
    c.dot(CENTER, CENTER, 28.0, WHITE);

    c.arc(CENTER, CENTER, 240.0, 190.0, 490.0, white_a(230), NORMAL);

    c.arc(CENTER, CENTER, 420.0, 20.0, 150.0, white_a(190), NORMAL);
    c.arc(CENTER, CENTER, 420.0, 200.0, 330.0, white_a(190), NORMAL);

    c.arc(CENTER, CENTER, 600.0, 350.0, 440.0, white_a(140), NORMAL);
    c.arc(CENTER, CENTER, 600.0, 120.0, 210.0, white_a(140), NORMAL);
    c.arc(CENTER, CENTER, 600.0, 230.0, 320.0, white_a(140), NORMAL);
}

/// Incomplete horizon with an inner offset arc.
fn v5_broken_horizon(c: &mut Canvas) {
    c.dot(CENTER, CENTER, 28.0, WHITE);
    c.arc(CENTER, CENTER, 420.0, 50.0, 330.0, white_a(220), NORMAL);
    c.arc(CENTER, CENTER, 260.0, 200.0, 10.0, white_a(150), THIN);
}

/// Three-armed Archimedean spiral converging on the origin.
fn v6_golden_spiral(c: &mut Canvas) {
    let n_arms = 3;
    let max_r = SUPERSAMPLE as f64 * 0.44;

    for arm in 0..n_arms {
        let offset = arm as f64 * (2.0 * PI / n_arms as f64);
        let mut points: Vec<Point> = Vec::new();
        for t in 0..2000 {
            let theta = t as f64 * 0.005 + offset;
            let r = 30.0 + (max_r - 30.0) * (theta - offset) / (2.0 * PI * 2.5);
            if r > max_r {
                break;
            }
            if r < 30.0 {
                continue;
            }
            points.push((CENTER + r * theta.cos(), CENTER + r * theta.sin()));
        }

        if points.len() > 1 {
            let alpha = 210 - arm * 30;
            c.polyline(&points, white_a(alpha), THIN);
        }
    }

    c.dot(CENTER, CENTER, 26.0, WHITE);
}

/// Concentric rings with progressive eccentricity and rotation.
fn v7_lensing_rings(c: &mut Canvas) {
    let n_rings = 5;
    for i in 0..n_rings {
        // Outer first so inner rings overwrite at crossings.
        let layer = n_rings - 1 - i;
        let frac = (layer + 1) as f64 / n_rings as f64;
        let base_r = 160.0 + layer as f64 * 100.0;

        let ecc = 1.0 + 0.5 * (1.0 - frac);
        let rx = (base_r * ecc).trunc();
        let ry = (base_r / ecc).trunc();

        let rot_rad = (layer as f64 * 30.0).to_radians();

        let mut points: Vec<Point> = Vec::with_capacity(901);
        for t in 0..900 {
            let theta = 2.0 * PI * t as f64 / 900.0;
            let (x, y) = rotate(rx * theta.cos(), ry * theta.sin(), rot_rad);
            points.push((CENTER + x, CENTER + y));
        }
        points.push(points[0]);

        let alpha = 230 - layer as i32 * 30;
        // NORMAL, not THIN: thinner strokes wash out at favicon sizes.
        c.polyline(&points, white_a(alpha), NORMAL);
    }

    c.dot(CENTER, CENTER, 32.0, WHITE);
}

/// Synthesis mark: singularity, broken horizon and a sweeping geodesic.
fn v8_yuanchu_unity(c: &mut Canvas) {
    c.dot(CENTER, CENTER, 28.0, WHITE);

    c.arc(CENTER, CENTER, 380.0, 40.0, 300.0, white_a(220), NORMAL);

    let mut points: Vec<Point> = Vec::with_capacity(1000);
    for t in 0..1000 {
        let frac = t as f64 / 999.0;
        let r = SUPERSAMPLE as f64 * 0.46 * (1.0 - frac * 0.8);
        let theta = 310f64.to_radians() + frac * PI * 0.8;
        let curve = (frac * PI).sin() * 0.35;
        points.push((
            CENTER + r * (theta + curve).cos(),
            CENTER + r * (theta + curve).sin(),
        ));
    }
    c.polyline(&points, white_a(170), THIN);

    c.arc(CENTER, CENTER, 580.0, 150.0, 250.0, white_a(110), THIN);
}

/// Drawing routine for a design of this series, by name.
pub fn design(name: &str) -> Option<fn(&mut Canvas)> {
    match name {
        "v1_singularity" => Some(v1_singularity),
        "v2_geodesic_convergence" => Some(v2_geodesic_convergence),
        "v3_spacetime_warp" => Some(v3_spacetime_warp),
        "v4_tao_layers" => Some(v4_tao_layers),
        "v5_broken_horizon" => Some(v5_broken_horizon),
        "v6_golden_spiral" => Some(v6_golden_spiral),
        "v7_lensing_rings" => Some(v7_lensing_rings),
        "v8_yuanchu_unity" => Some(v8_yuanchu_unity),
        _ => None,
    }
}

/// Render the whole series into `out_dir`; returns the 16 written paths.
pub fn generate(out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(RASTER_DESIGNS.len() * 2);
    for name in RASTER_DESIGNS {
        let draw = design(name).ok_or_else(|| crate::Error::UnknownDesign(name.to_string()))?;
        info!("rendering {}", name);
        written.extend(render_pair(out_dir, name, draw)?);
    }
    Ok(written)
}
