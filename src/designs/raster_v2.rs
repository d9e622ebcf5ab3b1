//! Second raster series: five concept marks, v2a through v2e.
//!
//! The series deliberately departs from the first set with non-circular
//! geometry, width gradients and asymmetric layouts: double lensed rings,
//! a Flamm-paraboloid throat section, a branching Tao structure, nested
//! causal diamonds and deflected parallel rays.

use std::path::{Path, PathBuf};

use log::info;

use crate::error::Result;
use crate::geometry::{flamm_z, Point};
use crate::raster::{
    render_pair, Canvas, CENTER, MEDIUM, NORMAL, SUPERSAMPLE, THICK, THIN, WHITE, white_a,
};

use super::RASTER_V2_DESIGNS;

/// Einstein-ring double image: two offset rings over a central singularity.
fn v2a_gravitational_displacement(c: &mut Canvas) {
    let offset = (SUPERSAMPLE as f64 * 0.06).trunc();
    let radius = (SUPERSAMPLE as f64 * 0.18).trunc();

    c.circle(CENTER - offset, CENTER, radius, white_a(200), NORMAL);
    c.circle(CENTER + offset, CENTER, radius, white_a(200), NORMAL);

    // Faint arc inside the vesica piscis overlap.
    let inner_r = (radius * 0.55).trunc();
    c.arc(CENTER, CENTER, inner_r, 210.0, 330.0, white_a(100), THIN);

    c.dot(CENTER, CENTER, 28.0, WHITE);
}

/// Section of Flamm's paraboloid: two curves meeting at the throat, with
/// horizontal embedding lines.
fn v2b_schwarzschild_throat(c: &mut Canvas) {
    let rs = SUPERSAMPLE as f64 * 0.04;
    let r_max = SUPERSAMPLE as f64 * 0.38;
    let n_points = 800;

    // r maps to the vertical axis (throat at the bottom), z to the
    // symmetric horizontal offset.
    let mut left: Vec<Point> = Vec::with_capacity(n_points);
    let mut right: Vec<Point> = Vec::with_capacity(n_points);

    for i in 0..n_points {
        let r = rs + (r_max - rs) * i as f64 / (n_points - 1) as f64;
        let z = flamm_z(rs, r);

        let y = CENTER + ((r_max * 0.6) - (r - rs) * 1.1).trunc();
        let x_offset = (z * 1.2).trunc();

        left.push((CENTER - x_offset, y));
        right.push((CENTER + x_offset, y));
    }

    c.polyline(&left, white_a(210), NORMAL);
    c.polyline(&right, white_a(210), NORMAL);

    // Horizontal reference lines for the flat embedding space.
    let throat_y = CENTER + (r_max * 0.6).trunc();
    for i in 0..4 {
        let y_line = throat_y - ((r_max * 0.8) * (i + 1) as f64 / 5.0).trunc();
        let r_at_y = rs + (throat_y - y_line) / 1.1;
        if r_at_y > rs {
            let z_at_y = flamm_z(rs, r_at_y) * 1.2;
            let half_w = z_at_y.trunc() + 60.0;
            let alpha = 60 + i * 10;
            c.line(
                CENTER - half_w,
                y_line,
                CENTER + half_w,
                y_line,
                white_a(alpha),
                THIN,
            );
        }
    }

    c.dot(CENTER, throat_y, 26.0, WHITE);
}

/// Tao begets one, two, three: a trunk arc splitting into two branches,
/// each splitting into three sub-arcs. Width decays with each generation.
fn v2c_tao_emergence(c: &mut Canvas) {
    // Origin sits 200px below center to balance the upward structure.
    let origin_y = CENTER + 200.0;

    c.dot(CENTER, origin_y, 30.0, WHITE);

    // "One": the trunk arc reaching upward.
    let r1_start = 70.0;
    let r1_end = 520.0;
    let base_angle = -90.0;
    let n = 600;
    let mut trunk: Vec<Point> = Vec::with_capacity(n);
    for i in 0..n {
        let frac = i as f64 / (n - 1) as f64;
        let r = r1_start + (r1_end - r1_start) * frac;
        let angle = (base_angle + frac * 12.0).to_radians();
        trunk.push((CENTER + r * angle.cos(), origin_y + r * angle.sin()));
    }
    c.polyline(&trunk, white_a(240), THICK);

    // "Two": two branches opening left and right from the trunk's end.
    let (end_x, end_y) = trunk[n - 1];
    let end_angle = base_angle + 12.0;

    let mut branches: Vec<Vec<Point>> = Vec::with_capacity(2);
    for sign in [-1.0, 1.0] {
        let r2_end = 320.0;
        let mut pts: Vec<Point> = Vec::with_capacity(500);
        for i in 0..500 {
            let frac = i as f64 / 499.0;
            let r = frac * r2_end;
            let spread = sign * (40.0 + frac * 30.0);
            let angle = (end_angle + spread).to_radians();
            pts.push((end_x + r * angle.cos(), end_y + r * angle.sin()));
        }
        c.polyline(&pts, white_a(200), MEDIUM);
        branches.push(pts);
    }

    // "Three": three sub-arcs off the end of each branch.
    for branch in &branches {
        let (bx, by) = branch[branch.len() - 1];
        let (bx2, by2) = branch[branch.len() - 40];
        let parent_angle = (by - by2).atan2(bx - bx2).to_degrees();

        for k in 0..3i32 {
            let spread = (k - 1) as f64 * 30.0;
            let r3_end = 220.0;
            let mut pts: Vec<Point> = Vec::with_capacity(400);
            for i in 0..400 {
                let frac = i as f64 / 399.0;
                let r = frac * r3_end;
                let angle = (parent_angle + spread + frac * 8.0).to_radians();
                pts.push((bx + r * angle.cos(), by + r * angle.sin()));
            }
            let alpha = 170 - (k - 1).abs() * 30;
            c.polyline(&pts, white_a(alpha), NORMAL);
        }
    }
}

/// Penrose-diagram diamonds converging on the singularity.
fn v2d_light_cone_diamond(c: &mut Canvas) {
    let radii = [550.0, 400.0, 260.0, 130.0];
    let rotations = [0.0, 10.0, 20.0, 30.0];
    let alphas = [120, 160, 200, 240];
    let widths = [THIN, THIN, NORMAL, NORMAL];

    for layer in 0..radii.len() {
        let base_rot = 45.0 + rotations[layer];
        let mut vertices: Vec<Point> = Vec::with_capacity(5);
        for corner in 0..4 {
            let angle = (base_rot + corner as f64 * 90.0).to_radians();
            vertices.push((
                CENTER + radii[layer] * angle.cos(),
                CENTER + radii[layer] * angle.sin(),
            ));
        }
        vertices.push(vertices[0]);

        c.polyline(&vertices, white_a(alphas[layer]), widths[layer]);
    }

    c.dot(CENTER, CENTER, 28.0, WHITE);
}

/// Parallel vertical rays deflected toward the central mass.
fn v2e_gravitational_deflection(c: &mut Canvas) {
    let offsets = [-480.0, -320.0, -160.0, 0.0, 160.0, 320.0, 480.0];
    let y_range = 750i64;
    let strength = 900.0;

    for x0_off in offsets {
        let x0 = CENTER + x0_off;
        let mut points: Vec<Point> = Vec::new();

        let y0 = CENTER as i64 - y_range;
        let y1 = CENTER as i64 + y_range;
        let mut y = y0;
        while y <= y1 {
            let dy = (y as f64) - CENTER;
            let dx = if x0_off == 0.0 {
                0.0
            } else {
                let dist_sq = x0_off * x0_off + dy * dy;
                let dist_pow = dist_sq.powf(0.75).max(1.0);
                -strength * x0_off / dist_pow
            };
            points.push((x0 + dx, y as f64));
            y += 2;
        }

        let alpha = if x0_off == 0.0 {
            240
        } else {
            (240 - (x0_off.abs() / 3.0) as i32).max(110)
        };
        let w = if x0_off == 0.0 { NORMAL } else { THIN };
        c.polyline(&points, white_a(alpha), w);
    }

    c.dot(CENTER, CENTER, 28.0, WHITE);
}

/// Drawing routine for a design of this series, by name.
pub fn design(name: &str) -> Option<fn(&mut Canvas)> {
    match name {
        "v2a_gravitational_displacement" => Some(v2a_gravitational_displacement),
        "v2b_schwarzschild_throat" => Some(v2b_schwarzschild_throat),
        "v2c_tao_emergence" => Some(v2c_tao_emergence),
        "v2d_light_cone_diamond" => Some(v2d_light_cone_diamond),
        "v2e_gravitational_deflection" => Some(v2e_gravitational_deflection),
        _ => None,
    }
}

/// Render the whole series into `out_dir`; returns the 10 written paths.
pub fn generate(out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(RASTER_V2_DESIGNS.len() * 2);
    for name in RASTER_V2_DESIGNS {
        let draw = design(name).ok_or_else(|| crate::Error::UnknownDesign(name.to_string()))?;
        info!("rendering {}", name);
        written.extend(render_pair(out_dir, name, draw)?);
    }
    Ok(written)
}
