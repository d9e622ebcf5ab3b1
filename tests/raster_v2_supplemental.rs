//! Per-design structure checks for the second raster series.
//!
//! The format battery lives in `raster_v2_acceptance`; these assertions pin
//! down what makes each v2 design itself: symmetry, weight distribution and
//! the straight center ray.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use image::RgbaImage;
use tempfile::TempDir;

use yuanchu_assets::designs::{raster_set, raster_v2, RASTER_DESIGNS, RASTER_V2_DESIGNS};
use yuanchu_assets::raster::stats;

fn out_dir() -> &'static Path {
    static DIR: OnceLock<TempDir> = OnceLock::new();
    DIR.get_or_init(|| {
        let dir = TempDir::new().expect("temp dir");
        raster_v2::generate(dir.path()).expect("generate v2 series");
        dir
    })
    .path()
}

fn dark(name: &str) -> RgbaImage {
    let path: PathBuf = out_dir().join(format!("{name}_dark.png"));
    stats::load(&path).expect("decode png")
}

#[test]
fn v2_designs_differ_from_the_first_series() {
    let v1_dir = TempDir::new().expect("temp dir");
    raster_set::generate(v1_dir.path()).expect("generate first series");

    let v1_hashes: Vec<[u64; 4]> = RASTER_DESIGNS
        .iter()
        .map(|name| {
            let path = v1_dir.path().join(format!("{name}_dark.png"));
            stats::pixel_hash(&stats::load(&path).expect("decode png"))
        })
        .collect();

    for name in RASTER_V2_DESIGNS {
        let hash = stats::pixel_hash(&dark(name));
        assert!(
            !v1_hashes.contains(&hash),
            "{name} duplicates a first-series design"
        );
    }
}

#[test]
fn displacement_rings_balance_left_and_right() {
    let q = stats::quadrant_counts(&dark("v2a_gravitational_displacement"));
    let left = q[0] + q[2];
    let right = q[1] + q[3];
    let ratio = left.min(right) as f64 / left.max(right) as f64;
    assert!(ratio > 0.8, "left {left} vs right {right}");
}

#[test]
fn displacement_spans_both_ring_centers() {
    let img = dark("v2a_gravitational_displacement");
    // The two rings reach well past the center on either side.
    let mut left_reach = false;
    let mut right_reach = false;
    for (x, y, p) in img.enumerate_pixels() {
        if y < 200 || y > 312 || (p[0] <= 30 && p[1] <= 30 && p[2] <= 30) {
            continue;
        }
        if x < 176 {
            left_reach = true;
        }
        if x > 336 {
            right_reach = true;
        }
    }
    assert!(left_reach && right_reach, "rings do not extend past the overlap");
}

#[test]
fn throat_weights_the_bottom_half() {
    let q = stats::quadrant_counts(&dark("v2b_schwarzschild_throat"));
    assert!(
        q[2] + q[3] > q[0] + q[1],
        "throat should sit below center: {q:?}"
    );
}

#[test]
fn emergence_grows_upward_from_its_origin() {
    let q = stats::quadrant_counts(&dark("v2c_tao_emergence"));
    assert!(
        q[0] + q[1] > q[2] + q[3],
        "branches should rise above center: {q:?}"
    );
}

#[test]
fn diamonds_spread_across_all_quadrants() {
    let q = stats::quadrant_counts(&dark("v2d_light_cone_diamond"));
    let min = *q.iter().min().expect("quadrants");
    let max = *q.iter().max().expect("quadrants");
    assert!(min > 0, "empty quadrant: {q:?}");
    assert!(
        min as f64 / max as f64 > 0.5,
        "nested diamonds should be roughly four-fold balanced: {q:?}"
    );
}

#[test]
fn deflection_keeps_the_center_ray_straight() {
    let img = dark("v2e_gravitational_deflection");
    let mut lit_rows = 0;
    for y in 80..432u32 {
        if (248..265u32).any(|x| img.get_pixel(x, y)[0] > 30) {
            lit_rows += 1;
        }
    }
    assert!(lit_rows >= 300, "center ray broken: {lit_rows} lit rows");
}

#[test]
fn deflection_bends_the_outer_rays_inward() {
    let img = dark("v2e_gravitational_deflection");
    // At mid height the outermost ray has been pulled toward the mass, so
    // the lit extent is narrower there than near the top edge.
    let lit_extent = |y: u32| -> Option<(u32, u32)> {
        let xs: Vec<u32> = (0..512u32)
            .filter(|&x| {
                let p = img.get_pixel(x, y);
                p[0] > 30 || p[1] > 30 || p[2] > 30
            })
            .collect();
        xs.first().copied().zip(xs.last().copied())
    };
    let (top_lo, top_hi) = lit_extent(90).expect("top row unlit");
    let (mid_lo, mid_hi) = lit_extent(256).expect("middle row unlit");
    assert!(
        mid_hi - mid_lo < top_hi - top_lo,
        "rays should converge toward the middle: top {}..{}, mid {}..{}",
        top_lo,
        top_hi,
        mid_lo,
        mid_hi
    );
}
