//! Acceptance suite for the SVG mark series.
//!
//! The marks are plain textual XML, so the checks are string level: the
//! shared document wrapper, the black backdrop, and the element counts that
//! define each design.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use rstest::rstest;
use tempfile::TempDir;

use yuanchu_assets::designs::{svg_set, SVG_FILES};

fn out_dir() -> &'static Path {
    static DIR: OnceLock<TempDir> = OnceLock::new();
    DIR.get_or_init(|| {
        let dir = TempDir::new().expect("temp dir");
        svg_set::generate(dir.path()).expect("generate svg series");
        dir
    })
    .path()
}

fn source(file: &str) -> String {
    fs::read_to_string(out_dir().join(file)).expect("read svg")
}

#[test]
fn all_ten_files_are_written() {
    for file in SVG_FILES {
        let path = out_dir().join(file);
        assert!(path.exists(), "{file} missing");
        assert!(fs::metadata(&path).expect("stat").len() > 200, "{file} empty");
    }
}

#[rstest]
fn document_wrapper_is_uniform(
    #[values(
        "v1-primordial-blackhole.svg",
        "v2-schwarzschild.svg",
        "v3-tao-one.svg",
        "v4-tao-two.svg",
        "v5-tao-three.svg",
        "v6-tao-universe.svg",
        "v7-riemann-geometry.svg",
        "v8-primordial-singularity.svg",
        "v9-accretion-disk.svg",
        "v10-tao-blackhole.svg"
    )]
    file: &str,
) {
    let xml = source(file);
    assert!(xml.starts_with("<?xml version=\"1.0\""), "{file}: prolog");
    assert!(xml.contains("xmlns=\"http://www.w3.org/2000/svg\""), "{file}: xmlns");
    assert!(xml.contains("viewBox=\"0 0 512 512\""), "{file}: viewBox");
    assert!(xml.trim_end().ends_with("</svg>"), "{file}: close tag");
    assert!(
        xml.contains(r##"<rect width="100%" height="100%" fill="#000000"/>"##),
        "{file}: black backdrop"
    );
}

#[test]
fn lensing_rings_draw_twelve_polygons() {
    let xml = source("v1-primordial-blackhole.svg");
    assert_eq!(xml.matches("<polygon").count(), 12);
    assert_eq!(xml.matches(r#"fill="white""#).count(), 3);
}

#[test]
fn schwarzschild_has_infall_lines_and_dashed_horizon() {
    let xml = source("v2-schwarzschild.svg");
    assert_eq!(xml.matches("<line").count(), 60);
    assert!(xml.contains(r#"r="180" fill="none" stroke="rgba(255,255,255,0.9)" stroke-width="3" stroke-dasharray="8,4""#));
    assert!(xml.contains(r#"r="220""#));
}

#[test]
fn tao_sequence_scales_its_ring_count() {
    // One, two, three, all things: 1, 2, 3 and 5 rings around the dot.
    assert_eq!(source("v3-tao-one.svg").matches(r#"fill="none""#).count(), 1);
    assert_eq!(source("v4-tao-two.svg").matches(r#"<circle cx="256" cy="256" r="80"/>"#).count(), 1);
    assert_eq!(source("v4-tao-two.svg").matches(r#"<circle cx="256" cy="256" r="140"/>"#).count(), 1);
    assert_eq!(source("v5-tao-three.svg").matches("<line").count(), 8);
    let universe = source("v6-tao-universe.svg");
    // Five fading rings plus the two stacked center dots.
    assert_eq!(universe.matches("<circle").count(), 7);
    assert_eq!(universe.matches("<line").count(), 12);
}

#[test]
fn riemann_grid_has_sixteen_spokes_over_five_rings() {
    let xml = source("v7-riemann-geometry.svg");
    assert_eq!(xml.matches("<line").count(), 16);
    for r in ["60", "100", "140", "180", "220"] {
        assert!(xml.contains(&format!(r#"r="{r}""#)), "ring r={r} missing");
    }
}

#[test]
fn singularity_rings_fade_outward() {
    let xml = source("v8-primordial-singularity.svg");
    assert_eq!(xml.matches("<polygon").count(), 8);
    // Innermost ring fully opaque, outermost faded.
    assert!(xml.contains("rgba(255,255,255,1)"));
    assert!(xml.contains("rgba(255,255,255,0.314)"));
}

#[test]
fn accretion_disk_is_dotted_spiral_arms() {
    let xml = source("v9-accretion-disk.svg");
    // 3 arms x 140 samples, plus the three stacked center dots.
    assert_eq!(xml.matches("<circle").count(), 3 * 140 + 3);
}

#[test]
fn taiji_mixes_solid_and_outlined_discs() {
    let xml = source("v10-tao-blackhole.svg");
    assert_eq!(xml.matches("<ellipse").count(), 2);
    assert!(xml.contains(r#"fill="black""#));
    assert!(xml.contains(r#"<ellipse cx="196" cy="256" rx="120" ry="120" fill="white"/>"#));
}
