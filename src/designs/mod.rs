//! The three brand-mark series and the generation manifest.
//!
//! Every design is a fixed, parameterless drawing routine; the registries
//! below are the single source of truth for series membership and file
//! naming. The manifest records a SHA-256 per written file so a rerun can
//! be diffed without opening the images.

pub mod raster_set;
pub mod raster_v2;
pub mod svg_set;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::Result;

/// Design names of the first raster series, in release order.
pub const RASTER_DESIGNS: [&str; 8] = [
    "v1_singularity",
    "v2_geodesic_convergence",
    "v3_spacetime_warp",
    "v4_tao_layers",
    "v5_broken_horizon",
    "v6_golden_spiral",
    "v7_lensing_rings",
    "v8_yuanchu_unity",
];

/// Design names of the second raster series.
pub const RASTER_V2_DESIGNS: [&str; 5] = [
    "v2a_gravitational_displacement",
    "v2b_schwarzschild_throat",
    "v2c_tao_emergence",
    "v2d_light_cone_diamond",
    "v2e_gravitational_deflection",
];

/// File names of the SVG series.
pub const SVG_FILES: [&str; 10] = [
    "v1-primordial-blackhole.svg",
    "v2-schwarzschild.svg",
    "v3-tao-one.svg",
    "v4-tao-two.svg",
    "v5-tao-three.svg",
    "v6-tao-universe.svg",
    "v7-riemann-geometry.svg",
    "v8-primordial-singularity.svg",
    "v9-accretion-disk.svg",
    "v10-tao-blackhole.svg",
];

/// One written asset in the manifest.
#[derive(Debug, Serialize)]
pub struct ManifestEntry {
    pub name: String,
    pub bytes: u64,
    pub sha256: String,
}

/// Digest listing of a generation run.
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub files: Vec<ManifestEntry>,
}

impl Manifest {
    /// Hash the given files in order.
    pub fn from_files(files: &[PathBuf]) -> Result<Self> {
        let mut entries = Vec::with_capacity(files.len());
        for path in files {
            let data = fs::read(path)?;
            let digest = Sha256::digest(&data);
            entries.push(ManifestEntry {
                name: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                bytes: data.len() as u64,
                sha256: hex::encode(digest),
            });
        }
        Ok(Manifest { files: entries })
    }

    /// Write `manifest.json` into `out_dir`; returns its path.
    pub fn write(&self, out_dir: &Path) -> Result<PathBuf> {
        let path = out_dir.join("manifest.json");
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(path)
    }
}

/// Hash `files` and write `manifest.json` into `out_dir` in one step.
pub fn write_manifest(out_dir: &Path, files: &[PathBuf]) -> Result<PathBuf> {
    Manifest::from_files(files)?.write(out_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registries_have_fixed_sizes() {
        assert_eq!(RASTER_DESIGNS.len(), 8);
        assert_eq!(RASTER_V2_DESIGNS.len(), 5);
        assert_eq!(SVG_FILES.len(), 10);
    }

    #[test]
    fn v2_names_do_not_collide_with_v1() {
        for name in RASTER_V2_DESIGNS {
            assert!(!RASTER_DESIGNS.contains(&name));
        }
    }

    #[test]
    fn manifest_hashes_files() -> Result<()> {
        let dir = std::env::temp_dir().join("yuanchu-manifest-test");
        fs::create_dir_all(&dir)?;
        let a = dir.join("a.bin");
        let b = dir.join("b.bin");
        fs::write(&a, b"alpha")?;
        fs::write(&b, b"beta")?;
        let manifest = Manifest::from_files(&[a, b])?;
        assert_eq!(manifest.files.len(), 2);
        assert_eq!(manifest.files[0].bytes, 5);
        assert_eq!(manifest.files[0].sha256.len(), 64);
        assert_ne!(manifest.files[0].sha256, manifest.files[1].sha256);
        Ok(())
    }
}
