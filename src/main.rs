//! yuanchu-assets CLI - regenerate the brand marks and the myth pages.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use yuanchu_assets::designs;
use yuanchu_assets::myths;

#[derive(Parser)]
#[command(name = "yuanchu-assets")]
#[command(about = "Generate the yuanchu.ai logo series and myth story pages")]
#[command(version)]
struct Cli {
    /// Output directory (created if missing)
    #[arg(short, long, default_value = "out")]
    out_dir: PathBuf,

    /// Also write a manifest.json with per-file SHA-256 digests
    #[arg(long)]
    manifest: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// The 10 SVG marks
    Svg,
    /// The first raster series: 8 designs × dark/transparent
    Raster,
    /// The second raster series: 5 designs × dark/transparent
    RasterV2,
    /// The 13 story pages plus the timeline index
    Myths,
    /// Everything
    All,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    fs::create_dir_all(&cli.out_dir)?;

    let mut written = Vec::new();
    match cli.command {
        Commands::Svg => {
            written.extend(designs::svg_set::generate(&cli.out_dir)?);
        }
        Commands::Raster => {
            written.extend(designs::raster_set::generate(&cli.out_dir)?);
        }
        Commands::RasterV2 => {
            written.extend(designs::raster_v2::generate(&cli.out_dir)?);
        }
        Commands::Myths => {
            written.extend(myths::generate(&cli.out_dir)?);
        }
        Commands::All => {
            written.extend(designs::svg_set::generate(&cli.out_dir)?);
            written.extend(designs::raster_set::generate(&cli.out_dir)?);
            written.extend(designs::raster_v2::generate(&cli.out_dir)?);
            written.extend(myths::generate(&cli.out_dir)?);
        }
    }

    for path in &written {
        println!("  {}", path.display());
    }
    println!("Done! {} files in {}", written.len(), cli.out_dir.display());

    if cli.manifest {
        let path = designs::write_manifest(&cli.out_dir, &written)?;
        println!("Manifest: {}", path.display());
    }

    Ok(())
}
