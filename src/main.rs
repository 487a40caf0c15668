//! Command-line driver for the scansel engine
//!
//! ```bash
//! scansel merge scene.json --locations 12,13,40 --out sel.json --mask sel.png
//! scansel ratios scene.json --selection sel.json
//! scansel locations scene.json --selection sel.json
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scansel::config::ScanSelConfig;
use scansel::domain::{BeamSelection, LocationIndex, PixelSelection};
use scansel::engine::{FootprintSource, SelectionMerger};
use scansel::scene::Scene;

#[derive(Parser)]
#[command(name = "scansel")]
#[command(about = "Convert between scan-location and pixel selections", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fold selected locations into a pixel selection
    Merge {
        /// Scene file describing footprints and the context image
        scene: PathBuf,

        /// Comma separated location indices
        #[arg(long, value_delimiter = ',')]
        locations: Vec<LocationIndex>,

        /// Existing pixel selection to merge into
        #[arg(long)]
        prior: Option<PathBuf>,

        /// Image name to tag the result with
        #[arg(long)]
        image_name: Option<String>,

        /// Write the resulting selection as JSON
        #[arg(long)]
        out: Option<PathBuf>,

        /// Write the resulting selection as a grayscale mask image
        #[arg(long)]
        mask: Option<PathBuf>,

        /// Override the configured oversize radius
        #[arg(long)]
        radius: Option<i32>,

        /// Select whole vertex neighbourhoods, not only covered pixels
        #[arg(long)]
        oversized: bool,
    },

    /// Print channel ratios over a pixel selection
    Ratios {
        scene: PathBuf,

        #[arg(long)]
        selection: PathBuf,
    },

    /// Print the locations a pixel selection touches
    Locations {
        scene: PathBuf,

        #[arg(long)]
        selection: PathBuf,

        #[arg(long)]
        radius: Option<i32>,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = ScanSelConfig::load();

    match cli.command {
        Commands::Merge {
            scene,
            locations,
            prior,
            image_name,
            out,
            mask,
            radius,
            oversized,
        } => {
            let scene = Scene::load(&scene)?;
            let mut options = config.rasterize_options();
            if let Some(radius) = radius {
                options.oversize_radius = radius;
            }
            options.include_oversized |= oversized;

            let prior = prior.as_deref().map(read_selection).transpose()?;
            // A prior selection keeps its own image name unless one is given
            let image_name = match (image_name, &prior) {
                (Some(name), _) => Some(name),
                (None, None) => scene.image_name().map(str::to_string),
                (None, Some(_)) => None,
            };
            let beam = BeamSelection::new(scene.footprints.dataset_id(), locations);
            let merged = SelectionMerger::new(options)
                .merge_locations_into_pixel_selection(
                    &beam,
                    &scene.footprints,
                    scene.raster(),
                    prior.as_ref(),
                    image_name.as_deref(),
                )
                .context("Scene has no context image or raster to select on")?;

            println!(
                "{} locations -> {} pixels on '{}'",
                beam.len(),
                merged.len(),
                merged.image_name()
            );
            if let Some(out) = out {
                write_selection(&merged, &out)?;
            }
            if let Some(mask) = mask {
                scansel::capture::mask::save_mask(&merged, &mask)?;
            }
        }
        Commands::Ratios { scene, selection } => {
            let scene = Scene::load(&scene)?;
            let selection = read_selection(&selection)?;
            let channels = scene
                .channels()
                .context("Scene has no context image to read channels from")?;
            for ratio in config
                .ratio_analyzer()
                .average_ratios_all_pairs(&selection, channels)
            {
                match ratio.value {
                    Some(value) => println!("{}\t{}", ratio.label, value),
                    None => println!("{}\t-", ratio.label),
                }
            }
        }
        Commands::Locations {
            scene,
            selection,
            radius,
        } => {
            let scene = Scene::load(&scene)?;
            let selection = read_selection(&selection)?;
            let mut options = config.rasterize_options();
            if let Some(radius) = radius {
                options.oversize_radius = radius;
            }
            let beam = SelectionMerger::new(options).locations_for_pixels(&selection, &scene.footprints);
            let list: Vec<String> = beam.locations.iter().map(|l| l.to_string()).collect();
            println!("{}", list.join(","));
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }
    Ok(())
}

fn read_selection(path: &Path) -> Result<PixelSelection> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read selection {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid selection {}", path.display()))
}

fn write_selection(selection: &PixelSelection, path: &Path) -> Result<()> {
    let text = serde_json::to_string_pretty(selection)?;
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}
