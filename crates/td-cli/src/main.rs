//! tiledungeon: tile-bag dungeon generator
//!
//! Main entry point. Generates a dungeon, lists every placement and prints
//! the route from the start tile to a target tile.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use log::info;

use td_core::{
    Dungeon, GenerationConfig, PlacedTile, PlacementSink, TileCatalog, TileId, generate_dungeon,
};

/// Tile-bag dungeon generator
#[derive(Parser, Debug)]
#[command(name = "tiledungeon")]
#[command(author, version, about = "tiledungeon - Lay out a dungeon from a bag of tiles", long_about = None)]
struct Args {
    /// Random seed (picked from entropy when omitted)
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Number of corner tiles
    #[arg(long = "corner")]
    corner: Option<usize>,

    /// Number of straight tiles
    #[arg(long = "straight")]
    straight: Option<usize>,

    /// Number of cross tiles
    #[arg(long = "cross")]
    cross: Option<usize>,

    /// JSON generation config; flags override its values
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// JSON connector catalog replacing the built-in templates
    #[arg(long = "catalog")]
    catalog: Option<PathBuf>,

    /// Fail when a cap cannot face exactly one connector
    #[arg(long = "strict-capping")]
    strict_capping: bool,

    /// Route target tile id (defaults to the End tile)
    #[arg(short = 't', long = "to")]
    to: Option<usize>,

    /// Print the finished dungeon as JSON instead of text
    #[arg(long = "json")]
    json: bool,

    /// Log every placement decision
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    fn generation_config(&self) -> anyhow::Result<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                GenerationConfig::from_json(&text)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => GenerationConfig::default(),
        };

        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(corner) = self.corner {
            config.counts.corner = corner;
        }
        if let Some(straight) = self.straight {
            config.counts.straight = straight;
        }
        if let Some(cross) = self.cross {
            config.counts.cross = cross;
        }
        config.strict_capping |= self.strict_capping;
        Ok(config)
    }

    fn catalog(&self) -> anyhow::Result<TileCatalog> {
        let Some(path) = &self.catalog else {
            return Ok(TileCatalog::standard());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        TileCatalog::from_json(&text).with_context(|| format!("parsing catalog {}", path.display()))
    }
}

fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use simplelog::LevelFilter::{Debug, Info, Off};
    simplelog::TermLogger::init(
        if verbose { Debug } else { Info },
        simplelog::ConfigBuilder::new()
            .set_target_level(Off)
            .set_location_level(Off)
            .build(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

fn describe(tile: &PlacedTile) -> String {
    format!(
        "{:>4} {} {:<8} at ({:>3}, {:>3}) facing {}",
        tile.id.to_string(),
        tile.kind.glyph(),
        tile.kind.to_string(),
        tile.position.x,
        tile.position.z,
        tile.rotation
    )
}

/// Prints placements as they happen
struct PrintSink {
    enabled: bool,
}

impl PlacementSink for PrintSink {
    fn tile_placed(&mut self, tile: &PlacedTile) {
        if self.enabled {
            println!("{}", describe(tile));
        }
    }

    fn restarted(&mut self) {
        if self.enabled {
            println!("-- layout closed early, starting over --");
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let config = args.generation_config()?;
    let catalog = args.catalog()?;
    let mut rng = config.rng();
    info!("generating with seed {}", rng.seed());

    let mut sink = PrintSink { enabled: !args.json };
    let dungeon = generate_dungeon(&config, &catalog, &mut rng, &mut sink)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dungeon)?);
        return Ok(());
    }

    println!();
    println!(
        "seed {}: {} tiles ({} from the bag, {} caps), {} links",
        dungeon.seed(),
        dungeon.len(),
        dungeon.interior_count(),
        dungeon.cap_count(),
        dungeon.graph().edge_count()
    );

    print_route(&dungeon, args.to)
}

fn print_route(dungeon: &Dungeon, to: Option<usize>) -> anyhow::Result<()> {
    let Some(start) = dungeon.start() else {
        bail!("dungeon has no tiles");
    };
    let target = match to {
        Some(index) => TileId(index),
        None => match dungeon.end() {
            Some(end) => end.id,
            None => bail!("dungeon has no End tile; pass --to"),
        },
    };

    let path = dungeon.shortest_path(start.id, target)?;
    println!("route {} -> {} ({} steps):", start.id, target, path.len() - 1);
    for tile in path {
        println!("  {}", describe(tile));
    }
    Ok(())
}
