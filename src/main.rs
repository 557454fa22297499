use anyhow::Context;
use clap::Parser;
use log::info;

use prim_maze::config::{MazeConfig, DEFAULT_DIMS};
use prim_maze::renderer::{render, AsciiRenderer, Prop, SceneBuilder};
use prim_maze::{generate_from_config, Cell};

/// Randomized Prim's maze generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_DIMS.0, allow_negative_numbers = true)]
    width: i64,

    /// Grid height in cells
    #[arg(long, default_value_t = DEFAULT_DIMS.1, allow_negative_numbers = true)]
    height: i64,

    /// Random seed, drawn from the OS when left out
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 0)]
    start_x: usize,

    #[arg(long, default_value_t = 0)]
    start_y: usize,

    /// Print a summary of the 3d prop layout instead of the ascii map
    #[arg(long)]
    scene: bool,
}

impl From<&Args> for MazeConfig {
    fn from(args: &Args) -> Self {
        MazeConfig {
            width: args.width,
            height: args.height,
            seed: args.seed,
            start: Cell::new(args.start_x, args.start_y),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = MazeConfig::from(&args);
    let maze = generate_from_config(&config)
        .with_context(|| format!("failed to generate a {}x{} maze", args.width, args.height))?;

    if args.scene {
        let mut scene = SceneBuilder::new();
        render(&maze, &mut scene);
        for &prop in &[Prop::Wall, Prop::Floor, Prop::Goal, Prop::Border] {
            println!("{:?}: {}", prop, scene.count(prop));
        }
    } else {
        let mut ascii = AsciiRenderer::for_maze(&maze);
        render(&maze, &mut ascii);
        println!("{}", ascii);
    }

    info!("start {} goal {}", maze.start(), maze.goal_cell());
    Ok(())
}
