pub mod config;
pub mod error;
pub mod generators;
pub mod goal;
pub mod grids;
pub mod listener;
pub mod maze;
pub mod renderer;

pub use config::MazeConfig;
pub use error::MazeError;
pub use grids::Cell;
pub use maze::{generate, generate_from_config, generate_with_rng, Maze};
