use crate::maze::Maze;

/// Consumer of a finished maze. Coordinates are signed since the border sits
/// one cell outside the grid on every side.
pub trait GridRenderer {
    fn place_wall(&mut self, x: i64, y: i64);
    fn place_floor(&mut self, x: i64, y: i64);
    fn place_goal(&mut self, x: i64, y: i64);
    fn place_border(&mut self, x: i64, y: i64);
}

/// Walks every cell row-major, then the border ring (corners last).
pub fn render<G: GridRenderer>(maze: &Maze, renderer: &mut G) {
    let (width, height) = (maze.width() as i64, maze.height() as i64);
    let goal = maze.goal_cell();

    for cell in maze.grid().iter_cells() {
        let (x, y) = (cell.x as i64, cell.y as i64);
        if cell == goal {
            renderer.place_goal(x, y);
        } else if maze.grid().is_open(cell) {
            renderer.place_floor(x, y);
        } else {
            renderer.place_wall(x, y);
        }
    }

    for y in 0..height {
        renderer.place_border(-1, y);
        renderer.place_border(width, y);
    }
    for x in 0..width {
        renderer.place_border(x, -1);
        renderer.place_border(x, height);
    }

    renderer.place_border(-1, -1);
    renderer.place_border(-1, height);
    renderer.place_border(width, -1);
    renderer.place_border(width, height);
}

pub const WALL_CHAR: char = '#';
pub const FLOOR_CHAR: char = '.';
pub const GOAL_CHAR: char = 'G';

/// Plain text rendering, one line per row with `y = 0` on top.
pub struct AsciiRenderer {
    columns: usize,
    chars: Vec<char>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        let columns = width + 2;
        Self {
            columns,
            chars: vec![' '; columns * (height + 2)],
        }
    }

    pub fn for_maze(maze: &Maze) -> Self {
        Self::new(maze.width(), maze.height())
    }

    fn put(&mut self, x: i64, y: i64, c: char) {
        // shift so the border lands on index 0
        let index = (y + 1) as usize * self.columns + (x + 1) as usize;
        self.chars[index] = c;
    }

    pub fn lines(&self) -> Vec<String> {
        self.chars
            .chunks(self.columns)
            .map(|row| row.iter().collect())
            .collect()
    }
}

impl GridRenderer for AsciiRenderer {
    fn place_wall(&mut self, x: i64, y: i64) {
        self.put(x, y, WALL_CHAR);
    }

    fn place_floor(&mut self, x: i64, y: i64) {
        self.put(x, y, FLOOR_CHAR);
    }

    fn place_goal(&mut self, x: i64, y: i64) {
        self.put(x, y, GOAL_CHAR);
    }

    fn place_border(&mut self, x: i64, y: i64) {
        self.put(x, y, WALL_CHAR);
    }
}

impl std::fmt::Display for AsciiRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prop {
    Wall,
    Floor,
    Goal,
    Border,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub prop: Prop,
    pub position: [f32; 3],
}

/// Lays the maze out as 3d props on the xz plane. Walls and border blocks
/// stand at height 0, floor and goal tiles sit one unit below them.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    pub placements: Vec<Placement>,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, prop: Prop, x: i64, height: f32, y: i64) {
        self.placements.push(Placement {
            prop,
            position: [x as f32, height, y as f32],
        });
    }

    pub fn count(&self, prop: Prop) -> usize {
        self.placements.iter().filter(|p| p.prop == prop).count()
    }
}

impl GridRenderer for SceneBuilder {
    fn place_wall(&mut self, x: i64, y: i64) {
        self.push(Prop::Wall, x, 0.0, y);
    }

    fn place_floor(&mut self, x: i64, y: i64) {
        self.push(Prop::Floor, x, -1.0, y);
    }

    fn place_goal(&mut self, x: i64, y: i64) {
        self.push(Prop::Goal, x, -1.0, y);
    }

    fn place_border(&mut self, x: i64, y: i64) {
        self.push(Prop::Border, x, 0.0, y);
    }
}

#[cfg(test)]
mod test_renderer {
    use super::*;
    use crate::config::MazeConfig;
    use crate::grids::Cell;
    use crate::maze::{generate, generate_with_rng};
    use rand::rngs::mock::StepRng;

    #[test]
    fn ascii_snapshot() {
        let maze = generate_with_rng(&MazeConfig::new(4, 4), StepRng::new(0, 0)).unwrap();
        let mut ascii = AsciiRenderer::for_maze(&maze);
        render(&maze, &mut ascii);

        assert_eq!(
            ascii.to_string(),
            ["######", "#.#.##", "#.#G##", "#...##", "######", "######"].join("\n")
        );
    }

    #[test]
    fn scene_covers_grid_and_border() {
        let maze = generate(30, 20, Some(8), Cell::new(0, 0)).unwrap();
        let mut scene = SceneBuilder::new();
        render(&maze, &mut scene);

        let open = maze.grid().open_count();
        assert_eq!(scene.count(Prop::Goal), 1);
        assert_eq!(scene.count(Prop::Floor), open - 1);
        assert_eq!(scene.count(Prop::Wall), 30 * 20 - open);
        assert_eq!(scene.count(Prop::Border), 2 * 30 + 2 * 20 + 4);

        let goal = maze.goal_cell();
        assert!(scene.placements.contains(&Placement {
            prop: Prop::Goal,
            position: [goal.x as f32, -1.0, goal.y as f32],
        }));
        for corner in &[[-1.0, 0.0, -1.0], [30.0, 0.0, 20.0], [-1.0, 0.0, 20.0]] {
            assert!(scene.placements.contains(&Placement {
                prop: Prop::Border,
                position: *corner,
            }));
        }
    }

    #[test]
    fn single_column_border_wraps_both_sides() {
        let maze = generate(1, 3, Some(0), Cell::new(0, 0)).unwrap();
        let mut ascii = AsciiRenderer::for_maze(&maze);
        render(&maze, &mut ascii);

        // window covers the whole column, so the start doubles as the goal
        assert_eq!(maze.goal_cell(), maze.start());
        assert_eq!(ascii.lines(), vec!["###", "#G#", "#.#", "#.#", "###"]);
    }
}
