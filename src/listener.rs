use log::info;

use crate::grids::Cell;

pub const WIN_MESSAGE: &str = "Congratulations! Press R to generate a new map!";

/// Watches for an agent stepping onto the goal and freezes time when it does.
#[derive(Debug, Clone)]
pub struct GoalListener {
    goal: Cell,
    reached: bool,
    message: String,
    /// 1.0 while running, 0.0 once the goal was reached
    pub time_scale: f32,
}

impl GoalListener {
    pub fn new(goal: Cell) -> Self {
        Self {
            goal,
            reached: false,
            message: String::new(),
            time_scale: 1.0,
        }
    }

    /// Feeds the cell an agent just entered. Returns the win message the
    /// first time the goal is entered, `None` otherwise.
    pub fn agent_entered(&mut self, cell: Cell) -> Option<&str> {
        if self.reached || cell != self.goal {
            return None;
        }

        info!("goal {} reached", cell);
        self.reached = true;
        self.time_scale = 0.0;
        self.message = WIN_MESSAGE.to_string();
        Some(self.message.as_str())
    }

    pub fn is_halted(&self) -> bool {
        self.reached
    }

    /// Empty until the goal is reached.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Back to the running state, e.g. for a freshly generated maze.
    pub fn reset(&mut self, goal: Cell) {
        *self = Self::new(goal);
    }
}
