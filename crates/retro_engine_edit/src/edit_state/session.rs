use retro_engine::Position;

/// Pen sizes reachable with [`EditSession::step_pen_size`].
pub const PEN_SIZE_STEPS: [u32; 3] = [1, 2, 4];

/// Palette index painted by the eraser.
pub const ERASE_INDEX: u8 = 0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tool {
    #[default]
    Pen,
    Eraser,
    Bucket,
}

/// Ephemeral state of the current pointer gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub(crate) tool: Tool,
    pub(crate) pen_size: u32,
    pub(crate) selected_color: u8,
    pub(crate) is_drawing: bool,
    pub(crate) previous_cell: Option<Position>,
}

impl Default for EditSession {
    fn default() -> Self {
        Self {
            tool: Tool::Pen,
            pen_size: 1,
            selected_color: 3,
            is_drawing: false,
            previous_cell: None,
        }
    }
}

impl EditSession {
    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn pen_size(&self) -> u32 {
        self.pen_size
    }

    pub fn selected_color(&self) -> u8 {
        self.selected_color
    }

    pub fn is_drawing(&self) -> bool {
        self.is_drawing
    }

    pub fn previous_cell(&self) -> Option<Position> {
        self.previous_cell
    }

    /// Index a stroke paints with the active tool.
    pub fn paint_index(&self) -> u8 {
        match self.tool {
            Tool::Eraser => ERASE_INDEX,
            Tool::Pen | Tool::Bucket => self.selected_color,
        }
    }

    /// Moves to the next larger (`up`) or smaller pen size in [`PEN_SIZE_STEPS`].
    /// A size outside the steps snaps to the smallest one.
    pub fn step_pen_size(&mut self, up: bool) {
        let last = PEN_SIZE_STEPS.len() as i32 - 1;
        let current = PEN_SIZE_STEPS.iter().position(|&s| s == self.pen_size).map_or(-1, |i| i as i32);
        let next = if up { (current + 1).min(last) } else { (current - 1).max(0) };
        self.pen_size = PEN_SIZE_STEPS[next.max(0) as usize];
    }

    pub(crate) fn reset_gesture(&mut self) {
        self.is_drawing = false;
        self.previous_cell = None;
    }
}
