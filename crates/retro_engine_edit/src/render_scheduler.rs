/// Dirty flag driven render loop.
///
/// Mutations call [`RenderScheduler::request`]; the per frame [`RenderScheduler::tick`]
/// renders at most once no matter how many requests arrived since the last frame.
#[derive(Debug)]
pub struct RenderScheduler {
    needs_render: bool,
    frames_rendered: u64,
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self {
            needs_render: true,
            frames_rendered: 0,
        }
    }
}

impl RenderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self) {
        self.needs_render = true;
    }

    pub fn needs_render(&self) -> bool {
        self.needs_render
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Runs `render` if a render was requested, then clears the request.
    pub fn tick<T>(&mut self, render: impl FnOnce() -> T) -> Option<T> {
        if !self.needs_render {
            return None;
        }
        let result = render();
        self.needs_render = false;
        self.frames_rendered += 1;
        Some(result)
    }
}
