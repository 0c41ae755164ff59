use std::time::{Duration, Instant};

/// Frames counted over the last full second.
#[derive(Default)]
pub struct FpsCounter {
    window_start: Option<Instant>,
    frames_in_window: u32,
    fps: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&mut self, now: Instant) {
        let start = *self.window_start.get_or_insert(now);
        self.frames_in_window += 1;

        if now.saturating_duration_since(start) >= Duration::from_secs(1) {
            self.fps = self.frames_in_window;
            self.frames_in_window = 0;
            self.window_start = Some(now);
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}
