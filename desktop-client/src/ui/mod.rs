mod board;
mod fps_counter;
mod input;
mod snake_app;

pub use board::BoardPainter;
pub use snake_app::{SnakeApp, SIDE_PANEL_WIDTH};
