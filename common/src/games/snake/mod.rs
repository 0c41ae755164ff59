mod game_state;
mod session;
mod settings;
mod snake;
mod spawn;
mod types;

pub use game_state::{SnakeGameState, TickOutcome};
pub use session::{SessionStatus, SnakeSession, SnakeSnapshot};
pub use settings::{FoodSettings, RockSettings, SnakeSessionSettings, SpeedRule};
pub use snake::Snake;
pub use spawn::{can_spawn_special, find_free_cell, spawn_food_cell, spawn_rock_cell};
pub use types::{DeathReason, Direction, FieldSize, Food, FoodKind, GameVariant, Point, TailCollision};
