mod periodic_timer;
mod session_rng;

pub mod snake;

pub use periodic_timer::PeriodicTimer;
pub use session_rng::SessionRng;
