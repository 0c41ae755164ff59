mod classic_config;
mod google_config;
mod main_config;

pub use classic_config::ClassicConfig;
pub use google_config::GoogleConfig;
pub use main_config::{get_config_manager, Config};
