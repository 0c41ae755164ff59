use common::config::Validate;
use common::games::snake::{FieldSize, SnakeSessionSettings, SpeedRule};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct ClassicConfig {
    pub field_width: u32,
    pub field_height: u32,
    pub base_tick_interval_ms: u32,
    pub min_tick_interval_ms: u32,
}

impl ClassicConfig {
    pub fn to_settings(&self) -> SnakeSessionSettings {
        let mut settings = SnakeSessionSettings::classic();
        settings.field_size = FieldSize::new(self.field_width as usize, self.field_height as usize);
        if let SpeedRule::ScoreSteps { base, min, .. } = &mut settings.speed {
            *base = Duration::from_millis(self.base_tick_interval_ms as u64);
            *min = Duration::from_millis(self.min_tick_interval_ms as u64);
        }
        settings
    }
}

impl Validate for ClassicConfig {
    fn validate(&self) -> Result<(), String> {
        if self.field_width < 10 || self.field_width > 40 {
            return Err(format!(
                "classic field width must be between 10 and 40, got {}",
                self.field_width
            ));
        }
        if self.field_height < 10 || self.field_height > 40 {
            return Err(format!(
                "classic field height must be between 10 and 40, got {}",
                self.field_height
            ));
        }
        if self.min_tick_interval_ms < 20 {
            return Err("min_tick_interval_ms must be at least 20".to_string());
        }
        if self.base_tick_interval_ms < self.min_tick_interval_ms {
            return Err("base_tick_interval_ms must not be below min_tick_interval_ms".to_string());
        }
        if self.base_tick_interval_ms > 1000 {
            return Err("base_tick_interval_ms must not exceed 1000".to_string());
        }
        self.to_settings().validate()
    }
}

impl Default for ClassicConfig {
    fn default() -> Self {
        Self {
            field_width: 20,
            field_height: 20,
            base_tick_interval_ms: 100,
            min_tick_interval_ms: 50,
        }
    }
}
