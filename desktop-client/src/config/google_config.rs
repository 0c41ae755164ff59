use common::config::Validate;
use common::games::snake::{FieldSize, SnakeSessionSettings, SpeedRule};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct GoogleConfig {
    pub field_width: u32,
    pub field_height: u32,
    pub initial_tick_interval_ms: u32,
    pub min_tick_interval_ms: u32,
    pub max_food_count: u32,
    pub max_rock_count: u32,
    pub rock_spawn_interval_ms: u32,
    pub special_food_probability: f32,
}

impl GoogleConfig {
    pub fn to_settings(&self) -> SnakeSessionSettings {
        let mut settings = SnakeSessionSettings::google();
        settings.field_size = FieldSize::new(self.field_width as usize, self.field_height as usize);
        settings.food.max_food_count = self.max_food_count as usize;
        settings.food.normal_food_target = settings.food.normal_food_target.min(settings.food.max_food_count);
        settings.food.special_food_probability = self.special_food_probability;

        if let Some(rocks) = settings.rocks.as_mut() {
            rocks.max_count = self.max_rock_count as usize;
            rocks.initial_count = rocks.initial_count.min(rocks.max_count);
            rocks.spawn_interval = Duration::from_millis(self.rock_spawn_interval_ms as u64);
        }

        if let SpeedRule::EatSteps { initial, min, .. } = &mut settings.speed {
            *initial = Duration::from_millis(self.initial_tick_interval_ms as u64);
            *min = Duration::from_millis(self.min_tick_interval_ms as u64);
        }
        settings
    }
}

impl Validate for GoogleConfig {
    fn validate(&self) -> Result<(), String> {
        if self.field_width < 10 || self.field_width > 40 {
            return Err(format!(
                "google field width must be between 10 and 40, got {}",
                self.field_width
            ));
        }
        if self.field_height < 10 || self.field_height > 40 {
            return Err(format!(
                "google field height must be between 10 and 40, got {}",
                self.field_height
            ));
        }
        if self.max_food_count < 1 || self.max_food_count > 10 {
            return Err("max_food_count must be between 1 and 10".to_string());
        }
        if self.max_rock_count > 50 {
            return Err("max_rock_count must not exceed 50".to_string());
        }
        if self.rock_spawn_interval_ms < 1000 {
            return Err("rock_spawn_interval_ms must be at least 1000".to_string());
        }
        if !(0.0..=1.0).contains(&self.special_food_probability) {
            return Err("special_food_probability must be between 0.0 and 1.0".to_string());
        }
        if self.initial_tick_interval_ms > 1000 {
            return Err("initial_tick_interval_ms must not exceed 1000".to_string());
        }
        self.to_settings().validate()
    }
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            field_width: 20,
            field_height: 15,
            initial_tick_interval_ms: 150,
            min_tick_interval_ms: 80,
            max_food_count: 5,
            max_rock_count: 15,
            rock_spawn_interval_ms: 10_000,
            special_food_probability: 0.25,
        }
    }
}
