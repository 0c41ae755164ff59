use std::time::Duration;

use crate::config::Validate;
use super::types::{Direction, FieldSize, GameVariant, TailCollision};

#[derive(Clone, Debug, PartialEq)]
pub struct FoodSettings {
    pub max_food_count: usize,
    /// Normal items kept on the board after every meal.
    pub normal_food_target: usize,
    pub normal_points: u32,
    pub special_points: u32,
    pub special_bonus: u32,
    /// Zero disables special food.
    pub special_food_probability: f32,
    /// A special is refused once the board holds more foods than this.
    pub special_food_density_limit: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RockSettings {
    pub initial_count: usize,
    pub max_count: usize,
    pub spawn_interval: Duration,
    pub max_spawn_attempts: usize,
    /// Side of the reserved square in the top-left corner.
    pub safe_corner_size: i32,
    /// Minimum Chebyshev distance between a new rock and any snake segment.
    pub min_snake_distance: i32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpeedRule {
    /// `max(min, base - step * (score / every))`
    ScoreSteps {
        base: Duration,
        min: Duration,
        step: Duration,
        every: u32,
    },
    /// Speeds up by `step` on every `every`th food eaten, down to `min`.
    EatSteps {
        initial: Duration,
        min: Duration,
        step: Duration,
        every: u32,
    },
}

impl SpeedRule {
    pub fn initial_interval(&self) -> Duration {
        match *self {
            SpeedRule::ScoreSteps { base, .. } => base,
            SpeedRule::EatSteps { initial, .. } => initial,
        }
    }

    pub fn interval_after_eating(&self, current: Duration, score: u32, foods_eaten: u32) -> Duration {
        match *self {
            SpeedRule::ScoreSteps { base, min, step, every } => {
                let reduction = step * (score / every.max(1));
                base.saturating_sub(reduction).max(min)
            }
            SpeedRule::EatSteps { min, step, every, .. } => {
                if foods_eaten > 0 && foods_eaten % every.max(1) == 0 {
                    current.saturating_sub(step).max(min)
                } else {
                    current
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSessionSettings {
    pub variant: GameVariant,
    pub field_size: FieldSize,
    pub initial_length: usize,
    pub initial_direction: Direction,
    pub tail_collision: TailCollision,
    pub food: FoodSettings,
    pub rocks: Option<RockSettings>,
    pub speed: SpeedRule,
}

impl SnakeSessionSettings {
    pub fn classic() -> Self {
        Self {
            variant: GameVariant::Classic,
            field_size: FieldSize::new(20, 20),
            initial_length: 3,
            initial_direction: Direction::Right,
            tail_collision: TailCollision::IncludeTail,
            food: FoodSettings {
                max_food_count: 1,
                normal_food_target: 1,
                normal_points: 1,
                special_points: 0,
                special_bonus: 0,
                special_food_probability: 0.0,
                special_food_density_limit: 0,
            },
            rocks: None,
            speed: SpeedRule::ScoreSteps {
                base: Duration::from_millis(100),
                min: Duration::from_millis(50),
                step: Duration::from_millis(10),
                every: 5,
            },
        }
    }

    pub fn google() -> Self {
        Self {
            variant: GameVariant::Google,
            field_size: FieldSize::new(20, 15),
            initial_length: 3,
            initial_direction: Direction::Right,
            tail_collision: TailCollision::ExcludeTail,
            food: FoodSettings {
                max_food_count: 5,
                normal_food_target: 3,
                normal_points: 10,
                special_points: 10,
                special_bonus: 50,
                special_food_probability: 0.25,
                special_food_density_limit: 4,
            },
            rocks: Some(RockSettings {
                initial_count: 3,
                max_count: 15,
                spawn_interval: Duration::from_secs(10),
                max_spawn_attempts: 50,
                safe_corner_size: 2,
                min_snake_distance: 2,
            }),
            speed: SpeedRule::EatSteps {
                initial: Duration::from_millis(150),
                min: Duration::from_millis(80),
                step: Duration::from_millis(20),
                every: 5,
            },
        }
    }
}

impl Validate for SnakeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        let FieldSize { width, height } = self.field_size;
        if width < 5 || height < 5 {
            return Err("field dimensions must be at least 5x5".to_string());
        }
        if width > 60 || height > 60 {
            return Err("field dimensions must not exceed 60x60".to_string());
        }
        if self.initial_length == 0 {
            return Err("initial_length must be at least 1".to_string());
        }
        if self.initial_length > width / 2 {
            return Err(format!(
                "initial_length must fit in half the field width, got {}",
                self.initial_length
            ));
        }
        if self.food.max_food_count == 0 {
            return Err("max_food_count must be at least 1".to_string());
        }
        if self.food.normal_food_target == 0 || self.food.normal_food_target > self.food.max_food_count {
            return Err("normal_food_target must be between 1 and max_food_count".to_string());
        }
        if !(0.0..=1.0).contains(&self.food.special_food_probability) {
            return Err("special_food_probability must be between 0.0 and 1.0".to_string());
        }
        if let Some(rocks) = &self.rocks {
            if rocks.initial_count > rocks.max_count {
                return Err("initial rock count must not exceed max rock count".to_string());
            }
            if rocks.spawn_interval < Duration::from_millis(500) {
                return Err("rock spawn interval must be at least 500ms".to_string());
            }
            if rocks.max_spawn_attempts == 0 {
                return Err("rock spawn attempts must be at least 1".to_string());
            }
        }
        let (min, initial) = match self.speed {
            SpeedRule::ScoreSteps { base, min, .. } => (min, base),
            SpeedRule::EatSteps { initial, min, .. } => (min, initial),
        };
        if min < Duration::from_millis(20) {
            return Err("minimum tick interval must be at least 20ms".to_string());
        }
        if initial < min {
            return Err("initial tick interval must not be below the minimum".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(SnakeSessionSettings::classic().validate().is_ok());
        assert!(SnakeSessionSettings::google().validate().is_ok());
    }

    #[test]
    fn test_score_steps_speed() {
        let rule = SnakeSessionSettings::classic().speed;
        let current = rule.initial_interval();
        assert_eq!(rule.interval_after_eating(current, 4, 4), Duration::from_millis(100));
        assert_eq!(rule.interval_after_eating(current, 5, 5), Duration::from_millis(90));
        assert_eq!(rule.interval_after_eating(current, 27, 27), Duration::from_millis(50));
        assert_eq!(rule.interval_after_eating(current, 500, 500), Duration::from_millis(50));
    }

    #[test]
    fn test_eat_steps_speed_only_on_fifth_meal() {
        let rule = SnakeSessionSettings::google().speed;
        let current = Duration::from_millis(150);
        assert_eq!(rule.interval_after_eating(current, 40, 4), current);
        assert_eq!(rule.interval_after_eating(current, 50, 5), Duration::from_millis(130));
        assert_eq!(
            rule.interval_after_eating(Duration::from_millis(90), 100, 10),
            Duration::from_millis(80)
        );
        assert_eq!(
            rule.interval_after_eating(Duration::from_millis(80), 150, 15),
            Duration::from_millis(80)
        );
    }

    #[test]
    fn test_tiny_field_is_rejected() {
        let mut settings = SnakeSessionSettings::classic();
        settings.field_size = FieldSize::new(4, 20);
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_food_target_above_max_is_rejected() {
        let mut settings = SnakeSessionSettings::google();
        settings.food.normal_food_target = 6;
        assert!(settings.validate().is_err());
    }
}
