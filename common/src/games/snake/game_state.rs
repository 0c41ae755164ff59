use std::time::Duration;

use crate::games::SessionRng;
use crate::log;
use super::settings::SnakeSessionSettings;
use super::snake::Snake;
use super::spawn::{can_spawn_special, spawn_food_cell, spawn_rock_cell};
use super::types::{DeathReason, Food, Point, TailCollision};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate(Food),
    Died(DeathReason),
}

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    pub snake: Snake,
    pub foods: Vec<Food>,
    pub rocks: Vec<Point>,
    pub score: u32,
    pub foods_eaten: u32,
    pub tick_interval: Duration,
    pub death_reason: Option<DeathReason>,
}

impl SnakeGameState {
    /// Fresh board: centred snake, initial rocks, then food.
    pub fn new(settings: &SnakeSessionSettings, rng: &mut SessionRng) -> Self {
        let snake = Snake::new(
            settings.field_size.center(),
            settings.initial_direction,
            settings.initial_length,
        );
        let mut state = Self::with_snake(snake, settings);

        if let Some(rocks) = &settings.rocks {
            for _ in 0..rocks.initial_count {
                state.try_spawn_rock(settings, rng);
            }
        }
        state.replenish_food(settings, rng);
        state
    }

    /// Board with the given snake and nothing else on it.
    pub fn with_snake(snake: Snake, settings: &SnakeSessionSettings) -> Self {
        Self {
            snake,
            foods: Vec::new(),
            rocks: Vec::new(),
            score: 0,
            foods_eaten: 0,
            tick_interval: settings.speed.initial_interval(),
            death_reason: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.death_reason.is_none()
    }

    pub fn update(&mut self, settings: &SnakeSessionSettings, rng: &mut SessionRng) -> TickOutcome {
        if let Some(reason) = self.death_reason {
            return TickOutcome::Died(reason);
        }

        self.snake.commit_direction();

        let next_head = match self.calculate_next_head(settings) {
            Ok(next_head) => next_head,
            Err(reason) => {
                self.death_reason = Some(reason);
                log!(
                    "Snake {} at ({}, {}). Final score: {}",
                    reason.describe(),
                    self.snake.head().x,
                    self.snake.head().y,
                    self.score
                );
                return TickOutcome::Died(reason);
            }
        };

        let Some(index) = self.foods.iter().position(|food| food.pos == next_head) else {
            self.snake.advance(next_head, false);
            return TickOutcome::Moved;
        };

        let food = self.foods.remove(index);
        self.snake.advance(next_head, true);
        self.score += food.value();
        self.foods_eaten += 1;
        log!(
            "Ate {} food at ({}, {}). Score: {}",
            if food.is_special() { "special" } else { "normal" },
            next_head.x,
            next_head.y,
            self.score
        );

        self.replenish_food(settings, rng);

        let new_interval = settings
            .speed
            .interval_after_eating(self.tick_interval, self.score, self.foods_eaten);
        if new_interval != self.tick_interval {
            log!(
                "Speed changed: {}ms -> {}ms",
                self.tick_interval.as_millis(),
                new_interval.as_millis()
            );
            self.tick_interval = new_interval;
        }

        TickOutcome::Ate(food)
    }

    fn calculate_next_head(&self, settings: &SnakeSessionSettings) -> Result<Point, DeathReason> {
        let next_head = self.snake.head().step(self.snake.direction);

        if !settings.field_size.contains(next_head) {
            return Err(DeathReason::WallCollision);
        }

        let hits_body = match settings.tail_collision {
            TailCollision::IncludeTail => self.snake.occupies(next_head),
            TailCollision::ExcludeTail => self.snake.occupies_excluding_tail(next_head),
        };
        if hits_body {
            return Err(DeathReason::SelfCollision);
        }

        if self.rocks.contains(&next_head) {
            return Err(DeathReason::RockCollision);
        }

        Ok(next_head)
    }

    /// Tops normal food up to its target, then maybe adds a special.
    pub fn replenish_food(&mut self, settings: &SnakeSessionSettings, rng: &mut SessionRng) {
        let food_settings = &settings.food;

        while self.normal_food_count() < food_settings.normal_food_target
            && self.foods.len() < food_settings.max_food_count
        {
            let Some(pos) = spawn_food_cell(rng, &settings.field_size, &self.snake, &self.foods, &self.rocks) else {
                log!("No free cell left for food");
                return;
            };
            self.foods.push(Food::normal(pos, food_settings.normal_points));
        }

        if can_spawn_special(&self.foods, food_settings) && rng.chance(food_settings.special_food_probability) {
            if let Some(pos) = spawn_food_cell(rng, &settings.field_size, &self.snake, &self.foods, &self.rocks) {
                self.foods.push(Food::special(
                    pos,
                    food_settings.special_points,
                    food_settings.special_bonus,
                ));
                log!("Special food spawned at ({}, {})", pos.x, pos.y);
            }
        }
    }

    /// Places one rock if the variant has rocks and capacity remains.
    pub fn try_spawn_rock(&mut self, settings: &SnakeSessionSettings, rng: &mut SessionRng) -> Option<Point> {
        let rock_settings = settings.rocks.as_ref()?;
        if self.rocks.len() >= rock_settings.max_count {
            return None;
        }

        match spawn_rock_cell(
            rng,
            &settings.field_size,
            &self.snake,
            &self.foods,
            &self.rocks,
            rock_settings,
        ) {
            Some(pos) => {
                self.rocks.push(pos);
                log!("Rock spawned at ({}, {}), {} on board", pos.x, pos.y, self.rocks.len());
                Some(pos)
            }
            None => {
                log!(
                    "Rock spawn skipped after {} attempts",
                    rock_settings.max_spawn_attempts
                );
                None
            }
        }
    }

    pub fn normal_food_count(&self) -> usize {
        self.foods.iter().filter(|food| !food.is_special()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::spawn::has_food_at;
    use crate::games::snake::types::{Direction, FieldSize};

    fn classic_state(cells: &[Point], direction: Direction) -> (SnakeGameState, SnakeSessionSettings, SessionRng) {
        let settings = SnakeSessionSettings::classic();
        let state = SnakeGameState::with_snake(Snake::from_cells(cells, direction), &settings);
        (state, settings, SessionRng::new(42))
    }

    fn straight_snake() -> Vec<Point> {
        vec![Point::new(10, 10), Point::new(9, 10), Point::new(8, 10)]
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let (mut state, settings, mut rng) = classic_state(&straight_snake(), Direction::Right);
        state.foods.push(Food::normal(Point::new(11, 10), 1));

        let outcome = state.update(&settings, &mut rng);

        assert_eq!(outcome, TickOutcome::Ate(Food::normal(Point::new(11, 10), 1)));
        let cells: Vec<Point> = state.snake.body.iter().copied().collect();
        assert_eq!(
            cells,
            vec![Point::new(11, 10), Point::new(10, 10), Point::new(9, 10), Point::new(8, 10)]
        );
        assert_eq!(state.score, 1);
        assert_eq!(state.foods.len(), 1);
        assert!(!has_food_at(&state.foods, Point::new(11, 10)));
        assert!(!state.snake.occupies(state.foods[0].pos));
    }

    #[test]
    fn test_moving_keeps_length() {
        let (mut state, settings, mut rng) = classic_state(&straight_snake(), Direction::Right);
        state.foods.push(Food::normal(Point::new(0, 0), 1));

        assert_eq!(state.update(&settings, &mut rng), TickOutcome::Moved);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Point::new(11, 10));
        assert_eq!(state.snake.tail(), Point::new(9, 10));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_wall_collision_beats_food() {
        let (mut state, settings, mut rng) =
            classic_state(&[Point::new(0, 10), Point::new(1, 10), Point::new(2, 10)], Direction::Left);
        state.foods.push(Food::normal(Point::new(-1, 10), 1));

        assert_eq!(
            state.update(&settings, &mut rng),
            TickOutcome::Died(DeathReason::WallCollision)
        );
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 3);
    }

    #[test]
    fn test_reverse_request_does_not_turn() {
        let (mut state, settings, mut rng) = classic_state(&straight_snake(), Direction::Right);
        state.snake.set_pending_direction(Direction::Left);
        state.update(&settings, &mut rng);
        assert_eq!(state.snake.direction, Direction::Right);
        assert!(state.is_alive());
    }

    fn square_loop() -> Vec<Point> {
        // Head at (5,5) heading Up into (5,4), which is the current tail.
        vec![Point::new(5, 5), Point::new(6, 5), Point::new(6, 4), Point::new(5, 4)]
    }

    #[test]
    fn test_classic_counts_vacating_tail_as_body() {
        let (mut state, settings, mut rng) = classic_state(&square_loop(), Direction::Up);
        assert_eq!(
            state.update(&settings, &mut rng),
            TickOutcome::Died(DeathReason::SelfCollision)
        );
    }

    #[test]
    fn test_google_lets_head_follow_tail() {
        let settings = SnakeSessionSettings::google();
        let mut state = SnakeGameState::with_snake(Snake::from_cells(&square_loop(), Direction::Up), &settings);
        let mut rng = SessionRng::new(1);
        assert_eq!(state.update(&settings, &mut rng), TickOutcome::Moved);
        assert_eq!(state.snake.head(), Point::new(5, 4));
        assert_eq!(state.snake.len(), 4);
    }

    #[test]
    fn test_rock_collision() {
        let settings = SnakeSessionSettings::google();
        let mut state = SnakeGameState::with_snake(
            Snake::from_cells(&straight_snake(), Direction::Right),
            &settings,
        );
        state.rocks.push(Point::new(11, 10));
        let mut rng = SessionRng::new(1);
        assert_eq!(
            state.update(&settings, &mut rng),
            TickOutcome::Died(DeathReason::RockCollision)
        );
    }

    #[test]
    fn test_dead_state_does_not_move() {
        let (mut state, settings, mut rng) =
            classic_state(&[Point::new(19, 3), Point::new(18, 3)], Direction::Right);
        state.update(&settings, &mut rng);
        let head = state.snake.head();
        assert_eq!(
            state.update(&settings, &mut rng),
            TickOutcome::Died(DeathReason::WallCollision)
        );
        assert_eq!(state.snake.head(), head);
    }

    #[test]
    fn test_special_food_adds_bonus() {
        let settings = SnakeSessionSettings::google();
        let mut state = SnakeGameState::with_snake(
            Snake::from_cells(&straight_snake(), Direction::Right),
            &settings,
        );
        state.foods.push(Food::special(Point::new(11, 10), 10, 50));
        let mut rng = SessionRng::new(9);

        state.update(&settings, &mut rng);

        assert_eq!(state.score, 60);
        assert_eq!(state.foods_eaten, 1);
        assert_eq!(state.normal_food_count(), settings.food.normal_food_target);
        assert!(state.foods.len() <= settings.food.max_food_count);
    }

    #[test]
    fn test_fifth_meal_speeds_up_google() {
        let settings = SnakeSessionSettings::google();
        let mut state = SnakeGameState::with_snake(
            Snake::from_cells(&[Point::new(2, 7)], Direction::Right),
            &settings,
        );
        let mut rng = SessionRng::new(5);

        for step in 1..=5 {
            let target = Point::new(2 + step, 7);
            state.foods.retain(|food| food.pos.y != 7);
            state.foods.push(Food::normal(target, 10));
            assert!(matches!(state.update(&settings, &mut rng), TickOutcome::Ate(_)));
            if step < 5 {
                assert_eq!(state.tick_interval, Duration::from_millis(150));
            }
        }

        assert_eq!(state.foods_eaten, 5);
        assert_eq!(state.tick_interval, Duration::from_millis(130));
    }

    #[test]
    fn test_classic_speed_follows_score() {
        let (mut state, settings, mut rng) =
            classic_state(&[Point::new(2, 10)], Direction::Right);
        state.score = 4;
        state.foods.push(Food::normal(Point::new(3, 10), 1));
        state.update(&settings, &mut rng);
        assert_eq!(state.score, 5);
        assert_eq!(state.tick_interval, Duration::from_millis(90));
    }

    #[test]
    fn test_new_google_board_is_consistent() {
        let settings = SnakeSessionSettings::google();
        let mut rng = SessionRng::new(77);
        let state = SnakeGameState::new(&settings, &mut rng);

        assert_eq!(state.snake.len(), 3);
        assert!(state.rocks.len() <= 3);
        assert!(state.normal_food_count() >= 1);
        for rock in &state.rocks {
            assert!(settings.field_size.contains(*rock));
            assert!(!has_food_at(&state.foods, *rock));
            assert!(!state.snake.occupies(*rock));
        }
        for food in &state.foods {
            assert!(settings.field_size.contains(food.pos));
            assert!(!state.snake.occupies(food.pos));
        }
    }

    #[test]
    fn test_rock_capacity_is_respected() {
        let settings = SnakeSessionSettings::google();
        let mut state = SnakeGameState::with_snake(
            Snake::from_cells(&straight_snake(), Direction::Right),
            &settings,
        );
        state.rocks = (0..15).map(|x| Point::new(x + 2, 0)).collect();
        let mut rng = SessionRng::new(2);
        assert_eq!(state.try_spawn_rock(&settings, &mut rng), None);
        assert_eq!(state.rocks.len(), 15);
    }

    #[test]
    fn test_classic_has_no_rocks() {
        let settings = SnakeSessionSettings::classic();
        let mut rng = SessionRng::new(2);
        let mut state = SnakeGameState::new(&settings, &mut rng);
        assert_eq!(state.try_spawn_rock(&settings, &mut rng), None);
        assert!(state.rocks.is_empty());
        assert_eq!(state.foods.len(), 1);
    }

    #[test]
    fn test_full_board_food_does_not_hang() {
        let mut settings = SnakeSessionSettings::classic();
        settings.field_size = FieldSize::new(2, 1);
        let mut state = SnakeGameState::with_snake(
            Snake::from_cells(&[Point::new(0, 0)], Direction::Right),
            &settings,
        );
        state.foods.push(Food::normal(Point::new(1, 0), 1));
        let mut rng = SessionRng::new(2);
        assert!(matches!(state.update(&settings, &mut rng), TickOutcome::Ate(_)));
        assert!(state.foods.is_empty());
    }
}
