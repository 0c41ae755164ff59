use crate::games::SessionRng;
use super::settings::{FoodSettings, RockSettings};
use super::snake::Snake;
use super::types::{FieldSize, Food, Point};

/// Draws uniformly random cells until `is_free` accepts one.
///
/// With `max_attempts == None` the search only stops on success, so the grid
/// is scanned once up front and a full board yields `None` instead of looping
/// forever.
pub fn find_free_cell<F>(
    rng: &mut SessionRng,
    field: &FieldSize,
    max_attempts: Option<usize>,
    is_free: F,
) -> Option<Point>
where
    F: Fn(Point) -> bool,
{
    if field.cell_count() == 0 {
        return None;
    }

    match max_attempts {
        Some(attempts) => (0..attempts)
            .map(|_| random_cell(rng, field))
            .find(|&pos| is_free(pos)),
        None => {
            if !all_cells(field).any(&is_free) {
                return None;
            }
            loop {
                let pos = random_cell(rng, field);
                if is_free(pos) {
                    return Some(pos);
                }
            }
        }
    }
}

pub fn spawn_food_cell(
    rng: &mut SessionRng,
    field: &FieldSize,
    snake: &Snake,
    foods: &[Food],
    rocks: &[Point],
) -> Option<Point> {
    find_free_cell(rng, field, None, |pos| {
        !snake.occupies(pos) && !has_food_at(foods, pos) && !rocks.contains(&pos)
    })
}

/// Best effort: gives up after `max_spawn_attempts` draws.
pub fn spawn_rock_cell(
    rng: &mut SessionRng,
    field: &FieldSize,
    snake: &Snake,
    foods: &[Food],
    rocks: &[Point],
    settings: &RockSettings,
) -> Option<Point> {
    find_free_cell(rng, field, Some(settings.max_spawn_attempts), |pos| {
        !in_safe_corner(pos, settings.safe_corner_size)
            && snake
                .body
                .iter()
                .all(|segment| segment.chebyshev_distance(&pos) >= settings.min_snake_distance)
            && !has_food_at(foods, pos)
            && !rocks.contains(&pos)
    })
}

pub fn can_spawn_special(foods: &[Food], settings: &FoodSettings) -> bool {
    settings.special_food_probability > 0.0
        && foods.len() <= settings.special_food_density_limit
        && foods.len() < settings.max_food_count
        && !foods.iter().any(Food::is_special)
}

pub fn has_food_at(foods: &[Food], pos: Point) -> bool {
    foods.iter().any(|food| food.pos == pos)
}

fn in_safe_corner(pos: Point, size: i32) -> bool {
    pos.x < size && pos.y < size
}

fn random_cell(rng: &mut SessionRng, field: &FieldSize) -> Point {
    let x = rng.random_range(0..field.width) as i32;
    let y = rng.random_range(0..field.height) as i32;
    Point::new(x, y)
}

fn all_cells(field: &FieldSize) -> impl Iterator<Item = Point> + '_ {
    (0..field.height as i32).flat_map(move |y| (0..field.width as i32).map(move |x| Point::new(x, y)))
}
