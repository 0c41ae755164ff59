use std::collections::VecDeque;

use super::types::{Direction, Point};

#[derive(Clone, Debug)]
pub struct Snake {
    pub body: VecDeque<Point>,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
}

impl Snake {
    pub fn new(head: Point, direction: Direction, length: usize) -> Self {
        let behind = direction.opposite();
        let mut body = VecDeque::with_capacity(length.max(1));
        let mut segment = head;

        body.push_back(segment);
        for _ in 1..length {
            segment = segment.step(behind);
            body.push_back(segment);
        }

        Self {
            body,
            direction,
            pending_direction: None,
        }
    }

    pub fn from_cells(cells: &[Point], direction: Direction) -> Self {
        assert!(!cells.is_empty(), "Snake needs at least one cell");
        Self {
            body: cells.iter().copied().collect(),
            direction,
            pending_direction: None,
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn advance(&mut self, new_head: Point, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.body.iter().any(|segment| *segment == point)
    }

    pub fn occupies_excluding_tail(&self, point: Point) -> bool {
        let keep = self.body.len().saturating_sub(1);
        self.body.iter().take(keep).any(|segment| *segment == point)
    }

    /// Buffers a turn for the next tick. Reversals of the committed direction
    /// are dropped, otherwise the latest request replaces any earlier one.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(&self.direction) {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    pub fn commit_direction(&mut self) -> Direction {
        if let Some(new_direction) = self.pending_direction.take() {
            self.direction = new_direction;
        }
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_right() -> Snake {
        Snake::new(Point::new(10, 10), Direction::Right, 3)
    }

    #[test]
    fn test_new_lays_body_behind_head() {
        let snake = snake_right();
        let cells: Vec<Point> = snake.body.iter().copied().collect();
        assert_eq!(
            cells,
            vec![Point::new(10, 10), Point::new(9, 10), Point::new(8, 10)]
        );
        assert_eq!(snake.head(), Point::new(10, 10));
        assert_eq!(snake.tail(), Point::new(8, 10));
    }

    #[test]
    fn test_advance_without_growth_keeps_length() {
        let mut snake = snake_right();
        snake.advance(Point::new(11, 10), false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Point::new(11, 10));
        assert_eq!(snake.tail(), Point::new(9, 10));
    }

    #[test]
    fn test_advance_with_growth_keeps_tail() {
        let mut snake = snake_right();
        snake.advance(Point::new(11, 10), true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), Point::new(8, 10));
    }

    #[test]
    fn test_occupies_excluding_tail_skips_last_cell() {
        let snake = snake_right();
        assert!(snake.occupies(Point::new(8, 10)));
        assert!(!snake.occupies_excluding_tail(Point::new(8, 10)));
        assert!(snake.occupies_excluding_tail(Point::new(9, 10)));
    }

    #[test]
    fn test_single_cell_snake_has_nothing_before_tail() {
        let snake = Snake::new(Point::new(2, 2), Direction::Up, 1);
        assert!(snake.occupies(Point::new(2, 2)));
        assert!(!snake.occupies_excluding_tail(Point::new(2, 2)));
    }

    #[test]
    fn test_reverse_direction_is_ignored() {
        let mut snake = snake_right();
        assert!(!snake.set_pending_direction(Direction::Left));
        assert_eq!(snake.commit_direction(), Direction::Right);
    }

    #[test]
    fn test_latest_direction_wins() {
        let mut snake = snake_right();
        assert!(snake.set_pending_direction(Direction::Up));
        assert!(snake.set_pending_direction(Direction::Down));
        assert_eq!(snake.commit_direction(), Direction::Down);
        assert_eq!(snake.pending_direction, None);
    }

    #[test]
    fn test_reverse_after_accepted_turn_keeps_turn() {
        let mut snake = snake_right();
        snake.set_pending_direction(Direction::Up);
        snake.set_pending_direction(Direction::Left);
        assert_eq!(snake.commit_direction(), Direction::Up);
    }
}
