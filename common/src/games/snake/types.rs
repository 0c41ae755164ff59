use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Distance where diagonal neighbours count as 1.
    pub fn chebyshev_distance(&self, other: &Point) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    /// Unit vector in screen coordinates, y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameVariant {
    Classic,
    Google,
}

impl GameVariant {
    pub fn title(&self) -> &'static str {
        match self {
            GameVariant::Classic => "Snake",
            GameVariant::Google => "Google Snake",
        }
    }
}

/// Whether the cell the tail is about to leave still counts as body
/// during the self-collision check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TailCollision {
    IncludeTail,
    ExcludeTail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
    RockCollision,
}

impl DeathReason {
    pub fn describe(&self) -> &'static str {
        match self {
            DeathReason::WallCollision => "hit the wall",
            DeathReason::SelfCollision => "bit itself",
            DeathReason::RockCollision => "crashed into a rock",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoodKind {
    Normal { points: u32 },
    Special { points: u32, bonus: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Food {
    pub pos: Point,
    pub kind: FoodKind,
}

impl Food {
    pub fn normal(pos: Point, points: u32) -> Self {
        Self {
            pos,
            kind: FoodKind::Normal { points },
        }
    }

    pub fn special(pos: Point, points: u32, bonus: u32) -> Self {
        Self {
            pos,
            kind: FoodKind::Special { points, bonus },
        }
    }

    pub fn is_special(&self) -> bool {
        matches!(self.kind, FoodKind::Special { .. })
    }

    pub fn value(&self) -> u32 {
        match self.kind {
            FoodKind::Normal { points } => points,
            FoodKind::Special { points, bonus } => points + bonus,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSize {
    pub width: usize,
    pub height: usize,
}

impl FieldSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn center(&self) -> Point {
        Point::new((self.width / 2) as i32, (self.height / 2) as i32)
    }
}
