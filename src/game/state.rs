use super::action::Direction;

/// A position on the collision grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Head, heading and speed of the line.
///
/// Direction and speed only change through [`turn`](Self::turn),
/// [`speed_up`](Self::speed_up) and [`speed_down`](Self::speed_down); the
/// head only moves when the engine commits an advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeState {
    pub head: Position,
    direction: Direction,
    speed: u32,
    min_speed: u32,
    max_speed: u32,
}

impl SnakeState {
    pub fn new(head: Position, speed: u32, min_speed: u32, max_speed: u32) -> Self {
        Self {
            head,
            direction: Direction::Right,
            speed,
            min_speed,
            max_speed,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Next head position in the current direction
    pub fn candidate(&self) -> Position {
        self.head.moved_in_direction(self.direction)
    }

    /// Switch direction unless it would reverse straight into the trail.
    /// Returns whether the turn was accepted.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Returns whether the speed changed
    pub fn speed_up(&mut self) -> bool {
        if self.speed >= self.min_speed && self.speed < self.max_speed {
            self.speed += 1;
            true
        } else {
            false
        }
    }

    /// Returns whether the speed changed
    pub fn speed_down(&mut self) -> bool {
        if self.speed > self.min_speed && self.speed <= self.max_speed {
            self.speed -= 1;
            true
        } else {
            false
        }
    }
}

/// What the head ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Left the grid
    Wall,
    /// Crossed its own trail
    Line,
    /// Hit a bomb
    Bomb,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake() -> SnakeState {
        SnakeState::new(Position::new(200, 200), 4, 1, 7)
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(5, 6));
    }

    #[test]
    fn test_initial_state() {
        let snake = snake();
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.speed(), 4);
        assert_eq!(snake.candidate(), Position::new(201, 200));
    }

    #[test]
    fn test_reverse_turn_rejected() {
        let mut snake = snake();
        assert!(snake.turn(Direction::Up));

        assert!(!snake.turn(Direction::Down));
        assert_eq!(snake.direction(), Direction::Up);

        assert!(snake.turn(Direction::Left));
        assert_eq!(snake.direction(), Direction::Left);
    }

    #[test]
    fn test_same_direction_is_accepted() {
        let mut snake = snake();
        assert!(snake.turn(Direction::Right));
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn test_speed_clamped() {
        let mut snake = snake();
        for _ in 0..20 {
            snake.speed_up();
            assert!(snake.speed() <= 7);
        }
        assert_eq!(snake.speed(), 7);
        assert!(!snake.speed_up());

        for _ in 0..20 {
            snake.speed_down();
            assert!(snake.speed() >= 1);
        }
        assert_eq!(snake.speed(), 1);
        assert!(!snake.speed_down());
    }
}
