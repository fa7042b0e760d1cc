use crate::board::Point;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Coordinate delta (dx, dy) for one step in this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

pub struct Snake {
    pub body: Vec<Point>, // body[0] is the head
    pub direction: Direction,
}

impl Snake {
    /// Builds a snake with the head at `head` and the tail trailing away from
    /// the direction of travel.
    pub fn new(head: Point, length: usize, direction: Direction) -> Snake {
        let mut body = vec![head];
        let (dx, dy) = direction.opposite().delta();
        for i in 1..length {
            body.push(Point {
                x: head.x + dx * i as i32,
                y: head.y + dy * i as i32,
            });
        }
        Snake { body, direction }
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn occupies(&self, p: Point) -> bool {
        self.body.contains(&p)
    }

    /// Advance one cell. With `grow` the tail stays put, otherwise it moves
    /// up with the rest of the body.
    pub fn move_forward(&mut self, grow: bool) {
        let (dx, dy) = self.direction.delta();
        let head = self.head();
        self.body.insert(
            0,
            Point {
                x: head.x + dx,
                y: head.y + dy,
            },
        );
        if !grow {
            self.body.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_trails_behind_the_head() {
        let snake = Snake::new(Point { x: 5, y: 3 }, 3, Direction::Right);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Point { x: 5, y: 3 });
        assert_eq!(snake.body[1], Point { x: 4, y: 3 });
        assert_eq!(snake.body[2], Point { x: 3, y: 3 });
    }

    #[test]
    fn moving_keeps_length() {
        let mut snake = Snake::new(Point { x: 5, y: 3 }, 3, Direction::Right);
        snake.move_forward(false);
        assert_eq!(snake.head(), Point { x: 6, y: 3 });
        assert_eq!(snake.len(), 3);
        assert!(!snake.occupies(Point { x: 3, y: 3 })); // old tail freed
    }

    #[test]
    fn growing_keeps_the_tail() {
        let mut snake = Snake::new(Point { x: 5, y: 3 }, 3, Direction::Right);
        snake.move_forward(true);
        assert_eq!(snake.len(), 4);
        assert!(snake.occupies(Point { x: 3, y: 3 }));
    }

    #[test]
    fn occupies_covers_the_whole_body() {
        let snake = Snake::new(Point { x: 2, y: 2 }, 2, Direction::Down);
        assert!(snake.occupies(Point { x: 2, y: 2 }));
        assert!(snake.occupies(Point { x: 2, y: 1 })); // tail is up, travel is down
        assert!(!snake.occupies(Point { x: 2, y: 3 }));
    }

    #[test]
    fn opposites_pair_up() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Up.delta(), (0, -1));
    }
}
