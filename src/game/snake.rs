use super::direction::{self, Direction};
use super::grid::Tile;
use crate::consts;
use std::collections::VecDeque;

/// Snake state.
///
/// The occupied tiles are the body (oldest first) plus the head; the body is
/// trimmed from the front whenever the total exceeds `target_len`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    pub(super) head: Tile,

    /// The positions of the rest of the snake, oldest at the front.  Does not
    /// include the head.
    pub(super) body: VecDeque<Tile>,

    /// The number of tiles the snake is growing toward, head included
    pub(super) target_len: usize,

    /// The direction the snake is travelling in; `None` until the first turn
    /// of the game
    pub(super) heading: Option<Direction>,
}

impl Snake {
    /// Create a snake in the fixed starting configuration: head at (9, 8)
    /// with the body extending left, not yet moving.
    pub(super) fn starting() -> Snake {
        let head = Tile::new(9, 8);
        let body = (1..consts::INITIAL_SNAKE_LENGTH)
            .rev()
            .filter_map(|i| i16::try_from(i).ok())
            .map(|i| Tile::new(head.x - i, head.y))
            .collect();
        Snake {
            head,
            body,
            target_len: consts::INITIAL_SNAKE_LENGTH,
            heading: None,
        }
    }

    pub(super) fn head(&self) -> Tile {
        self.head
    }

    /// Return the glyph to use for drawing the snake's head
    pub(super) fn head_symbol(&self) -> char {
        match self.heading {
            Some(Direction::North) => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Some(Direction::South) => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Some(Direction::East) => consts::SNAKE_HEAD_EAST_SYMBOL,
            Some(Direction::West) => consts::SNAKE_HEAD_WEST_SYMBOL,
            None => consts::SNAKE_HEAD_IDLE_SYMBOL,
        }
    }

    pub(super) fn body(&self) -> &VecDeque<Tile> {
        &self.body
    }

    pub(super) fn target_len(&self) -> usize {
        self.target_len
    }

    /// Request a change of heading, subject to the no-reversal rule
    pub(super) fn turn(&mut self, requested: Direction) {
        self.heading = direction::steer(self.heading, requested);
    }

    /// Move the snake forwards one tile in the current heading, trimming the
    /// tail to the target length.  Does nothing before the first turn.
    pub(super) fn advance(&mut self) {
        let Some(heading) = self.heading else {
            return;
        };
        self.body.push_back(self.head);
        self.head = self.head + heading;
        while self.body.len() + 1 > self.target_len {
            let _ = self.body.pop_front();
        }
    }

    /// Extend the snake's target length in response to eating an apple
    pub(super) fn grow(&mut self) {
        self.target_len += 1;
    }

    pub(super) fn occupies(&self, tile: Tile) -> bool {
        self.head == tile || self.body.contains(&tile)
    }

    /// True iff the head has run into the body
    pub(super) fn overlaps_head(&self) -> bool {
        self.body.contains(&self.head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_configuration() {
        let snake = Snake::starting();
        assert_eq!(snake.head(), Tile::new(9, 8));
        assert_eq!(
            snake.body,
            VecDeque::from([Tile::new(6, 8), Tile::new(7, 8), Tile::new(8, 8)])
        );
        assert_eq!(snake.target_len(), 4);
        assert_eq!(snake.heading, None);
        assert!(!snake.overlaps_head());
    }

    #[test]
    fn advance_without_heading_is_noop() {
        let mut snake = Snake::starting();
        let before = snake.clone();
        snake.advance();
        assert_eq!(snake, before);
    }

    #[test]
    fn advance_east_drops_tail() {
        let mut snake = Snake::starting();
        snake.turn(Direction::East);
        snake.advance();
        assert_eq!(snake.head(), Tile::new(10, 8));
        assert_eq!(
            snake.body,
            VecDeque::from([Tile::new(7, 8), Tile::new(8, 8), Tile::new(9, 8)])
        );
    }

    #[test]
    fn growth_skips_one_trim() {
        let mut snake = Snake::starting();
        snake.turn(Direction::East);
        snake.advance();
        snake.grow();
        assert_eq!(snake.target_len(), 5);
        snake.advance();
        assert_eq!(snake.head(), Tile::new(11, 8));
        assert_eq!(
            snake.body,
            VecDeque::from([
                Tile::new(7, 8),
                Tile::new(8, 8),
                Tile::new(9, 8),
                Tile::new(10, 8),
            ])
        );
    }

    #[test]
    fn body_never_exceeds_target_len() {
        let mut snake = Snake::starting();
        snake.turn(Direction::East);
        for _ in 0..10 {
            snake.advance();
            assert!(snake.body.len() + 1 <= snake.target_len());
        }
    }

    #[test]
    fn reversal_is_rejected() {
        let mut snake = Snake::starting();
        snake.turn(Direction::East);
        snake.advance();
        snake.turn(Direction::West);
        assert_eq!(snake.heading, Some(Direction::East));
        snake.advance();
        assert_eq!(snake.head(), Tile::new(11, 8));
    }

    #[test]
    fn occupies_head_and_body() {
        let snake = Snake::starting();
        assert!(snake.occupies(Tile::new(9, 8)));
        assert!(snake.occupies(Tile::new(6, 8)));
        assert!(!snake.occupies(Tile::new(10, 8)));
    }
}
