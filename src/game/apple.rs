use super::grid::{Grid, Tile};
use super::snake::Snake;
use rand::{seq::IteratorRandom, Rng};

/// The current apple, occupying a single tile.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Apple {
    pub(super) pos: Tile,
}

impl Apple {
    /// Place an apple uniformly at random on a tile not occupied by the
    /// snake.  Returns `None` when the snake has filled the board.
    pub(super) fn place<R: Rng>(grid: Grid, snake: &Snake, rng: &mut R) -> Option<Apple> {
        grid.tiles()
            .filter(|&tile| !snake.occupies(tile))
            .choose(rng)
            .map(|pos| Apple { pos })
    }

    pub(super) fn pos(&self) -> Tile {
        self.pos
    }
}
