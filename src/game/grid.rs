use super::direction::Direction;
use ratatui::layout::Size;
use std::ops::Add;

/// A position in tile units.  The playing field proper is 1-based; signed
/// coordinates let a position step outside it transiently, between a move and
/// the boundary check.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Tile {
    pub(super) x: i16,
    pub(super) y: i16,
}

impl Tile {
    pub(super) const fn new(x: i16, y: i16) -> Tile {
        Tile { x, y }
    }
}

impl Add<Direction> for Tile {
    type Output = Tile;

    fn add(self, d: Direction) -> Tile {
        let (dx, dy) = d.delta();
        Tile::new(self.x + dx, self.y + dy)
    }
}

/// The playing field: tiles with coordinates in `[1, cols] × [1, rows]`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Grid {
    pub(super) cols: i16,
    pub(super) rows: i16,
}

impl Grid {
    /// The board every game is played on.  19 rows is as tall as an 80×24
    /// terminal allows once the score bar and message lines have their share.
    pub(super) const STANDARD: Grid = Grid { cols: 33, rows: 19 };

    pub(super) fn contains(self, tile: Tile) -> bool {
        (1..=self.cols).contains(&tile.x) && (1..=self.rows).contains(&tile.y)
    }

    pub(super) fn tiles(self) -> impl Iterator<Item = Tile> {
        let cols = self.cols;
        (1..=self.rows).flat_map(move |y| (1..=cols).map(move |x| Tile::new(x, y)))
    }

    pub(super) fn size(self) -> Size {
        Size {
            width: self.cols.unsigned_abs(),
            height: self.rows.unsigned_abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Tile::new(2, 7), Direction::North, Tile::new(2, 6))]
    #[case(Tile::new(2, 7), Direction::South, Tile::new(2, 8))]
    #[case(Tile::new(2, 7), Direction::East, Tile::new(3, 7))]
    #[case(Tile::new(2, 7), Direction::West, Tile::new(1, 7))]
    #[case(Tile::new(1, 1), Direction::North, Tile::new(1, 0))]
    #[case(Tile::new(1, 1), Direction::West, Tile::new(0, 1))]
    fn test_tile_add(#[case] tile: Tile, #[case] d: Direction, #[case] after: Tile) {
        assert_eq!(tile + d, after);
    }

    #[rstest]
    #[case(Tile::new(1, 1), true)]
    #[case(Tile::new(33, 19), true)]
    #[case(Tile::new(9, 8), true)]
    #[case(Tile::new(0, 8), false)]
    #[case(Tile::new(34, 8), false)]
    #[case(Tile::new(9, 0), false)]
    #[case(Tile::new(9, 20), false)]
    #[case(Tile::new(-1, -1), false)]
    fn test_standard_contains(#[case] tile: Tile, #[case] inside: bool) {
        assert_eq!(Grid::STANDARD.contains(tile), inside);
    }

    #[test]
    fn test_tiles_cover_grid() {
        let grid = Grid { cols: 3, rows: 2 };
        let tiles = grid.tiles().collect::<Vec<_>>();
        assert_eq!(
            tiles,
            vec![
                Tile::new(1, 1),
                Tile::new(2, 1),
                Tile::new(3, 1),
                Tile::new(1, 2),
                Tile::new(2, 2),
                Tile::new(3, 2),
            ]
        );
        assert!(tiles.iter().all(|&t| grid.contains(t)));
    }
}
