#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The tile-space offset of one step in this direction
    pub(super) fn delta(self) -> (i16, i16) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    pub(super) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

/// Resolve a requested turn against the current heading.  A request for the
/// exact reverse of a non-`None` heading is rejected (the heading is returned
/// unchanged); anything else, including any first move from `None`, is
/// accepted.
pub(super) fn steer(heading: Option<Direction>, requested: Direction) -> Option<Direction> {
    if heading == Some(requested.reverse()) {
        heading
    } else {
        Some(requested)
    }
}
