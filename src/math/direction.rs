//! Lattice directions and the fixed flood-fill neighbour order.

use crate::core::types::IVec3;

/// One of the six axis-aligned lattice directions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    /// -Z
    North,
    /// +X
    East,
    /// +Z
    South,
    /// -X
    West,
    /// +Y
    Up,
    /// -Y
    Down,
}

/// Neighbour enumeration order shared by every flood fill.
pub const RECURSE_DIRECTIONS: [Direction; 6] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
    Direction::Up,
    Direction::Down,
];

impl Direction {
    /// Unit offset for this direction
    pub const fn offset(self) -> IVec3 {
        match self {
            Direction::North => IVec3::new(0, 0, -1),
            Direction::East => IVec3::new(1, 0, 0),
            Direction::South => IVec3::new(0, 0, 1),
            Direction::West => IVec3::new(-1, 0, 0),
            Direction::Up => IVec3::new(0, 1, 0),
            Direction::Down => IVec3::new(0, -1, 0),
        }
    }

    /// Direction pointing the other way
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub const fn is_horizontal(self) -> bool {
        !matches!(self, Direction::Up | Direction::Down)
    }
}

/// The six face neighbours of `pos`, in flood-fill order.
pub fn neighbours(pos: IVec3) -> impl Iterator<Item = IVec3> {
    RECURSE_DIRECTIONS.into_iter().map(move |d| pos + d.offset())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_unit_and_distinct() {
        let mut seen = std::collections::HashSet::new();
        for d in RECURSE_DIRECTIONS {
            let o = d.offset();
            assert_eq!(o.abs().element_sum(), 1);
            assert_eq!(o + d.opposite().offset(), IVec3::ZERO);
            assert!(seen.insert(o));
        }
    }

    #[test]
    fn test_neighbour_order() {
        let n: Vec<IVec3> = neighbours(IVec3::ZERO).collect();
        assert_eq!(n[0], IVec3::new(0, 0, -1));
        assert_eq!(n[1], IVec3::new(1, 0, 0));
        assert_eq!(n[4], IVec3::new(0, 1, 0));
        assert_eq!(n[5], IVec3::new(0, -1, 0));
    }
}
