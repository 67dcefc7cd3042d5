//! A set of pre-made general purpose levels

use serde::{Deserialize, Serialize};

use crate::level::description::{LevelDescription, WallLine, WallsDescription};
use crate::level::{Level, Location};

/// Pre-made levels
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum StandardLevel {
    /// A walled 8x8 room with nothing inside
    Open,
    /// A 12x16 room split by alternating walls the player has to weave through
    #[default]
    Corridors,
    /// A 9x9 room with a cross of walls and a gap in each arm
    Cross,
}

impl StandardLevel {
    /// Get a list of all available levels
    pub fn get_all() -> [Self; 3] {
        [Self::Open, Self::Corridors, Self::Cross]
    }

    /// Get the [`LevelDescription`] associated with this enum
    pub fn description(&self) -> LevelDescription {
        match self {
            Self::Open => LevelDescription {
                name: "Open".to_string(),
                rows: 8,
                cols: 8,
                walls: WallsDescription {
                    border: true,
                    lines: vec![],
                },
                start: Location::new(1, 1),
                goal: Location::new(6, 6),
            },
            Self::Corridors => LevelDescription {
                name: "Corridors".to_string(),
                rows: 12,
                cols: 16,
                walls: WallsDescription {
                    border: true,
                    lines: vec![
                        WallLine::vertical(3, 1, 8),
                        WallLine::vertical(6, 3, 10),
                        WallLine::vertical(9, 1, 8),
                        WallLine::vertical(12, 3, 10),
                        WallLine::horizontal(7, 13, 13),
                    ],
                },
                start: Location::new(1, 1),
                goal: Location::new(10, 14),
            },
            Self::Cross => LevelDescription {
                name: "Cross".to_string(),
                rows: 9,
                cols: 9,
                walls: WallsDescription {
                    border: true,
                    lines: vec![
                        WallLine::horizontal(4, 0, 1),
                        WallLine::horizontal(4, 3, 5),
                        WallLine::horizontal(4, 7, 8),
                        WallLine::vertical(4, 0, 1),
                        WallLine::vertical(4, 7, 8),
                    ],
                },
                start: Location::new(1, 1),
                goal: Location::new(7, 7),
            },
        }
    }

    /// Get the [`Level`] associated with this enum
    pub fn compute_level(&self, tile_size: u32) -> Level {
        Level::new(&self.description(), tile_size).expect("Failed to compute a StandardLevel")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Flood fill over non-wall tiles from the start of `level`
    fn reachable_from_start(level: &Level) -> HashSet<Location> {
        let mut visited = HashSet::new();
        let mut queue = vec![level.start()];
        while let Some(p) = queue.pop() {
            if !level.in_bounds(p.row, p.col) || level.is_wall(p.row, p.col) || !visited.insert(p) {
                continue;
            }
            queue.push(Location::new(p.row + 1, p.col));
            queue.push(Location::new(p.row - 1, p.col));
            queue.push(Location::new(p.row, p.col + 1));
            queue.push(Location::new(p.row, p.col - 1));
        }
        visited
    }

    #[test]
    fn standard_levels_solvable() {
        for standard in StandardLevel::get_all() {
            let level = standard.compute_level(8);
            assert!(
                reachable_from_start(&level).contains(&level.goal()),
                "{standard:?} goal is not reachable"
            );
        }
    }

    #[test]
    fn corridors_is_not_a_straight_line() {
        // column 3 blocks row 1, so the player has to go around it
        let level = StandardLevel::Corridors.compute_level(8);
        assert!(level.is_wall(1, 3));
        assert!(!level.is_wall(9, 3));
        assert!(!level.is_wall(1, 12));
        assert!(level.is_wall(10, 12));
    }

    #[test]
    fn valid_standard_levels() {
        for level in StandardLevel::get_all() {
            assert!(level.description().validate().is_ok(), "{level:?}");
        }
    }

    #[test]
    fn compute_standard_levels() {
        for standard in StandardLevel::get_all() {
            let level = standard.compute_level(32);
            let description = standard.description();
            assert_eq!(level.rows(), description.rows);
            assert_eq!(level.cols(), description.cols);
            assert!(level.is_goal(description.goal.row, description.goal.col));
            assert!(!level.is_wall(description.start.row, description.start.col));
        }
    }

    #[test]
    fn cross_has_gaps() {
        let level = StandardLevel::Cross.compute_level(32);
        assert!(level.is_wall(4, 4));
        assert!(!level.is_wall(4, 2));
        assert!(!level.is_wall(4, 6));
        assert!(!level.is_wall(2, 4));
        assert!(!level.is_wall(6, 4));
    }
}
