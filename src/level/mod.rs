//! Level grid structs and utilities.

use anyhow::{ensure, Error};
use log::{debug, warn};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::surface::{Surface, FLOOR_COLOR, GOAL_INSET, GOAL_ROUNDING, WALL_COLOR};

pub mod description;

use description::{LevelDescription, Run};

/// A location on a [`Level`] grid
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Row - increases downwards
    #[serde(rename = "r")]
    pub row: i32,
    /// Column - increases to the right
    #[serde(rename = "c")]
    pub col: i32,
}

impl Location {
    /// Create a new Location
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Enum for [`Level`] cell values.
///
/// The integer codes match the ones used by level files. `2` is reserved and never produced.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Hash, IntoPrimitive, TryFromPrimitive, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum TileCode {
    /// Walkable space
    Floor = 0,
    /// Solid wall
    Wall = 1,
    /// Level objective
    Goal = 3,
}

/// A 2D grid of [`TileCode`]s, indexed by `grid[row][col]`
pub type Grid = Vec<Vec<TileCode>>;

/// A static maze level built from a [`LevelDescription`].
///
/// # Examples
///
/// ```
/// use maze_level::level::{Level, Location, TileCode};
/// use maze_level::level::description::{LevelDescription, WallsDescription};
///
/// let description = LevelDescription {
///     name: "Tiny".to_string(),
///     rows: 5,
///     cols: 5,
///     walls: WallsDescription { border: true, lines: vec![] },
///     start: Location::new(2, 2),
///     goal: Location::new(1, 1),
/// };
/// let level = Level::new(&description, 32).unwrap();
///
/// assert_eq!(level.pixel_width(), 160);
/// assert!(level.is_wall(0, 0));
/// assert!(level.is_goal(1, 1));
/// assert_eq!(level.tile_at(2, 2), TileCode::Floor);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    name: String,
    tile_size: u32,
    grid: Grid,
    start: Location,
    goal: Location,
}

impl Level {
    /// Build a level from its description.
    ///
    /// Fails if the description does not pass [`LevelDescription::validate`], `tile_size` is zero,
    /// or the level would be too large to measure in `u32` pixels.
    pub fn new(description: &LevelDescription, tile_size: u32) -> Result<Self, Error> {
        ensure!(tile_size > 0, "tile_size must be greater than zero");
        description.validate()?;
        for (field, tiles) in [("cols", description.cols), ("rows", description.rows)] {
            let pixels = u32::try_from(tiles)
                .ok()
                .and_then(|tiles| tiles.checked_mul(tile_size));
            ensure!(
                pixels.is_some(),
                "{field} * tile_size ({tiles} * {tile_size}) does not fit in u32 pixels"
            );
        }

        let name = if description.name.is_empty() {
            description::DEFAULT_NAME.to_string()
        } else {
            description.name.clone()
        };

        let mut level = Self {
            name,
            tile_size,
            grid: vec![vec![TileCode::Floor; description.cols]; description.rows],
            start: description.start,
            goal: description.goal,
        };

        if description.walls.border {
            level.add_border_walls();
        }

        for (i, line) in description.walls.lines.iter().enumerate() {
            let runs = line.runs(i)?;
            if runs.len() > 1 {
                warn!(
                    "{}: walls.lines[{i}] has both r and c, stamping both runs",
                    level.name
                );
            }
            for run in runs {
                match run {
                    Run::Horizontal(r, c1, c2) => level.add_h_line(r, c1, c2),
                    Run::Vertical(c, r1, r2) => level.add_v_line(c, r1, r2),
                }
            }
        }

        // start is always walkable, and the goal wins if they coincide
        level.set(level.start, TileCode::Floor);
        level.set(level.goal, TileCode::Goal);

        debug!(
            "Built level {:?}: {}x{} tiles, {} wall lines",
            level.name,
            level.rows(),
            level.cols(),
            description.walls.lines.len()
        );

        Ok(level)
    }

    fn set(&mut self, p: Location, value: TileCode) {
        self.grid[p.row as usize][p.col as usize] = value;
    }

    fn add_border_walls(&mut self) {
        let (rows, cols) = (self.rows(), self.cols());
        for col in 0..cols {
            self.grid[0][col] = TileCode::Wall;
            self.grid[rows - 1][col] = TileCode::Wall;
        }
        for row in &mut self.grid {
            row[0] = TileCode::Wall;
            row[cols - 1] = TileCode::Wall;
        }
    }

    /// Clip the inclusive range `first..=last` to `0..len`; empty when reversed or fully outside.
    fn clip(first: i32, last: i32, len: usize) -> std::ops::RangeInclusive<i32> {
        let max = i32::try_from(len).unwrap_or(i32::MAX) - 1;
        first.max(0)..=last.min(max)
    }

    fn add_h_line(&mut self, row: i32, c1: i32, c2: i32) {
        if !self.in_bounds(row, 0) {
            return;
        }
        for col in Self::clip(c1, c2, self.cols()) {
            self.set(Location::new(row, col), TileCode::Wall);
        }
    }

    fn add_v_line(&mut self, col: i32, r1: i32, r2: i32) {
        if !self.in_bounds(0, col) {
            return;
        }
        for row in Self::clip(r1, r2, self.rows()) {
            self.set(Location::new(row, col), TileCode::Wall);
        }
    }

    /// The display label
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Edge length of one tile, in pixels
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// The spawn location; always a [`TileCode::Floor`]
    pub fn start(&self) -> Location {
        self.start
    }

    /// The objective location; always a [`TileCode::Goal`]
    pub fn goal(&self) -> Location {
        self.goal
    }

    /// Returns the underlying [`Grid`].
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the grid as raw tile codes, as used by level files.
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_level::standard_levels::StandardLevel;
    ///
    /// let level = StandardLevel::Open.compute_level(16);
    /// let codes = level.tile_codes();
    /// assert_eq!(codes[0][0], 1);
    /// assert!(codes.iter().flatten().all(|&code| code != 2));
    /// ```
    pub fn tile_codes(&self) -> Vec<Vec<u8>> {
        self.grid
            .iter()
            .map(|row| row.iter().map(|&tile| tile.into()).collect())
            .collect()
    }

    /// Number of rows of tiles
    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    /// Number of columns of tiles
    pub fn cols(&self) -> usize {
        self.grid[0].len()
    }

    /// Width of the level, in pixels; checked to fit when the level was built
    pub fn pixel_width(&self) -> u32 {
        self.cols() as u32 * self.tile_size
    }

    /// Height of the level, in pixels; checked to fit when the level was built
    pub fn pixel_height(&self) -> u32 {
        self.rows() as u32 * self.tile_size
    }

    /// Returns whether `(row, col)` lies inside the grid
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows() && (col as usize) < self.cols()
    }

    /// Returns the tile at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is not [`in_bounds`](Self::in_bounds). See [`get`](Self::get) for a
    /// checked version.
    pub fn tile_at(&self, row: i32, col: i32) -> TileCode {
        assert!(
            self.in_bounds(row, col),
            "({row}, {col}) is outside the {}x{} grid",
            self.rows(),
            self.cols()
        );
        self.grid[row as usize][col as usize]
    }

    /// Returns the tile at `(row, col)`, or `None` if the location is out of bounds
    ///
    /// # Examples
    ///
    /// ```
    /// use maze_level::level::TileCode;
    /// use maze_level::standard_levels::StandardLevel;
    ///
    /// let level = StandardLevel::Open.compute_level(16);
    /// assert_eq!(level.get(0, 0), Some(TileCode::Wall));
    /// assert_eq!(level.get(-1, 0), None);
    /// ```
    pub fn get(&self, row: i32, col: i32) -> Option<TileCode> {
        if self.in_bounds(row, col) {
            Some(self.grid[row as usize][col as usize])
        } else {
            None
        }
    }

    /// Returns whether there is a wall at `(row, col)`; same precondition as [`tile_at`](Self::tile_at)
    pub fn is_wall(&self, row: i32, col: i32) -> bool {
        self.tile_at(row, col) == TileCode::Wall
    }

    /// Returns whether the goal is at `(row, col)`; same precondition as [`tile_at`](Self::tile_at)
    pub fn is_goal(&self, row: i32, col: i32) -> bool {
        self.tile_at(row, col) == TileCode::Goal
    }

    /// Paint every tile onto `surface`, row by row.
    ///
    /// Walls get a dark fill and everything else a light one. Goal tiles additionally get an
    /// inset, rounded, translucent highlight, which never extends past its tile.
    pub fn draw(&self, surface: &mut impl Surface) {
        let ts = self.tile_size as f32;
        let inset = GOAL_INSET.min(ts / 2.0);
        let highlight = ts - 2.0 * inset;
        for (row, tiles) in self.grid.iter().enumerate() {
            for (col, &tile) in tiles.iter().enumerate() {
                let (x, y) = (col as f32 * ts, row as f32 * ts);

                surface.fill(if tile == TileCode::Wall {
                    WALL_COLOR
                } else {
                    FLOOR_COLOR
                });
                surface.rect(x, y, ts, ts, 0.0);

                if tile == TileCode::Goal {
                    surface.no_stroke();
                    surface.fill(crate::surface::goal_highlight_color());
                    surface.rect(x + inset, y + inset, highlight, highlight, GOAL_ROUNDING);
                }
            }
        }
    }
}
