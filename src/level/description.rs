//! Declarative level descriptions, as read from level files.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Error};
use serde::{Deserialize, Deserializer, Serialize};

use crate::level::Location;

/// Label used when a description has no name, or an empty one
pub const DEFAULT_NAME: &str = "Level";

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

/// Accepts a missing, `null` or empty name as [`DEFAULT_NAME`]
fn deserialize_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?
        .filter(|name| !name.is_empty())
        .unwrap_or_else(default_name))
}

/// The declarative input a [`Level`](crate::level::Level) is built from.
///
/// # Examples
///
/// ```
/// use maze_level::level::description::LevelDescription;
///
/// let description = LevelDescription::from_json_str(
///     r#"{ "rows": 5, "cols": 5, "start": { "r": 2, "c": 2 }, "goal": { "r": 1, "c": 1 } }"#,
/// )
/// .unwrap();
/// assert_eq!(description.name, "Level");
/// assert!(description.walls.lines.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDescription {
    /// Display label
    #[serde(default = "default_name", deserialize_with = "deserialize_name")]
    pub name: String,
    /// Number of rows in the grid
    pub rows: usize,
    /// Number of columns in the grid
    pub cols: usize,
    /// Wall placement
    #[serde(default)]
    pub walls: WallsDescription,
    /// Spawn location
    pub start: Location,
    /// Objective location
    pub goal: Location,
}

/// Border and interior wall placement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallsDescription {
    /// Whether to surround the grid with a one tile thick ring of walls
    #[serde(default)]
    pub border: bool,
    /// Wall runs, applied in order
    #[serde(default)]
    pub lines: Vec<WallLine>,
}

/// A run of wall tiles.
///
/// An entry with `r` is a horizontal run on row `r` from column `c1` to `c2`, inclusive.
/// An entry with `c` is a vertical run on column `c` from row `r1` to `r2`, inclusive.
/// Level files in the wild sometimes set both; in that case both runs are stamped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallLine {
    /// Row of a horizontal run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<i32>,
    /// First column of a horizontal run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c1: Option<i32>,
    /// Last column of a horizontal run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c2: Option<i32>,
    /// Column of a vertical run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c: Option<i32>,
    /// First row of a vertical run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r1: Option<i32>,
    /// Last row of a vertical run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r2: Option<i32>,
}

/// A validated wall run, with the axis resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Run {
    /// Row, first column, last column
    Horizontal(i32, i32, i32),
    /// Column, first row, last row
    Vertical(i32, i32, i32),
}

impl WallLine {
    /// Create a horizontal run on row `r`
    pub fn horizontal(r: i32, c1: i32, c2: i32) -> Self {
        Self {
            r: Some(r),
            c1: Some(c1),
            c2: Some(c2),
            ..Default::default()
        }
    }

    /// Create a vertical run on column `c`
    pub fn vertical(c: i32, r1: i32, r2: i32) -> Self {
        Self {
            c: Some(c),
            r1: Some(r1),
            r2: Some(r2),
            ..Default::default()
        }
    }

    /// Resolve the runs this entry stamps, in stamping order.
    ///
    /// `index` is the position of the entry in `walls.lines`, used for error messages.
    pub(crate) fn runs(&self, index: usize) -> Result<Vec<Run>, Error> {
        let missing = |field: &str| anyhow!("walls.lines[{index}] is missing {field}");

        let mut runs = Vec::with_capacity(2);
        if let Some(r) = self.r {
            let c1 = self.c1.ok_or_else(|| missing("c1"))?;
            let c2 = self.c2.ok_or_else(|| missing("c2"))?;
            runs.push(Run::Horizontal(r, c1, c2));
        }
        if let Some(c) = self.c {
            let r1 = self.r1.ok_or_else(|| missing("r1"))?;
            let r2 = self.r2.ok_or_else(|| missing("r2"))?;
            runs.push(Run::Vertical(c, r1, r2));
        }
        if runs.is_empty() {
            bail!("walls.lines[{index}] has neither r nor c");
        }
        Ok(runs)
    }
}

impl LevelDescription {
    /// Parse a description from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).context("Invalid level description")
    }

    /// Read a description from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .with_context(|| format!("Could not open level file {}", path.display()))?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Invalid level description in {}", path.display()))
    }

    fn in_bounds(&self, p: Location) -> bool {
        p.row >= 0 && p.col >= 0 && (p.row as usize) < self.rows && (p.col as usize) < self.cols
    }

    /// Checks that a level can be built from this description.
    ///
    /// A valid description must satisfy the following conditions:
    /// - `rows` and `cols` are both positive.
    /// - `start` and `goal` are inside the grid.
    /// - Every wall line names an axis and both endpoints for it.
    ///
    /// Wall line endpoints may lie outside the grid; the out of range part of the run is skipped.
    pub fn validate(&self) -> Result<(), Error> {
        if self.rows == 0 {
            bail!("rows must be greater than zero");
        }
        if self.cols == 0 {
            bail!("cols must be greater than zero");
        }
        for (field, p) in [("start", self.start), ("goal", self.goal)] {
            if !self.in_bounds(p) {
                bail!(
                    "{field} ({}, {}) is outside the {}x{} grid",
                    p.row,
                    p.col,
                    self.rows,
                    self.cols
                );
            }
        }
        for (i, line) in self.walls.lines.iter().enumerate() {
            line.runs(i)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn description() -> LevelDescription {
        LevelDescription {
            name: default_name(),
            rows: 5,
            cols: 5,
            walls: WallsDescription::default(),
            start: Location::new(2, 2),
            goal: Location::new(1, 1),
        }
    }

    #[test]
    fn parse_full_description() {
        let d = LevelDescription::from_json_str(
            r#"{
                "name": "Hallway",
                "rows": 7,
                "cols": 9,
                "walls": {
                    "border": true,
                    "lines": [
                        { "r": 3, "c1": 1, "c2": 6 },
                        { "c": 4, "r1": 1, "r2": 2 }
                    ]
                },
                "start": { "r": 1, "c": 1 },
                "goal": { "r": 5, "c": 7 }
            }"#,
        )
        .unwrap();

        assert_eq!(d.name, "Hallway");
        assert_eq!((d.rows, d.cols), (7, 9));
        assert!(d.walls.border);
        assert_eq!(
            d.walls.lines,
            vec![WallLine::horizontal(3, 1, 6), WallLine::vertical(4, 1, 2)]
        );
        assert_eq!(d.start, Location::new(1, 1));
        assert_eq!(d.goal, Location::new(5, 7));
    }

    #[test]
    fn parse_defaults() {
        let d = LevelDescription::from_json_str(
            r#"{ "rows": 3, "cols": 4, "walls": {}, "start": { "r": 0, "c": 0 }, "goal": { "r": 2, "c": 3 } }"#,
        )
        .unwrap();
        assert_eq!(d.name, "Level");
        assert!(!d.walls.border);
        assert!(d.walls.lines.is_empty());
    }

    #[test]
    fn parse_null_or_empty_name() {
        for name in ["null", "\"\""] {
            let d = LevelDescription::from_json_str(&format!(
                r#"{{ "name": {name}, "rows": 2, "cols": 2, "start": {{ "r": 0, "c": 0 }}, "goal": {{ "r": 1, "c": 1 }} }}"#
            ))
            .unwrap();
            assert_eq!(d.name, "Level", "name: {name}");
        }
    }

    #[test]
    fn parse_missing_field() {
        let v = LevelDescription::from_json_str(r#"{ "rows": 3, "cols": 4, "start": { "r": 0, "c": 0 } }"#);
        assert!(v.is_err());
        assert!(format!("{:#}", v.unwrap_err()).contains("missing field `goal`"));
    }

    #[test]
    fn load_bundled_level() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/levels/hallway.json");
        let d = LevelDescription::load(path).unwrap();
        assert_eq!(d.name, "Hallway");
        assert_eq!(d.walls.lines.len(), 2);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn load_missing_file() {
        let v = LevelDescription::load("this/level/does/not/exist.json");
        assert!(v.is_err());
        assert!(format!("{}", v.unwrap_err()).starts_with("Could not open level file"));
    }

    #[test]
    fn valid_description() {
        assert!(description().validate().is_ok());
    }

    #[test]
    fn validation_zero_rows() {
        let mut d = description();
        d.rows = 0;

        let v = d.validate();
        assert!(v.is_err());
        assert_eq!(format!("{}", v.unwrap_err()), "rows must be greater than zero");
    }

    #[test]
    fn validation_zero_cols() {
        let mut d = description();
        d.cols = 0;

        let v = d.validate();
        assert!(v.is_err());
        assert_eq!(format!("{}", v.unwrap_err()), "cols must be greater than zero");
    }

    #[test]
    fn validation_start_out_of_bounds() {
        let mut d = description();
        d.start = Location::new(5, 0);

        let v = d.validate();
        assert!(v.is_err());
        assert_eq!(
            format!("{}", v.unwrap_err()),
            "start (5, 0) is outside the 5x5 grid"
        );
    }

    #[test]
    fn validation_goal_negative() {
        let mut d = description();
        d.goal = Location::new(0, -1);

        let v = d.validate();
        assert!(v.is_err());
        assert_eq!(
            format!("{}", v.unwrap_err()),
            "goal (0, -1) is outside the 5x5 grid"
        );
    }

    #[test]
    fn validation_line_without_axis() {
        let mut d = description();
        d.walls.lines.push(WallLine::horizontal(1, 0, 4));
        d.walls.lines.push(WallLine {
            c1: Some(0),
            c2: Some(2),
            ..Default::default()
        });

        let v = d.validate();
        assert!(v.is_err());
        assert_eq!(
            format!("{}", v.unwrap_err()),
            "walls.lines[1] has neither r nor c"
        );
    }

    #[test]
    fn validation_line_missing_endpoint() {
        let mut d = description();
        d.walls.lines.push(WallLine {
            c: Some(3),
            r1: Some(0),
            ..Default::default()
        });

        let v = d.validate();
        assert!(v.is_err());
        assert_eq!(format!("{}", v.unwrap_err()), "walls.lines[0] is missing r2");
    }

    #[test]
    fn validation_allows_out_of_range_lines() {
        let mut d = description();
        d.walls.lines.push(WallLine::horizontal(2, 1, 10));
        d.walls.lines.push(WallLine::vertical(-3, 0, 4));
        assert!(d.validate().is_ok());
    }

    #[test]
    fn runs_for_both_axes() {
        let line = WallLine {
            r: Some(0),
            c1: Some(0),
            c2: Some(0),
            c: Some(0),
            r1: Some(0),
            r2: Some(0),
        };
        assert_eq!(
            line.runs(0).unwrap(),
            vec![Run::Horizontal(0, 0, 0), Run::Vertical(0, 0, 0)]
        );
    }
}
