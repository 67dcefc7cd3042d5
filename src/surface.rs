//! The drawing capability a [`Level`](crate::level::Level) paints onto.

use eframe::egui::Color32;

/// Base fill for wall tiles
pub const WALL_COLOR: Color32 = Color32::from_rgb(30, 50, 60);
/// Base fill for floor and goal tiles
pub const FLOOR_COLOR: Color32 = Color32::from_gray(232);

/// How far the goal overlay is inset from each edge of its tile, in pixels
pub const GOAL_INSET: f32 = 4.0;
/// Corner radius of the goal overlay, in pixels
pub const GOAL_ROUNDING: f32 = 6.0;

/// Translucent overlay drawn on top of goal tiles
pub fn goal_highlight_color() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 200, 120, 200)
}

/// A 2D drawing surface with an immediate-mode fill and stroke state.
///
/// Coordinates are in level pixels, with the origin at the top left of the level.
pub trait Surface {
    /// Set the fill used by subsequent rectangles
    fn fill(&mut self, color: Color32);

    /// Stop outlining subsequent rectangles
    fn no_stroke(&mut self);

    /// Draw a filled rectangle with its top left corner at `(x, y)`
    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, corner_radius: f32);
}
