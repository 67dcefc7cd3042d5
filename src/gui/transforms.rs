//! Transforms between coordinate systems (level pixels <=> screen pixels).

use eframe::egui::{Pos2, Rect};

use crate::level::Level;

/// A 2D transform consisting of per-axis scale and translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    scale_x: f32,
    scale_y: f32,
    offset_x: f32,
    offset_y: f32,
}

impl Transform {
    /// Creates a `Transform` that fits `src` inside `dst` with a uniform scale, centered, so the
    /// leftover space becomes padding on two opposite sides.
    ///
    /// # Examples
    ///
    /// ```
    /// use eframe::egui::{Pos2, Rect};
    /// use maze_level::gui::transforms::Transform;
    ///
    /// // a 200x100 level drawn into a 400x400 panel is scaled by 2 and centered vertically
    /// let level_to_screen = Transform::new_letterboxed(
    ///     Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(200.0, 100.0)),
    ///     Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(400.0, 400.0)),
    /// );
    /// assert_eq!(level_to_screen.map_point(Pos2::new(0.0, 0.0)), Pos2::new(0.0, 100.0));
    /// assert_eq!(level_to_screen.map_point(Pos2::new(200.0, 100.0)), Pos2::new(400.0, 300.0));
    /// ```
    pub fn new_letterboxed(src: Rect, dst: Rect) -> Self {
        let scale = (dst.width() / src.width()).min(dst.height() / src.height());
        let (src_center, dst_center) = (src.center(), dst.center());
        Self {
            scale_x: scale,
            scale_y: scale,
            offset_x: dst_center.x - src_center.x * scale,
            offset_y: dst_center.y - src_center.y * scale,
        }
    }

    /// Maps the whole of `level`, in level pixels, into `panel`.
    pub fn level_to_screen(level: &Level, panel: Rect) -> Self {
        let level_rect = Rect::from_min_max(
            Pos2::ZERO,
            Pos2::new(level.pixel_width() as f32, level.pixel_height() as f32),
        );
        Self::new_letterboxed(level_rect, panel)
    }

    /// Returns the inverse `Transform`.
    /// Panics if the transformation is not invertible.
    pub fn inverse(&self) -> Self {
        assert!(self.scale_x != 0.0);
        assert!(self.scale_y != 0.0);
        Self {
            scale_x: self.scale_x.recip(),
            scale_y: self.scale_y.recip(),
            offset_x: -self.offset_x / self.scale_x,
            offset_y: -self.offset_y / self.scale_y,
        }
    }

    /// Applies the transformation to a point.
    pub fn map_point(&self, p: Pos2) -> Pos2 {
        Pos2::new(
            p.x * self.scale_x + self.offset_x,
            p.y * self.scale_y + self.offset_y,
        )
    }

    /// Scales a horizontal distance.
    pub fn map_dist(&self, dist: f32) -> f32 {
        dist * self.scale_x.abs()
    }

    /// Maps the axis aligned rect with top left corner `(x, y)` and size `w` by `h`.
    pub fn map_rect(&self, x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::from_two_pos(
            self.map_point(Pos2::new(x, y)),
            self.map_point(Pos2::new(x + w, y + h)),
        )
    }
}
