//! Top-level GUI elements and functionality.

pub mod transforms;

use anyhow::{anyhow, Error};
use eframe::egui::{self, Color32, Painter, Rounding, Stroke, Ui};
use log::info;

use crate::level::Level;
use crate::surface::Surface;

use self::transforms::Transform;

/// A [`Surface`] that paints level pixels onto an egui [`Painter`].
///
/// Rectangles are outlined with a thin black stroke until [`Surface::no_stroke`] is called.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    level_to_screen: Transform,
    fill: Color32,
    stroke: Stroke,
}

impl<'a> PainterSurface<'a> {
    /// Create a surface that maps level pixels through `level_to_screen`
    pub fn new(painter: &'a Painter, level_to_screen: Transform) -> Self {
        Self {
            painter,
            level_to_screen,
            fill: Color32::WHITE,
            stroke: Stroke::new(1.0, Color32::BLACK),
        }
    }
}

impl Surface for PainterSurface<'_> {
    fn fill(&mut self, color: Color32) {
        self.fill = color;
    }

    fn no_stroke(&mut self) {
        self.stroke = Stroke::NONE;
    }

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, corner_radius: f32) {
        self.painter.rect(
            self.level_to_screen.map_rect(x, y, w, h),
            Rounding::same(self.level_to_screen.map_dist(corner_radius)),
            self.fill,
            self.stroke,
        );
    }
}

/// Launches the GUI application. Blocks until the application has quit.
pub fn run_gui(level: Level) -> Result<(), Error> {
    info!(
        "Showing level {:?} ({}x{} px)",
        level.name(),
        level.pixel_width(),
        level.pixel_height()
    );
    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Maze level",
        native_options,
        Box::new(|_cc| Box::new(App::new(level))),
    )
    .map_err(|e| anyhow!("eframe::run_native error: {e}"))
}

struct App {
    level: Level,
    pointer_pos: String,
}

impl App {
    fn new(level: Level) -> Self {
        Self {
            level,
            pointer_pos: String::new(),
        }
    }

    fn draw_level(&mut self, ctx: &egui::Context, ui: &mut Ui) {
        let level_to_screen =
            Transform::level_to_screen(&self.level, ui.available_rect_before_wrap());

        self.pointer_pos = match ctx.pointer_latest_pos() {
            None => "".to_string(),
            Some(pos) => {
                let pos = level_to_screen.inverse().map_point(pos);
                let ts = self.level.tile_size() as f32;
                let (row, col) = ((pos.y / ts).floor() as i32, (pos.x / ts).floor() as i32);
                match self.level.get(row, col) {
                    Some(tile) => format!("({row}, {col}) {tile:?}"),
                    None => "".to_string(),
                }
            }
        };

        let mut surface = PainterSurface::new(ui.painter(), level_to_screen);
        self.level.draw(&mut surface);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("level_info").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.level.name());
                ui.separator();
                ui.label(self.pointer_pos.as_str());
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_level(ctx, ui);
        });
    }
}
