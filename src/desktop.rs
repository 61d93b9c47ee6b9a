use eframe::egui;
use glam::Vec2;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::grid::{CellRect, DisplayArea};
use crate::scene::Scene;

/// Canvas over an egui painter, with the grid origin at `origin`.
pub struct PainterCanvas<'p> {
    painter: &'p egui::Painter,
    origin: egui::Pos2,
}

impl<'p> PainterCanvas<'p> {
    pub fn new(painter: &'p egui::Painter, origin: egui::Pos2) -> Self {
        Self { painter, origin }
    }

    fn to_screen(&self, rect: CellRect) -> egui::Rect {
        egui::Rect::from_min_size(
            self.origin + egui::vec2(rect.x, rect.y),
            egui::vec2(rect.w, rect.h),
        )
    }
}

impl Canvas for PainterCanvas<'_> {
    fn clear(&mut self, color: Color) {
        self.painter.rect_filled(self.painter.clip_rect(), 0.0, color);
    }

    fn draw_rect(&mut self, rect: CellRect, fill: Color) {
        self.painter.rect_filled(self.to_screen(rect), 0.0, fill);
    }

    fn draw_rect_outline(&mut self, rect: CellRect, line_width: f32, color: Color) {
        // egui centers strokes on the edge; shrink so the line sits inside the cell
        let screen = self.to_screen(rect).shrink(line_width * 0.5);
        self.painter
            .rect_stroke(screen, 0.0, egui::Stroke::new(line_width, color));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, font_size: f32, color: Color) {
        self.painter.text(
            self.origin + egui::vec2(pos.x, pos.y),
            egui::Align2::LEFT_TOP,
            text,
            egui::FontId::proportional(font_size),
            color.into(),
        );
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Color) {
        let points = [
            self.origin + egui::vec2(from.x, from.y),
            self.origin + egui::vec2(to.x, to.y),
        ];
        self.painter
            .line_segment(points, egui::Stroke::new(thickness, color));
    }
}

pub struct GridApp {
    scene: Scene,
    last_area: Option<DisplayArea>,
    frame_count: u64,
}

impl GridApp {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            last_area: None,
            frame_count: 0,
        }
    }
}

impl eframe::App for GridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            log::info!("Escape pressed, closing window");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let screen = ui.max_rect();
                let area = self.scene.area_for(Vec2::new(screen.width(), screen.height()));
                if self.last_area != Some(area) {
                    log::debug!("Display area is now {}x{}", area.width, area.height);
                    self.last_area = Some(area);
                }

                let mut canvas = PainterCanvas::new(ui.painter(), screen.min);
                match self.scene.draw(&mut canvas, area) {
                    Ok(()) => self.frame_count += 1,
                    Err(e) => log::error!("Skipping frame {}: {}", self.frame_count, e),
                }
            });

        ctx.request_repaint();
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        log::info!("Window closed after {} frames", self.frame_count);
    }
}
