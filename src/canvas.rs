use glam::Vec2;
use serde::Serialize;

use crate::color::Color;
use crate::grid::CellRect;

/// Drawing primitives a frame is built from.
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn draw_rect(&mut self, rect: CellRect, fill: Color);
    /// Outline drawn inside `rect`, `line_width` pixels thick.
    fn draw_rect_outline(&mut self, rect: CellRect, line_width: f32, color: Color);
    fn draw_text(&mut self, text: &str, pos: Vec2, font_size: f32, color: Color);
    fn draw_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Color);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear {
        color: Color,
    },
    Rect {
        rect: CellRect,
        fill: Color,
    },
    RectOutline {
        rect: CellRect,
        line_width: f32,
        color: Color,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        font_size: f32,
        color: Color,
    },
    Line {
        from_x: f32,
        from_y: f32,
        to_x: f32,
        to_y: f32,
        thickness: f32,
        color: Color,
    },
}

/// Canvas that remembers every call, in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear { color });
    }

    fn draw_rect(&mut self, rect: CellRect, fill: Color) {
        self.commands.push(DrawCommand::Rect { rect, fill });
    }

    fn draw_rect_outline(&mut self, rect: CellRect, line_width: f32, color: Color) {
        self.commands.push(DrawCommand::RectOutline { rect, line_width, color });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, font_size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            x: pos.x,
            y: pos.y,
            font_size,
            color,
        });
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Color) {
        self.commands.push(DrawCommand::Line {
            from_x: from.x,
            from_y: from.y,
            to_x: to.x,
            to_y: to.y,
            thickness,
            color,
        });
    }
}
