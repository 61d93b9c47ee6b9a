use glam::Vec2;
use image::{ImageBuffer, Rgba, RgbaImage};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::grid::CellRect;
use crate::surface::DisplaySurface;

/// Software canvas that rasterizes into an RGBA image.
///
/// Rect edges are rounded to the nearest pixel boundary, so two rects that
/// share an edge in float space share it in pixel space too. Text is not
/// rasterized.
pub struct ImageCanvas {
    image: RgbaImage,
}

impl ImageCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: ImageBuffer::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width() && y < self.height() {
            let Rgba([r, g, b, a]) = *self.image.get_pixel(x, y);
            Some(Color::rgba(r, g, b, a))
        } else {
            None
        }
    }

    /// Reallocates the backing image; contents are discarded.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.image = ImageBuffer::new(width, height);
    }

    fn span(&self, from: f32, to: f32, limit: u32) -> (u32, u32) {
        let clamp = |v: f32| v.round().clamp(0.0, limit as f32) as u32;
        (clamp(from), clamp(to))
    }

    fn fill_region(&mut self, min: Vec2, max: Vec2, color: Color) {
        let (x0, x1) = self.span(min.x, max.x, self.width());
        let (y0, y1) = self.span(min.y, max.y, self.height());
        let pixel: Rgba<u8> = color.into();

        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x, y, pixel);
            }
        }
    }
}

impl Canvas for ImageCanvas {
    fn clear(&mut self, color: Color) {
        let pixel: Rgba<u8> = color.into();
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
    }

    fn draw_rect(&mut self, rect: CellRect, fill: Color) {
        self.fill_region(rect.min(), rect.max(), fill);
    }

    fn draw_rect_outline(&mut self, rect: CellRect, line_width: f32, color: Color) {
        let (min, max) = (rect.min(), rect.max());
        let line = Vec2::splat(line_width).min(rect.max() - rect.min());

        // top, bottom, left, right
        self.fill_region(min, Vec2::new(max.x, min.y + line.y), color);
        self.fill_region(Vec2::new(min.x, max.y - line.y), max, color);
        self.fill_region(min, Vec2::new(min.x + line.x, max.y), color);
        self.fill_region(Vec2::new(max.x - line.x, min.y), max, color);
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, _font_size: f32, _color: Color) {
        log::trace!("Skipping text {:?} at ({}, {}) on image canvas", text, pos.x, pos.y);
    }

    // Stamps a thickness-sized square at one-pixel steps along the segment.
    fn draw_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Color) {
        if !from.is_finite() || !to.is_finite() {
            return;
        }
        let half = Vec2::splat(thickness.max(1.0) * 0.5);
        let steps = (to - from).abs().max_element().ceil() as u32;
        for i in 0..=steps {
            let t = if steps == 0 { 0.0 } else { i as f32 / steps as f32 };
            let p = from.lerp(to, t);
            self.fill_region(p - half, p + half, color);
        }
    }
}

/// Offscreen display surface that plays a fixed number of frames.
pub struct HeadlessSurface {
    canvas: ImageCanvas,
    frame_budget: u64,
    frames_begun: u64,
    frames_ended: u64,
    in_frame: bool,
    closed: u32,
}

impl HeadlessSurface {
    pub fn new(width: u32, height: u32, frame_budget: u64) -> Self {
        Self {
            canvas: ImageCanvas::new(width, height),
            frame_budget,
            frames_begun: 0,
            frames_ended: 0,
            in_frame: false,
            closed: 0,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!("Headless surface resized to {}x{}", width, height);
        self.canvas.resize(width, height);
    }

    pub fn canvas(&self) -> &ImageCanvas {
        &self.canvas
    }

    pub fn frames_begun(&self) -> u64 {
        self.frames_begun
    }

    pub fn frames_ended(&self) -> u64 {
        self.frames_ended
    }

    /// How many times `close` has been called.
    pub fn close_count(&self) -> u32 {
        self.closed
    }
}

impl Canvas for HeadlessSurface {
    fn clear(&mut self, color: Color) {
        self.canvas.clear(color);
    }

    fn draw_rect(&mut self, rect: CellRect, fill: Color) {
        self.canvas.draw_rect(rect, fill);
    }

    fn draw_rect_outline(&mut self, rect: CellRect, line_width: f32, color: Color) {
        self.canvas.draw_rect_outline(rect, line_width, color);
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, font_size: f32, color: Color) {
        self.canvas.draw_text(text, pos, font_size, color);
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Color) {
        self.canvas.draw_line(from, to, thickness, color);
    }
}

impl DisplaySurface for HeadlessSurface {
    fn should_close(&self) -> bool {
        self.closed > 0 || self.frames_ended >= self.frame_budget
    }

    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn begin_frame(&mut self) {
        debug_assert!(!self.in_frame, "begin_frame called twice without end_frame");
        self.in_frame = true;
        self.frames_begun += 1;
    }

    fn end_frame(&mut self) {
        debug_assert!(self.in_frame, "end_frame called without begin_frame");
        self.in_frame = false;
        self.frames_ended += 1;
    }

    fn close(&mut self) {
        log::debug!("Headless surface closed after {} frames", self.frames_ended);
        self.closed += 1;
    }
}
