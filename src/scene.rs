use glam::Vec2;

use crate::canvas::Canvas;
use crate::color::{Color, Palette};
use crate::config::{self, AreaPolicy, FillMode};
use crate::error::LayoutError;
use crate::field::{DensityField, VelocityField};
use crate::grid::{CellRect, CellSize, DisplayArea, GridDimensions, GridRenderer};

/// Static text drawn before the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub pos: Vec2,
    pub font_size: f32,
    pub color: Color,
}

impl Default for Label {
    fn default() -> Self {
        Self {
            text: config::LABEL_TEXT.to_owned(),
            pos: Vec2::new(config::LABEL_X, config::LABEL_Y),
            font_size: config::LABEL_FONT_SIZE,
            color: config::LABEL_COLOR,
        }
    }
}

/// Everything drawn in one frame: background, label, grid, and optionally
/// the velocity overlay on top.
#[derive(Debug, Clone)]
pub struct Scene {
    renderer: GridRenderer,
    label: Label,
    background: Color,
    outline_width: f32,
    fill_mode: FillMode,
    velocity_overlay: bool,
    area_policy: AreaPolicy,
    pub density: DensityField,
    pub velocity: VelocityField,
}

impl Scene {
    pub fn new(dims: GridDimensions) -> Self {
        Self {
            renderer: GridRenderer::new(dims).with_palette(config::CELL_PALETTE),
            label: Label::default(),
            background: config::BACKGROUND,
            outline_width: config::CELL_OUTLINE_WIDTH,
            fill_mode: config::FILL_MODE,
            velocity_overlay: config::VELOCITY_OVERLAY,
            area_policy: config::AREA_POLICY,
            density: DensityField::new(dims.columns, dims.rows),
            velocity: VelocityField::new(dims.columns, dims.rows),
        }
    }

    pub fn with_fill_mode(mut self, fill_mode: FillMode) -> Self {
        self.fill_mode = fill_mode;
        self
    }

    /// Draws each interior cell's velocity as lines from the cell centre.
    pub fn with_velocity_overlay(mut self, enabled: bool) -> Self {
        self.velocity_overlay = enabled;
        self
    }

    pub fn with_area_policy(mut self, area_policy: AreaPolicy) -> Self {
        self.area_policy = area_policy;
        self
    }

    pub fn dims(&self) -> GridDimensions {
        self.renderer.dims()
    }

    pub fn area_for(&self, window_size: Vec2) -> DisplayArea {
        self.area_policy.resolve(window_size.x, window_size.y)
    }

    /// Draws a full frame into `canvas`.
    ///
    /// The layout is validated before anything is drawn, so an invalid area
    /// leaves the canvas untouched.
    pub fn draw(&self, canvas: &mut impl Canvas, area: DisplayArea) -> Result<(), LayoutError> {
        let cell_size = self.renderer.cell_size(area)?;

        canvas.clear(self.background);
        canvas.draw_text(&self.label.text, self.label.pos, self.label.font_size, self.label.color);

        let outline_width = self.outline_width;
        let draw_cell = |rect: CellRect, fill: Color, border: Color| {
            canvas.draw_rect(rect, fill);
            canvas.draw_rect_outline(rect, outline_width, border);
        };

        match self.fill_mode {
            FillMode::Solid => self.renderer.render_frame(area, draw_cell)?,
            FillMode::Density => self
                .renderer
                .render_frame_with(area, |row, col| self.density_palette(row, col), draw_cell)?,
        }

        if self.velocity_overlay {
            self.draw_velocity(canvas, cell_size);
        }
        Ok(())
    }

    fn density_palette(&self, row: usize, col: usize) -> Palette {
        let b = self.dims().border_cells;
        // border cells mirror the nearest interior cell
        let r = row.saturating_sub(b).min(self.density.rows().saturating_sub(1));
        let c = col.saturating_sub(b).min(self.density.columns().saturating_sub(1));
        let density = self.density.get(r, c).copied().unwrap_or_default();
        Palette::new(Color::from_density(density), config::DENSITY_OUTLINE)
    }

    /// Magenta line scaled by speed, blue half-cell line for direction.
    fn draw_velocity(&self, canvas: &mut impl Canvas, cell_size: CellSize) {
        let b = self.dims().border_cells;
        for row in 0..self.velocity.rows() {
            for col in 0..self.velocity.columns() {
                let vel = self.velocity[(row, col)];
                let len = vel.length();
                if !len.is_finite() || len <= config::MIN_VELOCITY {
                    continue;
                }

                let centre = cell_size * Vec2::new((col + b) as f32 + 0.5, (row + b) as f32 + 0.5);
                let dir = vel * (cell_size.x * 0.5 / len);
                canvas.draw_line(centre, centre + dir * len, config::VELOCITY_LINE_WIDTH, config::VELOCITY_COLOR);
                canvas.draw_line(centre, centre + dir, config::VELOCITY_LINE_WIDTH, config::DIRECTION_COLOR);
            }
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(config::GRID)
    }
}
