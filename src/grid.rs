//! Grid-to-pixel layout.
//!
//! A grid of `columns x rows` interior cells is padded by `border_cells` on
//! every side and stretched over a display area. Cell positions are derived
//! from `(row, col)` by multiplication so the padded grid tiles the area
//! exactly, and nothing is cached between frames.

use glam::Vec2;
use serde::Serialize;

use crate::color::{Color, Palette};
use crate::error::LayoutError;

/// Width and height of a single cell in pixels.
pub type CellSize = Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridDimensions {
    pub columns: usize,
    pub rows: usize,
    pub border_cells: usize,
}

impl GridDimensions {
    /// Interior extent with the usual one-cell border.
    pub const fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            border_cells: 1,
        }
    }

    pub const fn with_border(mut self, border_cells: usize) -> Self {
        self.border_cells = border_cells;
        self
    }

    pub const fn padded_columns(&self) -> usize {
        self.columns + 2 * self.border_cells
    }

    pub const fn padded_rows(&self) -> usize {
        self.rows + 2 * self.border_cells
    }

    /// Number of drawn cells, border included.
    pub const fn cell_count(&self) -> usize {
        self.padded_columns() * self.padded_rows()
    }

    /// Padded columns, padded rows and cell count, or `None` if any overflows.
    pub fn checked_extent(&self) -> Option<(usize, usize, usize)> {
        let pad = self.border_cells.checked_mul(2)?;
        let columns = self.columns.checked_add(pad)?;
        let rows = self.rows.checked_add(pad)?;
        Some((columns, rows, columns.checked_mul(rows)?))
    }

    /// Rejects empty grids and grids whose padded extent overflows `usize`.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.columns == 0 || self.rows == 0 || self.checked_extent().is_none() {
            return Err(LayoutError::InvalidDimensions {
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(())
    }
}

/// Pixel region the padded grid is stretched over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayArea {
    pub width: f32,
    pub height: f32,
}

impl DisplayArea {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Largest square that fits in a `width x height` window.
    pub fn fit_square(width: f32, height: f32) -> Self {
        let side = width.min(height);
        Self::new(side, side)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        if !usable(self.width) || !usable(self.height) {
            return Err(LayoutError::InvalidArea {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Axis-aligned rectangle in display pixels, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CellRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl CellRect {
    pub fn at(row: usize, col: usize, cell_size: CellSize) -> Self {
        Self {
            x: col as f32 * cell_size.x,
            y: row as f32 * cell_size.y,
            w: cell_size.x,
            h: cell_size.y,
        }
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.w, self.y + self.h)
    }
}

/// Uniform cell size that stretches the padded grid over `area`.
pub fn compute_cell_size(dims: GridDimensions, area: DisplayArea) -> Result<CellSize, LayoutError> {
    dims.validate()?;
    area.validate()?;

    Ok(Vec2::new(
        area.width / dims.padded_columns() as f32,
        area.height / dims.padded_rows() as f32,
    ))
}

/// Every padded cell in row-major order with its rectangle.
pub fn cells(
    dims: GridDimensions,
    area: DisplayArea,
) -> Result<impl Iterator<Item = (usize, usize, CellRect)>, LayoutError> {
    let cell_size = compute_cell_size(dims, area)?;
    let columns = dims.padded_columns();

    Ok((0..dims.padded_rows())
        .flat_map(move |row| (0..columns).map(move |col| (row, col, CellRect::at(row, col, cell_size)))))
}

/// Padded `(row, col)` under `point`, if the point lies inside the area.
pub fn cell_at(dims: GridDimensions, area: DisplayArea, point: Vec2) -> Option<(usize, usize)> {
    let cell_size = compute_cell_size(dims, area).ok()?;
    if !point.is_finite() || point.x < 0.0 || point.y < 0.0 {
        return None;
    }

    let cell = point / cell_size;
    let (row, col) = (cell.y as usize, cell.x as usize);
    if row < dims.padded_rows() && col < dims.padded_columns() {
        Some((row, col))
    } else {
        None
    }
}

/// Emits one `draw_cell(rect, fill, border)` per padded cell, row-major,
/// using the default palette.
pub fn render_frame<F>(dims: GridDimensions, area: DisplayArea, draw_cell: F) -> Result<(), LayoutError>
where
    F: FnMut(CellRect, Color, Color),
{
    GridRenderer::new(dims).render_frame(area, draw_cell)
}

/// Stateless renderer for a fixed grid shape.
#[derive(Debug, Clone, Copy)]
pub struct GridRenderer {
    dims: GridDimensions,
    palette: Palette,
}

impl GridRenderer {
    pub fn new(dims: GridDimensions) -> Self {
        Self {
            dims,
            palette: Palette::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn dims(&self) -> GridDimensions {
        self.dims
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn cell_size(&self, area: DisplayArea) -> Result<CellSize, LayoutError> {
        compute_cell_size(self.dims, area)
    }

    pub fn render_frame<F>(&self, area: DisplayArea, draw_cell: F) -> Result<(), LayoutError>
    where
        F: FnMut(CellRect, Color, Color),
    {
        let palette = self.palette;
        self.render_frame_with(area, |_, _| palette, draw_cell)
    }

    /// Like `render_frame`, but `paint` picks the colors of each padded cell.
    pub fn render_frame_with<P, F>(&self, area: DisplayArea, paint: P, mut draw_cell: F) -> Result<(), LayoutError>
    where
        P: Fn(usize, usize) -> Palette,
        F: FnMut(CellRect, Color, Color),
    {
        for (row, col, rect) in cells(self.dims, area)? {
            let Palette { fill, border } = paint(row, col);
            draw_cell(rect, fill, border);
        }
        Ok(())
    }
}
