use crate::color::{Color, Palette};
use crate::grid::{DisplayArea, GridDimensions};

/// Interior grid extent (32x32 cells, plus a one-cell border on each side)
pub const GRID: GridDimensions = GridDimensions::new(32, 32);

/// Initial window size in logical pixels
pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 800.0;
pub const WINDOW_TITLE: &str = "fluidgrid";

/// How the display area is derived from the window each frame
pub const AREA_POLICY: AreaPolicy = AreaPolicy::Fixed(DisplayArea::new(512.0, 512.0));

pub const BACKGROUND: Color = Color::WHITE;
pub const CELL_PALETTE: Palette = Palette::new(Color::RED, Color::BLACK);
pub const CELL_OUTLINE_WIDTH: f32 = 1.0;
pub const FILL_MODE: FillMode = FillMode::Solid;

// Density view
pub const DENSITY_OUTLINE: Color = Color::DARK_GRAY;
pub const VELOCITY_OVERLAY: bool = false;
/// Shorter velocities are not drawn
pub const MIN_VELOCITY: f32 = 1e-10;
pub const VELOCITY_LINE_WIDTH: f32 = 1.0;
pub const VELOCITY_COLOR: Color = Color::MAGENTA;
pub const DIRECTION_COLOR: Color = Color::BLUE;

// Label
pub const LABEL_TEXT: &str = "Hello world";
pub const LABEL_X: f32 = 190.0;
pub const LABEL_Y: f32 = 200.0;
pub const LABEL_FONT_SIZE: f32 = 20.0;
pub const LABEL_COLOR: Color = Color::VIOLET;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AreaPolicy {
    /// Always draw into the same area, regardless of window size.
    Fixed(DisplayArea),
    /// Largest square that fits the current window.
    FitWindow,
}

impl AreaPolicy {
    pub fn resolve(self, window_width: f32, window_height: f32) -> DisplayArea {
        match self {
            AreaPolicy::Fixed(area) => area,
            AreaPolicy::FitWindow => DisplayArea::fit_square(window_width, window_height),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    /// Every cell uses `CELL_PALETTE`.
    Solid,
    /// Cells are shaded red by density and outlined in `DENSITY_OUTLINE`.
    /// Border cells take the density of the nearest interior cell.
    Density,
}
