use serde::Serialize;

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    // Same values as the raylib palette the grid was first drawn with
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(230, 41, 55);
    pub const VIOLET: Color = Color::rgb(135, 60, 190);
    pub const DARK_GRAY: Color = Color::rgb(50, 50, 50);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const BLUE: Color = Color::rgb(0, 121, 241);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Red channel proportional to `density`, clamped to [0, 1].
    pub fn from_density(density: f32) -> Self {
        let intensity = (density * 255.0).clamp(0.0, 255.0) as u8;
        Self::rgb(intensity, 0, 0)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Color> for egui::Color32 {
    fn from(c: Color) -> Self {
        egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(c: Color) -> Self {
        image::Rgba(c.to_array())
    }
}

/// Fill and outline colors for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub fill: Color,
    pub border: Color,
}

impl Palette {
    pub const fn new(fill: Color, border: Color) -> Self {
        Self { fill, border }
    }
}

impl Default for Palette {
    fn default() -> Self {
        crate::config::CELL_PALETTE
    }
}
