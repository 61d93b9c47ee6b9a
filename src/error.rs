use std::fmt;

/// Errors raised by the grid layout before any cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutError {
    /// The interior grid has no columns or no rows.
    InvalidDimensions { columns: usize, rows: usize },
    /// The display area is empty, negative, or not finite.
    InvalidArea { width: f32, height: f32 },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::InvalidDimensions { columns, rows } => {
                write!(f, "invalid grid dimensions {}x{}: columns and rows must be positive", columns, rows)
            }
            LayoutError::InvalidArea { width, height } => {
                write!(f, "invalid display area {}x{}: width and height must be positive", width, height)
            }
        }
    }
}

impl std::error::Error for LayoutError {}
