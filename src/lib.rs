//! Layout and rendering for a padded 2D grid of density/velocity cells

pub mod canvas;
pub mod color;
pub mod config;
pub mod desktop;
pub mod error;
pub mod export;
pub mod field;
pub mod grid;
pub mod render;
pub mod scene;
pub mod surface;

pub use canvas::{Canvas, DrawCommand, RecordingCanvas};
pub use color::{Color, Palette};
pub use desktop::GridApp;
pub use error::LayoutError;
pub use export::ImageExporter;
pub use field::{DensityField, Field, VelocityField};
pub use grid::{cell_at, cells, compute_cell_size, render_frame, CellRect, CellSize, DisplayArea, GridDimensions, GridRenderer};
pub use render::{HeadlessSurface, ImageCanvas};
pub use scene::{Label, Scene};
pub use surface::{run_frame_loop, DisplaySurface, Frame};
