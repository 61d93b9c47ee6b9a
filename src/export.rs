use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::RgbaImage;
use serde::Serialize;

use crate::canvas::{DrawCommand, RecordingCanvas};
use crate::grid::{DisplayArea, GridDimensions};
use crate::render::ImageCanvas;
use crate::scene::Scene;

/// Renders single frames of a scene offscreen and writes them to disk.
pub struct ImageExporter {
    width: u32,
    height: u32,
}

#[derive(Serialize)]
struct FrameDump<'a> {
    dims: GridDimensions,
    area: DisplayArea,
    commands: &'a [DrawCommand],
}

impl ImageExporter {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    fn area(&self, scene: &Scene) -> DisplayArea {
        scene.area_for(glam::Vec2::new(self.width as f32, self.height as f32))
    }

    pub fn render_frame(&self, scene: &Scene) -> Result<RgbaImage, Box<dyn std::error::Error>> {
        let mut canvas = ImageCanvas::new(self.width, self.height);
        scene.draw(&mut canvas, self.area(scene))?;
        Ok(canvas.into_image())
    }

    pub fn export_frame_png(&self, scene: &Scene, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let img = self.render_frame(scene)?;
        img.save(path)?;
        log::info!("Exported {}x{} frame to {}", self.width, self.height, path.display());
        Ok(())
    }

    /// Writes the frame's draw calls as JSON, in paint order.
    pub fn export_frame_json(&self, scene: &Scene, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let area = self.area(scene);
        let mut canvas = RecordingCanvas::new();
        scene.draw(&mut canvas, area)?;

        let dump = FrameDump {
            dims: scene.dims(),
            area,
            commands: &canvas.commands,
        };
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, &dump)?;
        log::info!("Exported {} draw commands to {}", canvas.commands.len(), path.display());
        Ok(())
    }
}
