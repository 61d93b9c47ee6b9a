use std::fs;
use std::path::Path;

use fluidgrid::{Canvas, CellRect, Color, GridDimensions, ImageCanvas, ImageExporter, Scene};

#[test]
fn test_raster_grid_has_no_gaps() {
    let scene = Scene::default();
    let exporter = ImageExporter::new(800, 800);
    let img = exporter.render_frame(&scene).unwrap();

    // every pixel inside the 512x512 area belongs to a fill or an outline
    for y in 0..512 {
        for x in 0..512 {
            let p = img.get_pixel(x, y).0;
            assert!(
                p == Color::RED.to_array() || p == Color::BLACK.to_array(),
                "background showing through at ({}, {}): {:?}",
                x,
                y,
                p
            );
        }
    }

    // outside it only the background remains
    assert_eq!(img.get_pixel(600, 100).0, Color::WHITE.to_array());
    assert_eq!(img.get_pixel(100, 700).0, Color::WHITE.to_array());
}

#[test]
fn test_outline_drawn_inside_rect() {
    let mut canvas = ImageCanvas::new(20, 20);
    canvas.clear(Color::WHITE);
    let rect = CellRect { x: 5.0, y: 5.0, w: 10.0, h: 10.0 };
    canvas.draw_rect(rect, Color::RED);
    canvas.draw_rect_outline(rect, 2.0, Color::BLACK);

    assert_eq!(canvas.pixel(4, 10), Some(Color::WHITE));
    assert_eq!(canvas.pixel(5, 10), Some(Color::BLACK));
    assert_eq!(canvas.pixel(6, 10), Some(Color::BLACK));
    assert_eq!(canvas.pixel(7, 10), Some(Color::RED));
    assert_eq!(canvas.pixel(14, 14), Some(Color::BLACK));
    assert_eq!(canvas.pixel(15, 14), Some(Color::WHITE));
    assert_eq!(canvas.pixel(20, 0), None);
}

#[test]
fn test_rects_clipped_to_canvas() {
    let mut canvas = ImageCanvas::new(8, 8);
    canvas.clear(Color::WHITE);
    canvas.draw_rect(CellRect { x: -4.0, y: 6.0, w: 20.0, h: 20.0 }, Color::VIOLET);

    assert_eq!(canvas.pixel(0, 7), Some(Color::VIOLET));
    assert_eq!(canvas.pixel(7, 6), Some(Color::VIOLET));
    assert_eq!(canvas.pixel(0, 5), Some(Color::WHITE));
}

#[test]
fn test_line_raster_covers_segment() {
    let mut canvas = ImageCanvas::new(16, 16);
    canvas.clear(Color::WHITE);
    canvas.draw_line(glam::Vec2::new(2.0, 5.0), glam::Vec2::new(12.0, 5.0), 1.0, Color::BLUE);
    canvas.draw_line(glam::Vec2::new(0.0, 8.0), glam::Vec2::new(6.0, 14.0), 1.0, Color::MAGENTA);

    for x in 2..=12 {
        assert_eq!(canvas.pixel(x, 5), Some(Color::BLUE), "x = {}", x);
    }
    assert_eq!(canvas.pixel(1, 5), Some(Color::WHITE));
    assert_eq!(canvas.pixel(13, 5), Some(Color::WHITE));
    assert_eq!(canvas.pixel(7, 4), Some(Color::WHITE));
    assert_eq!(canvas.pixel(7, 6), Some(Color::WHITE));

    assert_eq!(canvas.pixel(3, 11), Some(Color::MAGENTA));
    assert_eq!(canvas.pixel(3, 12), Some(Color::WHITE));
}

#[test]
fn test_velocity_overlay_exported() {
    let mut scene = Scene::new(GridDimensions::new(2, 2)).with_velocity_overlay(true);
    scene.velocity[(1, 1)] = glam::Vec2::new(0.5, 0.5);

    let dir = Path::new("test_output/export");
    fs::create_dir_all(dir).unwrap();
    let json_path = dir.join("velocity.json");
    ImageExporter::new(64, 64).export_frame_json(&scene, &json_path).unwrap();

    let dump: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    let ops: Vec<_> = dump["commands"].as_array().unwrap().iter().map(|c| c["op"].clone()).collect();
    assert_eq!(ops.iter().filter(|op| *op == "line").count(), 2);
    assert_eq!(ops.last().unwrap(), "line");
}

#[test]
fn test_export_png_and_json() {
    let dir = Path::new("test_output/export");
    fs::create_dir_all(dir).unwrap();

    let scene = Scene::new(GridDimensions::new(4, 3));
    let exporter = ImageExporter::new(200, 200);

    let png = dir.join("frame.png");
    exporter.export_frame_png(&scene, &png).unwrap();
    let img = image::open(&png).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (200, 200));

    let json_path = dir.join("frame.json");
    exporter.export_frame_json(&scene, &json_path).unwrap();
    let dump: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();

    assert_eq!(dump["dims"]["columns"], 4);
    assert_eq!(dump["dims"]["border_cells"], 1);
    assert_eq!(dump["area"]["width"], 512.0);

    let commands = dump["commands"].as_array().unwrap();
    assert_eq!(commands.len(), 2 + 2 * 6 * 5);
    assert_eq!(commands[0]["op"], "clear");
    assert_eq!(commands[1]["op"], "text");
    assert_eq!(commands[1]["text"], "Hello world");
    assert_eq!(commands[2]["op"], "rect");
    assert_eq!(commands[3]["op"], "rect_outline");
}

#[test]
fn test_export_rejects_invalid_grid() {
    let scene = Scene::new(GridDimensions::new(3, 0));
    let exporter = ImageExporter::new(64, 64);
    let err = exporter.render_frame(&scene).unwrap_err();
    assert!(err.to_string().contains("invalid grid dimensions"));
}
