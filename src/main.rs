use fluidgrid::config::{GRID, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use fluidgrid::{GridApp, Scene};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!(
        "Opening {}x{} window for a {}x{} grid ({} cells drawn)",
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
        GRID.columns,
        GRID.rows,
        GRID.cell_count()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_resizable(true)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Box::new(GridApp::new(Scene::new(GRID)))),
    )
    .map_err(|e| format!("failed to run window: {}", e))?;

    Ok(())
}
