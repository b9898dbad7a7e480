// Daylight Home Application
// Main entry point

use daylight_home::ui_egui::DaylightApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Daylight Home");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 860.0])
            .with_min_inner_size([360.0, 640.0])
            .with_title("Daylight Home"),
        ..Default::default()
    };

    eframe::run_native(
        "Daylight Home",
        options,
        Box::new(|cc| Ok(Box::new(DaylightApp::new(cc)))),
    )
}
