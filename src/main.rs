// PPT Countdown
// Main entry point

#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use anyhow::Result;
use ppt_countdown::services::settings::load_config_or_default;
use ppt_countdown::ui_egui::{viewport_builder, AppContext, CountdownApp};
use ppt_countdown::utils::monitors;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting PPT Countdown");

    let config = load_config_or_default();
    let context = AppContext::new(config, monitors::primary_work_area());

    let options = eframe::NativeOptions {
        viewport: viewport_builder(&context),
        ..Default::default()
    };

    eframe::run_native(
        "PPT Countdown",
        options,
        Box::new(move |cc| Ok(Box::new(CountdownApp::new(cc, context)))),
    )
    .map_err(|err| anyhow::anyhow!("countdown window failed: {err}"))
}
