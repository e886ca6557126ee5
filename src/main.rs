use anyhow::anyhow;
use eframe::egui;

mod app;
mod config;
mod download;
mod localizations;
mod logging;
mod models;
mod theme;
mod ui;

use app::DownloadFormApp;
use config::Config;
use localizations::Localizations;

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let config = Config::load()?;
    let localizer = Localizations::from_environment(config.language.as_deref());
    let title = localizer.text("app-title", "YouTube Downloader");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 340.0])
            .with_min_inner_size([420.0, 280.0])
            .with_title(title.clone()),
        ..Default::default()
    };

    let app = DownloadFormApp::new(config, localizer);

    eframe::run_native(
        &title,
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Box::new(app)
        }),
    )
    .map_err(|e| anyhow!("failed to start the window: {}", e))
}
