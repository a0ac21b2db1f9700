mod app;
mod config;
mod error;
mod input;
mod message;
mod model;
mod state;
mod style;
mod view;

use app::GamingApp;
use config::Config;
use eframe::egui;
use std::io::Write;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    log::info!("gamenav starting");
    let config = Config::load();
    let config_path = match Config::config_path() {
        Ok(path) => Some(path),
        Err(e) => {
            log::warn!("{}, theme changes will not be saved", e);
            None
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title(style::WINDOW_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        style::WINDOW_TITLE,
        options,
        Box::new(move |_cc| {
            let app = GamingApp::from_config(config).with_config_path(config_path);
            Ok(Box::new(app))
        }),
    )
}
