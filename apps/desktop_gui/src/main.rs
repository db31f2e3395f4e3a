mod config;
mod controller;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::config::{load_settings, Settings, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::ui::ConsoleApp;

const APP_NAME: &str = "Operati";

#[derive(Parser, Debug)]
#[command(name = "operati-desktop", about = "Operati wealth-management console")]
struct Args {
    /// Settings file; defaults to ./operati.toml, then the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,
    /// tracing filter directive, e.g. `info` or `console_core=debug`.
    #[arg(long)]
    log_filter: Option<String>,
    #[arg(long)]
    text_scale: Option<f32>,
}

impl Args {
    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(filter) = &self.log_filter {
            settings.log_filter = filter.clone();
        }
        if let Some(scale) = self.text_scale {
            settings.text_scale = scale;
        }
        settings.sanitized()
    }
}

fn init_tracing(settings: &Settings) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .with_context(|| format!("invalid log filter '{}'", settings.log_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = args.apply(load_settings(args.config.as_deref())?);
    init_tracing(&settings)?;
    tracing::info!(
        text_scale = settings.text_scale,
        advisor = %settings.advisor_name,
        "starting desktop console"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT]),
        ..Default::default()
    };
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |_cc| Ok(Box::new(ConsoleApp::new(settings)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop console exited with error: {err}"))
}
