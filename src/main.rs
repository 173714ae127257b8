//! Main entry point for the LaHora demo application.
//! Parses the CLI overrides and initializes the egui application framework.

use clap::Parser;
use eframe::egui;

use lahora::ui::app::{LaHoraApp, Overrides};

#[derive(Parser)]
#[command(name = "lahora", about = "Locale-aware date/time display widgets for egui")]
struct Cli {
    /// BCP-47 locale tag overriding the host default (e.g. fr-FR)
    #[arg(long)]
    locale: Option<String>,

    /// IANA time zone or fixed offset overriding the host default
    /// (e.g. Europe/Madrid, +05:30)
    #[arg(long)]
    timezone: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let overrides = Overrides {
        locale: cli.locale,
        time_zone: cli.timezone,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_title("LaHora"),
        ..Default::default()
    };

    eframe::run_native(
        "LaHora",
        options,
        Box::new(move |cc| Ok(Box::new(LaHoraApp::new(cc, overrides)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run the UI: {err}"))
}
