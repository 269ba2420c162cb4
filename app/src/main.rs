use anyhow::Result;
use clap::Parser;
use eframe::egui;

mod app;
mod audio;
mod server_comm;
mod ui;

use app::TtsApp;

#[derive(Parser)]
#[command(name = "audiogen-app")]
#[command(about = "Desktop client for the AI Audio Generator service")]
struct Args {
    /// Pre-fill the text field
    #[arg(short, long)]
    text: Option<String>,

    /// Server base URL (overrides the configured one)
    #[arg(short, long)]
    server: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 560.0])
            .with_title("AI Audio Generator"),
        ..Default::default()
    };

    eframe::run_native(
        "AI Audio Generator",
        options,
        Box::new(|_cc| Ok(Box::new(TtsApp::new(args.text, args.server)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run egui app: {}", e))
}
