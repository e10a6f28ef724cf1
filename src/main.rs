mod app;
mod field;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[arg(long, value_enum)]
    theme: Option<app::Theme>,
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("plexus-field")
            .with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "plexus-field",
        options,
        Box::new(move |cc| Ok(Box::new(app::PlexusApp::new(cc, args.theme)))),
    )
}
