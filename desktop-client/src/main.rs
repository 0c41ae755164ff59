mod config;
mod ui;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use common::games::SessionRng;
use common::games::snake::{GameVariant, SnakeSession};
use common::{log, logger};
use eframe::egui;

use config::get_config_manager;
use ui::{BoardPainter, SnakeApp, SIDE_PANEL_WIDTH};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    Classic,
    Google,
}

impl From<VariantArg> for GameVariant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::Classic => GameVariant::Classic,
            VariantArg::Google => GameVariant::Google,
        }
    }
}

#[derive(Parser)]
#[command(name = "snake_desktop")]
struct Args {
    /// Game variant; remembered in the config file for the next launch.
    #[arg(long, value_enum)]
    variant: Option<VariantArg>,

    /// Seed for food and rock placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Config file path. Defaults to a file next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(args.config);
    let mut config = config_manager.get_config_or_default();

    if let Some(variant) = args.variant.map(GameVariant::from)
        && variant != config.variant
    {
        match config_manager.update_config(|c| c.variant = variant) {
            Ok(updated) => config = updated,
            Err(e) => {
                log!("Failed to save variant to config: {}", e);
                config.variant = variant;
            }
        }
    }

    let variant = config.variant;
    let settings = config.session_settings(variant);
    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Starting {} on a {}x{} field, seed {}",
        variant.title(),
        settings.field_size.width,
        settings.field_size.height,
        rng.seed()
    );

    let board_size = BoardPainter::new(config.cell_size)
        .board_size(settings.field_size.width, settings.field_size.height);
    let session = SnakeSession::new(settings, rng);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board_size.x + SIDE_PANEL_WIDTH + 32.0, board_size.y.max(420.0) + 24.0])
            .with_min_inner_size([board_size.x + SIDE_PANEL_WIDTH + 32.0, board_size.y + 24.0])
            .with_title(variant.title()),
        ..Default::default()
    };

    let cell_size = config.cell_size;
    let show_fps = config.show_fps;
    eframe::run_native(
        "Snake",
        options,
        Box::new(move |_cc| Ok(Box::new(SnakeApp::new(session, cell_size, show_fps)))),
    )?;

    log!("Snake closed");
    Ok(())
}
