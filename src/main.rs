mod app;
mod assets;
mod board;
mod clock;
mod config;
mod error;
mod game;
mod input_system;
mod surface;
mod text;
mod tile;

use app::App;
use board::Board;
use clock::SystemClock;
use config::GameConfig;
use error::GameError;
use game::{DrawStyle, Game};
use input_system::InputSystem;
use surface::{BorderStyle, SdlSurface};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), String> {
    init_logging();

    let config = GameConfig::load()?;
    info!(
        "Board {}x{}, window {}x{}",
        config.board_rows, config.board_columns, config.window_width, config.window_height
    );

    let sdl_context = sdl2::init().map_err(GameError::Sdl)?;
    let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
    let _image_context =
        sdl2::image::init(sdl2::image::InitFlag::PNG).map_err(GameError::Sdl)?;

    let window = video_subsystem
        .window(&config.title, config.window_width, config.window_height)
        .position_centered()
        .build()
        .map_err(|e| GameError::Sdl(e.to_string()))?;

    let canvas = window
        .into_canvas()
        .build()
        .map_err(|e| GameError::Sdl(e.to_string()))?;

    let texture_creator = canvas.texture_creator();
    let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

    // Every image must load before the first frame
    let images = assets::load_images(&texture_creator, &config.asset_dir, config.image_count())?;

    let board = Board::new(
        config.board_rows,
        config.board_columns,
        (config.window_width, config.window_height),
        &mut rand::thread_rng(),
    )?;

    let style = DrawStyle {
        score_scale: config.score_scale,
        border: BorderStyle {
            width: config.border_width,
            ..Default::default()
        },
        ..Default::default()
    };

    let clock = SystemClock::new();
    let game = Game::new(board, &clock)
        .with_mismatch_delay(config.mismatch_delay_ms)
        .with_style(style);

    let mut app = App::new(
        SdlSurface::new(canvas, images),
        InputSystem::new(event_pump),
        clock,
        game,
    );

    app.run()?;
    info!("Final score: {} seconds", app.game().score());
    Ok(())
}
