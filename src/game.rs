//! Game state and per-frame logic
//!
//! One frame is: handle events, draw, then (while the board is not yet
//! cleared) update and decide whether to continue. The loop itself lives in
//! `app.rs`.

use crate::board::{Board, Cell};
use crate::clock::Clock;
use crate::input_system::GameEvent;
use crate::surface::{BorderStyle, Surface};
use crate::text::text_width;
use crate::tile::MatchOutcome;
use sdl2::pixels::Color;
use sdl2::rect::Point;
use tracing::{debug, info};

/// Default pause before a mismatched pair flips back
pub const MISMATCH_DELAY_MS: u64 = 500;

/// Colors and sizes used when drawing a frame
#[derive(Debug, Clone, Copy)]
pub struct DrawStyle {
    pub background: Color,
    pub score_color: Color,
    pub score_scale: u32,
    pub border: BorderStyle,
}

impl Default for DrawStyle {
    fn default() -> Self {
        DrawStyle {
            background: Color::RGB(0, 0, 0),
            score_color: Color::RGB(255, 255, 255),
            score_scale: 8,
            border: BorderStyle::default(),
        }
    }
}

pub struct Game {
    board: Board,
    /// Revealed tiles waiting to be compared, never more than two
    selection: Vec<Cell>,
    /// Whole seconds since the game started
    score: u64,
    continue_game: bool,
    close_requested: bool,
    started_ms: u64,
    mismatch_delay_ms: u64,
    style: DrawStyle,
}

impl Game {
    pub fn new(board: Board, clock: &dyn Clock) -> Self {
        debug!("New game on a {}x{} board", board.rows(), board.columns());
        Game {
            board,
            selection: Vec::with_capacity(2),
            score: 0,
            continue_game: true,
            close_requested: false,
            started_ms: clock.elapsed_ms(),
            mismatch_delay_ms: MISMATCH_DELAY_MS,
            style: DrawStyle::default(),
        }
    }

    pub fn with_mismatch_delay(mut self, delay_ms: u64) -> Self {
        self.mismatch_delay_ms = delay_ms;
        self
    }

    pub fn with_style(mut self, style: DrawStyle) -> Self {
        self.style = style;
        self
    }

    #[allow(dead_code)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[allow(dead_code)]
    pub fn selection(&self) -> &[Cell] {
        &self.selection
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn continue_game(&self) -> bool {
        self.continue_game
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            match *event {
                GameEvent::Quit => {
                    self.close_requested = true;
                }
                GameEvent::MouseUp { x, y } if self.continue_game => {
                    self.handle_mouse_up(Point::new(x, y));
                }
                GameEvent::MouseUp { .. } => {}
            }
        }
    }

    /// Reveal the tile under the pointer and queue it for comparison
    pub fn handle_mouse_up(&mut self, point: Point) {
        // A full pool is resolved by the next update; clicks before then are dropped
        if self.selection.len() >= 2 {
            return;
        }

        let Some(cell) = self.board.tile_at(point) else {
            return;
        };

        if let Some(tile) = self.board.get_mut(cell) {
            if tile.select(point) {
                debug!("Selected tile {:?}", cell);
                self.selection.push(cell);
            }
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) -> Result<(), String> {
        surface.fill(self.style.background);

        for tile in self.board.tiles() {
            tile.draw(surface, self.style.border)?;
        }
        self.draw_score(surface)?;

        surface.present();
        Ok(())
    }

    /// Score in the top-right corner
    fn draw_score(&self, surface: &mut dyn Surface) -> Result<(), String> {
        let text = self.score.to_string();
        let width = text_width(&text, self.style.score_scale) as i32;
        let x = surface.size().0 as i32 - width;

        surface.draw_text(&text, x, 0, self.style.score_color, self.style.score_scale)
    }

    /// Compare a full selection pool and refresh the score
    ///
    /// A mismatch blocks on `clock` for the mismatch delay.
    pub fn update(&mut self, clock: &mut dyn Clock) {
        if let [first, second] = self.selection[..] {
            if let Some((a, b)) = self.board.pair_mut(first, second) {
                let image = a.reveal_image();
                match a.compare_image(b, clock, self.mismatch_delay_ms) {
                    MatchOutcome::Match => {
                        info!("Pair found: {:?} and {:?} ({:?})", first, second, image)
                    }
                    MatchOutcome::Mismatch => debug!("No match: {:?} and {:?}", first, second),
                }
            }
            self.selection.clear();
        }

        self.score = clock.elapsed_ms().saturating_sub(self.started_ms) / 1000;
    }

    /// Keep playing while any tile is undiscovered
    pub fn decide_continue(&mut self) {
        self.continue_game = !self.board.all_discovered();

        if !self.continue_game {
            info!(
                "Board cleared in {} seconds at {}",
                self.score,
                chrono::Local::now().format("%H:%M:%S")
            );
        }
    }
}
