use crate::clock::Clock;
use crate::game::Game;
use crate::input_system::EventSource;
use crate::surface::Surface;
use tracing::info;

/// Target frame time (~60 FPS)
const FRAME_DELAY_MS: u64 = 1000 / 60;

/// The running application: display, input, clock and the game they drive
pub struct App<S: Surface, E: EventSource, C: Clock> {
    surface: S,
    events: E,
    clock: C,
    game: Game,
    frame_delay_ms: u64,
}

impl<S: Surface, E: EventSource, C: Clock> App<S, E, C> {
    pub fn new(surface: S, events: E, clock: C, game: Game) -> Self {
        App {
            surface,
            events,
            clock,
            game,
            frame_delay_ms: FRAME_DELAY_MS,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Play frames until the window is closed
    ///
    /// Once the board is cleared the score freezes but frames keep drawing
    /// until the player closes the window.
    pub fn run(&mut self) -> Result<(), String> {
        info!("Game started");

        while !self.game.close_requested() {
            self.frame()?;
            self.clock.delay(self.frame_delay_ms);
        }

        info!("Window closed");
        Ok(())
    }

    /// Play one frame: events, draw, then update while the game is on
    pub fn frame(&mut self) -> Result<(), String> {
        let events = self.events.poll();
        self.game.handle_events(&events);
        self.game.draw(&mut self.surface)?;

        if self.game.continue_game() {
            self.game.update(&mut self.clock);
            self.game.decide_continue();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::clock::FakeClock;
    use crate::input_system::{GameEvent, ScriptedEvents};
    use crate::surface::{DrawCall, ImageId, RecordingSurface};

    fn click(row: i32, column: i32) -> GameEvent {
        GameEvent::MouseUp {
            x: column * 100 + 50,
            y: row * 100 + 50,
        }
    }

    fn app(frames: Vec<Vec<GameEvent>>) -> App<RecordingSurface, ScriptedEvents, FakeClock> {
        let clock = FakeClock::default();
        let board = Board::with_images(
            2,
            2,
            (300, 200),
            vec![ImageId(1), ImageId(2), ImageId(1), ImageId(2)],
        )
        .unwrap();
        let game = Game::new(board, &clock);
        App::new(RecordingSurface::new(300, 200), ScriptedEvents::new(frames), clock, game)
    }

    fn presents(app: &App<RecordingSurface, ScriptedEvents, FakeClock>) -> usize {
        app.surface
            .calls
            .iter()
            .filter(|call| **call == DrawCall::Present)
            .count()
    }

    #[test]
    fn test_quit_ends_run_after_drawing_frame() {
        let mut app = app(vec![vec![GameEvent::Quit]]);

        app.run().unwrap();

        assert!(app.game().close_requested());
        assert_eq!(presents(&app), 1);
    }

    #[test]
    fn test_won_game_keeps_drawing_with_frozen_score() {
        let mut app = app(vec![
            vec![click(0, 0), click(1, 0)],
            vec![click(0, 1), click(1, 1)],
            vec![],
            vec![],
            vec![],
        ]);

        for _ in 0..2 {
            app.frame().unwrap();
        }
        assert!(!app.game().continue_game());
        let frozen = app.game().score();

        app.clock.advance(10_000);
        for _ in 0..3 {
            app.frame().unwrap();
        }

        assert_eq!(app.game().score(), frozen);
        assert!(!app.game().close_requested());
        assert_eq!(presents(&app), 5);

        // Script is exhausted, next poll closes the window
        app.run().unwrap();
        assert!(app.game().close_requested());
    }

    #[test]
    fn test_mismatch_frame_shows_pair_before_hiding() {
        let mut app = app(vec![vec![click(0, 0), click(0, 1)], vec![]]);

        app.frame().unwrap();
        // The frame drew both pictures, then the update hid them again
        let revealed: Vec<ImageId> = app.surface.blits().iter().map(|(image, _, _)| *image).collect();
        assert_eq!(
            revealed,
            vec![ImageId(1), ImageId(2), ImageId::HIDDEN, ImageId::HIDDEN]
        );
        assert_eq!(app.clock.delays, vec![500]);

        app.surface.calls.clear();
        app.frame().unwrap();
        assert!(app.surface.blits().iter().all(|(image, _, _)| *image == ImageId::HIDDEN));
    }

    #[test]
    fn test_run_paces_frames() {
        let mut app = app(vec![vec![], vec![]]);

        app.run().unwrap();

        // Two scripted frames plus the closing one
        assert_eq!(app.clock.delays, vec![FRAME_DELAY_MS; 3]);
    }
}
