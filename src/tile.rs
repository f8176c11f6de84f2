use crate::clock::Clock;
use crate::surface::{BorderStyle, ImageId, Surface};
use sdl2::rect::{Point, Rect};

/// Result of turning over a second tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Same picture, both tiles stay face up for the rest of the game
    Match,
    /// Different pictures, both tiles went face down again
    Mismatch,
}

/// A single card on the board
///
/// A tile is in one of three states:
/// - hidden: shows the shared placeholder
/// - revealed: shows its picture while waiting to be compared
/// - discovered: matched with its twin, face up for good
///
/// `discovered` implies `!hidden`.
#[derive(Debug, Clone)]
pub struct Tile {
    rect: Rect,
    hidden_image: ImageId,
    reveal_image: ImageId,
    hidden: bool,
    discovered: bool,
}

impl Tile {
    pub fn new(rect: Rect, hidden_image: ImageId, reveal_image: ImageId) -> Self {
        Tile {
            rect,
            hidden_image,
            reveal_image,
            hidden: true,
            discovered: false,
        }
    }

    #[allow(dead_code)]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn reveal_image(&self) -> ImageId {
        self.reveal_image
    }

    #[allow(dead_code)]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_discovered(&self) -> bool {
        self.discovered
    }

    /// Flip the tile face up if the click landed on it
    ///
    /// Returns true only for a hidden, undiscovered tile containing `point`.
    /// Clicking a tile that is already face up does nothing.
    pub fn select(&mut self, point: Point) -> bool {
        if self.rect.contains_point(point) && !self.discovered && self.hidden {
            self.hidden = false;
            true
        } else {
            false
        }
    }

    /// Resolve a revealed pair
    ///
    /// On a mismatch the clock blocks for `delay_ms` first so the player can
    /// see both pictures, then both tiles are hidden again.
    pub fn compare_image(
        &mut self,
        other: &mut Tile,
        clock: &mut dyn Clock,
        delay_ms: u64,
    ) -> MatchOutcome {
        if self.reveal_image != other.reveal_image {
            clock.delay(delay_ms);
            self.hidden = true;
            other.hidden = true;
            MatchOutcome::Mismatch
        } else {
            self.discovered = true;
            other.discovered = true;
            MatchOutcome::Match
        }
    }

    /// Image currently facing the player
    pub fn visible_image(&self) -> ImageId {
        if self.hidden {
            self.hidden_image
        } else {
            self.reveal_image
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface, border: BorderStyle) -> Result<(), String> {
        let image = self.visible_image();
        let (x, y) = self.content_origin(surface.image_size(image));

        surface.blit(image, x, y)?;
        surface.draw_border(self.rect, border.width, border.color)
    }

    /// Top-left corner that centers an image of `size` inside the tile
    fn content_origin(&self, size: (u32, u32)) -> (i32, i32) {
        let d_x = (self.rect.width() as i32 - size.0 as i32).div_euclid(2);
        let d_y = (self.rect.height() as i32 - size.1 as i32).div_euclid(2);
        (self.rect.x() + d_x, self.rect.y() + d_y)
    }
}
