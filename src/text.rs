//! Bitmap Text Rendering
//!
//! Digits drawn from a 5x7 bitmap font with SDL2 rectangles. The only text
//! on screen is the score, so the glyph set stops at `0-9`.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;
/// Blank column between glyphs
const GLYPH_SPACING: u32 = 1;

/// Row patterns for a character, most significant of the low 5 bits is the left pixel
fn glyph(c: char) -> [u8; 7] {
    match c {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ' ' => [0; 7],
        _ => [0b11111; 7], // Full block for unknown
    }
}

/// Pixel rectangles that make up `text` at the given position and scale
fn glyph_pixels(text: &str, x: i32, y: i32, scale: u32) -> Vec<Rect> {
    let advance = ((GLYPH_WIDTH + GLYPH_SPACING) * scale) as i32;
    let pixel_size = scale as i32;
    let mut pixels = Vec::new();

    for (i, c) in text.chars().enumerate() {
        let char_x = x + i as i32 * advance;

        for (row, pattern_row) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_WIDTH as i32 {
                if (pattern_row >> (GLYPH_WIDTH as i32 - 1 - col)) & 1 == 1 {
                    pixels.push(Rect::new(
                        char_x + col * pixel_size,
                        y + row as i32 * pixel_size,
                        scale,
                        scale,
                    ));
                }
            }
        }
    }

    pixels
}

/// Width in pixels of `text` rendered at `scale`, without trailing spacing
pub fn text_width(text: &str, scale: u32) -> u32 {
    let count = text.chars().count() as u32;
    if count == 0 {
        return 0;
    }
    (count * (GLYPH_WIDTH + GLYPH_SPACING) - GLYPH_SPACING) * scale
}

/// Height in pixels of one line of text at `scale`
#[allow(dead_code)] // Layout helper, the score sits on the top edge
pub fn text_height(scale: u32) -> u32 {
    GLYPH_HEIGHT * scale
}

/// Renders bitmap text using procedural rectangles (5x7 font)
///
/// # Parameters
///
/// - `canvas`: SDL2 canvas to render to
/// - `text`: Text string to render
/// - `x`, `y`: Top-left position in pixels
/// - `color`: Text color
/// - `scale`: Scaling factor (1 = 5x7 pixels, 2 = 10x14 pixels, etc.)
pub fn draw_simple_text(
    canvas: &mut Canvas<Window>,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    canvas.set_draw_color(color);

    let pixels = glyph_pixels(text, x, y, scale);
    if pixels.is_empty() {
        return Ok(());
    }
    canvas.fill_rects(&pixels)
}
