//! Display surface abstraction
//!
//! The game logic draws through the [`Surface`] trait instead of touching an
//! SDL2 canvas directly. [`SdlSurface`] is the real window; tests swap in a
//! surface that only records what would have been drawn.

use crate::text::draw_simple_text;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Texture, WindowCanvas};

/// Index of a loaded image. Two tiles show the same picture iff their ids match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub usize);

impl ImageId {
    /// The face-down image shared by every tile
    pub const HIDDEN: ImageId = ImageId(0);
}

/// Outline drawn over every tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderStyle {
    pub width: u32,
    pub color: Color,
}

impl Default for BorderStyle {
    fn default() -> Self {
        BorderStyle {
            width: 3,
            color: Color::RGB(0, 0, 0),
        }
    }
}

/// Everything the game needs from a display
pub trait Surface {
    /// Window size in pixels (width, height)
    fn size(&self) -> (u32, u32);

    /// Pixel size of a loaded image, (0, 0) if the id is unknown
    fn image_size(&self, image: ImageId) -> (u32, u32);

    fn fill(&mut self, color: Color);

    /// Draw an image with its top-left corner at (x, y), unscaled
    fn blit(&mut self, image: ImageId, x: i32, y: i32) -> Result<(), String>;

    /// Draw a rectangle outline `width` pixels thick, growing inward
    fn draw_border(&mut self, rect: Rect, width: u32, color: Color) -> Result<(), String>;

    /// Draw bitmap text with its top-left corner at (x, y)
    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color: Color,
        scale: u32,
    ) -> Result<(), String>;

    /// Make everything drawn since the last fill visible
    fn present(&mut self);
}

/// SDL2 window canvas plus the textures loaded for it
pub struct SdlSurface<'a> {
    canvas: WindowCanvas,
    images: Vec<Texture<'a>>,
}

impl<'a> SdlSurface<'a> {
    pub fn new(canvas: WindowCanvas, images: Vec<Texture<'a>>) -> Self {
        SdlSurface { canvas, images }
    }
}

fn find_texture<'t, 'a>(images: &'t [Texture<'a>], image: ImageId) -> Result<&'t Texture<'a>, String> {
    images
        .get(image.0)
        .ok_or_else(|| format!("Unknown image id {}", image.0))
}

impl<'a> Surface for SdlSurface<'a> {
    fn size(&self) -> (u32, u32) {
        self.canvas.window().size()
    }

    fn image_size(&self, image: ImageId) -> (u32, u32) {
        find_texture(&self.images, image)
            .map(|texture| {
                let query = texture.query();
                (query.width, query.height)
            })
            .unwrap_or((0, 0))
    }

    fn fill(&mut self, color: Color) {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
    }

    fn blit(&mut self, image: ImageId, x: i32, y: i32) -> Result<(), String> {
        let (width, height) = self.image_size(image);
        let texture = find_texture(&self.images, image)?;
        let dst_rect = Rect::new(x, y, width, height);

        self.canvas
            .copy(texture, None, Some(dst_rect))
            .map_err(|e| format!("Image render error: {}", e))
    }

    fn draw_border(&mut self, rect: Rect, width: u32, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        for ring in border_rings(rect, width) {
            self.canvas.draw_rect(ring)?;
        }
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        color: Color,
        scale: u32,
    ) -> Result<(), String> {
        draw_simple_text(&mut self.canvas, text, x, y, color, scale)
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}

/// One-pixel outlines making up a `width`-thick border, outermost first
///
/// Stops early once the rectangle has been fully covered.
pub fn border_rings(rect: Rect, width: u32) -> Vec<Rect> {
    let mut rings = Vec::with_capacity(width as usize);

    for inset in 0..width {
        let shrink = inset * 2;
        if shrink >= rect.width() || shrink >= rect.height() {
            break;
        }
        rings.push(Rect::new(
            rect.x() + inset as i32,
            rect.y() + inset as i32,
            rect.width() - shrink,
            rect.height() - shrink,
        ));
    }

    rings
}

/// A draw call captured by [`RecordingSurface`]
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Fill(Color),
    Blit { image: ImageId, x: i32, y: i32 },
    Border { rect: Rect, width: u32 },
    Text { text: String, x: i32, y: i32 },
    Present,
}

/// In-memory surface for tests. Every image has the same size.
#[cfg(test)]
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub image_width: u32,
    pub image_height: u32,
    pub calls: Vec<DrawCall>,
}

#[cfg(test)]
impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        RecordingSurface {
            width,
            height,
            image_width: 40,
            image_height: 40,
            calls: Vec::new(),
        }
    }

    pub fn blits(&self) -> Vec<(ImageId, i32, i32)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Blit { image, x, y } => Some((*image, *x, *y)),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn image_size(&self, _image: ImageId) -> (u32, u32) {
        (self.image_width, self.image_height)
    }

    fn fill(&mut self, color: Color) {
        self.calls.push(DrawCall::Fill(color));
    }

    fn blit(&mut self, image: ImageId, x: i32, y: i32) -> Result<(), String> {
        self.calls.push(DrawCall::Blit { image, x, y });
        Ok(())
    }

    fn draw_border(&mut self, rect: Rect, width: u32, _color: Color) -> Result<(), String> {
        self.calls.push(DrawCall::Border { rect, width });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        _color: Color,
        _scale: u32,
    ) -> Result<(), String> {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
        });
        Ok(())
    }

    fn present(&mut self) {
        self.calls.push(DrawCall::Present);
    }
}
