//! TTF Text Rendering
//!
//! Thin helpers for drawing TrueType text onto an SDL2 canvas. Each call
//! renders the string to a surface, uploads it as a texture and copies it
//! to the target position; callers pick the font (and therefore the size).

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::ttf::Font;
use sdl2::video::Window;

/// Measures the rendered size of `text` in pixels for the given font.
pub fn text_size(font: &Font, text: &str) -> Result<(u32, u32), String> {
    font.size_of(text).map_err(|e| e.to_string())
}

/// Draws `text` with its top-left corner at (`x`, `y`).
pub fn draw_text(
    canvas: &mut Canvas<Window>,
    font: &Font,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
) -> Result<(), String> {
    // SDL_ttf refuses to render zero-width surfaces
    if text.is_empty() {
        return Ok(());
    }

    let surface = font
        .render(text)
        .blended(color)
        .map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let texture = texture_creator
        .create_texture_from_surface(&surface)
        .map_err(|e| e.to_string())?;

    let target = Rect::new(x, y, surface.width(), surface.height());
    canvas.copy(&texture, None, target)
}

/// Draws `text` horizontally centered within `window_width`, top edge at `y`.
pub fn draw_text_centered(
    canvas: &mut Canvas<Window>,
    font: &Font,
    text: &str,
    window_width: u32,
    y: i32,
    color: Color,
) -> Result<(), String> {
    let (text_width, _) = text_size(font, text)?;
    let x = (window_width as i32 - text_width as i32) / 2;
    draw_text(canvas, font, text, x, y, color)
}

/// Draws `text` centered on both axes inside `bounds`.
pub fn draw_text_in_rect(
    canvas: &mut Canvas<Window>,
    font: &Font,
    text: &str,
    bounds: Rect,
    color: Color,
) -> Result<(), String> {
    let (text_width, text_height) = text_size(font, text)?;
    let x = bounds.x() + (bounds.width() as i32 - text_width as i32) / 2;
    let y = bounds.y() + (bounds.height() as i32 - text_height as i32) / 2;
    draw_text(canvas, font, text, x, y, color)
}
