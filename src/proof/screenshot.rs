//! Fake chat-screenshot rendering.
//!
//! Produces a small bitmap that looks like a messaging app conversation:
//! a light-grey canvas with four lines of text, the third carrying the
//! generated excuse. Text is rasterized with an 8x8 bitmap font; glyphs
//! that would fall outside the canvas are clipped.

use font8x8::legacy::BASIC_LEGACY;
use image::{Rgb, RgbImage};

/// Canvas width in pixels.
pub const CHAT_WIDTH: u32 = 400;

/// Canvas height in pixels.
pub const CHAT_HEIGHT: u32 = 200;

/// Background grey matching a generic chat app.
pub const BACKGROUND: Rgb<u8> = Rgb([229, 229, 229]);

const TEXT_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
const GLYPH_SIZE: u32 = 8;

/// Renders the fake conversation around `excuse`.
///
/// The caller owns persistence; typically the image is saved to
/// `chat_proof.png` next to the process.
pub fn chat_screenshot(excuse: &str) -> RgbImage {
    let mut img = RgbImage::from_pixel(CHAT_WIDTH, CHAT_HEIGHT, BACKGROUND);

    draw_text(&mut img, 10, 10, "You: Hey, I can't make it today");
    draw_text(&mut img, 10, 40, "Friend: Why not?");
    draw_text(&mut img, 10, 70, &format!("You: {}", excuse));
    draw_text(&mut img, 10, 100, "Friend: Oh no! Hope everything is OK");

    img
}

/// Rasterizes one line of text at (x, y) with the 8x8 font.
///
/// Non-ASCII characters render as '?'. Pixels outside the canvas are
/// dropped, so overlong lines are clipped rather than wrapped.
fn draw_text(img: &mut RgbImage, x: u32, y: u32, text: &str) {
    for (index, ch) in text.chars().enumerate() {
        let code = ch as usize;
        let glyph = if code < BASIC_LEGACY.len() {
            &BASIC_LEGACY[code]
        } else {
            &BASIC_LEGACY[b'?' as usize]
        };

        let glyph_x = x + index as u32 * GLYPH_SIZE;
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                if bits & (1 << col) == 0 {
                    continue;
                }
                let px = glyph_x + col;
                let py = y + row as u32;
                if px < CHAT_WIDTH && py < CHAT_HEIGHT {
                    img.put_pixel(px, py, TEXT_COLOR);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_dimensions_and_background() {
        let img = chat_screenshot("flat tire");
        assert_eq!(img.dimensions(), (CHAT_WIDTH, CHAT_HEIGHT));
        // Corners stay background-colored.
        assert_eq!(*img.get_pixel(0, 0), BACKGROUND);
        assert_eq!(*img.get_pixel(CHAT_WIDTH - 1, CHAT_HEIGHT - 1), BACKGROUND);
    }

    #[test]
    fn test_text_rows_carry_ink() {
        let img = chat_screenshot("flat tire");

        // Each message row must contain at least one text pixel.
        for y_start in [10u32, 40, 70, 100] {
            let mut ink = 0;
            for y in y_start..y_start + GLYPH_SIZE {
                for x in 0..CHAT_WIDTH {
                    if *img.get_pixel(x, y) == TEXT_COLOR {
                        ink += 1;
                    }
                }
            }
            assert!(ink > 0, "no text pixels in row starting at {}", y_start);
        }
    }

    #[test]
    fn test_overlong_excuse_is_clipped_not_panicking() {
        let excuse = "a very long excuse ".repeat(20);
        let img = chat_screenshot(&excuse);
        assert_eq!(img.dimensions(), (CHAT_WIDTH, CHAT_HEIGHT));
    }

    #[test]
    fn test_non_ascii_renders_as_placeholder() {
        // Must not panic or index out of the font table.
        let img = chat_screenshot("café 😅");
        assert_eq!(img.dimensions(), (CHAT_WIDTH, CHAT_HEIGHT));
    }
}
