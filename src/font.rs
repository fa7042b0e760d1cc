//! Tiny 3x5 bitmap font for the title / score screens. Each glyph is one
//! u16: five rows of three bits, top row first, MSB = leftmost pixel.

use crate::display::Lcd;

pub const GLYPH_WIDTH: i32 = 3;
pub const GLYPH_HEIGHT: i32 = 5;
/// Glyph plus one pixel of spacing.
pub const ADVANCE: i32 = GLYPH_WIDTH + 1;

const LETTERS: [u16; 26] = [
    0b010_101_111_101_101, // A
    0b110_101_110_101_110, // B
    0b011_100_100_100_011, // C
    0b110_101_101_101_110, // D
    0b111_100_110_100_111, // E
    0b111_100_110_100_100, // F
    0b011_100_101_101_011, // G
    0b101_101_111_101_101, // H
    0b111_010_010_010_111, // I
    0b001_001_001_101_010, // J
    0b101_101_110_101_101, // K
    0b100_100_100_100_111, // L
    0b101_111_111_101_101, // M
    0b110_101_101_101_101, // N
    0b010_101_101_101_010, // O
    0b110_101_110_100_100, // P
    0b111_101_101_111_001, // Q
    0b110_101_110_101_101, // R
    0b011_100_010_001_110, // S
    0b111_010_010_010_010, // T
    0b101_101_101_101_111, // U
    0b101_101_101_101_010, // V
    0b101_101_111_111_101, // W
    0b101_101_010_101_101, // X
    0b101_101_010_010_010, // Y
    0b111_001_010_100_111, // Z
];

const DIGITS: [u16; 10] = [
    0b111_101_101_101_111, // 0
    0b010_110_010_010_111, // 1
    0b111_001_111_100_111, // 2
    0b111_001_011_001_111, // 3
    0b101_101_111_001_001, // 4
    0b111_100_111_001_111, // 5
    0b111_100_111_101_111, // 6
    0b111_001_010_010_010, // 7
    0b111_101_111_101_111, // 8
    0b111_101_111_001_111, // 9
];

fn glyph(c: char) -> u16 {
    match c {
        'A'..='Z' => LETTERS[(c as u8 - b'A') as usize],
        'a'..='z' => LETTERS[(c as u8 - b'a') as usize],
        '0'..='9' => DIGITS[(c as u8 - b'0') as usize],
        ':' => 0b000_010_000_010_000,
        _ => 0, // anything else renders blank
    }
}

pub fn draw_char(lcd: &mut Lcd, x: i32, y: i32, c: char) {
    let bits = glyph(c);
    for row in 0..GLYPH_HEIGHT {
        for col in 0..GLYPH_WIDTH {
            let bit = 14 - (row * 3 + col);
            if bits >> bit & 1 == 1 {
                lcd.set_pixel(x + col, y + row, true);
            }
        }
    }
}

pub fn draw_text(lcd: &mut Lcd, x: i32, y: i32, text: &str) {
    let mut cx = x;
    for c in text.chars() {
        draw_char(lcd, cx, y, c);
        cx += ADVANCE;
    }
}

/// Rendered width in pixels (no trailing spacing).
pub fn text_width(text: &str) -> i32 {
    let n = text.chars().count() as i32;
    if n == 0 { 0 } else { n * ADVANCE - 1 }
}
