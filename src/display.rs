//! Monochrome framebuffer with the PCD8544 (Nokia 5110) geometry. The game
//! draws into this one-bit buffer; the event loop blits it into the RGBA
//! frame of the `pixels` surface, which scales it up to the window.

pub const LCD_WIDTH: usize = 84;
pub const LCD_HEIGHT: usize = 48;

// nokia-ish palette: dark pixels on a pale green backlight
const PIXEL_ON: [u8; 4] = [0x20, 0x29, 0x1e, 0xff];
const PIXEL_OFF: [u8; 4] = [0xc3, 0xd0, 0x9e, 0xff];

pub struct Lcd {
    pixels: [bool; LCD_WIDTH * LCD_HEIGHT],
}

impl Lcd {
    pub fn new() -> Self {
        Self {
            pixels: [false; LCD_WIDTH * LCD_HEIGHT],
        }
    }

    pub fn clear(&mut self) {
        self.pixels = [false; LCD_WIDTH * LCD_HEIGHT];
    }

    /// Out-of-range coordinates are ignored, so callers can draw shapes that
    /// hang over the edge without checking first.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if x < 0 || y < 0 || x >= LCD_WIDTH as i32 || y >= LCD_HEIGHT as i32 {
            return;
        }
        self.pixels[y as usize * LCD_WIDTH + x as usize] = on;
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= LCD_WIDTH as i32 || y >= LCD_HEIGHT as i32 {
            return false;
        }
        self.pixels[y as usize * LCD_WIDTH + x as usize]
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        for dy in 0..h {
            for dx in 0..w {
                self.set_pixel(x + dx, y + dy, true);
            }
        }
    }

    pub fn clear_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        for dy in 0..h {
            for dx in 0..w {
                self.set_pixel(x + dx, y + dy, false);
            }
        }
    }

    /// Rectangle outline, used for the playfield border.
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32) {
        if w <= 0 || h <= 0 {
            return;
        }
        for dx in 0..w {
            self.set_pixel(x + dx, y, true);
            self.set_pixel(x + dx, y + h - 1, true);
        }
        for dy in 0..h {
            self.set_pixel(x, y + dy, true);
            self.set_pixel(x + w - 1, y + dy, true);
        }
    }

    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    /// Blit into an RGBA frame, one LCD pixel per frame pixel.
    pub fn render_into(&self, frame: &mut [u8]) {
        for (on, rgba) in self.pixels.iter().zip(frame.chunks_exact_mut(4)) {
            rgba.copy_from_slice(if *on { &PIXEL_ON } else { &PIXEL_OFF });
        }
    }
}

impl Default for Lcd {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_pixel() {
        let mut lcd = Lcd::new();
        assert!(!lcd.get_pixel(3, 4));
        lcd.set_pixel(3, 4, true);
        assert!(lcd.get_pixel(3, 4));
        lcd.set_pixel(3, 4, false);
        assert!(!lcd.get_pixel(3, 4));
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut lcd = Lcd::new();
        lcd.set_pixel(-1, 0, true);
        lcd.set_pixel(0, -1, true);
        lcd.set_pixel(LCD_WIDTH as i32, 0, true);
        lcd.set_pixel(0, LCD_HEIGHT as i32, true);
        assert!(lcd.pixels().iter().all(|&p| !p));
        assert!(!lcd.get_pixel(-5, -5));
    }

    #[test]
    fn fill_rect_clips_at_the_edge() {
        let mut lcd = Lcd::new();
        lcd.fill_rect(82, 46, 6, 6);
        assert!(lcd.get_pixel(82, 46));
        assert!(lcd.get_pixel(83, 47));
        let lit = lcd.pixels().iter().filter(|&&p| p).count();
        assert_eq!(lit, 4); // only the on-screen corner made it in
    }

    #[test]
    fn draw_rect_is_an_outline() {
        let mut lcd = Lcd::new();
        lcd.draw_rect(10, 10, 5, 4);
        assert!(lcd.get_pixel(10, 10));
        assert!(lcd.get_pixel(14, 10));
        assert!(lcd.get_pixel(10, 13));
        assert!(lcd.get_pixel(14, 13));
        assert!(lcd.get_pixel(12, 10));
        assert!(!lcd.get_pixel(12, 11)); // interior stays clear
    }

    #[test]
    fn render_maps_both_palette_colors() {
        let mut lcd = Lcd::new();
        lcd.set_pixel(0, 0, true);
        let mut frame = vec![0u8; LCD_WIDTH * LCD_HEIGHT * 4];
        lcd.render_into(&mut frame);
        assert_eq!(&frame[0..4], &PIXEL_ON);
        assert_eq!(&frame[4..8], &PIXEL_OFF);
    }

    #[test]
    fn clear_rect_turns_pixels_off() {
        let mut lcd = Lcd::new();
        lcd.fill_rect(0, 0, 10, 10);
        lcd.clear_rect(2, 2, 4, 4);
        assert!(lcd.get_pixel(1, 1));
        assert!(!lcd.get_pixel(3, 3));
        assert!(lcd.get_pixel(6, 2));
    }
}
