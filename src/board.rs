/// One grid cell, in board coordinates (not pixels).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Playfield geometry: width/height in cells, weight = cell size in pixels.
#[derive(Debug)]
pub struct Board {
    pub width: u32,
    pub height: u32,
    pub weight: u32,
}

impl Board {
    pub fn new(width: u32, height: u32, weight: u32) -> Self {
        assert!(
            width > 0 && height > 0 && weight > 0,
            "board dimensions must be positive"
        );
        Self {
            width,
            height,
            weight,
        }
    }

    pub fn is_inside(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height
    }

    /// Linear cell index, row-major.
    pub fn index_of(&self, p: Point) -> usize {
        debug_assert!(self.is_inside(p));
        (p.y as u32 * self.width + p.x as u32) as usize
    }

    pub fn cell_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    pub fn pixel_width(&self) -> u32 {
        self.width * self.weight
    }

    pub fn pixel_height(&self) -> u32 {
        self.height * self.weight
    }
}
