//! Food placement. Picking a fresh cell is rejection sampling against the
//! snake body, with a bounded retry count and a row-major scan fallback so a
//! crowded board can never stall the tick.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use rand::Rng;

use crate::board::{Board, Point};
use crate::display::Lcd;

/// Random draws before giving up and scanning for the first free cell.
pub const MAX_RANDOM_TRIES: u32 = 96;

const FOOD_POINTS: u32 = 10;

pub struct Food {
    /// Current grid cell. Only meaningful once placed.
    pub cell: Point,
    /// Pixel position, always cell * weight.
    pub px: i32,
    pub py: i32,
    /// Linear cell index (y * board width + x), kept in step with `cell` for
    /// callers that track occupancy by index.
    pub index: usize,
    /// Score awarded when this food is collected.
    pub points: u32,
    weight: u32,
    blink_on: bool,
    placed: bool,
    display: Option<Rc<RefCell<Lcd>>>,
}

impl Food {
    pub fn new() -> Self {
        Self {
            cell: Point { x: 0, y: 0 },
            px: 0,
            py: 0,
            index: 0,
            points: FOOD_POINTS,
            weight: 0,
            blink_on: false,
            placed: false,
            display: None,
        }
    }

    /// Binds the display handle the food draws through. Call once, before
    /// any `draw()` or `execute()`.
    pub fn initialize(&mut self, display: Rc<RefCell<Lcd>>) {
        if self.display.is_some() {
            warn!("food: initialize() called twice");
        }
        self.display = Some(display);
    }

    /// Moves the food to a random cell not covered by `occupied`. Returns
    /// false when the board has no free cell left, leaving the previous
    /// placement untouched.
    pub fn randomize(&mut self, board: &Board, occupied: &[Point], rng: &mut impl Rng) -> bool {
        for _ in 0..MAX_RANDOM_TRIES {
            let cell = Point {
                x: rng.gen_range(0..board.width as i32),
                y: rng.gen_range(0..board.height as i32),
            };
            if !occupied.contains(&cell) {
                debug!("food placed at ({}, {})", cell.x, cell.y);
                self.place_at(cell, board);
                return true;
            }
            debug!("food candidate ({}, {}) occupied, retrying", cell.x, cell.y);
        }

        // dense board: take the first free cell in row-major order
        warn!(
            "food: {} random tries exhausted, scanning the board",
            MAX_RANDOM_TRIES
        );
        for y in 0..board.height as i32 {
            for x in 0..board.width as i32 {
                let cell = Point { x, y };
                if !occupied.contains(&cell) {
                    self.place_at(cell, board);
                    return true;
                }
            }
        }
        false
    }

    /// Puts the food on a specific cell. The scan fallback uses this, and
    /// tests use it to stage exact layouts.
    pub fn place_at(&mut self, cell: Point, board: &Board) {
        debug_assert!(board.is_inside(cell), "food placed off the board");
        self.cell = cell;
        self.px = cell.x * board.weight as i32;
        self.py = cell.y * board.weight as i32;
        self.index = board.index_of(cell);
        self.weight = board.weight;
        self.placed = true;
    }

    pub fn is_at(&self, cell: Point) -> bool {
        self.placed && self.cell == cell
    }

    pub fn pixel_pos(&self) -> (i32, i32) {
        (self.px, self.py)
    }

    /// Draws the food cell, blink phase ignored. Drawing before
    /// `initialize()` or before the first placement is a logged no-op.
    pub fn draw(&self) {
        let display = match &self.display {
            Some(d) => d,
            None => {
                warn!("food: draw() before initialize()");
                return;
            }
        };
        if !self.placed {
            warn!("food: draw() before the first randomize()");
            return;
        }
        let mut lcd = display.borrow_mut();
        // inset dot so food reads differently from body segments
        let w = self.weight as i32;
        let inset = if w >= 3 { 1 } else { 0 };
        lcd.fill_rect(self.px + inset, self.py + inset, w - 2 * inset, w - 2 * inset);
    }

    /// Per-tick step: advance the blink phase and draw on the visible half.
    pub fn execute(&mut self) {
        self.blink_on = !self.blink_on;
        if self.blink_on {
            self.draw();
        }
    }
}

impl Default for Food {
    fn default() -> Self {
        Self::new()
    }
}
