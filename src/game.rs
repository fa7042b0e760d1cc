//! Game state machine and per-tick rules: movement, collisions, collection,
//! scoring, and composing the LCD frame for whichever screen is active.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::board::{Board, Point};
use crate::config::Config;
use crate::display::{LCD_HEIGHT, LCD_WIDTH, Lcd};
use crate::food::Food;
use crate::font;
use crate::snake::{Direction, Snake};

const START_LENGTH: usize = 3;
/// Every this many points the tick gets a little shorter.
const SPEEDUP_STEP_POINTS: u32 = 50;
const SPEEDUP_MS: u64 = 10;
const MIN_TICK_MS: u64 = 60;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum State {
    Start,
    Playing,
    Paused,
    GameOver,
    Victory,
}

pub struct Game {
    pub board: Board,
    pub snake: Snake,
    pub food: Food,
    pub state: State,
    pub score: u32,
    pub ticks: u64,
    tick_ms: u64,
    base_tick_ms: u64,
    lcd: Rc<RefCell<Lcd>>,
    rng: StdRng,
}

impl Game {
    pub fn new(cfg: &Config) -> Game {
        let board = Board::new(cfg.grid_width, cfg.grid_height, cfg.weight);
        let lcd = Rc::new(RefCell::new(Lcd::new()));
        let mut rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let snake = Game::starting_snake(&board);
        let mut food = Food::new();
        food.initialize(Rc::clone(&lcd));
        if !food.randomize(&board, &snake.body, &mut rng) {
            log::warn!("no room for the first food");
        }

        let mut game = Game {
            board,
            snake,
            food,
            state: State::Start,
            score: 0,
            ticks: 0,
            tick_ms: cfg.tick_ms,
            base_tick_ms: cfg.tick_ms,
            lcd,
            rng,
        };
        game.render();
        game
    }

    fn starting_snake(board: &Board) -> Snake {
        let head = Point {
            x: board.width as i32 / 2,
            y: board.height as i32 / 2,
        };
        let length = START_LENGTH.min(board.width as usize);
        Snake::new(head, length, Direction::Right)
    }

    /// Shared handle to the LCD buffer, for the event loop's blit.
    pub fn lcd_handle(&self) -> Rc<RefCell<Lcd>> {
        Rc::clone(&self.lcd)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Direction changes apply on the next tick; reversing into the body is
    /// ignored (a single-segment snake may turn any way it likes).
    pub fn set_direction(&mut self, dir: Direction) {
        if self.state != State::Playing {
            return;
        }
        if self.snake.len() > 1 && dir == self.snake.direction.opposite() {
            return;
        }
        self.snake.direction = dir;
    }

    /// Space: leave the start screen, resume from pause, or restart after a
    /// finished game.
    pub fn handle_start_key(&mut self) {
        match self.state {
            State::Start => {
                self.state = State::Playing;
                info!("game started");
            }
            State::Paused => self.state = State::Playing,
            State::GameOver | State::Victory => self.restart(),
            State::Playing => return,
        }
        self.render();
    }

    pub fn toggle_pause(&mut self) {
        match self.state {
            State::Playing => {
                self.state = State::Paused;
                info!("paused");
            }
            State::Paused => self.state = State::Playing,
            _ => return,
        }
        self.render();
    }

    fn restart(&mut self) {
        self.snake = Game::starting_snake(&self.board);
        let mut food = Food::new();
        food.initialize(Rc::clone(&self.lcd));
        if !food.randomize(&self.board, &self.snake.body, &mut self.rng) {
            log::warn!("no room for the first food");
        }
        self.food = food;
        self.score = 0;
        self.tick_ms = self.base_tick_ms;
        self.state = State::Playing;
        info!("new game");
    }

    /// One game-loop tick: advance the world when playing, then redraw the
    /// LCD buffer for the current state.
    pub fn tick(&mut self) {
        self.ticks += 1;
        if self.state == State::Playing {
            self.step();
        }
        self.render();
    }

    fn step(&mut self) {
        let (dx, dy) = self.snake.direction.delta();
        let head = self.snake.head();
        let next = Point {
            x: head.x + dx,
            y: head.y + dy,
        };

        if !self.board.is_inside(next) {
            info!("hit the wall at ({}, {}), score {}", next.x, next.y, self.score);
            self.state = State::GameOver;
            return;
        }
        if self.snake.occupies(next) {
            info!("ran into the body, score {}", self.score);
            self.state = State::GameOver;
            return;
        }

        let ate = self.food.is_at(next);
        self.snake.move_forward(ate);

        if ate {
            self.score += self.food.points;
            self.maybe_speed_up();
            // respawn against the grown body; a full board is the win
            if !self.food.randomize(&self.board, &self.snake.body, &mut self.rng) {
                info!("board full, final score {}", self.score);
                self.state = State::Victory;
            }
        }
    }

    fn maybe_speed_up(&mut self) {
        if self.score % SPEEDUP_STEP_POINTS == 0 && self.tick_ms > MIN_TICK_MS {
            self.tick_ms = (self.tick_ms - SPEEDUP_MS).max(MIN_TICK_MS);
            info!("speed up: {} ms per tick", self.tick_ms);
        }
    }

    fn render(&mut self) {
        self.lcd.borrow_mut().clear();
        match self.state {
            State::Start => self.render_start(),
            State::Playing => self.render_field(true),
            State::Paused => {
                self.render_field(false);
                self.render_pause_overlay();
            }
            State::GameOver => self.render_end("GAME OVER"),
            State::Victory => self.render_end("YOU WIN"),
        }
    }

    fn render_field(&mut self, animate: bool) {
        {
            let mut lcd = self.lcd.borrow_mut();
            lcd.draw_rect(
                0,
                0,
                self.board.pixel_width() as i32,
                self.board.pixel_height() as i32,
            );
            let w = self.board.weight as i32;
            for seg in &self.snake.body {
                lcd.fill_rect(seg.x * w, seg.y * w, w, w);
            }
        } // the food borrows the same handle
        if animate {
            self.food.execute();
        } else {
            self.food.draw();
        }
    }

    fn render_pause_overlay(&mut self) {
        let mut lcd = self.lcd.borrow_mut();
        let y = (LCD_HEIGHT as i32 - font::GLYPH_HEIGHT) / 2;
        lcd.clear_rect(0, y - 2, LCD_WIDTH as i32, font::GLYPH_HEIGHT + 4);
        Self::centered_text(&mut lcd, y, "PAUSED");
    }

    fn render_start(&mut self) {
        let mut lcd = self.lcd.borrow_mut();
        Self::centered_text(&mut lcd, 14, "SNAKE");
        if self.ticks % 2 == 0 {
            Self::centered_text(&mut lcd, 28, "PRESS SPACE");
        }
    }

    fn render_end(&mut self, title: &str) {
        let mut lcd = self.lcd.borrow_mut();
        Self::centered_text(&mut lcd, 10, title);
        Self::centered_text(&mut lcd, 22, &format!("SCORE {}", self.score));
        if self.ticks % 2 == 0 {
            Self::centered_text(&mut lcd, 34, "PRESS SPACE");
        }
    }

    fn centered_text(lcd: &mut Lcd, y: i32, text: &str) {
        let x = (LCD_WIDTH as i32 - font::text_width(text)) / 2;
        font::draw_text(lcd, x, y, text);
    }
}
