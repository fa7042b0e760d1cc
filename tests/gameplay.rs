//! Scripted games on small boards, driven through the public surface.

use snake_5110::board::Point;
use snake_5110::config::Config;
use snake_5110::game::{Game, State};
use snake_5110::snake::Direction;

fn cfg(grid_width: u32, grid_height: u32, seed: u64) -> Config {
    Config {
        grid_width,
        grid_height,
        weight: 6,
        tick_ms: 100,
        window_scale: 4,
        seed: Some(seed),
    }
}

/// A fresh game that has already left the start screen.
fn started(cfg: &Config) -> Game {
    let mut game = Game::new(cfg);
    game.handle_start_key();
    assert_eq!(game.state, State::Playing);
    game
}

#[test]
fn eating_twice_on_a_tiny_board_wins() {
    // 2x2 board, snake of length 2: two meals fill every cell
    let mut game = started(&cfg(2, 2, 7));
    game.food.place_at(Point { x: 1, y: 0 }, &game.board);

    game.set_direction(Direction::Up);
    game.tick();
    assert_eq!(game.state, State::Playing);
    assert_eq!(game.score, 10);
    assert_eq!(game.snake.len(), 3);
    // only one cell is free, so the respawn has no choice
    assert_eq!(game.food.cell, Point { x: 0, y: 0 });

    game.set_direction(Direction::Left);
    game.tick();
    assert_eq!(game.state, State::Victory);
    assert_eq!(game.score, 20);
    assert_eq!(game.snake.len(), 4);
}

#[test]
fn a_meal_grows_the_snake_and_moves_the_food() {
    let mut game = started(&cfg(5, 5, 19));
    let head = game.snake.head();
    game.food
        .place_at(Point { x: head.x + 1, y: head.y }, &game.board);

    game.tick();

    assert_eq!(game.score, 10);
    assert_eq!(game.snake.len(), 4);
    assert!(game.board.is_inside(game.food.cell));
    assert!(!game.snake.occupies(game.food.cell));
}

#[test]
fn the_wall_ends_the_run() {
    let mut game = started(&cfg(5, 5, 19));
    game.food.place_at(Point { x: 0, y: 4 }, &game.board);

    // head starts at (2, 2) heading right; two cells to the edge
    game.tick();
    game.tick();
    assert_eq!(game.state, State::Playing);
    game.tick();
    assert_eq!(game.state, State::GameOver);
    assert!(game.board.is_inside(game.snake.head()));
}

#[test]
fn pausing_freezes_the_snake() {
    let mut game = started(&cfg(5, 5, 19));
    game.food.place_at(Point { x: 0, y: 4 }, &game.board);

    game.tick();
    let frozen = game.snake.head();

    game.toggle_pause();
    assert_eq!(game.state, State::Paused);
    for _ in 0..3 {
        game.tick();
    }
    assert_eq!(game.snake.head(), frozen);

    game.toggle_pause();
    game.tick();
    assert_ne!(game.snake.head(), frozen);
}

#[test]
fn space_restarts_a_finished_game() {
    let mut game = started(&cfg(5, 5, 19));
    let head = game.snake.head();
    game.food
        .place_at(Point { x: head.x + 1, y: head.y }, &game.board);
    game.tick();
    assert_eq!(game.score, 10);
    game.food.place_at(Point { x: 0, y: 4 }, &game.board);

    // ride right into the wall
    game.tick();
    game.tick();
    assert_eq!(game.state, State::GameOver);

    game.handle_start_key();
    assert_eq!(game.state, State::Playing);
    assert_eq!(game.score, 0);
    assert_eq!(game.snake.len(), 3);
    assert_eq!(game.snake.head(), Point { x: 2, y: 2 });
    assert!(game.board.is_inside(game.food.cell));
    assert!(!game.snake.occupies(game.food.cell));
}

#[test]
fn keys_walk_through_every_screen() {
    let mut game = Game::new(&cfg(8, 6, 5));
    assert_eq!(game.state, State::Start);

    // direction input does nothing before the game starts
    game.set_direction(Direction::Up);
    assert_eq!(game.snake.direction, Direction::Right);

    game.handle_start_key();
    assert_eq!(game.state, State::Playing);
    game.toggle_pause();
    assert_eq!(game.state, State::Paused);
    game.handle_start_key();
    assert_eq!(game.state, State::Playing);
}

#[test]
fn the_default_layout_fills_the_screen() {
    let cfg = Config::default();
    assert!(cfg.is_valid());
    let game = Game::new(&cfg);
    assert_eq!(game.board.pixel_width(), 84);
    assert_eq!(game.board.pixel_height(), 48);
}
