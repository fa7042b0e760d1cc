use pixels::{Pixels, SurfaceTexture};
use std::time::Instant;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, VirtualKeyCode, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use log::error;

use crate::config::Config;
use crate::display::{LCD_HEIGHT, LCD_WIDTH};
use crate::game::Game;
use crate::snake::Direction;

/// Opens the window and drives the game until it is closed. The window shows
/// the 84x48 LCD buffer upscaled by the configured factor.
pub fn run(cfg: Config) {
    let event_loop = EventLoop::new();

    let width = LCD_WIDTH as u32 * cfg.window_scale;
    let height = LCD_HEIGHT as u32 * cfg.window_scale;

    let window = WindowBuilder::new()
        .with_title("Snake 5110")
        .with_inner_size(LogicalSize::new(width, height))
        .with_resizable(false)
        .build(&event_loop)
        .expect("failed to create the window");

    let surface = SurfaceTexture::new(width, height, &window);
    let mut pixels = Pixels::new(LCD_WIDTH as u32, LCD_HEIGHT as u32, surface)
        .expect("failed to create the pixel buffer");

    let mut game = Game::new(&cfg);
    let lcd = game.lcd_handle();
    let mut last_update = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::RedrawRequested(_) => {
                // the interval shrinks as the score climbs
                if last_update.elapsed() >= game.tick_interval() {
                    game.tick();
                    last_update = Instant::now();
                }
                lcd.borrow().render_into(pixels.frame_mut());
                if let Err(err) = pixels.render() {
                    error!("render failed: {err}");
                    *control_flow = ControlFlow::Exit;
                }
            }

            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.state == ElementState::Pressed {
                        if let Some(key) = input.virtual_keycode {
                            handle_key(&mut game, key, control_flow);
                        }
                    }
                }
                _ => {}
            },

            Event::MainEventsCleared => {
                window.request_redraw();
            }
            _ => {}
        }
    });
}

fn handle_key(game: &mut Game, key: VirtualKeyCode, control_flow: &mut ControlFlow) {
    match key {
        VirtualKeyCode::Escape => *control_flow = ControlFlow::Exit,
        VirtualKeyCode::Space | VirtualKeyCode::Return => game.handle_start_key(),
        VirtualKeyCode::P => game.toggle_pause(),
        _ => {
            if let Some(dir) = key_to_direction(key) {
                game.set_direction(dir);
            }
        }
    }
}

fn key_to_direction(key: VirtualKeyCode) -> Option<Direction> {
    match key {
        VirtualKeyCode::Up | VirtualKeyCode::W => Some(Direction::Up),
        VirtualKeyCode::Down | VirtualKeyCode::S => Some(Direction::Down),
        VirtualKeyCode::Left | VirtualKeyCode::A => Some(Direction::Left),
        VirtualKeyCode::Right | VirtualKeyCode::D => Some(Direction::Right),
        _ => None,
    }
}
