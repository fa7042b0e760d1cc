//! Snake for a Nokia-5110-sized monochrome framebuffer (84x48), shown in an
//! upscaled `pixels` window. The food placement logic in [`food`] is the
//! interesting part; everything else exists so it has a game to live in.

pub mod board;
pub mod config;
pub mod display;
pub mod event_loop;
pub mod food;
pub mod font;
pub mod game;
pub mod logger;
pub mod snake;
