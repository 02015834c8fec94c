//! A Flappy Bird clone for the terminal: pixel-buffer rendering over
//! crossterm, synthesized sound effects over rodio, and a generic
//! key → handle resource cache shared by textures and audio.

pub mod assets;
pub mod audio;
pub mod cache;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod game;
pub mod logger;
pub mod state;
pub mod texture;
