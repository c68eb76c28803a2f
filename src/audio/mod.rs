pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod media;
pub mod playback;
pub mod progress;
pub mod state;
pub mod util;
