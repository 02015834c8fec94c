//! Embedded assets, written by the exporter so release builds need no
//! filesystem access at runtime. Regenerate via the gates in `config.rs`.

pub mod background_day_texture;
pub mod base_texture;
pub mod pipe_green_texture;
pub mod player_texture;
