// Generated by the flappybara asset exporter from resources/textures/player.png.
// Do not edit by hand; regenerate via the export gates in config.rs.

use crate::texture::PixelFormat;

pub const WIDTH: u32 = 16;
pub const HEIGHT: u32 = 14;
pub const FORMAT: PixelFormat = PixelFormat::Rgba8;
pub static DATA: &[u8] = &[
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    176, 132, 88, 255, 176, 132, 88, 255, 176, 132, 88, 255, 176, 132, 88, 255,
    176, 132, 88, 255, 176, 132, 88, 255, 176, 132, 88, 255, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 176, 132, 88, 255, 176, 132, 88, 255,
    176, 132, 88, 255, 176, 132, 88, 255, 176, 132, 88, 255, 176, 132, 88, 255,
    176, 132, 88, 255, 176, 132, 88, 255, 176, 132, 88, 255, 176, 132, 88, 255,
    176, 132, 88, 255, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255,
    150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255,
    150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255,
    150, 106, 66, 255, 150, 106, 66, 255, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255,
    150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255,
    150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255, 128, 90, 54, 255,
    128, 90, 54, 255, 128, 90, 54, 255, 0, 0, 0, 0, 0, 0, 0, 0,
    150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255,
    150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255,
    150, 106, 66, 255, 150, 106, 66, 255, 128, 90, 54, 255, 128, 90, 54, 255,
    128, 90, 54, 255, 128, 90, 54, 255, 128, 90, 54, 255, 0, 0, 0, 0,
    150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255,
    150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255,
    150, 106, 66, 255, 150, 106, 66, 255, 128, 90, 54, 255, 236, 228, 214, 255,
    24, 20, 16, 255, 128, 90, 54, 255, 128, 90, 54, 255, 0, 0, 0, 0,
    150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255,
    150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255,
    150, 106, 66, 255, 150, 106, 66, 255, 128, 90, 54, 255, 128, 90, 54, 255,
    128, 90, 54, 255, 128, 90, 54, 255, 24, 20, 16, 255, 0, 0, 0, 0,
    150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255,
    150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255,
    150, 106, 66, 255, 150, 106, 66, 255, 128, 90, 54, 255, 128, 90, 54, 255,
    128, 90, 54, 255, 128, 90, 54, 255, 0, 0, 0, 0, 0, 0, 0, 0,
    150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255,
    150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255,
    150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255, 128, 90, 54, 255,
    128, 90, 54, 255, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255,
    150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255,
    150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255,
    150, 106, 66, 255, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255,
    150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255,
    150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255, 150, 106, 66, 255,
    150, 106, 66, 255, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 118, 80, 46, 255, 118, 80, 46, 255, 0, 0, 0, 0,
    0, 0, 0, 0, 118, 80, 46, 255, 118, 80, 46, 255, 0, 0, 0, 0,
    0, 0, 0, 0, 118, 80, 46, 255, 118, 80, 46, 255, 0, 0, 0, 0,
    118, 80, 46, 255, 118, 80, 46, 255, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];
