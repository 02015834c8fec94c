// Generated by the flappybara asset exporter from resources/textures/pipe_green.png.
// Do not edit by hand; regenerate via the export gates in config.rs.

use crate::texture::PixelFormat;

pub const WIDTH: u32 = 16;
pub const HEIGHT: u32 = 24;
pub const FORMAT: PixelFormat = PixelFormat::Rgba8;
pub static DATA: &[u8] = &[
    60, 100, 20, 255, 74, 122, 26, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 145, 215, 62, 255, 145, 215, 62, 255, 145, 215, 62, 255,
    115, 191, 46, 255, 115, 191, 46, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 74, 122, 26, 255, 74, 122, 26, 255, 60, 100, 20, 255,
    60, 100, 20, 255, 74, 122, 26, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 145, 215, 62, 255, 145, 215, 62, 255, 145, 215, 62, 255,
    115, 191, 46, 255, 115, 191, 46, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 74, 122, 26, 255, 74, 122, 26, 255, 60, 100, 20, 255,
    60, 100, 20, 255, 74, 122, 26, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 145, 215, 62, 255, 145, 215, 62, 255, 145, 215, 62, 255,
    115, 191, 46, 255, 115, 191, 46, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 74, 122, 26, 255, 74, 122, 26, 255, 60, 100, 20, 255,
    60, 100, 20, 255, 74, 122, 26, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 145, 215, 62, 255, 145, 215, 62, 255, 145, 215, 62, 255,
    115, 191, 46, 255, 115, 191, 46, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 74, 122, 26, 255, 74, 122, 26, 255, 60, 100, 20, 255,
    60, 100, 20, 255, 74, 122, 26, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 145, 215, 62, 255, 145, 215, 62, 255, 145, 215, 62, 255,
    115, 191, 46, 255, 115, 191, 46, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 74, 122, 26, 255, 74, 122, 26, 255, 60, 100, 20, 255,
    60, 100, 20, 255, 74, 122, 26, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 145, 215, 62, 255, 145, 215, 62, 255, 145, 215, 62, 255,
    115, 191, 46, 255, 115, 191, 46, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 74, 122, 26, 255, 74, 122, 26, 255, 60, 100, 20, 255,
    60, 100, 20, 255, 74, 122, 26, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 145, 215, 62, 255, 145, 215, 62, 255, 145, 215, 62, 255,
    115, 191, 46, 255, 115, 191, 46, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 74, 122, 26, 255, 74, 122, 26, 255, 60, 100, 20, 255,
    60, 100, 20, 255, 74, 122, 26, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 145, 215, 62, 255, 145, 215, 62, 255, 145, 215, 62, 255,
    115, 191, 46, 255, 115, 191, 46, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 74, 122, 26, 255, 74, 122, 26, 255, 60, 100, 20, 255,
    60, 100, 20, 255, 74, 122, 26, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 145, 215, 62, 255, 145, 215, 62, 255, 145, 215, 62, 255,
    115, 191, 46, 255, 115, 191, 46, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 74, 122, 26, 255, 74, 122, 26, 255, 60, 100, 20, 255,
    60, 100, 20, 255, 74, 122, 26, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 145, 215, 62, 255, 145, 215, 62, 255, 145, 215, 62, 255,
    115, 191, 46, 255, 115, 191, 46, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 74, 122, 26, 255, 74, 122, 26, 255, 60, 100, 20, 255,
    60, 100, 20, 255, 74, 122, 26, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 145, 215, 62, 255, 145, 215, 62, 255, 145, 215, 62, 255,
    115, 191, 46, 255, 115, 191, 46, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 74, 122, 26, 255, 74, 122, 26, 255, 60, 100, 20, 255,
    60, 100, 20, 255, 74, 122, 26, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 145, 215, 62, 255, 145, 215, 62, 255, 145, 215, 62, 255,
    115, 191, 46, 255, 115, 191, 46, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 74, 122, 26, 255, 74, 122, 26, 255, 60, 100, 20, 255,
    60, 100, 20, 255, 74, 122, 26, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 145, 215, 62, 255, 145, 215, 62, 255, 145, 215, 62, 255,
    115, 191, 46, 255, 115, 191, 46, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 74, 122, 26, 255, 74, 122, 26, 255, 60, 100, 20, 255,
    60, 100, 20, 255, 74, 122, 26, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 145, 215, 62, 255, 145, 215, 62, 255, 145, 215, 62, 255,
    115, 191, 46, 255, 115, 191, 46, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 74, 122, 26, 255, 74, 122, 26, 255, 60, 100, 20, 255,
    60, 100, 20, 255, 74, 122, 26, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 145, 215, 62, 255, 145, 215, 62, 255, 145, 215, 62, 255,
    115, 191, 46, 255, 115, 191, 46, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 74, 122, 26, 255, 74, 122, 26, 255, 60, 100, 20, 255,
    60, 100, 20, 255, 74, 122, 26, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 145, 215, 62, 255, 145, 215, 62, 255, 145, 215, 62, 255,
    115, 191, 46, 255, 115, 191, 46, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 74, 122, 26, 255, 74, 122, 26, 255, 60, 100, 20, 255,
    60, 100, 20, 255, 74, 122, 26, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 145, 215, 62, 255, 145, 215, 62, 255, 145, 215, 62, 255,
    115, 191, 46, 255, 115, 191, 46, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 74, 122, 26, 255, 74, 122, 26, 255, 60, 100, 20, 255,
    60, 100, 20, 255, 74, 122, 26, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 145, 215, 62, 255, 145, 215, 62, 255, 145, 215, 62, 255,
    115, 191, 46, 255, 115, 191, 46, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 74, 122, 26, 255, 74, 122, 26, 255, 60, 100, 20, 255,
    60, 100, 20, 255, 74, 122, 26, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 145, 215, 62, 255, 145, 215, 62, 255, 145, 215, 62, 255,
    115, 191, 46, 255, 115, 191, 46, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 74, 122, 26, 255, 74, 122, 26, 255, 60, 100, 20, 255,
    60, 100, 20, 255, 74, 122, 26, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 145, 215, 62, 255, 145, 215, 62, 255, 145, 215, 62, 255,
    115, 191, 46, 255, 115, 191, 46, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 74, 122, 26, 255, 74, 122, 26, 255, 60, 100, 20, 255,
    60, 100, 20, 255, 74, 122, 26, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 145, 215, 62, 255, 145, 215, 62, 255, 145, 215, 62, 255,
    115, 191, 46, 255, 115, 191, 46, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 74, 122, 26, 255, 74, 122, 26, 255, 60, 100, 20, 255,
    60, 100, 20, 255, 74, 122, 26, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 145, 215, 62, 255, 145, 215, 62, 255, 145, 215, 62, 255,
    115, 191, 46, 255, 115, 191, 46, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 74, 122, 26, 255, 74, 122, 26, 255, 60, 100, 20, 255,
    60, 100, 20, 255, 74, 122, 26, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 145, 215, 62, 255, 145, 215, 62, 255, 145, 215, 62, 255,
    115, 191, 46, 255, 115, 191, 46, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 74, 122, 26, 255, 74, 122, 26, 255, 60, 100, 20, 255,
    60, 100, 20, 255, 74, 122, 26, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 145, 215, 62, 255, 145, 215, 62, 255, 145, 215, 62, 255,
    115, 191, 46, 255, 115, 191, 46, 255, 100, 170, 40, 255, 100, 170, 40, 255,
    100, 170, 40, 255, 74, 122, 26, 255, 74, 122, 26, 255, 60, 100, 20, 255,
];
