// Generated by the flappybara asset exporter from resources/textures/base.png.
// Do not edit by hand; regenerate via the export gates in config.rs.

use crate::texture::PixelFormat;

pub const WIDTH: u32 = 16;
pub const HEIGHT: u32 = 8;
pub const FORMAT: PixelFormat = PixelFormat::Rgba8;
pub static DATA: &[u8] = &[
    110, 200, 70, 255, 110, 200, 70, 255, 110, 200, 70, 255, 84, 168, 55, 255,
    84, 168, 55, 255, 84, 168, 55, 255, 110, 200, 70, 255, 110, 200, 70, 255,
    110, 200, 70, 255, 84, 168, 55, 255, 84, 168, 55, 255, 84, 168, 55, 255,
    110, 200, 70, 255, 110, 200, 70, 255, 110, 200, 70, 255, 84, 168, 55, 255,
    84, 168, 55, 255, 84, 168, 55, 255, 84, 168, 55, 255, 84, 168, 55, 255,
    84, 168, 55, 255, 84, 168, 55, 255, 84, 168, 55, 255, 84, 168, 55, 255,
    84, 168, 55, 255, 84, 168, 55, 255, 84, 168, 55, 255, 84, 168, 55, 255,
    84, 168, 55, 255, 84, 168, 55, 255, 84, 168, 55, 255, 84, 168, 55, 255,
    210, 185, 110, 255, 210, 185, 110, 255, 185, 160, 90, 255, 185, 160, 90, 255,
    185, 160, 90, 255, 185, 160, 90, 255, 185, 160, 90, 255, 185, 160, 90, 255,
    210, 185, 110, 255, 210, 185, 110, 255, 210, 185, 110, 255, 210, 185, 110, 255,
    210, 185, 110, 255, 210, 185, 110, 255, 185, 160, 90, 255, 185, 160, 90, 255,
    185, 160, 90, 255, 185, 160, 90, 255, 185, 160, 90, 255, 185, 160, 90, 255,
    185, 160, 90, 255, 185, 160, 90, 255, 210, 185, 110, 255, 210, 185, 110, 255,
    210, 185, 110, 255, 210, 185, 110, 255, 210, 185, 110, 255, 210, 185, 110, 255,
    185, 160, 90, 255, 185, 160, 90, 255, 185, 160, 90, 255, 185, 160, 90, 255,
    185, 160, 90, 255, 185, 160, 90, 255, 185, 160, 90, 255, 185, 160, 90, 255,
    210, 185, 110, 255, 210, 185, 110, 255, 210, 185, 110, 255, 210, 185, 110, 255,
    210, 185, 110, 255, 210, 185, 110, 255, 185, 160, 90, 255, 185, 160, 90, 255,
    185, 160, 90, 255, 185, 160, 90, 255, 185, 160, 90, 255, 185, 160, 90, 255,
    185, 160, 90, 255, 185, 160, 90, 255, 210, 185, 110, 255, 210, 185, 110, 255,
    210, 185, 110, 255, 210, 185, 110, 255, 210, 185, 110, 255, 210, 185, 110, 255,
    185, 160, 90, 255, 185, 160, 90, 255, 185, 160, 90, 255, 185, 160, 90, 255,
    185, 160, 90, 255, 185, 160, 90, 255, 210, 185, 110, 255, 210, 185, 110, 255,
    210, 185, 110, 255, 210, 185, 110, 255, 210, 185, 110, 255, 210, 185, 110, 255,
    210, 185, 110, 255, 210, 185, 110, 255, 185, 160, 90, 255, 185, 160, 90, 255,
    185, 160, 90, 255, 185, 160, 90, 255, 185, 160, 90, 255, 185, 160, 90, 255,
    210, 185, 110, 255, 210, 185, 110, 255, 210, 185, 110, 255, 210, 185, 110, 255,
    210, 185, 110, 255, 210, 185, 110, 255, 210, 185, 110, 255, 210, 185, 110, 255,
    185, 160, 90, 255, 185, 160, 90, 255, 185, 160, 90, 255, 185, 160, 90, 255,
    185, 160, 90, 255, 185, 160, 90, 255, 210, 185, 110, 255, 210, 185, 110, 255,
    210, 185, 110, 255, 210, 185, 110, 255, 210, 185, 110, 255, 210, 185, 110, 255,
];
