// Generated by the flappybara asset exporter from resources/textures/background_day.png.
// Do not edit by hand; regenerate via the export gates in config.rs.

use crate::texture::PixelFormat;

pub const WIDTH: u32 = 8;
pub const HEIGHT: u32 = 48;
pub const FORMAT: PixelFormat = PixelFormat::Rgba8;
pub static DATA: &[u8] = &[
    70, 180, 200, 255, 70, 180, 200, 255, 70, 180, 200, 255, 70, 180, 200, 255,
    70, 180, 200, 255, 70, 180, 200, 255, 70, 180, 200, 255, 70, 180, 200, 255,
    73, 181, 201, 255, 73, 181, 201, 255, 73, 181, 201, 255, 73, 181, 201, 255,
    73, 181, 201, 255, 73, 181, 201, 255, 73, 181, 201, 255, 73, 181, 201, 255,
    76, 183, 202, 255, 76, 183, 202, 255, 76, 183, 202, 255, 76, 183, 202, 255,
    76, 183, 202, 255, 76, 183, 202, 255, 76, 183, 202, 255, 76, 183, 202, 255,
    79, 184, 203, 255, 79, 184, 203, 255, 79, 184, 203, 255, 79, 184, 203, 255,
    79, 184, 203, 255, 79, 184, 203, 255, 79, 184, 203, 255, 79, 184, 203, 255,
    82, 185, 204, 255, 82, 185, 204, 255, 82, 185, 204, 255, 82, 185, 204, 255,
    82, 185, 204, 255, 82, 185, 204, 255, 82, 185, 204, 255, 82, 185, 204, 255,
    85, 186, 205, 255, 85, 186, 205, 255, 85, 186, 205, 255, 85, 186, 205, 255,
    85, 186, 205, 255, 85, 186, 205, 255, 85, 186, 205, 255, 85, 186, 205, 255,
    88, 188, 207, 255, 88, 188, 207, 255, 88, 188, 207, 255, 88, 188, 207, 255,
    88, 188, 207, 255, 88, 188, 207, 255, 88, 188, 207, 255, 88, 188, 207, 255,
    90, 189, 208, 255, 90, 189, 208, 255, 90, 189, 208, 255, 90, 189, 208, 255,
    90, 189, 208, 255, 90, 189, 208, 255, 90, 189, 208, 255, 90, 189, 208, 255,
    93, 190, 209, 255, 93, 190, 209, 255, 93, 190, 209, 255, 93, 190, 209, 255,
    93, 190, 209, 255, 93, 190, 209, 255, 93, 190, 209, 255, 93, 190, 209, 255,
    96, 191, 210, 255, 96, 191, 210, 255, 96, 191, 210, 255, 96, 191, 210, 255,
    96, 191, 210, 255, 96, 191, 210, 255, 96, 191, 210, 255, 96, 191, 210, 255,
    99, 193, 211, 255, 99, 193, 211, 255, 99, 193, 211, 255, 99, 193, 211, 255,
    99, 193, 211, 255, 99, 193, 211, 255, 99, 193, 211, 255, 99, 193, 211, 255,
    102, 194, 212, 255, 102, 194, 212, 255, 102, 194, 212, 255, 102, 194, 212, 255,
    102, 194, 212, 255, 102, 194, 212, 255, 102, 194, 212, 255, 102, 194, 212, 255,
    105, 195, 213, 255, 105, 195, 213, 255, 105, 195, 213, 255, 105, 195, 213, 255,
    105, 195, 213, 255, 105, 195, 213, 255, 105, 195, 213, 255, 105, 195, 213, 255,
    108, 196, 214, 255, 108, 196, 214, 255, 108, 196, 214, 255, 108, 196, 214, 255,
    108, 196, 214, 255, 108, 196, 214, 255, 108, 196, 214, 255, 108, 196, 214, 255,
    111, 198, 215, 255, 111, 198, 215, 255, 111, 198, 215, 255, 111, 198, 215, 255,
    111, 198, 215, 255, 111, 198, 215, 255, 111, 198, 215, 255, 111, 198, 215, 255,
    114, 199, 216, 255, 114, 199, 216, 255, 114, 199, 216, 255, 114, 199, 216, 255,
    114, 199, 216, 255, 114, 199, 216, 255, 114, 199, 216, 255, 114, 199, 216, 255,
    117, 200, 218, 255, 117, 200, 218, 255, 117, 200, 218, 255, 117, 200, 218, 255,
    117, 200, 218, 255, 117, 200, 218, 255, 117, 200, 218, 255, 117, 200, 218, 255,
    120, 202, 219, 255, 120, 202, 219, 255, 120, 202, 219, 255, 120, 202, 219, 255,
    120, 202, 219, 255, 120, 202, 219, 255, 120, 202, 219, 255, 120, 202, 219, 255,
    123, 203, 220, 255, 123, 203, 220, 255, 123, 203, 220, 255, 123, 203, 220, 255,
    123, 203, 220, 255, 123, 203, 220, 255, 123, 203, 220, 255, 123, 203, 220, 255,
    126, 204, 221, 255, 126, 204, 221, 255, 126, 204, 221, 255, 126, 204, 221, 255,
    126, 204, 221, 255, 126, 204, 221, 255, 126, 204, 221, 255, 126, 204, 221, 255,
    129, 205, 222, 255, 129, 205, 222, 255, 129, 205, 222, 255, 129, 205, 222, 255,
    129, 205, 222, 255, 129, 205, 222, 255, 129, 205, 222, 255, 129, 205, 222, 255,
    131, 207, 223, 255, 131, 207, 223, 255, 131, 207, 223, 255, 131, 207, 223, 255,
    131, 207, 223, 255, 131, 207, 223, 255, 131, 207, 223, 255, 131, 207, 223, 255,
    134, 208, 224, 255, 134, 208, 224, 255, 134, 208, 224, 255, 134, 208, 224, 255,
    134, 208, 224, 255, 134, 208, 224, 255, 134, 208, 224, 255, 134, 208, 224, 255,
    137, 209, 225, 255, 137, 209, 225, 255, 137, 209, 225, 255, 137, 209, 225, 255,
    137, 209, 225, 255, 137, 209, 225, 255, 137, 209, 225, 255, 137, 209, 225, 255,
    140, 210, 226, 255, 140, 210, 226, 255, 140, 210, 226, 255, 140, 210, 226, 255,
    140, 210, 226, 255, 140, 210, 226, 255, 140, 210, 226, 255, 140, 210, 226, 255,
    143, 212, 227, 255, 143, 212, 227, 255, 143, 212, 227, 255, 143, 212, 227, 255,
    143, 212, 227, 255, 143, 212, 227, 255, 143, 212, 227, 255, 143, 212, 227, 255,
    146, 213, 229, 255, 146, 213, 229, 255, 146, 213, 229, 255, 146, 213, 229, 255,
    146, 213, 229, 255, 146, 213, 229, 255, 146, 213, 229, 255, 146, 213, 229, 255,
    149, 214, 230, 255, 149, 214, 230, 255, 149, 214, 230, 255, 149, 214, 230, 255,
    149, 214, 230, 255, 149, 214, 230, 255, 149, 214, 230, 255, 149, 214, 230, 255,
    152, 216, 231, 255, 152, 216, 231, 255, 152, 216, 231, 255, 152, 216, 231, 255,
    152, 216, 231, 255, 152, 216, 231, 255, 152, 216, 231, 255, 152, 216, 231, 255,
    155, 217, 232, 255, 155, 217, 232, 255, 155, 217, 232, 255, 155, 217, 232, 255,
    155, 217, 232, 255, 155, 217, 232, 255, 155, 217, 232, 255, 155, 217, 232, 255,
    158, 218, 233, 255, 158, 218, 233, 255, 158, 218, 233, 255, 158, 218, 233, 255,
    158, 218, 233, 255, 158, 218, 233, 255, 158, 218, 233, 255, 158, 218, 233, 255,
    161, 219, 234, 255, 161, 219, 234, 255, 161, 219, 234, 255, 161, 219, 234, 255,
    161, 219, 234, 255, 161, 219, 234, 255, 161, 219, 234, 255, 161, 219, 234, 255,
    164, 221, 235, 255, 164, 221, 235, 255, 164, 221, 235, 255, 164, 221, 235, 255,
    164, 221, 235, 255, 164, 221, 235, 255, 164, 221, 235, 255, 164, 221, 235, 255,
    167, 222, 236, 255, 167, 222, 236, 255, 167, 222, 236, 255, 167, 222, 236, 255,
    167, 222, 236, 255, 167, 222, 236, 255, 167, 222, 236, 255, 167, 222, 236, 255,
    170, 223, 237, 255, 170, 223, 237, 255, 170, 223, 237, 255, 170, 223, 237, 255,
    170, 223, 237, 255, 170, 223, 237, 255, 170, 223, 237, 255, 170, 223, 237, 255,
    172, 224, 238, 255, 172, 224, 238, 255, 172, 224, 238, 255, 172, 224, 238, 255,
    172, 224, 238, 255, 172, 224, 238, 255, 172, 224, 238, 255, 172, 224, 238, 255,
    175, 226, 240, 255, 175, 226, 240, 255, 175, 226, 240, 255, 175, 226, 240, 255,
    175, 226, 240, 255, 175, 226, 240, 255, 175, 226, 240, 255, 175, 226, 240, 255,
    178, 227, 241, 255, 178, 227, 241, 255, 178, 227, 241, 255, 178, 227, 241, 255,
    178, 227, 241, 255, 178, 227, 241, 255, 178, 227, 241, 255, 178, 227, 241, 255,
    181, 228, 242, 255, 181, 228, 242, 255, 181, 228, 242, 255, 181, 228, 242, 255,
    181, 228, 242, 255, 181, 228, 242, 255, 181, 228, 242, 255, 181, 228, 242, 255,
    184, 229, 243, 255, 184, 229, 243, 255, 184, 229, 243, 255, 184, 229, 243, 255,
    184, 229, 243, 255, 184, 229, 243, 255, 184, 229, 243, 255, 184, 229, 243, 255,
    120, 195, 75, 255, 187, 231, 244, 255, 187, 231, 244, 255, 120, 195, 75, 255,
    120, 195, 75, 255, 187, 231, 244, 255, 187, 231, 244, 255, 120, 195, 75, 255,
    120, 195, 75, 255, 120, 195, 75, 255, 120, 195, 75, 255, 120, 195, 75, 255,
    120, 195, 75, 255, 120, 195, 75, 255, 120, 195, 75, 255, 120, 195, 75, 255,
    120, 195, 75, 255, 120, 195, 75, 255, 120, 195, 75, 255, 120, 195, 75, 255,
    120, 195, 75, 255, 120, 195, 75, 255, 120, 195, 75, 255, 120, 195, 75, 255,
    120, 195, 75, 255, 120, 195, 75, 255, 120, 195, 75, 255, 120, 195, 75, 255,
    120, 195, 75, 255, 120, 195, 75, 255, 120, 195, 75, 255, 120, 195, 75, 255,
    95, 175, 55, 255, 95, 175, 55, 255, 120, 195, 75, 255, 120, 195, 75, 255,
    95, 175, 55, 255, 95, 175, 55, 255, 120, 195, 75, 255, 120, 195, 75, 255,
    95, 175, 55, 255, 95, 175, 55, 255, 95, 175, 55, 255, 95, 175, 55, 255,
    95, 175, 55, 255, 95, 175, 55, 255, 95, 175, 55, 255, 95, 175, 55, 255,
    95, 175, 55, 255, 95, 175, 55, 255, 95, 175, 55, 255, 95, 175, 55, 255,
    95, 175, 55, 255, 95, 175, 55, 255, 95, 175, 55, 255, 95, 175, 55, 255,
    95, 175, 55, 255, 95, 175, 55, 255, 95, 175, 55, 255, 95, 175, 55, 255,
    95, 175, 55, 255, 95, 175, 55, 255, 95, 175, 55, 255, 95, 175, 55, 255,
];
