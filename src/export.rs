//! Serialization of decoded assets into embeddable Rust source modules.
//!
//! Mirrors of the modules under `src/assets/`: an image becomes `WIDTH`,
//! `HEIGHT`, `FORMAT`, `DATA`; a wave becomes `FRAME_COUNT`, `SAMPLE_RATE`,
//! `SAMPLE_SIZE`, `CHANNELS`, `DATA`. Invoked only through
//! `ResourceCache::export_all`, which is gated off by default.

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub fn write_texture_module(
    source: &Path,
    out_dir: &Path,
    width: u32,
    height: u32,
    rgba: &[u8],
) -> io::Result<PathBuf> {
    let out_path = out_dir.join(module_file_name(source, "_texture"));
    let mut body = module_header(source);
    body.push_str("use crate::texture::PixelFormat;\n\n");
    let _ = writeln!(body, "pub const WIDTH: u32 = {width};");
    let _ = writeln!(body, "pub const HEIGHT: u32 = {height};");
    body.push_str("pub const FORMAT: PixelFormat = PixelFormat::Rgba8;\n");
    body.push_str("pub static DATA: &[u8] = &[\n");
    push_array_rows(&mut body, rgba, 16);
    body.push_str("];\n");
    fs::write(&out_path, body)?;
    Ok(out_path)
}

pub fn write_wave_module(
    source: &Path,
    out_dir: &Path,
    frame_count: u32,
    sample_rate: u32,
    sample_size: u16,
    channels: u16,
    samples: &[i16],
) -> io::Result<PathBuf> {
    let out_path = out_dir.join(module_file_name(source, "_audio"));
    let mut body = module_header(source);
    let _ = writeln!(body, "pub const FRAME_COUNT: u32 = {frame_count};");
    let _ = writeln!(body, "pub const SAMPLE_RATE: u32 = {sample_rate};");
    let _ = writeln!(body, "pub const SAMPLE_SIZE: u16 = {sample_size};");
    let _ = writeln!(body, "pub const CHANNELS: u16 = {channels};");
    body.push_str("pub static DATA: &[i16] = &[\n");
    push_array_rows(&mut body, samples, 12);
    body.push_str("];\n");
    fs::write(&out_path, body)?;
    Ok(out_path)
}

fn module_header(source: &Path) -> String {
    format!(
        "// Generated by the flappybara asset exporter from {}.\n\
         // Do not edit by hand; regenerate via the export gates in config.rs.\n\n",
        source.display()
    )
}

fn module_file_name(source: &Path, suffix: &str) -> String {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("asset");
    let sanitized: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{sanitized}{suffix}.rs")
}

fn push_array_rows<T: std::fmt::Display>(body: &mut String, values: &[T], per_row: usize) {
    for row in values.chunks(per_row) {
        body.push_str("    ");
        for v in row {
            let _ = write!(body, "{v}, ");
        }
        // Drop the trailing space to keep generated lines tidy.
        body.pop();
        body.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(hint: &str) -> PathBuf {
        use std::time::{SystemTime, UNIX_EPOCH};
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before unix epoch")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "flappybara_export_test_{}_{}_{}",
            hint,
            std::process::id(),
            nanos
        ));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn texture_module_carries_all_constants() {
        let dir = temp_dir("tex");
        let written = write_texture_module(
            Path::new("resources/textures/base.png"),
            &dir,
            2,
            1,
            &[1, 2, 3, 255, 4, 5, 6, 255],
        )
        .expect("write");

        assert_eq!(written.file_name().unwrap(), "base_texture.rs");
        let body = fs::read_to_string(&written).expect("read back");
        assert!(body.contains("pub const WIDTH: u32 = 2;"));
        assert!(body.contains("pub const HEIGHT: u32 = 1;"));
        assert!(body.contains("PixelFormat::Rgba8"));
        assert!(body.contains("1, 2, 3, 255, 4, 5, 6, 255,"));

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn wave_module_carries_all_constants() {
        let dir = temp_dir("wav");
        let written = write_wave_module(
            Path::new("resources/audio/score.wav"),
            &dir,
            4,
            22050,
            16,
            1,
            &[0, 100, -100, 0],
        )
        .expect("write");

        assert_eq!(written.file_name().unwrap(), "score_audio.rs");
        let body = fs::read_to_string(&written).expect("read back");
        assert!(body.contains("pub const FRAME_COUNT: u32 = 4;"));
        assert!(body.contains("pub const SAMPLE_RATE: u32 = 22050;"));
        assert!(body.contains("pub const SAMPLE_SIZE: u16 = 16;"));
        assert!(body.contains("pub const CHANNELS: u16 = 1;"));
        assert!(body.contains("0, 100, -100, 0,"));

        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn module_names_are_sanitized_identifiers() {
        assert_eq!(
            module_file_name(Path::new("a/b/pipe-green.png"), "_texture"),
            "pipe_green_texture.rs"
        );
    }
}
