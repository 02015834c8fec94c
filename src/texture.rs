use std::path::{Path, PathBuf};

use crate::assets;
use crate::cache::{ResourceBackend, ResourceCache};
use crate::config;
use crate::error::Error;
use crate::export;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgba8,
}

/// Embedded image constants, exactly as the exporter writes them.
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub data: &'static [u8],
}

/// A decoded software texture: row-major RGBA8 pixels plus a nonzero id
/// stamped at decode time. Released handles have id 0 and no pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub id: u32,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Texture {
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }
}

pub struct TextureBackend {
    next_id: u32,
}

impl TextureBackend {
    pub fn new() -> Self {
        TextureBackend { next_id: 1 }
    }

    fn stamp(&mut self, width: u32, height: u32, pixels: Vec<u8>) -> Texture {
        let id = self.next_id;
        self.next_id += 1;
        Texture {
            id,
            width,
            height,
            pixels,
        }
    }
}

impl Default for TextureBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceBackend for TextureBackend {
    type Handle = Texture;
    type Embedded = TextureData;

    const KIND: &'static str = "texture";

    fn decode_path(&mut self, path: &Path) -> Result<Texture, Error> {
        let img = image::open(path).map_err(|e| Error::LoadFailure {
            kind: Self::KIND,
            source: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(self.stamp(width, height, rgba.into_raw()))
    }

    fn decode_embedded(&mut self, data: &TextureData) -> Result<Texture, Error> {
        let PixelFormat::Rgba8 = data.format;
        let expected = (data.width as usize) * (data.height as usize) * 4;
        if data.data.len() != expected {
            return Err(Error::LoadFailure {
                kind: Self::KIND,
                source: String::from("<embedded>"),
                reason: format!(
                    "pixel data is {} bytes, expected {} for {}x{} rgba8",
                    data.data.len(),
                    expected,
                    data.width,
                    data.height
                ),
            });
        }
        Ok(self.stamp(data.width, data.height, data.data.to_vec()))
    }

    fn is_valid(&self, handle: &Texture) -> bool {
        handle.id != 0
            && handle.width > 0
            && handle.height > 0
            && handle.pixels.len() == (handle.width as usize) * (handle.height as usize) * 4
    }

    fn release(&mut self, handle: &mut Texture) {
        handle.pixels = Vec::new();
        handle.id = 0;
    }

    fn export_enabled(&self) -> bool {
        config::BUILD_TEXTURE_MODULES
    }

    fn export_module(&self, source: &Path, out_dir: &Path) -> Result<PathBuf, Error> {
        let img = image::open(source).map_err(|e| Error::LoadFailure {
            kind: Self::KIND,
            source: source.display().to_string(),
            reason: e.to_string(),
        })?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        export::write_texture_module(source, out_dir, width, height, rgba.as_raw()).map_err(|e| {
            Error::LoadFailure {
                kind: Self::KIND,
                source: source.display().to_string(),
                reason: e.to_string(),
            }
        })
    }
}

/// Eagerly load the fixed texture set from the embedded modules. Any
/// failure here is fatal: gameplay cannot draw without these keys.
pub fn load_texture_resources(cache: &mut ResourceCache<TextureBackend>) -> Result<(), Error> {
    let background_day = TextureData {
        width: assets::background_day_texture::WIDTH,
        height: assets::background_day_texture::HEIGHT,
        format: assets::background_day_texture::FORMAT,
        data: assets::background_day_texture::DATA,
    };
    let base = TextureData {
        width: assets::base_texture::WIDTH,
        height: assets::base_texture::HEIGHT,
        format: assets::base_texture::FORMAT,
        data: assets::base_texture::DATA,
    };
    let pipe_green = TextureData {
        width: assets::pipe_green_texture::WIDTH,
        height: assets::pipe_green_texture::HEIGHT,
        format: assets::pipe_green_texture::FORMAT,
        data: assets::pipe_green_texture::DATA,
    };
    let player = TextureData {
        width: assets::player_texture::WIDTH,
        height: assets::player_texture::HEIGHT,
        format: assets::player_texture::FORMAT,
        data: assets::player_texture::DATA,
    };

    cache.load_embedded("background-day", &background_day)?;
    cache.load_embedded("floor", &base)?;
    cache.load_embedded("pipe-green", &pipe_green)?;
    cache.load_embedded("player", &player)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_decode_checks_buffer_size() {
        let mut backend = TextureBackend::new();
        let bad = TextureData {
            width: 2,
            height: 2,
            format: PixelFormat::Rgba8,
            data: &[0u8; 7],
        };
        let err = backend.decode_embedded(&bad).expect_err("short buffer");
        assert!(matches!(err, Error::LoadFailure { .. }));
    }

    #[test]
    fn decoded_textures_get_distinct_nonzero_ids() {
        let mut backend = TextureBackend::new();
        let data = TextureData {
            width: 1,
            height: 1,
            format: PixelFormat::Rgba8,
            data: &[10, 20, 30, 255],
        };
        let a = backend.decode_embedded(&data).expect("decode a");
        let b = backend.decode_embedded(&data).expect("decode b");
        assert_ne!(a.id, 0);
        assert_ne!(a.id, b.id);
        assert_eq!(a.rgba(0, 0), [10, 20, 30, 255]);
    }

    #[test]
    fn released_textures_are_invalid() {
        let mut backend = TextureBackend::new();
        let data = TextureData {
            width: 1,
            height: 1,
            format: PixelFormat::Rgba8,
            data: &[0, 0, 0, 255],
        };
        let mut tex = backend.decode_embedded(&data).expect("decode");
        assert!(backend.is_valid(&tex));
        backend.release(&mut tex);
        assert!(!backend.is_valid(&tex));
    }
}
