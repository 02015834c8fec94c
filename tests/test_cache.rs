use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use flappybara::audio::AudioSystem;
use flappybara::cache::ResourceCache;
use flappybara::error::Error;
use flappybara::logger::Logger;
use flappybara::texture::{self, PixelFormat, TextureBackend, TextureData};

fn unique_path(hint: &str, ext: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!(
        "flappybara_cache_it_{}_{}_{}.{}",
        hint,
        std::process::id(),
        nanos,
        ext
    ))
}

fn test_logger() -> Arc<Logger> {
    Arc::new(Logger::to_file(unique_path("log", "txt"), false))
}

fn make_texture_cache() -> ResourceCache<TextureBackend> {
    ResourceCache::new(TextureBackend::new(), test_logger())
}

static RED_PIXEL: [u8; 4] = [200, 40, 40, 255];
static BLUE_PIXEL: [u8; 4] = [40, 40, 200, 255];

fn one_pixel(data: &'static [u8; 4]) -> TextureData {
    TextureData {
        width: 1,
        height: 1,
        format: PixelFormat::Rgba8,
        data,
    }
}

// ── Texture cache through the real backend ────────────────────────────────────

#[test]
fn embedded_load_then_get_round_trips() {
    let mut cache = make_texture_cache();
    cache
        .load_embedded("player", &one_pixel(&RED_PIXEL))
        .expect("load");

    let tex = cache.get("player").expect("get");
    assert_ne!(tex.id, 0);
    assert_eq!(tex.rgba(0, 0), [200, 40, 40, 255]);
}

#[test]
fn duplicate_key_keeps_the_first_texture() {
    let mut cache = make_texture_cache();
    cache
        .load_embedded("pipe-green", &one_pixel(&RED_PIXEL))
        .expect("first load");
    cache
        .load_embedded("pipe-green", &one_pixel(&BLUE_PIXEL))
        .expect("duplicate load is a no-op");

    let tex = cache.get("pipe-green").expect("get");
    assert_eq!(tex.rgba(0, 0), [200, 40, 40, 255]);
}

#[test]
fn unload_then_get_is_key_not_found() {
    let mut cache = make_texture_cache();
    cache
        .load_embedded("floor", &one_pixel(&RED_PIXEL))
        .expect("load");
    cache.unload("floor");
    assert!(matches!(
        cache.get("floor"),
        Err(Error::KeyNotFound { .. })
    ));
}

#[test]
fn png_file_loads_through_the_path_decoder() {
    let path = unique_path("png", "png");
    let img = image::RgbaImage::from_raw(2, 2, vec![255u8; 16]).expect("image");
    img.save(&path).expect("write test png");

    let mut cache = make_texture_cache();
    cache.load_from_path("background-day", &path).expect("load");
    let tex = cache.get("background-day").expect("get");
    assert_eq!((tex.width, tex.height), (2, 2));

    let _ = std::fs::remove_file(path);
}

#[test]
fn missing_file_is_a_load_failure() {
    let mut cache = make_texture_cache();
    let err = cache
        .load_from_path("ghost", &unique_path("missing", "png"))
        .expect_err("missing file");
    assert!(matches!(err, Error::LoadFailure { .. }));
    assert!(!cache.contains("ghost"));
}

// ── The fixed startup sets ────────────────────────────────────────────────────

#[test]
fn startup_texture_set_loads_from_embedded_data() {
    let mut cache = make_texture_cache();
    texture::load_texture_resources(&mut cache).expect("bulk load");

    for key in ["background-day", "floor", "pipe-green", "player"] {
        let tex = cache.get(key).expect(key);
        assert_ne!(tex.id, 0);
        assert!(tex.width > 0 && tex.height > 0);
    }
    assert_eq!(cache.len(), 4);
}

#[test]
fn startup_audio_set_loads_and_unloads() {
    let mut audio = AudioSystem::new(test_logger());
    audio.load_audio_resources().expect("bulk load");

    for key in ["spring-effect", "game-over", "level-complete", "score"] {
        let sound = audio.cache.get(key).expect(key);
        assert!(sound.frame_count > 0);
        assert_eq!(sound.sample_rate, 44100);
    }

    audio.unload_all();
    assert!(audio.cache.is_empty());
    // Play after teardown must not panic; the miss is logged and skipped.
    audio.play("score");
}
