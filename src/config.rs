//! Compile-time game configuration.

pub const FPS: u32 = 60;
pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 450.0;
pub const WINDOW_TITLE: &str = "FlappyBara";

// Physics, in world pixels. Gravity is px/s^2, speeds are px/s.
pub const GRAVITY: f32 = 400.0;
pub const JUMP_IMPULSE: f32 = -250.0;
pub const DEFAULT_SPEED: f32 = 0.0;
pub const DEFAULT_POSITION: (f32, f32) = (WINDOW_HEIGHT / 4.0, WINDOW_HEIGHT / 2.0);

pub const PLAYER_WIDTH: f32 = 70.0;
pub const PLAYER_HEIGHT: f32 = 70.0;

pub const PIPE_WIDTH: f32 = 80.0;
pub const PIPE_GAP: f32 = 150.0;
pub const PIPE_SPEED: f32 = 200.0;

/// The floor strip takes the bottom 10% of the window.
pub const FLOOR_HEIGHT_FRACTION: f32 = 0.1;

/// World y of the floor surface; the playable area ends here.
pub fn floor_y() -> f32 {
    WINDOW_HEIGHT * (1.0 - FLOOR_HEIGHT_FRACTION)
}

// Rebuild the embedded asset modules from the files under resources/.
// Development-only; keep these off in release builds.
pub const BUILD_TEXTURE_MODULES: bool = false;
pub const BUILD_AUDIO_MODULES: bool = false;

pub const DISABLE_AUDIO: bool = false;

pub const LOG_FILE: &str = "log.txt";
/// Mirror log lines to stderr. Leave off while the terminal is in raw mode.
pub const CONSOLE_LOGGING: bool = false;

pub const TEXTURE_MODULE_DIR: &str = "src/assets";
pub const AUDIO_MODULE_DIR: &str = "src/assets";

/// Source files for the texture exporter, key → path.
pub const PREDEFINED_TEXTURES: &[(&str, &str)] = &[
    ("floor", "resources/textures/base.png"),
    ("background-day", "resources/textures/background_day.png"),
    ("background-night", "resources/textures/background_night.png"),
    ("pipe-green", "resources/textures/pipe_green.png"),
    ("pipe-red", "resources/textures/pipe_red.png"),
    ("player", "resources/textures/player.png"),
];

/// Source files for the audio exporter, key → path.
pub const PREDEFINED_AUDIO: &[(&str, &str)] = &[
    ("spring-effect", "resources/audio/spring.wav"),
    ("game-over", "resources/audio/game_over.wav"),
    ("level-complete", "resources/audio/level_complete.wav"),
    ("score", "resources/audio/score.wav"),
];
