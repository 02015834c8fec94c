use std::sync::Arc;

use rand::Rng;

use crate::audio::AudioSystem;
use crate::cache::ResourceCache;
use crate::config;
use crate::display::{self, PixelBuf};
use crate::logger::Logger;
use crate::state::{GameActivityState, InputState};
use crate::texture::TextureBackend;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// Everything that changes during a round. The world scrolls past the
/// player, so `player_position.0` never changes after construction.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayState {
    pub player_position: (f32, f32),
    /// Vertical velocity in px/s; negative is upward.
    pub player_speed: f32,
    /// Index 0 is the upper pipe of the pair, index 1 the lower.
    pub pipes: [Rect; 2],
    /// Set once the active pair has been credited to the score.
    pub passed: bool,
    pub score: u32,
    pub last_game_over_score: u32,
}

impl PlayState {
    fn initial() -> Self {
        PlayState {
            player_position: config::DEFAULT_POSITION,
            player_speed: config::DEFAULT_SPEED,
            pipes: [
                Rect {
                    x: config::WINDOW_WIDTH,
                    y: 0.0,
                    width: config::PIPE_WIDTH,
                    height: 200.0,
                },
                Rect {
                    x: config::WINDOW_WIDTH,
                    y: 200.0 + config::PIPE_GAP,
                    width: config::PIPE_WIDTH,
                    height: config::WINDOW_HEIGHT - 200.0 - config::PIPE_GAP,
                },
            ],
            passed: false,
            score: 0,
            last_game_over_score: 0,
        }
    }
}

pub struct Game {
    pub state: PlayState,
    logger: Arc<Logger>,
}

impl Game {
    pub fn new(logger: Arc<Logger>) -> Self {
        logger.info("Game initialized with default player position and speed.");
        Game {
            state: PlayState::initial(),
            logger,
        }
    }

    /// Advance the round by `dt` seconds. Returns the activity state the
    /// frame ends in; a terminal collision short-circuits before the pipes
    /// move, so a dead frame never advances the world.
    pub fn update(
        &mut self,
        dt: f32,
        input: &InputState,
        rng: &mut impl Rng,
        audio: &AudioSystem,
    ) -> GameActivityState {
        let s = &mut self.state;

        s.player_speed += config::GRAVITY * dt;
        s.player_position.1 += s.player_speed * dt;

        if input.jump {
            s.player_speed = config::JUMP_IMPULSE;
            audio.play("spring-effect");
            self.logger
                .info(&format!("Player jumped. Current speed: {}", s.player_speed));
        }

        let floor_y = config::floor_y();

        if s.player_position.1 + config::PLAYER_HEIGHT >= floor_y {
            s.last_game_over_score = s.score;
            audio.play("game-over");
            self.logger.info("Player collided with the floor. Game over.");
            return GameActivityState::GameOver;
        }

        if s.player_position.1 < 0.0 || s.player_position.0 > config::WINDOW_WIDTH {
            s.last_game_over_score = s.score;
            audio.play("game-over");
            self.logger.info("Player hit world boundaries. Game over.");
            return GameActivityState::GameOver;
        }

        for pipe in &mut s.pipes {
            pipe.x -= config::PIPE_SPEED * dt;
        }

        if s.pipes[0].x + config::PIPE_WIDTH < 0.0 {
            let top_height = rng.gen_range(50.0..=floor_y - config::PIPE_GAP - 50.0);
            s.pipes[0].x = config::WINDOW_WIDTH;
            s.pipes[1].x = config::WINDOW_WIDTH;
            s.pipes[0].height = top_height;
            s.pipes[1].y = top_height + config::PIPE_GAP;
            s.pipes[1].height = floor_y - s.pipes[1].y;
            s.passed = false;
            self.logger.info(&format!(
                "Pipes reset. New heights: top = {:.1}, bottom y = {:.1}",
                s.pipes[0].height, s.pipes[1].y
            ));
        }

        if !s.passed && s.pipes[0].x + config::PIPE_WIDTH < s.player_position.0 {
            s.score += 1;
            // Prevents multiple increments for the same pair.
            s.passed = true;
            audio.play("score");
            self.logger
                .info(&format!("Player passed a pipe. Score updated: {}", s.score));
        }

        let player_rect = Rect {
            x: s.player_position.0,
            y: s.player_position.1,
            width: config::PLAYER_WIDTH,
            height: config::PLAYER_HEIGHT,
        };
        if player_rect.overlaps(&s.pipes[0]) || player_rect.overlaps(&s.pipes[1]) {
            s.last_game_over_score = s.score;
            audio.play("game-over");
            self.logger.info("Collision detected with pipe. Game over.");
            return GameActivityState::GameOver;
        }

        GameActivityState::Playing
    }

    pub fn reset_game(&mut self) {
        self.state = PlayState::initial();
        self.logger.info("Game reset to initial state.");
    }

    /// Paint the world into the pixel buffer. A missing texture key has
    /// already been logged by the cache; its draw is skipped and the rest
    /// of the frame proceeds.
    pub fn draw(&self, buf: &mut PixelBuf, textures: &ResourceCache<TextureBackend>) {
        if let Ok(background) = textures.get("background-day") {
            buf.blit_scaled(
                background,
                Rect {
                    x: 0.0,
                    y: 0.0,
                    width: config::WINDOW_WIDTH,
                    height: config::WINDOW_HEIGHT,
                },
            );
        }

        if let Ok(pipe) = textures.get("pipe-green") {
            buf.blit_scaled(pipe, self.state.pipes[0]);
            buf.blit_scaled(pipe, self.state.pipes[1]);
        }

        if let Ok(floor) = textures.get("floor") {
            let floor_height = config::WINDOW_HEIGHT * config::FLOOR_HEIGHT_FRACTION;
            let scale = floor_height / floor.height as f32;
            let tile_width = floor.width as f32 * scale;
            let tiles = (config::WINDOW_WIDTH / tile_width).ceil() as i32;
            for i in 0..tiles {
                buf.blit_scaled(
                    floor,
                    Rect {
                        x: i as f32 * tile_width,
                        y: config::floor_y(),
                        width: tile_width,
                        height: floor_height,
                    },
                );
            }
        }

        if let Ok(player) = textures.get("player") {
            buf.blit_scaled(
                player,
                Rect {
                    x: self.state.player_position.0,
                    y: self.state.player_position.1,
                    width: config::PLAYER_WIDTH,
                    height: config::PLAYER_HEIGHT,
                },
            );
        }

        display::draw_score(buf, self.state.score);
    }
}
