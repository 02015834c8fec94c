use std::io::{self, Write};
use std::sync::Arc;

use rand::Rng;

use crate::audio::AudioSystem;
use crate::cache::ResourceCache;
use crate::display::{self, PixelBuf};
use crate::error::Error;
use crate::game::Game;
use crate::logger::Logger;
use crate::texture::{self, TextureBackend};

/// Which top-level screen is active. Exactly one at a time; `Exit` stops
/// the frame loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameActivityState {
    Menu,
    Playing,
    Paused,
    Loading,
    Settings,
    GameOver,
    Exit,
}

/// Edge-triggered key presses collected once per frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputState {
    pub jump: bool,
    pub confirm: bool,
    pub pause: bool,
    pub settings: bool,
    pub back: bool,
    /// Exit key or terminal close; honored from any state.
    pub exit: bool,
}

/// Top-level application object: owns the logger, both resource caches,
/// the controller, and the activity state, and routes per-frame
/// update/draw calls.
pub struct App {
    pub activity: GameActivityState,
    pub game: Game,
    pub textures: ResourceCache<TextureBackend>,
    pub audio: AudioSystem,
    logger: Arc<Logger>,
}

impl App {
    /// Construct and eagerly load every resource. A load failure here is
    /// fatal: the caller should report it and terminate.
    pub fn new(logger: Arc<Logger>) -> Result<Self, Error> {
        logger.info("Loading texture resources.");
        let mut textures = ResourceCache::new(TextureBackend::new(), Arc::clone(&logger));
        texture::load_texture_resources(&mut textures)?;
        logger.info("Texture resources loaded successfully.");

        let mut audio = AudioSystem::new(Arc::clone(&logger));
        audio.load_audio_resources()?;

        let game = Game::new(Arc::clone(&logger));

        Ok(App {
            activity: GameActivityState::Menu,
            game,
            textures,
            audio,
            logger,
        })
    }

    pub fn update(&mut self, dt: f32, input: &InputState, rng: &mut impl Rng) {
        use GameActivityState::*;

        if input.exit && self.activity != Exit {
            self.logger.info("Exit requested.");
            self.activity = Exit;
            return;
        }

        self.activity = match self.activity {
            Menu => {
                if input.settings {
                    Settings
                } else if input.confirm {
                    // Ensure game state is initialized when starting.
                    self.game.reset_game();
                    Playing
                } else {
                    Menu
                }
            }
            Playing => {
                if input.pause {
                    self.logger.info("Game paused.");
                    Paused
                } else {
                    self.game.update(dt, input, rng, &self.audio)
                }
            }
            Paused => {
                if input.pause || input.confirm {
                    self.logger.info("Game resumed.");
                    Playing
                } else {
                    Paused
                }
            }
            GameOver => {
                if input.confirm {
                    self.game.reset_game();
                    Menu
                } else {
                    GameOver
                }
            }
            Settings => {
                if input.back || input.confirm {
                    Menu
                } else {
                    Settings
                }
            }
            Loading => {
                if input.confirm {
                    Playing
                } else {
                    Loading
                }
            }
            Exit => Exit,
        };
    }

    pub fn draw<W: Write>(&self, out: &mut W, buf: &mut PixelBuf) -> io::Result<()> {
        match self.activity {
            GameActivityState::Playing => {
                self.game.draw(buf, &self.textures);
                buf.render(out)
            }
            GameActivityState::Menu => display::draw_menu(out),
            GameActivityState::GameOver => {
                display::draw_game_over(out, self.game.state.last_game_over_score)
            }
            GameActivityState::Paused => display::draw_paused(out),
            GameActivityState::Settings => display::draw_settings(out),
            GameActivityState::Loading => display::draw_loading(out),
            GameActivityState::Exit => Ok(()),
        }
    }

    /// Tear down both caches. Called once, after the frame loop exits.
    pub fn shutdown(&mut self) {
        self.textures.unload_all();
        self.audio.unload_all();
        self.logger.info("Shutdown complete.");
    }
}
