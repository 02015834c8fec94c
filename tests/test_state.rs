use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand::rngs::StdRng;

use flappybara::config;
use flappybara::logger::Logger;
use flappybara::state::{App, GameActivityState, InputState};

fn test_logger() -> Arc<Logger> {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before unix epoch")
        .as_nanos();
    let path = std::env::temp_dir().join(format!(
        "flappybara_state_test_{}_{}.txt",
        std::process::id(),
        nanos
    ));
    Arc::new(Logger::to_file(path, false))
}

fn make_app() -> App {
    App::new(test_logger()).expect("startup load should succeed")
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn press(field: fn(&mut InputState)) -> InputState {
    let mut input = InputState::default();
    field(&mut input);
    input
}

const DT: f32 = 0.016;

#[test]
fn starts_in_the_menu_with_all_resources_loaded() {
    let app = make_app();
    assert_eq!(app.activity, GameActivityState::Menu);
    assert_eq!(app.textures.len(), 4);
    assert_eq!(app.audio.cache.len(), 4);
}

#[test]
fn confirm_in_menu_starts_a_fresh_round() {
    let mut app = make_app();
    let mut rng = seeded_rng();

    // Dirty the play state so the entry reset is observable.
    app.game.state.score = 9;
    app.game.state.player_speed = 123.0;
    app.game.state.passed = true;

    app.update(DT, &press(|i| i.confirm = true), &mut rng);
    assert_eq!(app.activity, GameActivityState::Playing);
    assert_eq!(app.game.state.score, 0);
    assert_eq!(app.game.state.player_speed, config::DEFAULT_SPEED);
    assert_eq!(app.game.state.player_position, config::DEFAULT_POSITION);
    assert!(!app.game.state.passed);
    assert_eq!(app.game.state.pipes[0].x, config::WINDOW_WIDTH);
}

#[test]
fn menu_opens_settings_and_settings_returns() {
    let mut app = make_app();
    let mut rng = seeded_rng();

    app.update(DT, &press(|i| i.settings = true), &mut rng);
    assert_eq!(app.activity, GameActivityState::Settings);

    app.update(DT, &InputState::default(), &mut rng);
    assert_eq!(app.activity, GameActivityState::Settings);

    app.update(DT, &press(|i| i.back = true), &mut rng);
    assert_eq!(app.activity, GameActivityState::Menu);
}

#[test]
fn pause_freezes_play_and_resume_continues() {
    let mut app = make_app();
    let mut rng = seeded_rng();

    app.update(DT, &press(|i| i.confirm = true), &mut rng);
    app.update(DT, &press(|i| i.pause = true), &mut rng);
    assert_eq!(app.activity, GameActivityState::Paused);

    let frozen = app.game.state.clone();
    app.update(DT, &InputState::default(), &mut rng);
    assert_eq!(app.game.state, frozen, "paused frames must not simulate");

    app.update(DT, &press(|i| i.pause = true), &mut rng);
    assert_eq!(app.activity, GameActivityState::Playing);
}

#[test]
fn floor_collision_moves_the_app_to_game_over() {
    let mut app = make_app();
    let mut rng = seeded_rng();

    app.update(DT, &press(|i| i.confirm = true), &mut rng);
    app.game.state.player_position.1 = config::floor_y() - 1.0;
    app.update(DT, &InputState::default(), &mut rng);
    assert_eq!(app.activity, GameActivityState::GameOver);
}

#[test]
fn game_over_confirm_returns_to_a_reset_menu() {
    let mut app = make_app();
    let mut rng = seeded_rng();

    app.update(DT, &press(|i| i.confirm = true), &mut rng);
    app.game.state.score = 4;
    app.game.state.player_position.1 = config::floor_y() - 1.0;
    app.update(DT, &InputState::default(), &mut rng);
    assert_eq!(app.activity, GameActivityState::GameOver);
    assert_eq!(app.game.state.last_game_over_score, 4);

    app.update(DT, &press(|i| i.confirm = true), &mut rng);
    assert_eq!(app.activity, GameActivityState::Menu);
    assert_eq!(app.game.state.score, 0);
    assert_eq!(app.game.state.last_game_over_score, 0);
}

#[test]
fn exit_input_is_honored_from_any_state() {
    for setup in [
        Vec::new(),
        vec![press(|i| i.confirm = true)],
        vec![press(|i| i.confirm = true), press(|i| i.pause = true)],
        vec![press(|i| i.settings = true)],
    ] {
        let mut app = make_app();
        let mut rng = seeded_rng();
        for input in &setup {
            app.update(DT, input, &mut rng);
        }
        app.update(DT, &press(|i| i.exit = true), &mut rng);
        assert_eq!(app.activity, GameActivityState::Exit);
    }
}

#[test]
fn shutdown_drains_both_caches() {
    let mut app = make_app();
    app.shutdown();
    assert!(app.textures.is_empty());
    assert!(app.audio.cache.is_empty());
}
