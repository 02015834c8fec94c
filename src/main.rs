use std::io::{self, stdout};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, terminal,
};
use rand::thread_rng;

use flappybara::config;
use flappybara::display::PixelBuf;
use flappybara::logger::Logger;
use flappybara::state::{App, GameActivityState, InputState};

fn main() -> io::Result<()> {
    let logger = Arc::new(Logger::to_file(config::LOG_FILE, config::CONSOLE_LOGGING));

    // A missing core asset aborts before the terminal is touched.
    let mut app = match App::new(Arc::clone(&logger)) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Fatal: {e}");
            std::process::exit(1);
        }
    };

    // Development-only export passes; both are gated off in config.
    app.textures
        .export_all(config::PREDEFINED_TEXTURES, Path::new(config::TEXTURE_MODULE_DIR));
    app.audio
        .cache
        .export_all(config::PREDEFINED_AUDIO, Path::new(config::AUDIO_MODULE_DIR));

    terminal::enable_raw_mode()?;
    let mut out = stdout();
    execute!(
        out,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::DisableLineWrap,
        terminal::SetTitle(config::WINDOW_TITLE),
    )?;

    let result = run(&mut out, &mut app);

    // Always restore the terminal, even if the loop errored.
    let _ = execute!(
        out,
        terminal::LeaveAlternateScreen,
        cursor::Show,
        terminal::EnableLineWrap,
    );
    let _ = terminal::disable_raw_mode();

    app.shutdown();
    result
}

fn run(out: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let mut buf = PixelBuf::new(cols as usize, rows as usize * 2);
    let mut rng = thread_rng();

    let frame_dur = Duration::from_micros(1_000_000 / u64::from(config::FPS));
    let mut last_frame = Instant::now();

    while app.activity != GameActivityState::Exit {
        let frame_start = Instant::now();
        let dt = frame_start.duration_since(last_frame).as_secs_f32();
        last_frame = frame_start;

        let mut input = InputState::default();
        let mut needs_clear = false;
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char(' ') | KeyCode::Up => input.jump = true,
                    KeyCode::Enter => input.confirm = true,
                    KeyCode::Char('p') | KeyCode::Char('P') => input.pause = true,
                    KeyCode::Char('s') | KeyCode::Char('S') => input.settings = true,
                    KeyCode::Esc => input.back = true,
                    KeyCode::Char('q') | KeyCode::Char('Q') => input.exit = true,
                    _ => {}
                },
                Event::Resize(c, r) => {
                    buf.resize(c as usize, r as usize * 2);
                    needs_clear = true;
                }
                _ => {}
            }
        }

        let before = app.activity;
        app.update(dt, &input, &mut rng);

        // Screens don't repaint the whole terminal; wipe leftovers when the
        // active screen changes.
        if app.activity != before || needs_clear {
            execute!(out, terminal::Clear(terminal::ClearType::All))?;
        }
        app.draw(out, &mut buf)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_dur {
            std::thread::sleep(frame_dur - elapsed);
        }
    }

    Ok(())
}
