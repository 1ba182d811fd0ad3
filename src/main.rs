pub mod config;
pub mod runtime;
pub mod session;
pub mod stats;
pub mod texts;
pub mod ui;
pub mod util;

use crate::{
    config::{Config, ConfigStore, FileConfigStore},
    runtime::{CrosstermEventSource, FixedTicker, Runner, TrainerEvent},
    session::{Key, Session, Status},
    texts::{Difficulty, TextPool},
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::Duration,
};

/// Timer granularity: elapsed time advances in half-second steps.
pub const TICK_RATE_MS: u64 = 500;

/// terminal typing trainer with live wpm and accuracy
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal typing trainer. Type the shown reference text; wpm, accuracy, elapsed time and error count update live. Sessions can be paused, reset and re-rolled from difficulty-keyed sample pools."
)]
pub struct Cli {
    /// difficulty pool to draw reference texts from
    #[clap(short, long, value_enum)]
    difficulty: Option<Difficulty>,

    /// forbid corrections: backspace keystrokes are ignored
    #[clap(long)]
    no_backspace: bool,

    /// custom reference text to type instead of a pool draw
    #[clap(short = 'p', long)]
    prompt: Option<String>,
}

/// Owns the active session plus the effective settings. One instance per
/// window; nothing here is shared or global.
#[derive(Debug)]
pub struct App {
    pub session: Session,
    pub config: Config,
}

impl App {
    pub fn new(cli: Cli, config: Config) -> Result<Self, Box<dyn Error>> {
        let prompt = match &cli.prompt {
            Some(p) => p.clone(),
            None => TextPool::load(config.difficulty)?.pick(None)?,
        };
        let session = Session::new(prompt, config.backspace_enabled)?;

        Ok(Self { session, config })
    }

    /// Restarts the current text from scratch.
    pub fn retry(&mut self) {
        self.session.reset();
    }

    /// Replaces the session with a fresh draw from the active pool, never
    /// repeating the text just typed when the pool allows it.
    pub fn new_text(&mut self) -> Result<(), Box<dyn Error>> {
        let pool = TextPool::load(self.config.difficulty)?;
        let prompt = pool.pick(Some(self.session.prompt.as_str()))?;
        self.session = Session::new(prompt, self.config.backspace_enabled)?;
        Ok(())
    }

    pub fn toggle_backspace(&mut self) {
        self.config.backspace_enabled = !self.config.backspace_enabled;
        self.session.backspace_enabled = self.config.backspace_enabled;
    }

    /// Switches to the next difficulty pool and starts a fresh session on it.
    pub fn cycle_difficulty(&mut self) -> Result<(), Box<dyn Error>> {
        self.config.difficulty = self.config.difficulty.next();
        self.new_text()
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = FileConfigStore::new();
    let mut config = store.load();
    if let Some(difficulty) = cli.difficulty {
        config.difficulty = difficulty;
    }
    if cli.no_backspace {
        config.backspace_enabled = false;
    }

    // Fail on malformed configuration before touching the terminal.
    let mut app = App::new(cli, config)?;

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, &store);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    store: &dyn ConfigStore,
) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    terminal.draw(|f| ui(app, f))?;

    loop {
        match runner.step() {
            TrainerEvent::Tick => {
                app.session.on_tick();

                // Only the running clock needs a redraw on ticks
                if app.session.status() == Status::Playing {
                    terminal.draw(|f| ui(app, f))?;
                }
            }
            TrainerEvent::Resize => {
                terminal.draw(|f| ui(app, f))?;
            }
            TrainerEvent::Key(key) => {
                if handle_key(app, key, store)? {
                    break;
                }
                terminal.draw(|f| ui(app, f))?;
            }
        }
    }

    Ok(())
}

/// Routes one key event. Returns true when the app should exit.
fn handle_key(
    app: &mut App,
    key: KeyEvent,
    store: &dyn ConfigStore,
) -> Result<bool, Box<dyn Error>> {
    match key.code {
        KeyCode::Esc => return Ok(true),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Ok(true);
        }
        KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            match app.session.status() {
                Status::Playing => app.session.pause(),
                Status::Paused => app.session.resume(),
                _ => {}
            }
        }
        KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.toggle_backspace();
            let _ = store.save(&app.config);
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.cycle_difficulty()?;
            let _ = store.save(&app.config);
        }
        KeyCode::Left => app.retry(),
        KeyCode::Right => app.new_text()?,
        KeyCode::Backspace => app.session.apply_key(Key::Backspace),
        KeyCode::Char(c) => {
            if app.session.has_finished() {
                match c {
                    'r' => app.retry(),
                    'n' => app.new_text()?,
                    _ => {}
                }
            } else {
                app.session.apply_key(Key::Char(c));
            }
        }
        _ => {}
    }

    Ok(false)
}

fn ui(app: &mut App, f: &mut Frame) {
    f.render_widget(&*app, f.area());
}
