//! Storefront TUI - pizzeria menu, cart drawer and checkout
//!
//! Terminal front end for storefront-core.

mod app;
mod keybindings;
mod mode;
mod surface;
mod views;
mod widgets;

use std::fs::{self, File};
use std::io;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use storefront_core::config::default_data_dir;
use storefront_core::{
    CartManager, Catalog, ConfigError, KeyValueStore, StorefrontConfig, StorefrontError,
};

use app::App;

const TICK_RATE: Duration = Duration::from_millis(250);
const LOG_FILE: &str = "storefront.log";

#[derive(Error, Debug)]
enum AppError {
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storefront(#[from] StorefrontError),
}

fn main() -> Result<(), AppError> {
    let config = StorefrontConfig::load_standard()?;

    // Log to a file so output never lands on the alternate screen
    init_logging()?;

    let manager = CartManager::open(Catalog::builtin(), &config)?;
    let mut app = App::new(manager);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn init_logging() -> io::Result<()> {
    let dir = default_data_dir();
    fs::create_dir_all(&dir)?;
    let file = File::options()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: KeyValueStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> io::Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| app.render(f, now))?;

        if !event::poll(TICK_RATE)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key, Instant::now()) {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
}
