use std::{fs::OpenOptions, sync::Mutex, time::{Duration, Instant}};

use anyhow::{Context, Result};
use crossterm::{event::{self, DisableMouseCapture, EnableMouseCapture, Event}, execute, terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen}};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use todoer::{
    application::{seed::sample_todos, todo_store::TodoStore},
    config::Config,
    infrastructure::memory_repo::InMemoryTodoRepository,
    ui::{app::{App, Flow}, view},
};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let config = Config::from_env()?;
    init_tracing(&config)?;

    let repo = InMemoryTodoRepository::with_items(sample_todos(config.seed_count));
    let app = App::new(TodoStore::new(repo), config.toast_ttl);
    tracing::info!(seeded = config.seed_count, "starting");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, config.tick_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    tracing::info!("shutdown");
    res
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    // The terminal owns stdout, so logs go to a file or nowhere.
    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("opening log file {}", path.display()))?;
            tracing_subscriber::fmt().with_env_filter(filter).with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::sink).init(),
    }
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, mut app: App, tick_rate: Duration) -> Result<()> {
    let mut last_tick = Instant::now();
    loop {
        if app.take_dirty() {
            terminal.draw(|f| view::draw(f, &mut app))?;
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let flow = match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                Event::Resize(..) => { app.mark_dirty(); Flow::Continue }
                _ => Flow::Continue,
            };
            if flow == Flow::Quit { break; }
        }
        if last_tick.elapsed() >= tick_rate {
            app.tick(Instant::now());
            last_tick = Instant::now();
        }
    }
    Ok(())
}
