use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{info, warn};

use habit_flow::app::{App, StatusLevel, View};
use habit_flow::config;
use habit_flow::core::Context;
use habit_flow::domain::{SampleData, ThemeChoice};
use habit_flow::logging;
use habit_flow::ui;

#[derive(Debug, Parser)]
#[command(
    name = "habit-flow",
    version,
    about = "Habit Flow: a habit-tracking dashboard for the terminal"
)]
struct Args {
    /// Config file (defaults to ~/.config/habit-flow/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sample data file, .json or .toml
    #[arg(long)]
    data: Option<PathBuf>,

    /// Seed for the generated habit grid
    #[arg(long)]
    seed: Option<u64>,

    /// Initial view: dashboard, calendar, progress, goals or settings
    #[arg(long)]
    view: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let loaded = config::load(args.config.as_deref());
    let cfg = loaded.config;
    let mut notes: Vec<String> = loaded.problem.into_iter().collect();
    let mut level = StatusLevel::Warn;

    let _log_guard = match config::log_dir() {
        Some(dir) => match logging::init_logging(&dir, cfg.log_filter.as_deref()) {
            Ok(guard) => Some(guard),
            Err(err) => {
                notes.push(format!("Logging disabled: {err}"));
                None
            }
        },
        None => None,
    };
    info!(config = ?loaded.path, "starting habit-flow");

    let data = match args.data.as_ref().or(cfg.data_file.as_ref()) {
        Some(path) => SampleData::load(path).unwrap_or_else(|err| {
            warn!(%err, "using built-in sample data");
            notes.push(format!("{err}; using built-in data"));
            level = StatusLevel::Error;
            SampleData::builtin()
        }),
        None => SampleData::builtin(),
    };

    let theme = match cfg.theme.as_deref() {
        Some(id) => id.parse::<ThemeChoice>().unwrap_or_else(|err| {
            warn!(%err, "using default theme");
            notes.push(err.to_string());
            ThemeChoice::default()
        }),
        None => ThemeChoice::default(),
    };

    let ctx = Context::new(data, args.seed.or(cfg.habit_seed));
    let mut app = App::new(ctx, View::Dashboard, theme);
    if let Some(id) = args.view.as_deref().or(cfg.start_view.as_deref()) {
        app.select_view_id(id);
    }
    if !notes.is_empty() {
        app.set_status(notes.join(" | "), level);
    }

    let mut stdout = io::stdout();
    enable_raw_mode().context("failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(cfg.tick_rate_ms.max(1));
    let res = run_app(&mut terminal, app, tick_rate);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }
    info!("bye");

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App, tick_rate: Duration) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => handle_mouse(&mut app, mouse, terminal.size()?),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, size: Rect) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.handle_click(size, mouse.column, mouse.row);
    }
}
