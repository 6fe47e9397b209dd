pub mod app;
pub mod event;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, ThemeColors};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use event::{Event, EventHandler};
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::scoring::{AxisScores, MAX_SCORE};

const TICK_RATE_MS: u64 = 250;
const COARSE_STEP: i64 = 10;

/// Run the explorer until the user quits. Returns the final scores.
pub async fn run_tui(mut app: App) -> anyhow::Result<AxisScores> {
    // Buffer stderr while TUI is active to prevent output corrupting the display
    crate::stderr_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();
    let mut events = EventHandler::new(TICK_RATE_MS);

    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Restore terminal
    ratatui::restore();

    // Flush buffered stderr messages now that the terminal is restored
    for msg in crate::stderr_buffer::drain() {
        eprintln!("{}", msg);
    }

    result
}

async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut EventHandler,
) -> anyhow::Result<AxisScores> {
    loop {
        if let Err(e) = terminal.draw(|frame| ui::draw(frame, app)) {
            anyhow::bail!("Failed to draw explorer: {}", e);
        }

        match events.next().await {
            Some(Event::Key(key)) => handle_key_event(app, key),
            Some(Event::Tick) => app.update_flash(),
            None => anyhow::bail!("terminal event stream closed"),
        }

        if app.should_quit {
            return Ok(app.scores);
        }
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        app::InputMode::Normal => {
            match key.code {
                // Quit
                KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true
                }

                // Axis selection
                KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => app.next_axis(),
                KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => app.previous_axis(),

                // Slider movement
                KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('+') => app.increase(),
                KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('-') => app.decrease(),
                KeyCode::Char('L') | KeyCode::PageUp => app.adjust(COARSE_STEP),
                KeyCode::Char('H') | KeyCode::PageDown => app.adjust(-COARSE_STEP),
                KeyCode::Home => app.set_selected(0),
                KeyCode::End => app.set_selected(i64::from(MAX_SCORE)),

                // Reset / undo
                KeyCode::Char('r') => app.reset(),
                KeyCode::Char('z') => app.undo_last(),

                // Export CSV
                KeyCode::Char('e') => app.export(),

                // Help
                KeyCode::Char('?') => app.show_help(),

                _ => {}
            }
        }
        app::InputMode::Help => {
            // Any key exits help
            app.dismiss_help();
        }
    }
}
