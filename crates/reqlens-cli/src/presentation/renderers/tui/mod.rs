mod app;
mod components;
mod ui;

use crate::presentation::presenters;
use crate::presentation::view_models::{DetailViewModel, DisplayMode};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use reqlens_types::ExchangeRecord;
use std::io;
use std::path::Path;
use std::time::Duration;

use app::DetailScreen;

/// Run the interactive detail view until the user quits. `capture_path`
/// backs the reload key: proxies rewrite captures once late metrics land.
pub fn run(detail: DetailViewModel, capture_path: &Path) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let mut screen = DetailScreen::new(detail);
    let mut should_quit = false;

    let tick_rate = Duration::from_millis(250);

    while !should_quit {
        terminal.draw(|f| {
            ui::draw(f, &mut screen);
        })?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        should_quit = true;
                    }
                    KeyCode::Char('c') => {
                        screen.set_mode(DisplayMode::Chat);
                    }
                    KeyCode::Char('j') => {
                        screen.set_mode(DisplayMode::Json);
                    }
                    KeyCode::Tab => {
                        screen.toggle_mode();
                    }
                    KeyCode::Char('r') => {
                        // Reload keeps the user's mode choice; a capture
                        // that no longer loads leaves the view as-is.
                        if let Ok(record) = ExchangeRecord::load(capture_path) {
                            if let Some(fresh) = presenters::present_detail(&record) {
                                screen.apply_update(fresh);
                            }
                        }
                    }
                    KeyCode::Down => {
                        screen.scroll_down();
                    }
                    KeyCode::Up => {
                        screen.scroll_up();
                    }
                    _ => {}
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    Ok(())
}
