use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app::DetailScreen;
use super::components::{ChatViewComponent, Component, JsonViewComponent, SummaryComponent};
use crate::presentation::view_models::DisplayMode;

pub(crate) fn draw(f: &mut Frame, state: &mut DetailScreen) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary box (5 fields + borders)
            Constraint::Length(1), // Mode switch
            Constraint::Min(0),    // Payload view
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    let summary = SummaryComponent;
    summary.render(f, main_chunks[0], state);

    render_mode_switch(f, main_chunks[1], state);

    // Exactly one payload branch renders for the current mode; both read
    // the same payload values off the view model.
    match state.mode {
        DisplayMode::Chat => {
            let chat = ChatViewComponent;
            chat.render(f, main_chunks[2], state);
        }
        DisplayMode::Json => {
            let json = JsonViewComponent;
            json.render(f, main_chunks[2], state);
        }
    }

    render_footer(f, main_chunks[3]);
}

fn render_mode_switch(f: &mut Frame, area: Rect, state: &DetailScreen) {
    let option = |label: &str, selected: bool| {
        if selected {
            Span::styled(
                format!(" {} ", label),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {} ", label), Style::default().fg(Color::Gray))
        }
    };

    let line = Line::from(vec![
        Span::styled("View: ", Style::default().fg(Color::DarkGray)),
        option("💬 Chat", state.mode == DisplayMode::Chat),
        Span::raw(" "),
        option("{} JSON", state.mode == DisplayMode::Json),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_footer(f: &mut Frame, area: Rect) {
    let footer = Line::from(Span::styled(
        " c chat · j json · tab toggle · ↑/↓ scroll · r reload · q quit",
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(footer), area);
}
