use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Component;
use crate::presentation::renderers::tui::app::DetailScreen;

/// Raw pretty-printed rendering of both payloads, side by side.
pub(crate) struct JsonViewComponent;

impl Component for JsonViewComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut DetailScreen) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        render_payload(
            f,
            chunks[0],
            " Request ",
            &state.detail.request_json,
            state.payload_scroll,
        );
        render_payload(
            f,
            chunks[1],
            " Response ",
            &state.detail.response_json,
            state.payload_scroll,
        );
    }
}

fn render_payload(
    f: &mut Frame,
    area: Rect,
    title: &'static str,
    payload: &serde_json::Value,
    scroll: u16,
) {
    let pretty = serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());

    let lines: Vec<Line> = pretty.lines().map(|l| Line::from(l.to_string())).collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(title, Style::default().fg(Color::LightBlue)));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(paragraph, area);
}
