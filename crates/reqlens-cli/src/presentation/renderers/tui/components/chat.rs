use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Component;
use crate::presentation::renderers::tui::app::DetailScreen;
use reqlens_types::{ChatMessage, ExchangeRequest, ExchangeResponse};

/// Conversational rendering of the payload: request messages in order,
/// then the assistant reply from the response's first choice.
pub(crate) struct ChatViewComponent;

impl Component for ChatViewComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut DetailScreen) {
        let mut lines: Vec<Line> = Vec::new();

        match &state.detail.request {
            ExchangeRequest::OpenAi(body) => {
                for message in &body.messages {
                    push_message(&mut lines, message);
                }
            }
            ExchangeRequest::Other(_) => {
                lines.push(fallback_line("No chat rendering for this provider"));
            }
        }

        match &state.detail.response {
            ExchangeResponse::OpenAi { body, .. } => {
                match body.choices.first().and_then(|c| c.message.as_ref()) {
                    Some(message) => push_message(&mut lines, message),
                    None => lines.push(fallback_line("No assistant reply in response")),
                }
            }
            ExchangeResponse::Other { .. } => {}
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(" Chat ", Style::default().fg(Color::LightGreen)));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((state.payload_scroll, 0));
        f.render_widget(paragraph, area);
    }
}

fn push_message(lines: &mut Vec<Line<'static>>, message: &ChatMessage) {
    let role_color = match message.role.as_str() {
        "user" => Color::Green,
        "assistant" => Color::Magenta,
        "system" => Color::Yellow,
        _ => Color::Gray,
    };

    lines.push(Line::from(Span::styled(
        message.role.clone(),
        Style::default().fg(role_color).add_modifier(Modifier::BOLD),
    )));
    match &message.content {
        Some(content) => {
            for text_line in content.lines() {
                lines.push(Line::from(format!("  {}", text_line)));
            }
        }
        None => lines.push(fallback_line("  (no content)")),
    }
    lines.push(Line::from(""));
}

fn fallback_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
}
