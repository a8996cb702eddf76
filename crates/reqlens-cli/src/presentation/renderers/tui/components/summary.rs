use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::renderers::tui::app::DetailScreen;
use crate::presentation::view_models::{BadgeTone, FieldDescription};

pub(crate) struct SummaryComponent;

impl Component for SummaryComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut DetailScreen) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                format!(" Exchange {} ", state.detail.id),
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            ));

        let lines: Vec<Line> = state
            .detail
            .summary
            .iter()
            .map(|field| {
                let mut spans = vec![Span::styled(
                    format!("{:<9}", format!("{}:", field.title)),
                    Style::default().fg(Color::Gray),
                )];
                spans.extend(description_spans(&field.description));
                Line::from(spans)
            })
            .collect();

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

fn description_spans(description: &FieldDescription) -> Vec<Span<'static>> {
    match description {
        FieldDescription::Tag { text } => match text {
            Some(text) => vec![Span::styled(
                text.clone(),
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD),
            )],
            None => Vec::new(),
        },
        FieldDescription::Tokens {
            total,
            prompt,
            completion,
        } => {
            let mut spans = Vec::new();
            if let Some(total) = total {
                spans.push(Span::styled(
                    total.to_string(),
                    Style::default().fg(Color::White),
                ));
            }
            spans.push(Span::styled(
                format!(
                    " (prompt: {}, completion: {})",
                    opt(*prompt),
                    opt(*completion)
                ),
                Style::default().fg(Color::DarkGray),
            ));
            spans
        }
        FieldDescription::Text { text } => match text {
            Some(text) => vec![Span::styled(
                text.clone(),
                Style::default().fg(Color::White),
            )],
            None => Vec::new(),
        },
        FieldDescription::Badge { text, tone } => {
            let color = match tone {
                BadgeTone::Success => Color::Green,
                BadgeTone::Error => Color::Red,
            };
            vec![Span::styled(
                text.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )]
        }
    }
}

fn opt(value: Option<u32>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}
