use ratatui::{Frame, layout::Rect};

use super::app::DetailScreen;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut DetailScreen);
}

pub(crate) mod chat;
pub(crate) mod json;
pub(crate) mod summary;

pub(crate) use chat::ChatViewComponent;
pub(crate) use json::JsonViewComponent;
pub(crate) use summary::SummaryComponent;
