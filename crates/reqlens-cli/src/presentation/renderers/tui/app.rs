use crate::presentation::view_models::{DetailViewModel, DisplayMode};

/// State of one mounted detail screen. The mode is seeded from the view
/// model exactly once, at mount; after that it belongs to the user and is
/// never re-derived, even when a fresh view model is applied.
pub(crate) struct DetailScreen {
    pub detail: DetailViewModel,
    pub mode: DisplayMode,
    pub payload_scroll: u16,
}

impl DetailScreen {
    pub fn new(detail: DetailViewModel) -> Self {
        let mode = detail.initial_mode;
        Self {
            detail,
            mode,
            payload_scroll: 0,
        }
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        if self.mode != mode {
            self.mode = mode;
            self.payload_scroll = 0;
        }
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    /// Replace the displayed exchange data without touching the user's
    /// mode choice.
    pub fn apply_update(&mut self, detail: DetailViewModel) {
        self.detail = detail;
    }

    pub fn scroll_down(&mut self) {
        self.payload_scroll = self.payload_scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.payload_scroll = self.payload_scroll.saturating_sub(1);
    }
}
