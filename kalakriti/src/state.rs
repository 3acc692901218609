use iced::Size;

use crate::layout::ShellLayout;

/// Window geometry state.
#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) window_size: Size,
}

impl State {
    pub(crate) fn new(window_size: Size) -> Self {
        Self { window_size }
    }

    /// Width left for page content under the given shell layout.
    pub(crate) fn content_width(&self, layout: ShellLayout) -> f32 {
        layout.content_width(self.window_size)
    }
}
