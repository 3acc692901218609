use super::model::RailMode;

/// Shell state: whether the rail is hovered open.
#[derive(Debug, Default)]
pub(super) struct ShellState {
    mode: RailMode,
}

impl ShellState {
    pub(super) fn mode(&self) -> RailMode {
        self.mode
    }

    pub(super) fn expand(&mut self) {
        self.mode = RailMode::Expanded;
    }

    pub(super) fn collapse(&mut self) {
        self.mode = RailMode::Collapsed;
    }
}
