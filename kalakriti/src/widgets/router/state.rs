use super::model::{Location, Screen};

/// Current screen and dashboard location.
#[derive(Debug)]
pub(super) struct RouterState {
    screen: Screen,
}

impl RouterState {
    pub(super) fn screen(&self) -> &Screen {
        &self.screen
    }

    pub(super) fn is_splash(&self) -> bool {
        matches!(self.screen, Screen::Splash)
    }

    pub(super) fn location(&self) -> Option<&Location> {
        match &self.screen {
            Screen::Splash => None,
            Screen::Dashboard(location) => Some(location),
        }
    }

    pub(super) fn show_splash(&mut self) {
        self.screen = Screen::Splash;
    }

    /// Enter a dashboard location. Returns `false` when already there.
    pub(super) fn enter(&mut self, location: Location) -> bool {
        if self.location() == Some(&location) {
            return false;
        }
        self.screen = Screen::Dashboard(location);
        true
    }
}

impl Default for RouterState {
    fn default() -> Self {
        Self {
            screen: Screen::Splash,
        }
    }
}
