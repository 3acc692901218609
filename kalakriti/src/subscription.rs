use iced::{Subscription, window};

use crate::app::{App, AppEvent};
use crate::widgets::router::SPLASH_DELAY_MS;

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let win_subs = window::events().map(|(_id, event)| AppEvent::Window(event));

    let mut subs = vec![win_subs];

    // Splash redirect timer, dropped as soon as the dashboard is shown.
    if app.widgets.router.is_splash() {
        let tick = iced::time::every(std::time::Duration::from_millis(
            SPLASH_DELAY_MS,
        ))
        .map(|_| AppEvent::SplashTick);
        subs.push(tick);
    }

    Subscription::batch(subs)
}
