use iced::{Size, Task};

use crate::app::{App, AppEvent};

/// Track the window size used for responsive page grids.
pub(crate) fn handle_resize(app: &mut App, size: Size) -> Task<AppEvent> {
    log::debug!("window resized to {}x{}", size.width, size.height);
    app.state.window_size = size;
    Task::none()
}
