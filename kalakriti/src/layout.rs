use iced::Size;

use crate::widgets::navigation::model::RailMode;

/// Horizontal padding of the page content area, per side.
pub(crate) const CONTENT_PADDING: f32 = 24.0;

const WIDE_CONTENT_MIN_WIDTH: f32 = 1024.0;
const MEDIUM_CONTENT_MIN_WIDTH: f32 = 640.0;

/// Shell geometry for one render.
///
/// The content offset is derived from the same rail width, so the two can
/// never disagree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ShellLayout {
    rail_width: f32,
}

impl ShellLayout {
    pub(crate) fn for_mode(mode: RailMode) -> Self {
        Self {
            rail_width: mode.width(),
        }
    }

    pub(crate) fn rail_width(&self) -> f32 {
        self.rail_width
    }

    /// Left offset of the content container.
    pub(crate) fn content_offset(&self) -> f32 {
        self.rail_width
    }

    /// Width available to page content inside the window.
    pub(crate) fn content_width(&self, window_size: Size) -> f32 {
        (window_size.width - self.content_offset() - 2.0 * CONTENT_PADDING)
            .max(0.0)
    }
}

/// Number of grid columns for a content width and the widest grid
/// requested.
pub(crate) fn grid_columns(content_width: f32, max_columns: usize) -> usize {
    let columns = if content_width >= WIDE_CONTENT_MIN_WIDTH {
        max_columns
    } else if content_width >= MEDIUM_CONTENT_MIN_WIDTH {
        max_columns.min(2)
    } else {
        1
    };
    columns.max(1)
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use super::{CONTENT_PADDING, ShellLayout, grid_columns};
    use crate::widgets::navigation::model::{
        RAIL_COLLAPSED_WIDTH, RAIL_EXPANDED_WIDTH, RailMode,
    };

    #[test]
    fn given_each_rail_mode_when_computing_layout_then_offset_equals_rail_width()
    {
        for mode in [RailMode::Collapsed, RailMode::Expanded] {
            let layout = ShellLayout::for_mode(mode);
            assert_eq!(layout.content_offset(), layout.rail_width());
            assert_eq!(layout.rail_width(), mode.width());
        }
    }

    #[test]
    fn given_mode_changes_when_computing_layout_then_offset_snaps_with_state() {
        assert_eq!(
            ShellLayout::for_mode(RailMode::Collapsed).content_offset(),
            RAIL_COLLAPSED_WIDTH
        );
        assert_eq!(
            ShellLayout::for_mode(RailMode::Expanded).content_offset(),
            RAIL_EXPANDED_WIDTH
        );
    }

    #[test]
    fn given_window_size_when_computing_content_width_then_rail_and_padding_are_excluded()
     {
        let layout = ShellLayout::for_mode(RailMode::Collapsed);
        let width = layout.content_width(Size::new(1000.0, 700.0));
        assert_eq!(width, 1000.0 - RAIL_COLLAPSED_WIDTH - 2.0 * CONTENT_PADDING);
    }

    #[test]
    fn given_narrow_window_when_computing_content_width_then_width_is_not_negative()
     {
        let layout = ShellLayout::for_mode(RailMode::Expanded);
        assert_eq!(layout.content_width(Size::new(100.0, 100.0)), 0.0);
    }

    #[test]
    fn given_content_widths_when_choosing_columns_then_breakpoints_apply() {
        assert_eq!(grid_columns(1200.0, 4), 4);
        assert_eq!(grid_columns(800.0, 4), 2);
        assert_eq!(grid_columns(800.0, 1), 1);
        assert_eq!(grid_columns(300.0, 3), 1);
        assert_eq!(grid_columns(1200.0, 0), 1);
    }
}
