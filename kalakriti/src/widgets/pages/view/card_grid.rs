use iced::widget::{Column, Row, Space, column, container, row, text};
use iced::{Element, Font, Length, Theme, alignment};

use crate::components::primitive::{badge, section_card, stat_card};
use crate::layout::grid_columns;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::style;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::pages::model::{CardItem, CardSection, StatCard};

const GRID_SPACING: f32 = 16.0;
const ITEM_PADDING: f32 = 14.0;
/// Horizontal space a section card takes from its grid (padding on both
/// sides).
const SECTION_INNER_INSET: f32 = 40.0;

/// Lay cells out in rows of `columns`, padding the last row so every cell
/// keeps the same width.
pub(crate) fn grid<'a, Message: 'a>(
    cells: Vec<Element<'a, Message, Theme, iced::Renderer>>,
    columns: usize,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let columns = columns.max(1);
    let mut rows = Column::new().spacing(GRID_SPACING).width(Length::Fill);
    let mut cells = cells.into_iter().peekable();

    while cells.peek().is_some() {
        let mut line = Row::new().spacing(GRID_SPACING).width(Length::Fill);
        for _ in 0..columns {
            line = match cells.next() {
                Some(cell) => line.push(container(cell).width(Length::Fill)),
                None => line.push(Space::new().width(Length::Fill)),
            };
        }
        rows = rows.push(line);
    }

    rows.into()
}

/// Render headline metrics as a responsive grid.
pub(crate) fn stats<'a, Message: 'a>(
    stats: &'static [StatCard],
    content_width: f32,
    theme: ThemeProps<'a>,
    fonts: &'a FontsConfig,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let cells = stats
        .iter()
        .map(|stat| {
            stat_card::view(stat_card::StatCardProps {
                title: stat.title,
                value: stat.value,
                change: stat.change,
                theme,
                fonts,
            })
        })
        .collect();

    grid(cells, grid_columns(content_width, stats.len()))
}

/// Render a titled section whose items form a responsive grid.
pub(crate) fn section<'a, Message: 'a>(
    section: &'static CardSection,
    content_width: f32,
    theme: ThemeProps<'a>,
    fonts: &'a FontsConfig,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let cells = section
        .items
        .iter()
        .map(|entry| item(entry, theme, fonts))
        .collect();
    let columns =
        grid_columns(content_width - SECTION_INNER_INSET, section.columns);

    section_card::view(section_card::SectionCardProps {
        title: section.title,
        description: section.description,
        content: grid(cells, columns),
        theme,
        fonts,
    })
}

fn item<'a, Message: 'a>(
    entry: &'static CardItem,
    theme: ThemeProps<'a>,
    fonts: &'a FontsConfig,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let palette = *theme.theme.iced_palette();
    let size = fonts.ui.size;

    let mut title_row = row![
        text(entry.title).size(size).font(Font {
            weight: iced::font::Weight::Semibold,
            ..fonts.ui.font_type
        }),
        Space::new().width(Length::Fill),
    ]
    .spacing(8)
    .align_y(alignment::Vertical::Center);
    if let Some(trailing) = entry.trailing {
        title_row = title_row.push(
            text(trailing)
                .size(size)
                .font(fonts.heading.font_type)
                .color(palette.primary),
        );
    }

    let mut body = column![title_row].spacing(4);
    if !entry.subtitle.is_empty() {
        body = body.push(
            text(entry.subtitle)
                .size(size * 0.85)
                .color(palette.muted_foreground),
        );
    }
    if !entry.detail.is_empty() {
        body = body.push(text(entry.detail).size(size * 0.9));
    }
    if !entry.badges.is_empty() {
        let badges = entry.badges.iter().fold(
            Row::new().spacing(6),
            |badges, label| {
                badges.push(badge::view(badge::BadgeProps {
                    label: label.label,
                    tone: label.tone,
                    theme,
                    fonts,
                }))
            },
        );
        body = body.push(badges);
    }

    container(body)
        .width(Length::Fill)
        .padding(ITEM_PADDING)
        .style(style::muted_row_style(palette))
        .into()
}
