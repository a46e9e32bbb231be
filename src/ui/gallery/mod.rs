// SPDX-License-Identifier: MPL-2.0
//! The gallery screen: drop zone, search bar, error banner and card grid.

mod banner;
mod card;
pub mod component;
mod drop_zone;
pub mod empty_state;
mod search_bar;

pub use component::{BatchError, BatchSummary, Effect, Message, State};

use crate::domain::gallery::ImageRecord;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::widgets::AnimatedSpinner;
use empty_state::EmptyKind;
use iced::widget::{scrollable, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Contextual data needed to render the gallery screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Current spinner angle in radians.
    pub spinner_rotation: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ViewContext {
        i18n,
        state,
        spinner_rotation,
    } = ctx;
    let gallery = state.gallery();
    let loading = state.is_loading();

    let heading = Text::new(i18n.tr("gallery-heading")).size(typography::TITLE_LG);

    let mut content = Column::new()
        .spacing(spacing::MD)
        .push(heading)
        .push(drop_zone::view(i18n, state.is_drag_active()))
        .push(search_bar::view(i18n, state.query(), loading));

    if let Some(error) = state.error() {
        content = content.push(banner::view(i18n, error));
    }

    if loading {
        content = content.push(loading_indicator(i18n, spinner_rotation));
    }

    match EmptyKind::detect(gallery.len(), gallery.filtered_len(), loading) {
        Some(kind) => content = content.push(empty_state::view(i18n, kind)),
        None if gallery.filtered_len() > 0 => {
            content = content
                .push(
                    Text::new(i18n.tr_with_args(
                        "gallery-count",
                        &[
                            ("shown", &gallery.filtered_len().to_string()),
                            ("total", &gallery.len().to_string()),
                        ],
                    ))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
                )
                .push(grid(
                    i18n,
                    gallery.filtered(),
                    state.columns().value(),
                    state,
                ));
        }
        None => {}
    }

    let page = Container::new(content.max_width(sizing::MAX_CONTENT_WIDTH))
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center);

    scrollable(page).height(Length::Fill).into()
}

fn loading_indicator(i18n: &I18n, rotation: f32) -> Element<'_, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(AnimatedSpinner::new(palette::PRIMARY_500, rotation).into_element())
        .push(Text::new(i18n.tr("loading-label")).size(typography::BODY))
        .into()
}

/// Lays cards out in rows of `columns`, padding the last row so every card
/// keeps the same width.
fn grid<'a>(
    i18n: &I18n,
    records: impl Iterator<Item = &'a ImageRecord>,
    columns: usize,
    state: &State,
) -> Element<'a, Message> {
    let records: Vec<&ImageRecord> = records.collect();
    let preview = state.keyword_preview();

    let rows = records.chunks(columns.max(1)).map(|chunk| {
        let mut row = Row::new().spacing(spacing::MD);
        for record in chunk {
            row = row.push(card::view(i18n, record, preview));
        }
        for _ in chunk.len()..columns {
            row = row.push(Space::new().width(Length::Fill));
        }
        row.into()
    });

    Column::with_children(rows).spacing(spacing::MD).into()
}
