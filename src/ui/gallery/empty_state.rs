// SPDX-License-Identifier: MPL-2.0
//! Message shown in place of the grid when nothing is displayed.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

/// Which empty message applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyKind {
    /// Nothing has been analyzed yet.
    NoImages,
    /// The gallery has images but none match the query.
    NoMatches,
}

impl EmptyKind {
    /// `None` when there is something to show, or while loading.
    #[must_use]
    pub fn detect(gallery_len: usize, shown: usize, loading: bool) -> Option<Self> {
        if loading || shown > 0 {
            None
        } else if gallery_len == 0 {
            Some(EmptyKind::NoImages)
        } else {
            Some(EmptyKind::NoMatches)
        }
    }

    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            EmptyKind::NoImages => "empty-gallery",
            EmptyKind::NoMatches => "empty-search",
        }
    }
}

pub fn view(i18n: &I18n, kind: EmptyKind) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("empty-title"))
        .size(typography::TITLE_MD)
        .color(palette::GRAY_400);

    let subtitle = Text::new(i18n.tr(kind.message_key()))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(title)
            .push(subtitle),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .align_x(alignment::Horizontal::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_gallery_and_empty_search_are_distinguished() {
        assert_eq!(EmptyKind::detect(0, 0, false), Some(EmptyKind::NoImages));
        assert_eq!(EmptyKind::detect(3, 0, false), Some(EmptyKind::NoMatches));
        assert_eq!(EmptyKind::detect(3, 1, false), None);
    }

    #[test]
    fn nothing_is_shown_while_loading() {
        assert_eq!(EmptyKind::detect(0, 0, true), None);
        assert_eq!(EmptyKind::detect(2, 0, true), None);
    }
}
