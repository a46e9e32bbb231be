// SPDX-License-Identifier: MPL-2.0
//! Dismissible error banner.

use super::component::{BatchError, Message};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Container, Row, Text};
use iced::{alignment, font::Weight, Element, Font, Length};

/// Text of the banner for `error`.
pub fn message(i18n: &I18n, error: BatchError) -> String {
    match error {
        BatchError::Discarded => i18n.tr("error-batch-failed"),
        BatchError::Partial { failed, total } => i18n.tr_with_args(
            "error-batch-partial",
            &[("failed", &failed.to_string()), ("total", &total.to_string())],
        ),
    }
}

pub fn view(i18n: &I18n, error: BatchError) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("error-title"))
        .size(typography::BODY)
        .font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        });

    let dismiss = button(text(i18n.tr("error-dismiss")).size(typography::BODY_SM))
        .on_press(Message::DismissError)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::dismiss(palette::ERROR_700));

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(title)
        .push(
            Container::new(Text::new(message(i18n, error)).size(typography::BODY))
                .width(Length::Fill),
        )
        .push(dismiss);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::error_banner)
        .into()
}
