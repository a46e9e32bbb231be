// SPDX-License-Identifier: MPL-2.0
//! Query input with Search, Show All and Clear actions.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, text_input, Button, Row};
use iced::{alignment, Element, Length, Theme};

type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

/// Every action is disabled while a batch is loading.
pub fn view<'a>(i18n: &'a I18n, query: &'a str, loading: bool) -> Element<'a, Message> {
    let enabled = !loading;

    let input = text_input(&i18n.tr("search-placeholder"), query)
        .on_input(Message::QueryChanged)
        .on_submit_maybe(enabled.then_some(Message::Search))
        .padding(spacing::XS)
        .size(typography::BODY_LG)
        .width(Length::Fill);

    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(input)
        .push(action(
            i18n.tr("search-button"),
            enabled.then_some(Message::Search),
            styles::button::primary,
        ))
        .push(action(
            i18n.tr("show-all-button"),
            enabled.then_some(Message::ShowAll),
            styles::button::secondary,
        ))
        .push(action(
            i18n.tr("clear-button"),
            enabled.then_some(Message::Clear),
            styles::button::secondary,
        ))
        .into()
}

fn action<'a>(label: String, message: Option<Message>, style: ButtonStyle) -> Button<'a, Message> {
    button(text(label).size(typography::BODY))
        .on_press_maybe(message)
        .padding([spacing::XS, spacing::MD])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(style)
}
