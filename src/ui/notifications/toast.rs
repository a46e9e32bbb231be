// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering notifications.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Container, Row, Space};
use iced::{alignment, Background, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// Renders a single toast: `[accent] [message] [×]`.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent_color = notification.severity().color();

        let message_text = if notification.message_args().is_empty() {
            i18n.tr(notification.message_key())
        } else {
            let args: Vec<(&str, &str)> = notification
                .message_args()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(notification.message_key(), &args)
        };

        let accent = Container::new(Space::new().width(Length::Fixed(spacing::XXS)))
            .height(Length::Fixed(sizing::ICON_MD))
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(accent_color)),
                border: iced::Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                ..Default::default()
            });

        let dismiss_button = button(text("×").size(typography::BODY_LG))
            .on_press(Message::Dismiss(notification.id()))
            .padding([0.0, spacing::XS])
            .style(|theme: &Theme, status| {
                styles::button::dismiss(theme.palette().text)(theme, status)
            });

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(accent)
            .push(
                Container::new(text(message_text).size(typography::BODY))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Stacks visible toasts in the bottom-right corner.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        if toasts.is_empty() {
            return Space::new().into();
        }

        Container::new(
            Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.base.color,
        )),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
