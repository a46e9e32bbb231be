// SPDX-License-Identifier: MPL-2.0
//! Root view: the gallery screen with toasts stacked on top.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::notifications::{self, Toast};
use iced::widget::Stack;
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a gallery::State,
    pub notifications: &'a notifications::Manager,
    pub spinner_rotation: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen = gallery::view(gallery::ViewContext {
        i18n: ctx.i18n,
        state: ctx.gallery,
        spinner_rotation: ctx.spinner_rotation,
    })
    .map(Message::Gallery);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(screen)
        .push(toasts)
        .into()
}
