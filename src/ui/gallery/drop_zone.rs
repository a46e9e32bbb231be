// SPDX-License-Identifier: MPL-2.0
//! Clickable drop target. Clicking opens the file picker.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{mouse_area, Container, Text};
use iced::{alignment, mouse, Element, Length};

pub fn view(i18n: &I18n, drag_active: bool) -> Element<'_, Message> {
    let label_key = if drag_active {
        "drop-zone-active"
    } else {
        "drop-zone-label"
    };

    let zone = Container::new(Text::new(i18n.tr(label_key)).size(typography::BODY_LG))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::drop_zone(drag_active));

    mouse_area(zone)
        .on_press(Message::OpenPicker)
        .interaction(mouse::Interaction::Pointer)
        .into()
}
