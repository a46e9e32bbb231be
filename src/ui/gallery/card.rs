// SPDX-License-Identifier: MPL-2.0
//! One gallery card: preview, title, prompt, format and keywords.

use super::component::Message;
use crate::domain::gallery::ImageRecord;
use crate::domain::ui::KeywordPreview;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{image, Column, Container, Row, Text};
use iced::{font::Weight, ContentFit, Element, Font, Length};

fn labeled<'a>(label: String, value: String) -> Row<'a, Message> {
    Row::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(label)
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .push(Text::new(value).size(typography::BODY_SM))
}

pub fn view<'a>(i18n: &I18n, record: &'a ImageRecord, preview: KeywordPreview) -> Element<'a, Message> {
    let thumbnail = image(image::Handle::from_path(record.source()))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
        .content_fit(ContentFit::Cover);

    let title = Text::new(record.title())
        .size(typography::TITLE_SM)
        .font(Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        });

    let details = Column::new()
        .spacing(spacing::XXS)
        .push(title)
        .push(labeled(i18n.tr("card-prompt"), record.prompt().to_string()))
        .push(labeled(i18n.tr("card-format"), record.format().to_string()))
        .push(labeled(
            i18n.tr("card-keywords"),
            record.keyword_preview(preview.value()),
        ));

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(thumbnail)
            .push(Container::new(details).padding([0.0, spacing::XS])),
    )
    .width(Length::Fill)
    .padding(spacing::XS)
    .style(styles::container::card)
    .into()
}
