// SPDX-License-Identifier: MPL-2.0
//! Results region: one card per generated image.
//!
//! Each card shows the preview, the resolution label, and a download button
//! for the same URL. Previews are fetched after the cards appear; until then a
//! placeholder is shown.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::workflow::Gallery;
use iced::widget::image::{self, Handle};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Identifier of the scrollable the results region is placed in.
///
/// The region sits at the end of that scrollable, so snapping it to the end
/// brings freshly rendered results into view.
pub const SCROLLABLE_ID: &str = "results-gallery";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    DownloadRequested(usize),
}

/// State of one card's preview image.
#[derive(Debug, Clone, Default)]
pub enum Preview {
    #[default]
    Loading,
    Ready(Handle),
    Unavailable,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    /// Indexed like the gallery entries; missing entries render as loading.
    pub previews: &'a [Preview],
}

/// Renders the results region, or `None` while it is hidden.
pub fn view(ctx: ViewContext<'_>) -> Option<Element<'_, Message>> {
    if !ctx.gallery.is_visible() {
        return None;
    }

    let title = Text::new(ctx.i18n.tr("results-title")).size(typography::TITLE_MD);

    let body: Element<'_, Message> = if ctx.gallery.is_empty() {
        Text::new(ctx.i18n.tr("results-empty"))
            .size(typography::BODY)
            .color(palette::GRAY_400)
            .into()
    } else {
        let cards = ctx.gallery.entries().iter().enumerate().map(|(index, entry)| {
            let preview = ctx.previews.get(index).cloned().unwrap_or_default();
            card(ctx.i18n, index, &entry.resolution_label, preview)
        });
        Row::with_children(cards)
            .spacing(spacing::MD)
            .wrap()
            .into()
    };

    let content = Column::new().spacing(spacing::MD).push(title).push(body);

    Some(
        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::panel)
            .into(),
    )
}

fn card<'a>(i18n: &I18n, index: usize, label: &'a str, preview: Preview) -> Element<'a, Message> {
    let preview: Element<'a, Message> = match preview {
        Preview::Ready(handle) => image::Image::new(handle)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::GALLERY_PREVIEW_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        Preview::Loading => placeholder(i18n.tr("gallery-preview-loading")),
        Preview::Unavailable => placeholder(i18n.tr("gallery-preview-unavailable")),
    };

    let footer = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(label)
                .size(typography::BODY_LG)
                .width(Length::Fill),
        )
        .push(
            button(Text::new(i18n.tr("gallery-download")).size(typography::BODY_SM))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::secondary)
                .on_press(Message::DownloadRequested(index)),
        );

    Container::new(Column::new().spacing(spacing::XS).push(preview).push(footer))
        .width(Length::Fixed(sizing::GALLERY_CARD_WIDTH))
        .padding(spacing::XS)
        .style(styles::container::card)
        .into()
}

fn placeholder<'a>(caption: String) -> Element<'a, Message> {
    Container::new(
        Text::new(caption)
            .size(typography::CAPTION)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::GALLERY_PREVIEW_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}
