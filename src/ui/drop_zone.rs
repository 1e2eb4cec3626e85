// SPDX-License-Identifier: MPL-2.0
//! Drop target for the source image.
//!
//! The whole surface is clickable and opens the file picker, the same as the
//! browse button below it. Files are not dropped onto this widget directly:
//! iced delivers drops to the window, and the zone only reflects the hover
//! state through its style.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, Column, Container, Text};
use iced::{alignment, mouse, Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    BrowseRequested,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Name of the staged image, shown as the heading once present.
    pub selection_name: Option<&'a str>,
    /// i18n key of the status line under the heading.
    pub status_key: &'static str,
    pub hovering: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = ctx
        .selection_name
        .map_or_else(|| ctx.i18n.tr("drop-zone-title"), str::to_string);
    let status_key = if ctx.hovering {
        "drop-zone-active"
    } else {
        ctx.status_key
    };

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(heading).size(typography::TITLE_SM))
        .push(
            Text::new(ctx.i18n.tr(status_key))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );

    let surface = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::drop_zone(ctx.hovering));

    let clickable = mouse_area(surface)
        .on_press(Message::BrowseRequested)
        .interaction(mouse::Interaction::Pointer);

    let browse_button = button(Text::new(ctx.i18n.tr("browse-button")))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::secondary)
        .on_press(Message::BrowseRequested);

    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(clickable)
        .push(browse_button)
        .into()
}
