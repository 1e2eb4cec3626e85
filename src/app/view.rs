// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! A single page: drop zone, resolution picker, generate action, progress
//! indicator, and the results region, in one scrollable column with the
//! toast overlay stacked on top.

use super::Message;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::gallery::{self, Preview};
use crate::ui::notifications::{self, Manager};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use crate::ui::{drop_zone, resolution_picker};
use crate::workflow::Controller;
use iced::widget::{button, scrollable, Column, Container, Id, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub controller: &'a Controller,
    pub previews: &'a [Preview],
    pub notifications: &'a Manager,
    pub spinner_rotation: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let controller = ctx.controller;

    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_LG);

    let drop_zone = drop_zone::view(drop_zone::ViewContext {
        i18n: ctx.i18n,
        selection_name: controller.selection().map(|s| s.name()),
        status_key: controller.status_key(),
        hovering: controller.is_drag_over(),
    })
    .map(Message::DropZone);

    let picker =
        resolution_picker::view(ctx.i18n, controller.options()).map(Message::ResolutionPicker);

    let mut content = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .push(title)
        .push(drop_zone)
        .push(picker)
        .push(view_action(&ctx));

    if let Some(results) = gallery::view(gallery::ViewContext {
        i18n: ctx.i18n,
        gallery: controller.gallery(),
        previews: ctx.previews,
    }) {
        content = content.push(results.map(Message::Gallery));
    }

    let page = Container::new(content.max_width(sizing::CONTENT_MAX_WIDTH))
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center);

    let scrollable_page = scrollable(page)
        .id(Id::new(gallery::SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = notifications::overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(scrollable_page)
        .push(toasts)
        .into()
}

/// The generate button, followed by the progress indicator while a request
/// is in flight.
fn view_action<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let action = ctx.controller.action();

    let label = Text::new(ctx.i18n.tr(action.label_key())).size(typography::BODY_LG);
    let mut generate = button(label)
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary);

    // A button without a press handler renders as disabled
    if action.is_enabled() {
        generate = generate.on_press(Message::GenerateRequested);
    }

    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(generate);

    if ctx.controller.is_progress_visible() {
        row = row
            .push(
                AnimatedSpinner::new(palette::PRIMARY_500, ctx.spinner_rotation).into_element(),
            )
            .push(
                Text::new(ctx.i18n.tr("progress-label"))
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            );
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}
