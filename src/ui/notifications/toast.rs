// SPDX-License-Identifier: MPL-2.0
//! Toast rendering.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Resolves the toast text in the active locale.
fn message_text(notification: &Notification, i18n: &I18n) -> String {
    let args: Vec<(&str, &str)> = notification
        .message_args()
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();

    if args.is_empty() {
        i18n.tr(notification.message_key())
    } else {
        i18n.tr_with_args(notification.message_key(), &args)
    }
}

fn card<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
    let accent = notification.severity().accent();

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(notification.severity().glyph())
                .size(typography::TITLE_SM)
                .color(accent),
        )
        .push(
            Text::new(message_text(notification, i18n))
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(
            button(Text::new("×").size(typography::BODY_LG))
                .on_press(Message::Dismiss(notification.id()))
                .padding(spacing::XXS)
                .style(styles::button::dismiss),
        );

    Container::new(row)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(styles::container::toast(accent))
        .into()
}

/// Stacks the visible toasts in the bottom-right corner of the window.
///
/// Meant as the top layer of a `Stack`; it is empty space when nothing is
/// shown.
pub fn overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    if !manager.has_notifications() {
        return Space::new().into();
    }

    let column = manager
        .visible()
        .fold(Column::new().spacing(spacing::XS), |column, notification| {
            column.push(card(notification, i18n))
        })
        .align_x(alignment::Horizontal::Right);

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}
