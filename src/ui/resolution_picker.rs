// SPDX-License-Identifier: MPL-2.0
//! Checkbox list of target resolutions.

use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::workflow::{ResolutionOption, ResolutionOptions};
use iced::widget::{checkbox, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Toggled(usize, bool),
}

pub fn view<'a>(i18n: &'a I18n, options: &'a ResolutionOptions) -> Element<'a, Message> {
    let mut list = Column::new().spacing(spacing::XS);
    for (index, option) in options.iter().enumerate() {
        list = list.push(option_row(i18n, index, option));
    }

    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("resolutions-title")).size(typography::TITLE_SM))
        .push(list);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn option_row<'a>(i18n: &I18n, index: usize, option: &'a ResolutionOption) -> Element<'a, Message> {
    let toggle = checkbox(option.is_checked())
        .label(option.id())
        .on_toggle(move |checked| Message::Toggled(index, checked));

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(toggle);

    // Identifiers like `1080p` carry no dimensions and get no caption
    if let Some(resolution) = option.dimensions() {
        row = row.push(
            Text::new(i18n.tr(resolution.orientation().i18n_key()))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    row.into()
}
