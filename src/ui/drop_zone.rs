// SPDX-License-Identifier: MPL-2.0
//! Empty state view displayed when no PDF is loaded.
//!
//! Provides a title and subtitle explaining the tool, a button to pick a file
//! via the system dialog, and a standing hint that files can be dropped on
//! the window.

use crate::i18n::fluent::I18n;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Color, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    OpenFileRequested,
}

/// Renders the empty state view.
pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("empty-state-title"))
        .size(28)
        .color(styles::MUTED);

    let subtitle = Text::new(i18n.tr("empty-state-subtitle"))
        .size(16)
        .color(styles::MUTED);

    let open_button = button(Text::new(i18n.tr("empty-state-button")))
        .padding([8, 16])
        .style(styles::primary_button)
        .on_press(Message::OpenFileRequested);

    let drop_hint = Text::new(i18n.tr("empty-state-drop-hint"))
        .size(13)
        .color(Color {
            a: 0.6,
            ..styles::MUTED
        });

    let content = Column::new()
        .spacing(16)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(open_button)
        .push(drop_hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
