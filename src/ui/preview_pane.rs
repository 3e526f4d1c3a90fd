// SPDX-License-Identifier: MPL-2.0
//! Presented page image, navigation controls, and the save-image action.
//!
//! The controls row (previous button, page indicator, next button) appears
//! only for multi-page documents; button enablement comes straight from the
//! presentation descriptor.

use crate::i18n::fluent::I18n;
use crate::pdf::RenderedPage;
use crate::preview::presentation::Presentation;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, image, scrollable, Column, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    PreviousPage,
    NextPage,
    SavePage,
}

/// Renders the preview pane for a rendered page.
pub fn view<'a>(
    presentation: &Presentation,
    rendered: &RenderedPage,
    i18n: &I18n,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(12)
        .align_x(alignment::Horizontal::Center);

    if presentation.controls_visible {
        let prev_button = button(Text::new(i18n.tr("previous-page-button")))
            .padding([6, 12])
            .on_press_maybe(presentation.prev_enabled.then_some(Message::PreviousPage));

        let indicator = Text::new(presentation.page_label.clone().unwrap_or_default());

        let next_button = button(Text::new(i18n.tr("next-page-button")))
            .padding([6, 12])
            .on_press_maybe(presentation.next_enabled.then_some(Message::NextPage));

        let controls = Row::new()
            .spacing(10)
            .align_y(Vertical::Center)
            .push(prev_button)
            .push(indicator)
            .push(next_button);

        column = column.push(controls);
    }

    let page_image = image(rendered.image.handle.clone());
    column = column.push(scrollable(page_image).width(Length::Fill).height(Length::Fill));

    let save_button = button(Text::new(i18n.tr("download-button")))
        .padding([6, 12])
        .style(styles::primary_button)
        .on_press_maybe(presentation.save_enabled.then_some(Message::SavePage));
    column = column.push(save_button);

    column.width(Length::Fill).height(Length::Fill).into()
}
