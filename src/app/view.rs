// SPDX-License-Identifier: MPL-2.0
//! View rendering: mounts widgets from the presentation descriptor.
//!
//! All display decisions are made in [`Presentation::of`]; this module only
//! translates the descriptor into widgets and maps component messages up to
//! the application.

use super::{App, Message};
use crate::preview::presentation::Presentation;
use crate::ui::{drop_zone, preview_pane, styles};
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let presentation = Presentation::of(&app.controller, &app.i18n);

    let mut column = Column::new().spacing(12).padding(16);

    if let Some(banner) = presentation.banner.clone() {
        column = column.push(
            Container::new(Text::new(banner))
                .padding(10)
                .width(Length::Fill)
                .style(styles::error_banner),
        );
    }

    if presentation.loading {
        column = column.push(
            Text::new(app.i18n.tr("loading-indicator"))
                .size(16)
                .color(styles::ACCENT),
        );
    }

    let content: Element<'_, Message> = match (presentation.has_preview, app.rendered.as_ref()) {
        (true, Some(rendered)) => preview_pane::view(&presentation, rendered, &app.i18n)
            .map(|message| match message {
                preview_pane::Message::PreviousPage => Message::NavigatePrevious,
                preview_pane::Message::NextPage => Message::NavigateNext,
                preview_pane::Message::SavePage => Message::SavePageRequested,
            }),
        _ => drop_zone::view(&app.i18n).map(|message| match message {
            drop_zone::Message::OpenFileRequested => Message::OpenFileDialog,
        }),
    };
    column = column.push(content);

    Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
