// SPDX-License-Identifier: MPL-2.0
//! Message handling: feeds events to the preview controller and executes the
//! resulting effects as asynchronous tasks.
//!
//! Stale-generation results are discarded here as well as in the controller,
//! so a superseded decode can never swap the live session out from under a
//! newer submission.

use super::{App, Message};
use crate::error::Error;
use crate::pdf::{self, DocumentSession, RenderedPage};
use crate::preview::Effect;
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;

pub fn handle(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::FileDropped(path) => submit_path(app, path),
        Message::OpenFileDialog => open_file_dialog(),
        Message::OpenFileDialogResult(path) => match path {
            Some(path) => submit_path(app, path),
            // User cancelled the dialog
            None => Task::none(),
        },
        Message::DocumentDecoded { generation, result } => {
            document_decoded(app, generation, result)
        }
        Message::PageRendered {
            generation,
            page,
            result,
        } => page_rendered(app, generation, page, result),
        Message::NavigateNext => {
            let effect = app.controller.navigate_next();
            run_effect(app, effect)
        }
        Message::NavigatePrevious => {
            let effect = app.controller.navigate_previous();
            run_effect(app, effect)
        }
        Message::SavePageRequested => save_page_dialog(app),
        Message::SavePageDialogResult(path) => save_page(app, path),
        Message::PageSaved(result) => {
            if let Err(error) = result {
                tracing::warn!("saving page image failed: {error}");
                app.controller.report_error(&error);
            }
            Task::none()
        }
    }
}

/// Feeds a submitted path to the controller and executes the resulting
/// effect. Also used by `App::new` for the CLI file argument.
pub fn submit_path(app: &mut App, path: PathBuf) -> Task<Message> {
    let effect = app.controller.submit_file(path);
    run_effect(app, effect)
}

fn run_effect(app: &mut App, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::StartDecode { path, generation } => Task::perform(
            async move { decode_file(path) },
            move |result| Message::DocumentDecoded { generation, result },
        ),
        Effect::StartRender { page, generation } => {
            let Some(session) = app.session.clone() else {
                // A render effect without a live session means the decode
                // result was lost; surface it as a page fetch failure.
                let effect = app.controller.render_finished(
                    generation,
                    page,
                    Err(Error::PageLoad("no document loaded".to_string())),
                );
                return run_effect(app, effect);
            };
            Task::perform(
                async move { session.render_page(page, pdf::RENDER_SCALE) },
                move |result| Message::PageRendered {
                    generation,
                    page,
                    result,
                },
            )
        }
    }
}

/// Reads the file bytes and decodes them into a document session.
fn decode_file(path: PathBuf) -> Result<Arc<DocumentSession>, Error> {
    let bytes = std::fs::read(&path).map_err(|e| Error::Read(e.to_string()))?;
    DocumentSession::from_bytes(bytes).map(Arc::new)
}

fn document_decoded(
    app: &mut App,
    generation: u64,
    result: Result<Arc<DocumentSession>, Error>,
) -> Task<Message> {
    // A stale result belongs to a superseded submission; drop it before it
    // can touch the live session.
    if generation != app.controller.generation() {
        return Task::none();
    }

    let outcome = result.map(|session| {
        let page_count = session.page_count();
        app.session = Some(session);
        page_count
    });

    let effect = app.controller.decode_finished(generation, outcome);
    run_effect(app, effect)
}

fn page_rendered(
    app: &mut App,
    generation: u64,
    page: u32,
    result: Result<RenderedPage, Error>,
) -> Task<Message> {
    if generation != app.controller.generation() {
        return Task::none();
    }

    let outcome = match result {
        Ok(rendered) => {
            app.rendered = Some(rendered);
            Ok(())
        }
        Err(error) => Err(error),
    };

    let effect = app.controller.render_finished(generation, page, outcome);
    run_effect(app, effect)
}

fn open_file_dialog() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("PDF", &["pdf"])
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Opens the save dialog for the presented page, suggesting the
/// `halaman-{n}.png` name from the export contract.
fn save_page_dialog(app: &App) -> Task<Message> {
    let Some(rendered) = app.rendered.as_ref() else {
        return Task::none();
    };
    let file_name = rendered.suggested_file_name();

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter("PNG", &["png"])
                .set_file_name(file_name)
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::SavePageDialogResult,
    )
}

fn save_page(app: &mut App, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };
    let Some(rendered) = app.rendered.clone() else {
        return Task::none();
    };

    Task::perform(
        async move {
            let bytes = rendered.png_bytes()?;
            std::fs::write(&path, bytes).map_err(|e| Error::Save(e.to_string()))
        },
        Message::PageSaved,
    )
}
