// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::pdf::{DocumentSession, RenderedPage};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Open the file picker (empty-state button).
    OpenFileDialog,
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// Outcome of reading and decoding a submitted file.
    DocumentDecoded {
        generation: u64,
        result: Result<Arc<DocumentSession>, Error>,
    },
    /// Outcome of rasterizing one page.
    PageRendered {
        generation: u64,
        page: u32,
        result: Result<RenderedPage, Error>,
    },
    NavigateNext,
    NavigatePrevious,
    /// Save the currently presented page as PNG.
    SavePageRequested,
    /// Result from the save dialog.
    SavePageDialogResult(Option<PathBuf>),
    /// Outcome of writing the PNG to disk.
    PageSaved(Result<(), Error>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `id`, `en-US`).
    pub lang: Option<String>,
    /// Optional PDF path to preload on startup.
    pub file_path: Option<String>,
}
