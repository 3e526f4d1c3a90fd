// SPDX-License-Identifier: MPL-2.0
//! Preview controller: the file-intake / page-navigation state machine.
//!
//! The controller is pure state: it consumes events (file submitted, decode
//! finished, render finished, navigate) and returns [`Effect`]s for the
//! application shell to execute asynchronously. Every asynchronous outcome
//! comes back tagged with the generation it was started under; outcomes from
//! a superseded generation are ignored, which is the explicit supersede
//! policy for overlapping submissions. Navigation while an operation is
//! pending is a no-op.

pub mod presentation;

use crate::error::Error;
use std::path::{Path, PathBuf};

/// Error banner content: a Fluent key plus the library's reason text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub key: &'static str,
    pub reason: Option<String>,
}

impl Notice {
    fn from_error(error: &Error) -> Self {
        Self {
            key: error.i18n_key(),
            reason: error.reason().map(str::to_string),
        }
    }
}

/// Decoded-document descriptor. The shell owns the actual handle; the
/// controller only needs the page count and which submission produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DocumentInfo {
    page_count: u32,
    generation: u64,
}

/// Operation currently in flight. The effect that started it carries the
/// page and generation; the controller only needs to know the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Decode,
    Render,
}

/// Last successfully rendered page: what the user currently sees and
/// navigates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentedPage {
    pub page: u32,
    pub page_count: u32,
    /// Generation of the document this page belongs to.
    generation: u64,
}

/// Side effects the shell must perform after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    StartDecode { path: PathBuf, generation: u64 },
    StartRender { page: u32, generation: u64 },
}

/// The preview session state machine.
///
/// Abstract states map onto the fields as follows: `Loading` ⇔ a pending
/// operation exists; `Ready(p)` ⇔ page `p` is presented with nothing
/// pending; `Error` ⇔ a notice is set; `Idle` otherwise.
#[derive(Debug, Default)]
pub struct Controller {
    generation: u64,
    document: Option<DocumentInfo>,
    pending: Option<Pending>,
    presented: Option<PresentedPage>,
    notice: Option<Notice>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation of the most recent accepted submission. Async results
    /// tagged with an older generation are stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a decode or render is in flight.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn presented(&self) -> Option<&PresentedPage> {
        self.presented.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Page count of the most recently decoded document.
    pub fn page_count(&self) -> Option<u32> {
        self.document.map(|d| d.page_count)
    }

    /// Index of the page the user currently sees.
    pub fn current_page(&self) -> Option<u32> {
        self.presented.map(|p| p.page)
    }

    /// `submitFile`: accepts a path whose declared type (extension) is PDF.
    ///
    /// Rejection leaves every other piece of state untouched, so a prior
    /// preview survives a bad drop. Acceptance supersedes any in-flight work.
    pub fn submit_file(&mut self, path: PathBuf) -> Effect {
        if !is_pdf_path(&path) {
            self.notice = Some(Notice::from_error(&Error::Format));
            return Effect::None;
        }

        self.generation += 1;
        self.pending = Some(Pending::Decode);
        self.notice = None;
        Effect::StartDecode {
            path,
            generation: self.generation,
        }
    }

    /// Decode outcome; `Ok` carries the new document's page count.
    ///
    /// On success the controller immediately requests a render of page 1. On
    /// failure the previous session (if any) stays intact and presented.
    pub fn decode_finished(
        &mut self,
        generation: u64,
        outcome: Result<u32, Error>,
    ) -> Effect {
        if generation != self.generation {
            return Effect::None;
        }
        self.pending = None;

        match outcome {
            Ok(page_count) => {
                self.document = Some(DocumentInfo {
                    page_count,
                    generation,
                });
                self.pending = Some(Pending::Render);
                Effect::StartRender {
                    page: 1,
                    generation,
                }
            }
            Err(error) => {
                self.notice = Some(Notice::from_error(&error));
                Effect::None
            }
        }
    }

    /// Render outcome for `page`.
    ///
    /// Success replaces the presented page and clears any error banner.
    /// Failure keeps the previously presented page; the current index rolls
    /// back to it implicitly since navigation starts from the presented page.
    pub fn render_finished(
        &mut self,
        generation: u64,
        page: u32,
        outcome: Result<(), Error>,
    ) -> Effect {
        if generation != self.generation {
            return Effect::None;
        }
        self.pending = None;

        match outcome {
            Ok(()) => {
                if let Some(document) = self.document {
                    self.presented = Some(PresentedPage {
                        page,
                        page_count: document.page_count,
                        generation: document.generation,
                    });
                }
                self.notice = None;
            }
            Err(error) => {
                self.notice = Some(Notice::from_error(&error));
            }
        }
        Effect::None
    }

    /// Step to the next page; no-op at the last page or while loading.
    pub fn navigate_next(&mut self) -> Effect {
        self.navigate(1)
    }

    /// Step to the previous page; no-op at the first page or while loading.
    pub fn navigate_previous(&mut self) -> Effect {
        self.navigate(-1)
    }

    fn navigate(&mut self, step: i64) -> Effect {
        if self.pending.is_some() {
            return Effect::None;
        }
        let (Some(document), Some(presented)) = (self.document, self.presented) else {
            return Effect::None;
        };
        // The presented page must belong to the live document; after a decode
        // whose first render failed they diverge and navigation stays off.
        if presented.generation != document.generation {
            return Effect::None;
        }

        let target = i64::from(presented.page) + step;
        if target < 1 || target > i64::from(document.page_count) {
            return Effect::None;
        }

        let page = target as u32;
        self.pending = Some(Pending::Render);
        Effect::StartRender {
            page,
            generation: self.generation,
        }
    }

    /// Surfaces a shell-side failure (e.g. saving the PNG) in the banner.
    pub fn report_error(&mut self, error: &Error) {
        self.notice = Some(Notice::from_error(error));
    }
}

/// Declared-type check: the desktop analog of the PDF MIME constraint.
/// Contents are never sniffed; malformed bytes surface later as decode
/// failures.
fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit(controller: &mut Controller, name: &str) -> Effect {
        controller.submit_file(PathBuf::from(name))
    }

    /// Drives the controller to `Ready(1)` for a document with `pages` pages.
    fn load_document(controller: &mut Controller, pages: u32) {
        let effect = submit(controller, "laporan.pdf");
        let Effect::StartDecode { generation, .. } = effect else {
            panic!("expected decode effect, got {effect:?}");
        };
        let effect = controller.decode_finished(generation, Ok(pages));
        assert_eq!(
            effect,
            Effect::StartRender {
                page: 1,
                generation
            }
        );
        let effect = controller.render_finished(generation, 1, Ok(()));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn new_controller_is_idle() {
        let controller = Controller::new();
        assert!(!controller.is_loading());
        assert!(controller.presented().is_none());
        assert!(controller.notice().is_none());
    }

    #[test]
    fn pdf_extension_check_is_case_insensitive() {
        assert!(is_pdf_path(Path::new("laporan.pdf")));
        assert!(is_pdf_path(Path::new("LAPORAN.PDF")));
        assert!(!is_pdf_path(Path::new("catatan.txt")));
        assert!(!is_pdf_path(Path::new("tanpa_ekstensi")));
    }

    #[test]
    fn submitting_non_pdf_sets_format_notice_and_changes_nothing_else() {
        let mut controller = Controller::new();
        load_document(&mut controller, 3);

        let effect = submit(&mut controller, "catatan.txt");
        assert_eq!(effect, Effect::None);
        assert_eq!(controller.notice().map(|n| n.key), Some("error-format"));
        assert_eq!(controller.current_page(), Some(1));
        assert_eq!(controller.page_count(), Some(3));
        assert!(!controller.is_loading());
    }

    #[test]
    fn successful_load_presents_page_one() {
        let mut controller = Controller::new();
        load_document(&mut controller, 3);

        let presented = controller.presented().expect("page should be presented");
        assert_eq!(presented.page, 1);
        assert_eq!(presented.page_count, 3);
        assert!(!controller.is_loading());
        assert!(controller.notice().is_none());
    }

    #[test]
    fn decode_failure_keeps_previous_session() {
        let mut controller = Controller::new();
        load_document(&mut controller, 3);

        let Effect::StartDecode { generation, .. } = submit(&mut controller, "rusak.pdf") else {
            panic!("expected decode effect");
        };
        let effect = controller.decode_finished(
            generation,
            Err(Error::Decode("Invalid PDF structure".to_string())),
        );
        assert_eq!(effect, Effect::None);
        assert!(!controller.is_loading());
        assert_eq!(controller.notice().map(|n| n.key), Some("error-decode"));
        // The old document is still presented and navigable.
        assert_eq!(controller.current_page(), Some(1));
        assert!(matches!(
            controller.navigate_next(),
            Effect::StartRender { page: 2, .. }
        ));
    }

    #[test]
    fn navigation_round_trip_returns_to_same_page() {
        let mut controller = Controller::new();
        load_document(&mut controller, 5);
        let generation = controller.generation();

        // 1 → 2
        assert_eq!(
            controller.navigate_next(),
            Effect::StartRender {
                page: 2,
                generation
            }
        );
        controller.render_finished(generation, 2, Ok(()));

        // 2 → 3 → back to 2
        assert!(matches!(
            controller.navigate_next(),
            Effect::StartRender { page: 3, .. }
        ));
        controller.render_finished(generation, 3, Ok(()));
        assert!(matches!(
            controller.navigate_previous(),
            Effect::StartRender { page: 2, .. }
        ));
        controller.render_finished(generation, 2, Ok(()));

        assert_eq!(controller.current_page(), Some(2));
    }

    #[test]
    fn navigation_stops_at_document_bounds() {
        let mut controller = Controller::new();
        load_document(&mut controller, 2);
        let generation = controller.generation();

        assert_eq!(controller.navigate_previous(), Effect::None);

        controller.navigate_next();
        controller.render_finished(generation, 2, Ok(()));
        assert_eq!(controller.navigate_next(), Effect::None);
    }

    #[test]
    fn navigation_is_ignored_while_loading() {
        let mut controller = Controller::new();
        load_document(&mut controller, 3);

        // Render of page 2 in flight
        assert!(matches!(
            controller.navigate_next(),
            Effect::StartRender { page: 2, .. }
        ));
        assert_eq!(controller.navigate_next(), Effect::None);
        assert_eq!(controller.navigate_previous(), Effect::None);
    }

    #[test]
    fn new_submission_supersedes_in_flight_decode() {
        let mut controller = Controller::new();

        let Effect::StartDecode {
            generation: stale, ..
        } = submit(&mut controller, "pertama.pdf")
        else {
            panic!("expected decode effect");
        };
        let Effect::StartDecode { generation, .. } = submit(&mut controller, "kedua.pdf") else {
            panic!("expected decode effect");
        };
        assert!(generation > stale);

        // The stale outcome arrives late and must be discarded entirely.
        assert_eq!(controller.decode_finished(stale, Ok(7)), Effect::None);
        assert!(controller.is_loading());
        assert_eq!(controller.page_count(), None);

        // The live outcome proceeds normally.
        assert!(matches!(
            controller.decode_finished(generation, Ok(2)),
            Effect::StartRender { page: 1, .. }
        ));
    }

    #[test]
    fn stale_render_result_is_discarded() {
        let mut controller = Controller::new();
        load_document(&mut controller, 3);
        let stale = controller.generation();

        controller.navigate_next();
        let Effect::StartDecode { generation, .. } = submit(&mut controller, "baru.pdf") else {
            panic!("expected decode effect");
        };

        // Old render of page 2 completes after the new submission.
        assert_eq!(controller.render_finished(stale, 2, Ok(())), Effect::None);
        assert_eq!(controller.current_page(), Some(1));
        assert!(controller.is_loading());

        controller.decode_finished(generation, Ok(4));
        controller.render_finished(generation, 1, Ok(()));
        assert_eq!(controller.presented().map(|p| p.page_count), Some(4));
    }

    #[test]
    fn render_failure_rolls_back_to_presented_page() {
        let mut controller = Controller::new();
        load_document(&mut controller, 3);
        let generation = controller.generation();

        controller.navigate_next();
        controller.render_finished(
            generation,
            2,
            Err(Error::Render("bitmap allocation failed".to_string())),
        );

        assert!(!controller.is_loading());
        assert_eq!(controller.notice().map(|n| n.key), Some("error-render"));
        assert_eq!(controller.current_page(), Some(1));
        // Navigation resumes from the page that is actually on screen.
        assert!(matches!(
            controller.navigate_next(),
            Effect::StartRender { page: 2, .. }
        ));
    }

    #[test]
    fn render_success_clears_the_error_banner() {
        let mut controller = Controller::new();
        load_document(&mut controller, 3);
        let generation = controller.generation();

        controller.navigate_next();
        controller.render_finished(generation, 2, Err(Error::Render("x".to_string())));
        assert!(controller.notice().is_some());

        controller.navigate_next();
        controller.render_finished(generation, 2, Ok(()));
        assert!(controller.notice().is_none());
        assert_eq!(controller.current_page(), Some(2));
    }

    #[test]
    fn navigation_is_blocked_when_presented_page_belongs_to_old_document() {
        let mut controller = Controller::new();
        load_document(&mut controller, 3);

        // New document decodes but its first render fails: the screen still
        // shows the old document's page.
        let Effect::StartDecode { generation, .. } = submit(&mut controller, "baru.pdf") else {
            panic!("expected decode effect");
        };
        controller.decode_finished(generation, Ok(9));
        controller.render_finished(generation, 1, Err(Error::Render("x".to_string())));

        assert_eq!(controller.navigate_next(), Effect::None);
        assert_eq!(controller.navigate_previous(), Effect::None);
    }

    #[test]
    fn report_error_surfaces_shell_failures() {
        let mut controller = Controller::new();
        controller.report_error(&Error::Save("disk full".to_string()));
        let notice = controller.notice().expect("notice should be set");
        assert_eq!(notice.key, "error-save");
        assert_eq!(notice.reason.as_deref(), Some("disk full"));
    }
}
