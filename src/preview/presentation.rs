// SPDX-License-Identifier: MPL-2.0
//! Pure description of what the preview screen should display.
//!
//! [`Presentation`] separates "what to display" from the imperative act of
//! mounting widgets: the controller state and the active locale go in, plain
//! text and enabled-flags come out, and the view layer renders them without
//! further decisions. This keeps the whole user-visible behavior assertable
//! in tests without a live UI.

use super::Controller;
use crate::i18n::fluent::I18n;
use fluent_bundle::FluentArgs;

/// What the preview screen should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    /// Loading indicator visibility.
    pub loading: bool,
    /// Localized error banner text, if any.
    pub banner: Option<String>,
    /// Whether a rendered page is on screen.
    pub has_preview: bool,
    /// Localized page indicator, only when the controls are visible.
    pub page_label: Option<String>,
    /// Navigation controls exist only for multi-page documents.
    pub controls_visible: bool,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    /// The save-as-PNG action needs a rendered page.
    pub save_enabled: bool,
}

impl Presentation {
    /// Projects the controller state into display terms.
    pub fn of(controller: &Controller, i18n: &I18n) -> Self {
        let loading = controller.is_loading();
        let banner = controller.notice().map(|notice| match &notice.reason {
            Some(reason) => {
                let mut args = FluentArgs::new();
                args.set("reason", reason.clone());
                i18n.tr_with(notice.key, &args)
            }
            None => i18n.tr(notice.key),
        });

        match controller.presented() {
            Some(presented) => {
                let controls_visible = presented.page_count > 1;
                let page_label = controls_visible.then(|| {
                    let mut args = FluentArgs::new();
                    args.set("page", presented.page);
                    args.set("total", presented.page_count);
                    i18n.tr_with("page-indicator", &args)
                });

                Self {
                    loading,
                    banner,
                    has_preview: true,
                    page_label,
                    controls_visible,
                    prev_enabled: presented.page > 1,
                    next_enabled: presented.page < presented.page_count,
                    save_enabled: true,
                }
            }
            None => Self {
                loading,
                banner,
                has_preview: false,
                page_label: None,
                controls_visible: false,
                prev_enabled: false,
                next_enabled: false,
                save_enabled: false,
            },
        }
    }
}
