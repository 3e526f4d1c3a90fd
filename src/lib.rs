// SPDX-License-Identifier: MPL-2.0
//! `halaman` is a PDF page preview tool built with the Iced GUI framework.
//!
//! A dropped or selected PDF is decoded once, then rendered page by page to
//! raster images at a fixed scale, with previous/next navigation and a
//! save-as-PNG action per page. It demonstrates internationalization with
//! Fluent, user preference management, and a pure, testable preview
//! controller.

#![doc(html_root_url = "https://docs.rs/halaman/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod pdf;
pub mod preview;
pub mod ui;
