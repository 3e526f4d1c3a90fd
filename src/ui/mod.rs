// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down, messages
//! up" pattern.
//!
//! - [`drop_zone`] - Empty state with file picker button and drop hint
//! - [`preview_pane`] - Rendered page, navigation controls, save action
//! - [`styles`] - Shared colors and widget styling
//! - [`theming`] - Light/Dark/System theme mode management

pub mod drop_zone;
pub mod preview_pane;
pub mod styles;
pub mod theming;
