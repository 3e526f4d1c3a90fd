// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Failure taxonomy for the preview pipeline.
///
/// Every variant maps to a Fluent message key via [`Error::i18n_key`]; the
/// variants that carry a reason string forward the underlying library's
/// message so the banner can interpolate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Submitted file is not declared as a PDF.
    Format,

    /// Reading the file bytes failed.
    Read(String),

    /// The rendering library rejected the PDF bytes.
    Decode(String),

    /// The requested page index is invalid or the library failed to fetch it.
    PageLoad(String),

    /// Rasterization of a fetched page failed.
    Render(String),

    /// Writing an exported page image to disk failed.
    Save(String),

    /// Configuration file could not be loaded or saved.
    Config(String),
}

impl Error {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Format => "error-format",
            Error::Read(_) => "error-read",
            Error::Decode(_) => "error-decode",
            Error::PageLoad(_) => "error-page-load",
            Error::Render(_) => "error-render",
            Error::Save(_) => "error-save",
            Error::Config(_) => "error-config",
        }
    }

    /// The underlying library or system message, if the variant carries one.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Error::Format => None,
            Error::Read(reason)
            | Error::Decode(reason)
            | Error::PageLoad(reason)
            | Error::Render(reason)
            | Error::Save(reason)
            | Error::Config(reason) => Some(reason),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Format => write!(f, "File is not a PDF"),
            Error::Read(reason) => write!(f, "Read error: {}", reason),
            Error::Decode(reason) => write!(f, "Decode error: {}", reason),
            Error::PageLoad(reason) => write!(f, "Page load error: {}", reason),
            Error::Render(reason) => write!(f, "Render error: {}", reason),
            Error::Save(reason) => write!(f, "Save error: {}", reason),
            Error::Config(reason) => write!(f, "Config error: {}", reason),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Read(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_decode_error() {
        let err = Error::Decode("Invalid PDF structure".to_string());
        assert_eq!(format!("{}", err), "Decode error: Invalid PDF structure");
    }

    #[test]
    fn from_io_error_produces_read_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Read(message) => assert!(message.contains("boom")),
            _ => panic!("expected Read variant"),
        }
    }

    #[test]
    fn format_error_carries_no_reason() {
        assert_eq!(Error::Format.reason(), None);
    }

    #[test]
    fn render_error_exposes_reason() {
        let err = Error::Render("bitmap allocation failed".to_string());
        assert_eq!(err.reason(), Some("bitmap allocation failed"));
    }

    #[test]
    fn i18n_keys_cover_the_taxonomy() {
        assert_eq!(Error::Format.i18n_key(), "error-format");
        assert_eq!(Error::Read(String::new()).i18n_key(), "error-read");
        assert_eq!(Error::Decode(String::new()).i18n_key(), "error-decode");
        assert_eq!(Error::PageLoad(String::new()).i18n_key(), "error-page-load");
        assert_eq!(Error::Render(String::new()).i18n_key(), "error-render");
        assert_eq!(Error::Save(String::new()).i18n_key(), "error-save");
    }
}
