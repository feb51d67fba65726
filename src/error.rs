use std::fmt;

use thiserror::Error;

pub type ThemeResult<T> = Result<T, ThemeError>;

/// The terminal cause of a failed theme load.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThemeErrorKind {
    #[error("missing file")]
    MissingFile,

    #[error("XML parsing error: {0}")]
    Markup(String),

    #[error("missing <theme> tag")]
    MissingRoot,

    #[error("<version> tag missing — it's either out of date or you need to add <version>{minimum}</version> inside your <theme> tag")]
    MissingVersion { minimum: u32 },

    #[error("theme is version {actual}, minimum supported version is {minimum}")]
    UnsupportedVersion { actual: f32, minimum: u32 },

    #[error("view missing \"name\" attribute")]
    MissingViewName,

    #[error("element of type \"{tag}\" missing \"name\" attribute")]
    MissingElementName { tag: String },

    #[error("unknown element of type \"{tag}\"")]
    UnknownElementType { tag: String },

    #[error("unknown property \"{property}\" for element of type {element_type}")]
    UnknownProperty {
        property: String,
        element_type: String,
    },

    #[error("invalid normalized pair \"{value}\"")]
    InvalidPair { value: String },

    #[error("empty color")]
    EmptyColor,

    #[error("invalid color \"{value}\" (length {length}, must be 6 or 8 hex digits)")]
    InvalidColor { value: String, length: usize },
}

/// A theme-load failure plus the breadcrumb trail of where it happened.
///
/// Frames are pushed innermost-first as the error bubbles up through the
/// element, view and document layers; [`fmt::Display`] renders them
/// outermost-first so the message reads from the file down to the token.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeError {
    kind: ThemeErrorKind,
    frames: Vec<String>,
}

impl ThemeError {
    pub fn new(kind: ThemeErrorKind) -> Self {
        Self {
            kind,
            frames: Vec::new(),
        }
    }

    /// Appends a context frame for the layer currently propagating the error.
    pub fn frame(mut self, frame: impl Into<String>) -> Self {
        self.frames.push(frame.into());
        self
    }

    pub fn kind(&self) -> &ThemeErrorKind {
        &self.kind
    }
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in self.frames.iter().rev() {
            write!(f, "{}: ", frame)?;
        }
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for ThemeError {}

impl From<ThemeErrorKind> for ThemeError {
    fn from(kind: ThemeErrorKind) -> Self {
        ThemeError::new(kind)
    }
}

impl From<roxmltree::Error> for ThemeError {
    fn from(err: roxmltree::Error) -> Self {
        ThemeError::new(ThemeErrorKind::Markup(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_renders_frames_outermost_first() {
        let err = ThemeError::new(ThemeErrorKind::EmptyColor)
            .frame("element \"logo\" (image)")
            .frame("view \"system\"")
            .frame("error loading theme from \"/tmp/theme.xml\"");

        assert_eq!(
            err.to_string(),
            "error loading theme from \"/tmp/theme.xml\": view \"system\": element \"logo\" (image): empty color"
        );
    }

    #[test]
    fn kind_survives_framing() {
        let err = ThemeError::new(ThemeErrorKind::MissingRoot).frame("outer");
        assert!(matches!(err.kind(), ThemeErrorKind::MissingRoot));
    }
}
