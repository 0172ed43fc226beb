//! Rendering configuration.
//!
//! Every serialization call takes a [`TextOptions`] value; there is no
//! shared styling state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How to render elements as text.
///
/// The two layout flags are independent. For an element with children,
/// `newline` controls the line break after its open tag and `indent`
/// controls the tabs before its close tag; so with `newline` off and
/// `indent` on, the close tag is indented but stays on the same line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TextOptions {
    /// Wrap markup in ANSI color codes. For terminal inspection only:
    /// anything persisted is rendered without color.
    pub color: bool,
    /// Indent each element with one tab per depth level.
    pub indent: bool,
    /// End each element with a newline.
    pub newline: bool,
}

impl TextOptions {
    /// Indented, one element per line, no color.
    pub fn plain() -> Self {
        TextOptions {
            color: false,
            indent: true,
            newline: true,
        }
    }

    /// Like [`TextOptions::plain`], with ANSI colors.
    pub fn colored() -> Self {
        TextOptions {
            color: true,
            ..Self::plain()
        }
    }

    /// Everything on one line, no color.
    pub fn compact() -> Self {
        TextOptions {
            color: false,
            indent: false,
            newline: false,
        }
    }
}

impl Default for TextOptions {
    fn default() -> Self {
        Self::plain()
    }
}

/// ANSI codes used when [`TextOptions::color`] is set.
pub(crate) mod ansi {
    /// Markup punctuation.
    pub(crate) const PUNCTUATION: &str = "\u{1b}[34m";
    /// Element and attribute names.
    pub(crate) const NAME: &str = "\u{1b}[91m";
    pub(crate) const RESET: &str = "\u{1b}[0m";
}
