//! Wire types for themes and answers as the backend serves them.

use serde::{Deserialize, Serialize};

/// How a theme is presented on the result screen.
///
/// The backend stores the presentation as a raw integer code; every code
/// outside the known set falls back to [`ThemeKind::Captioned`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    /// Code 1: a square image with no overlay text.
    Image,
    /// Code 2: the theme text itself, no image.
    Text,
    /// Any other code: an image with the theme text overlaid as a caption.
    Captioned,
}

impl ThemeKind {
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Image,
            2 => Self::Text,
            _ => Self::Captioned,
        }
    }
}

/// A theme (prompt) the user answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind_code: i32,
    /// Storage key of the theme image, when one exists.
    #[serde(default)]
    pub image_path: Option<String>,
    /// Theme text; caption or sole content depending on the kind.
    pub contents: String,
    /// Submission deadline as the backend formatted it.
    pub deadline: String,
}

impl Theme {
    #[must_use]
    pub const fn kind(&self) -> ThemeKind {
        ThemeKind::from_code(self.kind_code)
    }
}

/// The user's submitted answer plus its computed rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub id: i64,
    pub contents: String,
    /// Ranking placement. `None` means the rank has not been computed yet.
    #[serde(default)]
    pub place: Option<u32>,
}
