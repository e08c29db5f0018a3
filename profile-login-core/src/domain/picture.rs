//! Profile picture domain model

use std::path::PathBuf;

/// Edge length, in pixels, of the square box the picture is scaled into
pub const DISPLAY_SIZE: u32 = 150;

/// Text shown in place of the picture when it cannot be loaded
pub const PLACEHOLDER_TEXT: &str = "[Profile Picture]";

/// What the profile screen shows in the picture slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Picture {
    /// A decoded image with its source and on-screen dimensions
    Image {
        path: PathBuf,
        width: u32,
        height: u32,
        display_width: u32,
        display_height: u32,
    },
    /// Fallback visual. `reason` is for logs only, never shown to the user.
    Placeholder { reason: String },
}

impl Picture {
    pub fn placeholder(reason: impl Into<String>) -> Self {
        Self::Placeholder {
            reason: reason.into(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder { .. })
    }

    /// Dimensions after scaling into the `DISPLAY_SIZE` box
    ///
    /// Placeholders have no dimensions.
    pub fn display_size(&self) -> Option<(u32, u32)> {
        match self {
            Self::Image {
                display_width,
                display_height,
                ..
            } => Some((*display_width, *display_height)),
            Self::Placeholder { .. } => None,
        }
    }
}
