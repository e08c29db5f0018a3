//! Profile picture service - load the picture shown on the profile screen
//!
//! The whole image is decoded and scaled into the display box, so a file
//! with a valid header but a broken body is caught here. Anything that goes
//! wrong degrades to a placeholder.

use std::path::PathBuf;

use image::imageops::FilterType;
use image::{ImageError, ImageReader};
use thiserror::Error;
use tracing::debug;

use crate::domain::picture::DISPLAY_SIZE;
use crate::domain::Picture;

/// Reasons a picture falls back to the placeholder
#[derive(Error, Debug)]
pub enum PictureError {
    #[error("picture not found: {0}")]
    NotFound(PathBuf),

    #[error("cannot read picture: {0}")]
    Unreadable(#[from] std::io::Error),

    #[error("cannot decode picture: {0}")]
    Decode(#[from] ImageError),
}

/// A successfully decoded picture's source and scaled dimensions
struct Decoded {
    width: u32,
    height: u32,
    display_width: u32,
    display_height: u32,
}

/// Profile picture service
pub struct ProfilePictureService {
    path: PathBuf,
}

impl ProfilePictureService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the picture, substituting a placeholder on any failure
    ///
    /// Read on every call so a picture added while the app runs shows up on
    /// the next login.
    pub fn load(&self) -> Picture {
        match self.try_load() {
            Ok(decoded) => Picture::Image {
                path: self.path.clone(),
                width: decoded.width,
                height: decoded.height,
                display_width: decoded.display_width,
                display_height: decoded.display_height,
            },
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "using picture placeholder");
                Picture::placeholder(e.to_string())
            }
        }
    }

    fn try_load(&self) -> Result<Decoded, PictureError> {
        if !self.path.exists() {
            return Err(PictureError::NotFound(self.path.clone()));
        }

        let image = ImageReader::open(&self.path)?
            .with_guessed_format()?
            .decode()?;
        let scaled = image.resize_exact(DISPLAY_SIZE, DISPLAY_SIZE, FilterType::Lanczos3);

        Ok(Decoded {
            width: image.width(),
            height: image.height(),
            display_width: scaled.width(),
            display_height: scaled.height(),
        })
    }
}
