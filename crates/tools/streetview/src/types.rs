//! Types for Street View requests and fetch results

use std::path::PathBuf;
use thiserror::Error;

/// Body length of the provider's "no imagery here" placeholder image
///
/// Responses of exactly this many bytes are treated as empty and not saved.
pub const NO_IMAGERY_SENTINEL_LEN: usize = 8605;

/// Result type for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors that abort an image fetch batch
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Camera parameters sent with every Street View request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreetViewParams {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Horizontal field of view in degrees
    pub fov: f64,
    /// Compass heading of the camera in degrees
    pub heading: f64,
    /// Up/down angle of the camera in degrees
    pub pitch: f64,
}

impl Default for StreetViewParams {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            fov: 120.0,
            heading: 65.0,
            pitch: -1.0,
        }
    }
}

impl StreetViewParams {
    /// `size` query value, e.g. `600x600`
    pub fn size(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

/// Outcome of a completed fetch batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchSummary {
    /// Files written, in path order
    pub saved: Vec<PathBuf>,

    /// Path indices whose response was the no-imagery placeholder
    pub skipped: Vec<usize>,
}

impl FetchSummary {
    /// Total number of coordinates processed
    pub fn processed(&self) -> usize {
        self.saved.len() + self.skipped.len()
    }
}

/// Whether a response body is the provider's placeholder image
pub fn is_placeholder(body: &[u8]) -> bool {
    body.len() == NO_IMAGERY_SENTINEL_LEN
}

/// File name for the image captured at path index `index`
pub fn image_file_name(index: usize) -> String {
    format!("streetview_{index}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = StreetViewParams::default();
        assert_eq!(params.size(), "600x600");
        assert_eq!(params.fov, 120.0);
        assert_eq!(params.heading, 65.0);
        assert_eq!(params.pitch, -1.0);
    }

    #[test]
    fn test_placeholder_detection() {
        assert!(is_placeholder(&vec![0u8; NO_IMAGERY_SENTINEL_LEN]));
        assert!(!is_placeholder(&vec![0u8; NO_IMAGERY_SENTINEL_LEN - 1]));
        assert!(!is_placeholder(&vec![0u8; NO_IMAGERY_SENTINEL_LEN + 1]));
        assert!(!is_placeholder(&[]));
    }

    #[test]
    fn test_image_file_name() {
        assert_eq!(image_file_name(0), "streetview_0.png");
        assert_eq!(image_file_name(42), "streetview_42.png");
    }

    #[test]
    fn test_io_error_display() {
        let err = FetchError::Io {
            path: PathBuf::from("out/streetview_3.png"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "I/O error at out/streetview_3.png: denied");
    }
}
