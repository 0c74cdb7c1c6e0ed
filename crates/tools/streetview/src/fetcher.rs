//! Sequential fetch-and-save loop over a sampled path

use crate::client::ImageSource;
use crate::types::{image_file_name, is_placeholder, FetchError, FetchResult, FetchSummary};
use std::fmt;
use std::fs;
use std::path::Path;
use streetpath_map::GeoCoord;

/// Fetch an image for every coordinate in `path` and save it under `dir`
///
/// The directory is created if missing. The image for index `i` is written
/// to `streetview_<i>.png`; placeholder responses are skipped and leave a
/// gap in the numbering. The first fetch or write error aborts the batch and
/// is returned; files already written are kept.
pub async fn fetch_images<S: ImageSource>(
    source: &S,
    path: &[GeoCoord],
    dir: &Path,
) -> FetchResult<FetchSummary> {
    fs::create_dir_all(dir).map_err(|source| FetchError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut summary = FetchSummary::default();

    for (index, coord) in path.iter().enumerate() {
        let body = source.fetch(coord).await?;

        if is_placeholder(&body) {
            tracing::info!(index, %coord, "no imagery available, skipping");
            summary.skipped.push(index);
            continue;
        }

        let image_path = dir.join(image_file_name(index));
        fs::write(&image_path, &body).map_err(|source| FetchError::Io {
            path: image_path.clone(),
            source,
        })?;

        tracing::debug!(index, %coord, bytes = body.len(), path = %image_path.display(), "saved image");
        summary.saved.push(image_path);
    }

    Ok(summary)
}

/// Printed once every image of a batch has been handled
pub const SUCCESS_MESSAGE: &str = "Images saved!";

/// Prefix of the message printed when a batch aborts
pub const FAILURE_PREFIX: &str = "Error capturing Street View images";

/// How a capture run ended, as reported to the user
#[derive(Debug)]
pub enum CaptureOutcome {
    Saved(FetchSummary),
    Failed(FetchError),
}

impl CaptureOutcome {
    /// Process exit status for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            CaptureOutcome::Saved(_) => 0,
            CaptureOutcome::Failed(_) => 1,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CaptureOutcome::Saved(_))
    }
}

impl fmt::Display for CaptureOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureOutcome::Saved(_) => f.write_str(SUCCESS_MESSAGE),
            CaptureOutcome::Failed(e) => write!(f, "{FAILURE_PREFIX}: {e}"),
        }
    }
}

impl From<FetchResult<FetchSummary>> for CaptureOutcome {
    fn from(result: FetchResult<FetchSummary>) -> Self {
        match result {
            Ok(summary) => CaptureOutcome::Saved(summary),
            Err(e) => CaptureOutcome::Failed(e),
        }
    }
}

/// Run [`fetch_images`] and turn the result into a user-facing outcome
pub async fn capture<S: ImageSource>(source: &S, path: &[GeoCoord], dir: &Path) -> CaptureOutcome {
    let outcome = CaptureOutcome::from(fetch_images(source, path, dir).await);
    if let CaptureOutcome::Saved(summary) = &outcome {
        tracing::info!(
            saved = summary.saved.len(),
            skipped = summary.skipped.len(),
            dir = %dir.display(),
            "fetch complete"
        );
    }
    outcome
}
