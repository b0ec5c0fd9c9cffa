//! Webcam frame acquisition.
//!
//! The webcam is reached through an external capture utility rather than a
//! device API, so the program only needs a path to the snapshot it produced.
//! The `FrameSource` trait keeps that seam narrow enough to substitute a
//! stub in tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Snapshot resolution requested from the capture utility.
pub const CAPTURE_WIDTH: u32 = 640;
pub const CAPTURE_HEIGHT: u32 = 480;

/// Errors that can occur while capturing a webcam frame.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("uvccapture not found. Please install it with:\n\n    sudo apt install uvccapture\n")]
    UtilityNotFound,

    #[error("failed to run uvccapture: {0}")]
    SpawnFailed(std::io::Error),

    #[error("uvccapture exited with {code}: {stderr}")]
    CaptureFailed { code: String, stderr: String },

    #[error("capture finished but no snapshot exists at '{0}'")]
    MissingSnapshot(PathBuf),
}

/// Something that can produce a still frame on disk.
pub trait FrameSource {
    /// Produce one frame and return the path of the written image.
    fn capture(&self) -> Result<PathBuf, CaptureError>;
}

/// Frame source backed by the `uvccapture` command-line utility.
#[derive(Debug, Clone)]
pub struct UvcCapture {
    output: PathBuf,
}

impl UvcCapture {
    pub fn new() -> Self {
        Self {
            output: PathBuf::from("snap.jpg"),
        }
    }

    /// Override the snapshot path.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output
    }
}

impl Default for UvcCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSource for UvcCapture {
    fn capture(&self) -> Result<PathBuf, CaptureError> {
        log::debug!(
            "invoking uvccapture for a {}x{} snapshot at {}",
            CAPTURE_WIDTH,
            CAPTURE_HEIGHT,
            self.output.display()
        );

        let result = Command::new("uvccapture")
            .arg("-m")
            .arg(format!("-x{}", CAPTURE_WIDTH))
            .arg(format!("-y{}", CAPTURE_HEIGHT))
            .arg("-o")
            .arg(&self.output)
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output();

        let output = match result {
            Ok(o) => o,
            Err(e) => {
                if e.kind() == std::io::ErrorKind::NotFound {
                    return Err(CaptureError::UtilityNotFound);
                }
                return Err(CaptureError::SpawnFailed(e));
            }
        };

        if !output.status.success() {
            let code = output
                .status
                .code()
                .map(|c| format!("status {}", c))
                .unwrap_or_else(|| "signal".to_string());
            return Err(CaptureError::CaptureFailed {
                code,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        if !self.output.exists() {
            return Err(CaptureError::MissingSnapshot(self.output.clone()));
        }

        Ok(self.output.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubSource {
        path: PathBuf,
    }

    impl FrameSource for StubSource {
        fn capture(&self) -> Result<PathBuf, CaptureError> {
            Ok(self.path.clone())
        }
    }

    #[test]
    fn test_stub_source_satisfies_trait() {
        let stub = StubSource {
            path: PathBuf::from("/tmp/frame.jpg"),
        };
        let source: &dyn FrameSource = &stub;
        assert_eq!(source.capture().unwrap(), PathBuf::from("/tmp/frame.jpg"));
    }

    #[test]
    fn test_default_snapshot_path() {
        assert_eq!(UvcCapture::new().output_path(), Path::new("snap.jpg"));
    }

    #[test]
    fn test_with_output_overrides_path() {
        let cap = UvcCapture::new().with_output("/tmp/webcam.jpg");
        assert_eq!(cap.output_path(), Path::new("/tmp/webcam.jpg"));
    }

    #[test]
    fn test_utility_not_found_message() {
        let msg = CaptureError::UtilityNotFound.to_string();
        assert!(msg.contains("uvccapture not found"));
        assert!(msg.contains("install"));
    }

    #[test]
    fn test_capture_failed_message() {
        let err = CaptureError::CaptureFailed {
            code: "status 1".to_string(),
            stderr: "unable to open /dev/video0".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("status 1"));
        assert!(msg.contains("/dev/video0"));
    }
}
