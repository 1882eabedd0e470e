//! Directory-backed preview feed.
//!
//! An external capture tool writes preview frames as image files into a
//! directory. A snapshot decodes the most recently modified one.

use async_trait::async_trait;
use image::DynamicImage;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::CaptureError;
use crate::traits::{Camera, DecodeStream, PreviewFeed};

const FRAME_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Camera whose preview is a directory of frame files.
#[derive(Debug, Clone)]
pub struct FrameDirectoryCamera {
    dir: PathBuf,
}

impl FrameDirectoryCamera {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl Camera for FrameDirectoryCamera {
    async fn open_decoder(&self) -> Result<DecodeStream, CaptureError> {
        Err(CaptureError::NoDevice(
            "a frame directory cannot decode barcodes".to_string(),
        ))
    }

    async fn open_preview(&self) -> Result<Box<dyn PreviewFeed>, CaptureError> {
        match fs::metadata(&self.dir) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(CaptureError::NoDevice(format!(
                    "{} is not a directory",
                    self.dir.display()
                )))
            }
            Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
                return Err(CaptureError::PermissionDenied)
            }
            Err(e) => {
                return Err(CaptureError::NoDevice(format!(
                    "{}: {}",
                    self.dir.display(),
                    e
                )))
            }
        }

        tracing::info!("Preview frames from {}", self.dir.display());
        Ok(Box::new(DirectoryPreview {
            dir: self.dir.clone(),
        }))
    }
}

struct DirectoryPreview {
    dir: PathBuf,
}

#[async_trait]
impl PreviewFeed for DirectoryPreview {
    async fn snapshot(&mut self) -> Result<DynamicImage, CaptureError> {
        let dir = self.dir.clone();
        tokio::task::spawn_blocking(move || load_latest_frame(&dir))
            .await
            .map_err(|e| CaptureError::Frame(format!("frame loader stopped: {}", e)))?
    }
}

fn load_latest_frame(dir: &Path) -> Result<DynamicImage, CaptureError> {
    let path = latest_frame(dir)?;
    tracing::debug!("Snapshot from {}", path.display());
    image::open(&path).map_err(|e| CaptureError::Frame(format!("{}: {}", path.display(), e)))
}

fn latest_frame(dir: &Path) -> Result<PathBuf, CaptureError> {
    let entries = fs::read_dir(dir).map_err(|_| CaptureError::FeedClosed)?;

    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| {
                    FRAME_EXTENSIONS
                        .iter()
                        .any(|known| ext.eq_ignore_ascii_case(known))
                })
        })
        .filter_map(|entry| {
            let meta = entry.metadata().ok()?;
            if !meta.is_file() {
                return None;
            }
            let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
            Some((modified, entry.path()))
        })
        .max()
        .map(|(_, path)| path)
        .ok_or_else(|| CaptureError::Frame(format!("no frames in {}", dir.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::time::Duration;
    use tempfile::TempDir;

    fn write_frame(dir: &Path, name: &str, width: u32) {
        RgbImage::from_pixel(width, 4, Rgb([10, 20, 30]))
            .save(dir.join(name))
            .unwrap();
    }

    #[tokio::test]
    async fn test_snapshot_reads_newest_frame() {
        let temp_dir = TempDir::new().unwrap();
        write_frame(temp_dir.path(), "old.png", 4);
        std::thread::sleep(Duration::from_millis(20));
        write_frame(temp_dir.path(), "new.png", 6);
        fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

        let camera = FrameDirectoryCamera::new(temp_dir.path());
        let mut preview = camera.open_preview().await.unwrap();
        assert_eq!(preview.snapshot().await.unwrap().width(), 6);
    }

    #[tokio::test]
    async fn test_empty_directory_fails_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let camera = FrameDirectoryCamera::new(temp_dir.path());
        let mut preview = camera.open_preview().await.unwrap();
        assert!(matches!(preview.snapshot().await, Err(CaptureError::Frame(_))));
    }

    #[tokio::test]
    async fn test_missing_directory_is_no_device() {
        let temp_dir = TempDir::new().unwrap();
        let camera = FrameDirectoryCamera::new(temp_dir.path().join("missing"));
        assert!(matches!(
            camera.open_preview().await,
            Err(CaptureError::NoDevice(_))
        ));
        assert!(camera.open_decoder().await.is_err());
    }
}
