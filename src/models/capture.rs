use bytes::Bytes;

/// Which capture pathway is active while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaptureMode {
    /// Live video with continuous barcode decoding
    #[default]
    Barcode,
    /// Preview feed with a manual still-capture trigger
    Label,
}

impl CaptureMode {
    pub fn label(&self) -> &'static str {
        match self {
            CaptureMode::Barcode => "Barcode",
            CaptureMode::Label => "Label",
        }
    }

    /// Hint shown under the viewfinder.
    pub fn hint(&self) -> &'static str {
        match self {
            CaptureMode::Barcode => "Point camera at a barcode",
            CaptureMode::Label => "Capture a clear photo of the nutrition label",
        }
    }
}

/// A still image ready to be posted to the analysis service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StillImage {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Bytes,
}

impl StillImage {
    pub const DEFAULT_FILE_NAME: &'static str = "label_scan.jpg";
    pub const JPEG_MIME: &'static str = "image/jpeg";

    /// A JPEG still with the default upload file name.
    pub fn jpeg(bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: Self::DEFAULT_FILE_NAME.to_string(),
            mime_type: Self::JPEG_MIME.to_string(),
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
