use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Raw image bytes picked by the user, before they enter the editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImage {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl RawImage {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Inline `data:` URL the renderer can display directly
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

/// Guess a MIME type from the file extension
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Supplies raw image content to the property editor
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Load a single image
    async fn load(&self, path: &Path) -> Result<RawImage>;

    /// Load a whole selection; fails on the first unreadable file so the
    /// editor never sees a partial batch
    async fn load_batch(&self, paths: &[PathBuf]) -> Result<Vec<RawImage>> {
        let mut images = Vec::with_capacity(paths.len());
        for path in paths {
            images.push(self.load(path).await?);
        }
        info!("Loaded {} image(s) from {}", images.len(), self.source_name());
        Ok(images)
    }

    /// Get the name of the image source
    fn source_name(&self) -> &'static str;
}

/// Reads images from the local filesystem
#[derive(Debug, Default)]
pub struct FileImageSource;

impl FileImageSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ImageSource for FileImageSource {
    async fn load(&self, path: &Path) -> Result<RawImage> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read image {}", path.display()))?;

        debug!("Read {} bytes from {}", bytes.len(), path.display());

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(RawImage::new(name, mime_for_path(path), bytes))
    }

    fn source_name(&self) -> &'static str {
        "local files"
    }
}
