use crate::images::error::{ImageError, ImageResult};
use crate::images::source::RawImage;
use crate::models::PropertyImage;
use serde::Serialize;
use tracing::{debug, error, info};

/// Most images a single listing may carry
pub const MAX_IMAGES: usize = 10;

/// One uploaded image in the property editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageEntry {
    url: String,
    is_thumbnail: bool,
}

impl ImageEntry {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_thumbnail(&self) -> bool {
        self.is_thumbnail
    }
}

/// Ordered image list of a listing being edited.
///
/// If the list is non-empty exactly one entry is the thumbnail. Every
/// mutating operation either succeeds with the invariant intact or fails
/// without touching the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImageList {
    entries: Vec<ImageEntry>,
}

impl ImageList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the editor with the images of an existing listing. The first
    /// image flagged as main keeps the flag; without one, index 0 gets it.
    pub fn from_images(images: &[PropertyImage]) -> Self {
        let images = &images[..images.len().min(MAX_IMAGES)];
        let main = images.iter().position(|img| img.is_main).unwrap_or(0);
        let entries = images
            .iter()
            .enumerate()
            .map(|(i, img)| ImageEntry {
                url: img.url.clone(),
                is_thumbnail: i == main,
            })
            .collect();
        Self { entries }
    }

    /// Append a batch of images. The batch is rejected as a whole when it
    /// would exceed [`MAX_IMAGES`].
    pub fn upload(&mut self, batch: Vec<RawImage>) -> ImageResult<()> {
        let current = self.entries.len();
        if current + batch.len() > MAX_IMAGES {
            return Err(ImageError::CapacityExceeded {
                current,
                incoming: batch.len(),
                capacity: MAX_IMAGES,
            });
        }

        let count = batch.len();
        for (i, raw) in batch.into_iter().enumerate() {
            self.entries.push(ImageEntry {
                url: raw.data_url(),
                is_thumbnail: current == 0 && i == 0,
            });
        }

        info!("📷 Added {} image(s), {} total", count, self.entries.len());
        Ok(())
    }

    /// Delete the entry at `index`. When it held the thumbnail the first
    /// remaining image takes over.
    pub fn remove(&mut self, index: usize) -> ImageResult<ImageEntry> {
        self.check_index(index)?;

        let removed = self.entries.remove(index);
        if removed.is_thumbnail {
            if let Some(first) = self.entries.first_mut() {
                first.is_thumbnail = true;
                debug!("Thumbnail moved to first image after removing index {}", index);
            }
        }
        Ok(removed)
    }

    /// Make `index` the only thumbnail
    pub fn set_thumbnail(&mut self, index: usize) -> ImageResult<()> {
        self.check_index(index)?;

        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.is_thumbnail = i == index;
        }
        Ok(())
    }

    pub fn list(&self) -> &[ImageEntry] {
        &self.entries
    }

    pub fn thumbnail(&self) -> Option<(usize, &ImageEntry)> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.is_thumbnail)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn remaining_capacity(&self) -> usize {
        MAX_IMAGES - self.entries.len()
    }

    /// Convert to stored listing images, ids derived from the listing id
    pub fn to_property_images(&self, property_id: &str) -> Vec<PropertyImage> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| PropertyImage {
                id: format!("{}-img-{}", property_id, i + 1),
                url: entry.url.clone(),
                is_main: entry.is_thumbnail,
            })
            .collect()
    }

    fn check_index(&self, index: usize) -> ImageResult<()> {
        if index >= self.entries.len() {
            let err = ImageError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            };
            error!("{}", err);
            return Err(err);
        }
        Ok(())
    }
}
