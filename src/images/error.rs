//! Image editor error types

use thiserror::Error;

/// Errors raised by the property image list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// Upload batch would push the list past its ceiling; nothing was added
    #[error("Maximum {capacity} images allowed ({current} uploaded, {incoming} more selected)")]
    CapacityExceeded {
        current: usize,
        incoming: usize,
        capacity: usize,
    },

    /// Remove or thumbnail selection pointed past the end of the list
    #[error("Image index {index} out of range for {len} images")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type ImageResult<T> = Result<T, ImageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ImageError::CapacityExceeded {
            current: 8,
            incoming: 3,
            capacity: 10,
        };
        assert_eq!(
            err.to_string(),
            "Maximum 10 images allowed (8 uploaded, 3 more selected)"
        );

        let err = ImageError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "Image index 4 out of range for 2 images");
    }
}
