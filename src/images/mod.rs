pub mod error;
pub mod list;
pub mod source;

pub use error::{ImageError, ImageResult};
pub use list::{ImageEntry, ImageList, MAX_IMAGES};
pub use source::{FileImageSource, ImageSource, RawImage};
