//! # StayLoft
//!
//! Core of the StayLoft rental marketplace: the search-filter state behind
//! the listing pages, the image editor of the add/edit property form, the
//! mock listing catalog and the session context.
//!
//! ## Modules
//!
//! - [`filters`]: filter state, amenity set, composed queries and active-filter tags
//! - [`images`]: property image list with its single-thumbnail rule
//! - [`listings`]: listing sources and the search consumer
//! - [`editor`]: add/edit property form
//! - [`session`]: login state shared by the dashboards

pub mod config;
pub mod editor;
pub mod filters;
pub mod images;
pub mod listings;
pub mod models;
pub mod session;

pub use config::Config;
pub use filters::{summarize, FilterQuery, FilterState};
pub use images::{ImageError, ImageList};
pub use models::{Amenity, Property, PropertyType};
