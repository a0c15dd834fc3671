pub mod amenities;
pub mod query;
pub mod state;
pub mod summary;

pub use amenities::AmenitySet;
pub use query::FilterQuery;
pub use state::{FilterState, PriceRange, MAX_PRICE};
pub use summary::{format_rupees, summarize, DisplayTag, FilterDimension};
