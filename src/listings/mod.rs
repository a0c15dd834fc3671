pub mod mock;
pub mod search;
pub mod traits;

pub use mock::MockCatalog;
pub use search::{matches, search};
pub use traits::ListingSource;
