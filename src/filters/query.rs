use crate::filters::state::PriceRange;
use crate::models::{Amenity, Furnishing, Gender};
use serde::{Deserialize, Serialize};

/// Filter object handed to the search consumer.
///
/// Optional fields are skipped when unset or when they do not apply to the
/// property kind the query was composed for, so a PG query never carries a
/// `bedrooms` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterQuery {
    pub location: String,
    pub price_range: PriceRange,
    pub amenities: Vec<Amenity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub furnishing: Option<Furnishing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}
