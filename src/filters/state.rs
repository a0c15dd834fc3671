use crate::filters::amenities::AmenitySet;
use crate::filters::query::FilterQuery;
use crate::models::{Amenity, Furnishing, Gender, PropertyType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Upper bound of the price slider (INR per month)
pub const MAX_PRICE: u32 = 50_000;

/// Inclusive monthly rent bounds, always `0 <= low <= high <= MAX_PRICE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawPriceRange")]
pub struct PriceRange {
    low: u32,
    high: u32,
}

/// Bounds as they arrive on the wire, before clamping
#[derive(Deserialize)]
struct RawPriceRange {
    low: i64,
    high: i64,
}

impl From<RawPriceRange> for PriceRange {
    fn from(raw: RawPriceRange) -> Self {
        PriceRange::new(raw.low, raw.high)
    }
}

impl PriceRange {
    /// Clamp both bounds into `[0, MAX_PRICE]`; reversed bounds are swapped.
    pub fn new(low: i64, high: i64) -> Self {
        let clamp = |v: i64| v.clamp(0, MAX_PRICE as i64) as u32;
        let (low, high) = (clamp(low), clamp(high));
        if low <= high {
            Self { low, high }
        } else {
            Self {
                low: high,
                high: low,
            }
        }
    }

    pub fn full() -> Self {
        Self {
            low: 0,
            high: MAX_PRICE,
        }
    }

    pub fn low(&self) -> u32 {
        self.low
    }

    pub fn high(&self) -> u32 {
        self.high
    }

    /// True when the range does not constrain anything
    pub fn is_full(&self) -> bool {
        *self == Self::full()
    }

    pub fn contains(&self, price: u32) -> bool {
        (self.low..=self.high).contains(&price)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::full()
    }
}

/// Filter panel state for one search screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    location: String,
    price_range: PriceRange,
    amenities: AmenitySet,
    bedrooms: Option<u8>,
    bathrooms: Option<u8>,
    furnishing: Option<Furnishing>,
    gender: Option<Gender>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_location(&mut self, text: impl Into<String>) {
        self.location = text.into();
    }

    pub fn set_price_range(&mut self, low: i64, high: i64) {
        self.price_range = PriceRange::new(low, high);
    }

    pub fn set_bedrooms(&mut self, bedrooms: Option<u8>) {
        self.bedrooms = bedrooms;
    }

    pub fn set_bathrooms(&mut self, bathrooms: Option<u8>) {
        self.bathrooms = bathrooms;
    }

    pub fn set_furnishing(&mut self, furnishing: Option<Furnishing>) {
        self.furnishing = furnishing;
    }

    pub fn set_gender(&mut self, gender: Option<Gender>) {
        self.gender = gender;
    }

    pub fn toggle_amenity(&mut self, amenity: Amenity, included: bool) {
        self.amenities.toggle(amenity, included);
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    pub fn amenities(&self) -> &AmenitySet {
        &self.amenities
    }

    pub fn bedrooms(&self) -> Option<u8> {
        self.bedrooms
    }

    pub fn bathrooms(&self) -> Option<u8> {
        self.bathrooms
    }

    pub fn furnishing(&self) -> Option<Furnishing> {
        self.furnishing
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// Build the query handed to the search consumer. Fields that do not
    /// apply to `kind` are left out entirely.
    pub fn compose(&self, kind: PropertyType) -> FilterQuery {
        let mut query = FilterQuery {
            location: self.location.clone(),
            price_range: self.price_range,
            amenities: self.amenities.iter().collect(),
            bedrooms: None,
            bathrooms: None,
            furnishing: None,
            gender: None,
        };

        if kind.is_flat() {
            query.bedrooms = self.bedrooms;
            query.bathrooms = self.bathrooms;
            query.furnishing = self.furnishing;
        } else {
            query.gender = self.gender;
        }

        debug!("Composed {} filter query: {:?}", kind, query);
        query
    }

    /// Reset every dimension to its default
    pub fn clear(&mut self) {
        debug!("Clearing all search filters");
        *self = Self::default();
    }
}
