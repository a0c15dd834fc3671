use crate::filters::state::FilterState;
use crate::models::{Amenity, PropertyType};
use serde::Serialize;
use std::fmt;

/// Which filter dimension a tag was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FilterDimension {
    Location,
    Price,
    Bedrooms,
    Bathrooms,
    Furnishing,
    Gender,
    Amenity(Amenity),
}

/// Short label rendered as an "active filter" chip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayTag {
    pub dimension: FilterDimension,
    pub label: String,
}

impl DisplayTag {
    fn new(dimension: FilterDimension, label: impl Into<String>) -> Self {
        Self {
            dimension,
            label: label.into(),
        }
    }
}

impl fmt::Display for DisplayTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Project the filter state onto the chips shown under the search bar.
/// Only dimensions that differ from their default produce a tag.
pub fn summarize(state: &FilterState, kind: PropertyType) -> Vec<DisplayTag> {
    let mut tags = Vec::new();

    if !state.location().is_empty() {
        tags.push(DisplayTag::new(
            FilterDimension::Location,
            format!("Location: {}", state.location()),
        ));
    }

    let range = state.price_range();
    if !range.is_full() {
        tags.push(DisplayTag::new(
            FilterDimension::Price,
            format!(
                "Price: {} - {}",
                format_rupees(range.low()),
                format_rupees(range.high())
            ),
        ));
    }

    if kind.is_flat() {
        if let Some(bedrooms) = state.bedrooms() {
            tags.push(DisplayTag::new(
                FilterDimension::Bedrooms,
                format!("Bedrooms: {}", bedrooms),
            ));
        }
        if let Some(bathrooms) = state.bathrooms() {
            tags.push(DisplayTag::new(
                FilterDimension::Bathrooms,
                format!("Bathrooms: {}", bathrooms),
            ));
        }
        if let Some(furnishing) = state.furnishing() {
            tags.push(DisplayTag::new(
                FilterDimension::Furnishing,
                format!("Furnishing: {}", furnishing.label()),
            ));
        }
    } else if let Some(gender) = state.gender() {
        tags.push(DisplayTag::new(
            FilterDimension::Gender,
            format!("Gender: {}", gender),
        ));
    }

    for amenity in state.amenities().iter() {
        tags.push(DisplayTag::new(
            FilterDimension::Amenity(amenity),
            amenity.label(),
        ));
    }

    tags
}

/// Format an amount as rupees with comma thousands separators, e.g. `₹30,000`
pub fn format_rupees(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("₹{}", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Furnishing, Gender};

    #[test]
    fn cleared_state_has_no_tags() {
        let mut state = FilterState::new();
        state.set_location("Indiranagar");
        state.clear();
        assert!(summarize(&state, PropertyType::Flat).is_empty());
    }

    #[test]
    fn location_produces_one_tag() {
        let mut state = FilterState::new();
        state.set_location("Koramangala");

        let tags = summarize(&state, PropertyType::Pg);
        assert_eq!(tags.len(), 1);
        assert!(tags[0].label.contains("Koramangala"));
        assert_eq!(tags[0].to_string(), "Location: Koramangala");
    }

    #[test]
    fn price_tag_uses_rupee_formatting() {
        let mut state = FilterState::new();
        state.set_price_range(0, 30_000);

        let tags = summarize(&state, PropertyType::Flat);
        assert_eq!(tags[0].label, "Price: ₹0 - ₹30,000");
        assert_eq!(tags[0].dimension, FilterDimension::Price);
    }

    #[test]
    fn kind_gates_flat_and_gender_tags() {
        let mut state = FilterState::new();
        state.set_bedrooms(Some(2));
        state.set_furnishing(Some(Furnishing::FullyFurnished));
        state.set_gender(Some(Gender::Male));

        let flat: Vec<_> = summarize(&state, PropertyType::Flat)
            .into_iter()
            .map(|t| t.label)
            .collect();
        assert_eq!(flat, vec!["Bedrooms: 2", "Furnishing: Fully Furnished"]);

        let hostel: Vec<_> = summarize(&state, PropertyType::Hostel)
            .into_iter()
            .map(|t| t.label)
            .collect();
        assert_eq!(hostel, vec!["Gender: MALE"]);
    }

    #[test]
    fn one_tag_per_amenity_after_scalar_tags() {
        let mut state = FilterState::new();
        state.toggle_amenity(Amenity::Food, true);
        state.toggle_amenity(Amenity::Wifi, true);
        state.set_location("Pune");

        let labels: Vec<_> = summarize(&state, PropertyType::Pg)
            .into_iter()
            .map(|t| t.label)
            .collect();
        assert_eq!(labels, vec!["Location: Pune", "WiFi", "Food Included"]);
    }

    #[test]
    fn summarize_is_idempotent() {
        let mut state = FilterState::new();
        state.set_price_range(5_000, 20_000);
        state.toggle_amenity(Amenity::Gym, true);
        assert_eq!(
            summarize(&state, PropertyType::Flat),
            summarize(&state, PropertyType::Flat)
        );
    }

    #[test]
    fn rupee_grouping() {
        assert_eq!(format_rupees(0), "₹0");
        assert_eq!(format_rupees(999), "₹999");
        assert_eq!(format_rupees(1_000), "₹1,000");
        assert_eq!(format_rupees(50_000), "₹50,000");
        assert_eq!(format_rupees(1_234_567), "₹1,234,567");
    }
}
