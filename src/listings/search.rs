use crate::filters::FilterQuery;
use crate::models::{Gender, Property, PropertyType};
use std::cmp::Ordering;
use tracing::debug;

/// Apply a composed filter query to a set of listings.
///
/// Only active listings of `kind` are considered. Bedroom and bathroom
/// counts are minimums, matching the "4+" / "3+" options of the filter
/// panel. Results are sorted by price, best rated first on ties.
pub fn search(listings: &[Property], kind: PropertyType, query: &FilterQuery) -> Vec<Property> {
    let mut results: Vec<Property> = listings
        .iter()
        .filter(|p| p.is_active && p.kind == kind)
        .filter(|p| matches(p, query))
        .cloned()
        .collect();

    results.sort_by(|a, b| {
        a.price.cmp(&b.price).then_with(|| {
            let ra = a.rating.unwrap_or(0.0);
            let rb = b.rating.unwrap_or(0.0);
            rb.partial_cmp(&ra).unwrap_or(Ordering::Equal)
        })
    });

    debug!(
        "Search for {} matched {} of {} listings",
        kind,
        results.len(),
        listings.len()
    );
    results
}

/// Whether a single listing satisfies every dimension of the query
pub fn matches(property: &Property, query: &FilterQuery) -> bool {
    let location = query.location.trim().to_lowercase();
    if !location.is_empty() {
        let haystacks = [
            &property.location.city,
            &property.location.area,
            &property.location.address,
        ];
        if !haystacks
            .iter()
            .any(|h| h.to_lowercase().contains(&location))
        {
            return false;
        }
    }

    if !query.price_range.contains(property.price) {
        return false;
    }

    if !query.amenities.iter().all(|a| property.has_amenity(*a)) {
        return false;
    }

    if let Some(min) = query.bedrooms {
        if property.bedrooms.map_or(true, |b| b < min) {
            return false;
        }
    }

    if let Some(min) = query.bathrooms {
        if property.bathrooms.map_or(true, |b| b < min) {
            return false;
        }
    }

    if let Some(furnishing) = query.furnishing {
        if property.furnishing != Some(furnishing) {
            return false;
        }
    }

    if let Some(wanted) = query.gender {
        match property.gender {
            Some(Gender::Unisex) => {}
            Some(gender) if gender == wanted => {}
            _ => return false,
        }
    }

    true
}
