use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a rental listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    Flat,
    Pg,
    Hostel,
}

impl PropertyType {
    /// Flats expose bedroom/bathroom/furnishing filters, everything else
    /// exposes the gender filter instead.
    pub fn is_flat(self) -> bool {
        self == PropertyType::Flat
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropertyType::Flat => "FLAT",
            PropertyType::Pg => "PG",
            PropertyType::Hostel => "HOSTEL",
        };
        f.write_str(name)
    }
}

/// Tagged feature of a property
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Amenity {
    Wifi,
    Ac,
    Furnished,
    Geyser,
    Tv,
    Fridge,
    WashingMachine,
    PowerBackup,
    Parking,
    Security,
    Cctv,
    Lift,
    Food,
    Cleaning,
    AttachedBathroom,
    Gym,
}

impl Amenity {
    pub const ALL: [Amenity; 16] = [
        Amenity::Wifi,
        Amenity::Ac,
        Amenity::Furnished,
        Amenity::Geyser,
        Amenity::Tv,
        Amenity::Fridge,
        Amenity::WashingMachine,
        Amenity::PowerBackup,
        Amenity::Parking,
        Amenity::Security,
        Amenity::Cctv,
        Amenity::Lift,
        Amenity::Food,
        Amenity::Cleaning,
        Amenity::AttachedBathroom,
        Amenity::Gym,
    ];

    /// Amenities offered as checkboxes in the search filter panel
    pub const FILTER_OPTIONS: [Amenity; 12] = [
        Amenity::Wifi,
        Amenity::Ac,
        Amenity::Furnished,
        Amenity::Tv,
        Amenity::Fridge,
        Amenity::WashingMachine,
        Amenity::PowerBackup,
        Amenity::Parking,
        Amenity::Security,
        Amenity::Food,
        Amenity::Cleaning,
        Amenity::Gym,
    ];

    /// Whether the amenity can be used to narrow a search
    pub fn is_filterable(self) -> bool {
        Self::FILTER_OPTIONS.contains(&self)
    }

    /// Human readable label shown next to the checkbox and in filter tags
    pub fn label(self) -> &'static str {
        match self {
            Amenity::Wifi => "WiFi",
            Amenity::Ac => "Air Conditioning",
            Amenity::Furnished => "Furnished",
            Amenity::Geyser => "Geyser",
            Amenity::Tv => "TV",
            Amenity::Fridge => "Refrigerator",
            Amenity::WashingMachine => "Washing Machine",
            Amenity::PowerBackup => "Power Backup",
            Amenity::Parking => "Parking",
            Amenity::Security => "Security",
            Amenity::Cctv => "CCTV",
            Amenity::Lift => "Lift",
            Amenity::Food => "Food Included",
            Amenity::Cleaning => "Cleaning Service",
            Amenity::AttachedBathroom => "Attached Bathroom",
            Amenity::Gym => "Gym",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Furnishing {
    FullyFurnished,
    SemiFurnished,
    Unfurnished,
}

impl Furnishing {
    pub fn label(self) -> &'static str {
        match self {
            Furnishing::FullyFurnished => "Fully Furnished",
            Furnishing::SemiFurnished => "Semi Furnished",
            Furnishing::Unfurnished => "Unfurnished",
        }
    }
}

/// Tenant gender a PG or hostel accepts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Unisex,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Unisex => "UNISEX",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Tenant,
    Owner,
    Admin,
}

/// Location information for a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub address: String,
    pub city: String,
    pub area: String,
    pub state: String,
    pub pincode: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Image attached to a stored listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyImage {
    pub id: String,
    pub url: String,
    pub is_main: bool,
}

/// Core property data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: PropertyType,
    /// Monthly rent (INR)
    pub price: u32,
    pub security_deposit: Option<u32>,
    pub location: Location,
    pub amenities: Vec<Amenity>,
    pub images: Vec<PropertyImage>,
    pub rules: Vec<String>,
    pub bedrooms: Option<u8>,
    pub bathrooms: Option<u8>,
    /// Beds on offer, mostly relevant for PGs and hostels
    pub total_beds: Option<u16>,
    /// Carpet area in sq. ft
    pub area_sqft: Option<u32>,
    pub furnishing: Option<Furnishing>,
    pub available_from: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner_id: String,
    pub is_active: bool,
    pub gender: Option<Gender>,
    pub rating: Option<f32>,
    pub num_reviews: Option<u32>,
}

impl Property {
    /// Main image, falling back to the first one
    pub fn main_image(&self) -> Option<&PropertyImage> {
        self.images
            .iter()
            .find(|img| img.is_main)
            .or_else(|| self.images.first())
    }

    pub fn has_amenity(&self, amenity: Amenity) -> bool {
        self.amenities.contains(&amenity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amenities_serialize_in_screaming_snake_case() {
        let json = serde_json::to_string(&Amenity::WashingMachine).unwrap();
        assert_eq!(json, "\"WASHING_MACHINE\"");

        let parsed: Amenity = serde_json::from_str("\"ATTACHED_BATHROOM\"").unwrap();
        assert_eq!(parsed, Amenity::AttachedBathroom);
    }

    #[test]
    fn filter_options_are_a_subset_of_all_amenities() {
        for amenity in Amenity::FILTER_OPTIONS {
            assert!(Amenity::ALL.contains(&amenity));
        }
        assert!(!Amenity::FILTER_OPTIONS.contains(&Amenity::Cctv));
    }

    #[test]
    fn only_panel_amenities_are_filterable() {
        assert!(Amenity::Wifi.is_filterable());
        assert!(Amenity::Gym.is_filterable());
        assert!(!Amenity::Geyser.is_filterable());
        assert!(!Amenity::AttachedBathroom.is_filterable());
        assert_eq!(
            Amenity::ALL.iter().filter(|a| a.is_filterable()).count(),
            Amenity::FILTER_OPTIONS.len()
        );
    }

    #[test]
    fn kind_display_matches_wire_names() {
        assert_eq!(PropertyType::Pg.to_string(), "PG");
        assert_eq!(
            serde_json::to_string(&PropertyType::Hostel).unwrap(),
            "\"HOSTEL\""
        );
        assert!(PropertyType::Flat.is_flat());
        assert!(!PropertyType::Pg.is_flat());
    }
}
