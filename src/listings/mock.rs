use crate::listings::traits::ListingSource;
use crate::models::{
    Amenity, Furnishing, Gender, Location, Property, PropertyImage, PropertyType,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use tracing::info;

/// In-memory catalog backing the marketplace screens
#[derive(Debug, Default)]
pub struct MockCatalog;

impl MockCatalog {
    pub fn new() -> Self {
        Self
    }

    /// Mock flats, PGs and hostels based on typical listings
    pub fn listings(&self) -> Vec<Property> {
        vec![
            Property {
                bedrooms: Some(2),
                bathrooms: Some(2),
                area_sqft: Some(1_100),
                furnishing: Some(Furnishing::SemiFurnished),
                security_deposit: Some(50_000),
                amenities: vec![Amenity::Wifi, Amenity::Parking, Amenity::PowerBackup, Amenity::Lift],
                rating: Some(4.5),
                num_reviews: Some(28),
                ..listing(
                    "flat-1",
                    "Spacious 2BHK near Forum Mall",
                    PropertyType::Flat,
                    25_000,
                    ("Bangalore", "Koramangala", "5th Block, 80 Feet Road", "560095"),
                )
            },
            Property {
                bedrooms: Some(3),
                bathrooms: Some(3),
                area_sqft: Some(1_650),
                furnishing: Some(Furnishing::FullyFurnished),
                security_deposit: Some(1_20_000),
                amenities: vec![
                    Amenity::Wifi,
                    Amenity::Ac,
                    Amenity::Furnished,
                    Amenity::Gym,
                    Amenity::Security,
                    Amenity::Parking,
                ],
                rating: Some(4.8),
                num_reviews: Some(12),
                ..listing(
                    "flat-2",
                    "Premium 3BHK with clubhouse access",
                    PropertyType::Flat,
                    45_000,
                    ("Bangalore", "Indiranagar", "12th Main, HAL 2nd Stage", "560038"),
                )
            },
            Property {
                bedrooms: Some(1),
                bathrooms: Some(1),
                area_sqft: Some(600),
                furnishing: Some(Furnishing::Unfurnished),
                security_deposit: Some(30_000),
                amenities: vec![Amenity::Parking, Amenity::Geyser],
                rating: Some(4.1),
                num_reviews: Some(9),
                ..listing(
                    "flat-3",
                    "Cosy 1BHK close to the metro",
                    PropertyType::Flat,
                    15_000,
                    ("Pune", "Kothrud", "Karve Road, near Kothrud Depot", "411038"),
                )
            },
            Property {
                gender: Some(Gender::Male),
                total_beds: Some(24),
                amenities: vec![Amenity::Wifi, Amenity::Food, Amenity::Cleaning, Amenity::WashingMachine],
                rules: vec!["No smoking".to_string(), "Gate closes at 11 PM".to_string()],
                rating: Some(4.2),
                num_reviews: Some(41),
                ..listing(
                    "pg-1",
                    "Comfort PG for working men",
                    PropertyType::Pg,
                    9_500,
                    ("Bangalore", "HSR Layout", "Sector 2, 27th Main", "560102"),
                )
            },
            Property {
                gender: Some(Gender::Female),
                total_beds: Some(18),
                amenities: vec![
                    Amenity::Wifi,
                    Amenity::Food,
                    Amenity::Ac,
                    Amenity::Security,
                    Amenity::Cctv,
                ],
                rules: vec!["Visitors allowed till 8 PM".to_string()],
                rating: Some(4.6),
                num_reviews: Some(33),
                ..listing(
                    "pg-2",
                    "Safe and secure ladies PG",
                    PropertyType::Pg,
                    12_000,
                    ("Bangalore", "Koramangala", "6th Block, near Sony Signal", "560095"),
                )
            },
            Property {
                gender: Some(Gender::Unisex),
                total_beds: Some(30),
                amenities: vec![Amenity::Wifi, Amenity::PowerBackup, Amenity::Cleaning],
                rating: Some(3.9),
                num_reviews: Some(17),
                ..listing(
                    "pg-3",
                    "Co-living rooms near Hinjewadi IT park",
                    PropertyType::Pg,
                    8_000,
                    ("Pune", "Hinjewadi", "Phase 1, Shivaji Chowk", "411057"),
                )
            },
            Property {
                gender: Some(Gender::Female),
                total_beds: Some(60),
                amenities: vec![Amenity::Food, Amenity::Security, Amenity::Cctv, Amenity::Gym],
                rating: Some(4.3),
                num_reviews: Some(56),
                ..listing(
                    "hostel-1",
                    "Girls hostel near North Campus",
                    PropertyType::Hostel,
                    7_500,
                    ("Delhi", "Kamla Nagar", "Bungalow Road", "110007"),
                )
            },
            Property {
                gender: Some(Gender::Unisex),
                total_beds: Some(80),
                amenities: vec![Amenity::Wifi, Amenity::Food, Amenity::AttachedBathroom],
                rating: Some(4.0),
                num_reviews: Some(22),
                is_active: false,
                ..listing(
                    "hostel-2",
                    "Student hostel with study hall",
                    PropertyType::Hostel,
                    6_000,
                    ("Delhi", "Mukherjee Nagar", "Dr. Mukherjee Nagar Main Road", "110009"),
                )
            },
        ]
    }
}

/// Shared defaults for a mock listing
fn listing(
    id: &str,
    title: &str,
    kind: PropertyType,
    price: u32,
    (city, area, address, pincode): (&str, &str, &str, &str),
) -> Property {
    let now = Utc::now();
    let state = match city {
        "Bangalore" => "Karnataka",
        "Pune" => "Maharashtra",
        _ => "Delhi",
    };

    Property {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{} in {}, {}. Contact the owner to schedule a visit.", title, area, city),
        kind,
        price,
        security_deposit: None,
        location: Location {
            address: address.to_string(),
            city: city.to_string(),
            area: area.to_string(),
            state: state.to_string(),
            pincode: pincode.to_string(),
            latitude: None,
            longitude: None,
        },
        amenities: Vec::new(),
        images: vec![PropertyImage {
            id: format!("{}-img-1", id),
            url: format!("https://images.stayloft.example/{}/cover.jpg", id),
            is_main: true,
        }],
        rules: Vec::new(),
        bedrooms: None,
        bathrooms: None,
        total_beds: None,
        area_sqft: None,
        furnishing: None,
        available_from: (now + Duration::days(7)).date_naive(),
        created_at: now - Duration::days(30),
        updated_at: now,
        owner_id: "owner-1".to_string(),
        is_active: true,
        gender: None,
        rating: None,
        num_reviews: None,
    }
}

#[async_trait]
impl ListingSource for MockCatalog {
    async fn fetch_all(&self) -> Result<Vec<Property>> {
        info!("📋 Loading mock StayLoft listings");
        Ok(self.listings())
    }

    fn source_name(&self) -> &'static str {
        "StayLoft mock data"
    }
}
