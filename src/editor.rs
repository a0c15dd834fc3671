//! Add/edit property form
//!
//! Holds the scalar form fields together with the image list and turns them
//! into a `Property` on submit.

use crate::images::ImageList;
use crate::models::{Location, Property, PropertyType};
use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

/// A single failing form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Invalid property details: {}", join_messages(.0))]
    Invalid(Vec<FieldError>),
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<ValidationErrors> for DraftError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field)),
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        DraftError::Invalid(fields)
    }
}

/// State of the add/edit property form
#[derive(Debug, Clone, Validate)]
pub struct PropertyDraft {
    #[validate(length(min = 5, message = "Title must be at least 5 characters"))]
    pub title: String,

    #[validate(length(min = 20, message = "Description must be at least 20 characters"))]
    pub description: String,

    pub kind: PropertyType,

    #[validate(range(min = 1000, message = "Price must be at least ₹1000"))]
    pub price: u32,

    #[validate(length(min = 2, message = "City is required"))]
    pub city: String,

    #[validate(length(min = 2, message = "Area is required"))]
    pub area: String,

    pub is_active: bool,

    images: ImageList,
    original: Option<Property>,
}

impl PropertyDraft {
    /// Blank form for a new listing
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            kind: PropertyType::Flat,
            price: 0,
            city: String::new(),
            area: String::new(),
            is_active: true,
            images: ImageList::new(),
            original: None,
        }
    }

    /// Form pre-filled from an existing listing
    pub fn from_property(property: &Property) -> Self {
        Self {
            title: property.title.clone(),
            description: property.description.clone(),
            kind: property.kind,
            price: property.price,
            city: property.location.city.clone(),
            area: property.location.area.clone(),
            is_active: property.is_active,
            images: ImageList::from_images(&property.images),
            original: Some(property.clone()),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.original.is_some()
    }

    pub fn images(&self) -> &ImageList {
        &self.images
    }

    pub fn images_mut(&mut self) -> &mut ImageList {
        &mut self.images
    }

    /// Check every field, reporting all failures at once. Text fields are
    /// judged the way they will be saved, without surrounding whitespace.
    pub fn check(&self) -> Result<(), DraftError> {
        self.trimmed().validate().map_err(DraftError::from)
    }

    fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            city: self.city.trim().to_string(),
            area: self.area.trim().to_string(),
            ..self.clone()
        }
    }

    /// Validate and build the listing that would be saved
    pub fn submit(&self, owner_id: &str) -> Result<Property, DraftError> {
        if let Err(err) = self.check() {
            warn!("Property form rejected: {}", err);
            return Err(err);
        }

        let draft = self.trimmed();
        let now = Utc::now();
        let property = match &self.original {
            Some(original) => {
                let mut property = original.clone();
                draft.apply_to(&mut property);
                property.updated_at = now;
                info!("✅ Property {} updated successfully", property.id);
                property
            }
            None => {
                let id = Uuid::new_v4().to_string();
                let mut property = Property {
                    id: id.clone(),
                    title: String::new(),
                    description: String::new(),
                    kind: self.kind,
                    price: 0,
                    security_deposit: None,
                    location: Location {
                        address: String::new(),
                        city: String::new(),
                        area: String::new(),
                        state: String::new(),
                        pincode: String::new(),
                        latitude: None,
                        longitude: None,
                    },
                    amenities: Vec::new(),
                    images: Vec::new(),
                    rules: Vec::new(),
                    bedrooms: None,
                    bathrooms: None,
                    total_beds: None,
                    area_sqft: None,
                    furnishing: None,
                    available_from: now.date_naive(),
                    created_at: now,
                    updated_at: now,
                    owner_id: owner_id.to_string(),
                    is_active: true,
                    gender: None,
                    rating: None,
                    num_reviews: None,
                };
                draft.apply_to(&mut property);
                info!("✅ Property {} added successfully", id);
                property
            }
        };

        Ok(property)
    }

    fn apply_to(&self, property: &mut Property) {
        property.title = self.title.clone();
        property.description = self.description.clone();
        property.kind = self.kind;
        property.price = self.price;
        property.location.city = self.city.clone();
        property.location.area = self.area.clone();
        property.is_active = self.is_active;
        property.images = self.images.to_property_images(&property.id);
    }
}

impl Default for PropertyDraft {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::RawImage;
    use crate::listings::MockCatalog;

    fn filled() -> PropertyDraft {
        let mut draft = PropertyDraft::new();
        draft.title = "Sunny studio".to_string();
        draft.description = "Bright studio with a balcony and great light".to_string();
        draft.price = 18_000;
        draft.city = "Bangalore".to_string();
        draft.area = "Jayanagar".to_string();
        draft
    }

    #[test]
    fn blank_form_reports_every_field() {
        let err = PropertyDraft::new().check().unwrap_err();
        let DraftError::Invalid(fields) = err;
        let names: Vec<_> = fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(names, vec!["area", "city", "description", "price", "title"]);
        assert!(fields
            .iter()
            .any(|f| f.message == "Price must be at least ₹1000"));
    }

    #[test]
    fn submit_new_listing() {
        let mut draft = filled();
        draft
            .images_mut()
            .upload(vec![
                RawImage::new("a.png", "image/png", vec![1]),
                RawImage::new("b.png", "image/png", vec![2]),
            ])
            .unwrap();
        draft.images_mut().set_thumbnail(1).unwrap();

        let property = draft.submit("owner-7").unwrap();
        assert!(!draft.is_editing());
        assert_eq!(property.owner_id, "owner-7");
        assert_eq!(property.location.area, "Jayanagar");
        assert_eq!(property.images.len(), 2);
        assert!(property.images[1].is_main);
        assert_eq!(property.main_image().map(|i| i.id.clone()), Some(format!("{}-img-2", property.id)));
    }

    #[test]
    fn submit_rejects_short_title() {
        let mut draft = filled();
        draft.title = "Flat".to_string();
        let err = draft.submit("owner-1").unwrap_err();
        assert_eq!(
            err,
            DraftError::Invalid(vec![FieldError {
                field: "title".to_string(),
                message: "Title must be at least 5 characters".to_string(),
            }])
        );
    }

    #[test]
    fn padding_does_not_count_towards_lengths() {
        let mut draft = filled();
        draft.title = "  ab      ".to_string();
        draft.description = format!("x{}", " ".repeat(24));
        draft.city = " B ".to_string();

        let DraftError::Invalid(fields) = draft.submit("owner-1").unwrap_err();
        let names: Vec<_> = fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(names, vec!["city", "description", "title"]);
    }

    #[test]
    fn saved_fields_are_trimmed() {
        let mut draft = filled();
        draft.title = "   Sunny studio  ".to_string();
        draft.city = " Bangalore ".to_string();

        let property = draft.submit("owner-1").unwrap();
        assert_eq!(property.title, "Sunny studio");
        assert_eq!(property.location.city, "Bangalore");
    }

    #[test]
    fn editing_keeps_identity() {
        let original = MockCatalog::new()
            .listings()
            .into_iter()
            .find(|p| p.id == "flat-1")
            .unwrap();

        let mut draft = PropertyDraft::from_property(&original);
        assert!(draft.is_editing());
        assert_eq!(draft.images().len(), 1);
        draft.price = 27_500;

        let updated = draft.submit("someone-else").unwrap();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.owner_id, original.owner_id);
        assert_eq!(updated.price, 27_500);
        assert_eq!(updated.amenities, original.amenities);
        assert!(updated.updated_at >= original.updated_at);
    }
}
