//! # Product Form State
//!
//! Everything the user edits on the listing page: the scalar fields, the marker
//! position and the image set. The form is populated by the load sequencer,
//! mutated by UI events, checked by [`ProductFormState::validate`] before a
//! submission and reset once a submission completes.

use super::geolocation::GeolocationState;
use super::image_set::ImageSet;
use super::preview::PreviewRegistry;
use crate::model::{Category, ImageRef, MapEvent, ProductPatch, ProductRecord};
use std::fmt::Display;
use thiserror::Error;
use tracing::{debug, warn};

/// Inputs that must be filled in before a submission is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Title,
    Category,
    Price,
    Description,
    Address,
    Images,
}

impl Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RequiredField::Title => "title",
            RequiredField::Category => "category",
            RequiredField::Price => "price",
            RequiredField::Description => "description",
            RequiredField::Address => "address",
            RequiredField::Images => "images",
        })
    }
}

/// Reasons a submission is rejected before any remote call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", join(.0))]
    MissingFields(Vec<RequiredField>),

    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),

    /// Only raised when submitting after a failed load is blocked by config.
    #[error("The listing did not load completely")]
    LoadIncomplete,
}

fn join(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    /// Text for the blocking prompt shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::MissingFields(_) => {
                "Please fill in the title, category, price, description, address and at least one photo.".to_string()
            }
            ValidationError::InvalidPrice(_) => "Please enter the price as a number of zero or more.".to_string(),
            ValidationError::LoadIncomplete => {
                "The listing could not be loaded. Reload the page before saving.".to_string()
            }
        }
    }
}

/// A form snapshot that passed validation, ready for the write sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSubmission {
    pub patch: ProductPatch,
    /// Images in display order; pending entries still need uploading.
    pub images: Vec<ImageRef>,
}

impl ValidatedSubmission {
    pub fn pending_count(&self) -> usize {
        self.images.iter().filter(|i| i.is_pending()).count()
    }
}

#[derive(Debug, Default)]
pub struct ProductFormState {
    pub title: String,
    pub category: Option<Category>,
    /// Kept as typed text; parsed on submit.
    pub price: String,
    pub description: String,
    pub geolocation: GeolocationState,
    pub images: ImageSet,
}

impl ProductFormState {
    pub fn new(previews: PreviewRegistry) -> Self {
        Self {
            images: ImageSet::new(previews),
            ..Default::default()
        }
    }

    /// Copies a loaded record into the scalar fields and the marker.
    pub fn apply_record(&mut self, record: &ProductRecord) {
        self.title = record.title.clone();
        self.category = match record.category.parse() {
            Ok(category) => Some(category),
            Err(e) => {
                if !record.category.is_empty() {
                    warn!(product_id = %record.id, error = %e, "Stored category ignored");
                }
                None
            }
        };
        self.price = record.price.to_string();
        self.description = record.description.clone();
        self.geolocation.set_from_map_event(MapEvent::new(
            record.latitude,
            record.longitude,
            record.address.clone(),
        ));
        debug!(product_id = %record.id, "Form populated from record");
    }

    /// Checks every precondition of a submission.
    ///
    /// Only empty text counts as missing; whitespace is kept as typed.
    pub fn validate(&self) -> Result<ValidatedSubmission, ValidationError> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push(RequiredField::Title);
        }
        if self.category.is_none() {
            missing.push(RequiredField::Category);
        }
        if self.price.is_empty() {
            missing.push(RequiredField::Price);
        }
        if self.description.is_empty() {
            missing.push(RequiredField::Description);
        }
        if self.geolocation.address().is_empty() {
            missing.push(RequiredField::Address);
        }
        if self.images.is_empty() {
            missing.push(RequiredField::Images);
        }

        let category = match (self.category, missing.is_empty()) {
            (Some(category), true) => category,
            _ => return Err(ValidationError::MissingFields(missing)),
        };

        let price = parse_price(&self.price)?;
        let point = self.geolocation.point();

        Ok(ValidatedSubmission {
            patch: ProductPatch {
                title: self.title.clone(),
                category,
                price,
                description: self.description.clone(),
                latitude: point.latitude,
                longitude: point.longitude,
                address: point.address.clone(),
            },
            images: self.images.iter().cloned().collect(),
        })
    }

    /// Returns every field to its initial empty value and releases previews.
    pub fn reset(&mut self) {
        self.title.clear();
        self.category = None;
        self.price.clear();
        self.description.clear();
        self.geolocation.reset();
        self.images.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.category.is_none()
            && self.price.is_empty()
            && self.description.is_empty()
            && self.geolocation == GeolocationState::default()
            && self.images.is_empty()
    }
}

fn parse_price(text: &str) -> Result<f64, ValidationError> {
    match text.trim().parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(ValidationError::InvalidPrice(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LocalFile, ProductId};

    fn filled() -> ProductFormState {
        let mut form = ProductFormState::default();
        form.title = "Book".into();
        form.category = Some(Category::Literature);
        form.price = "10000".into();
        form.description = "Read once.".into();
        form.geolocation
            .set_from_map_event(MapEvent::new(37.5, 127.0, "Seoul"));
        form.images.attach(vec![LocalFile::new("cover.jpg", vec![1, 2])]);
        form
    }

    #[test]
    fn complete_form_produces_patch() {
        let submission = filled().validate().unwrap();
        assert_eq!(submission.patch.price, 10000.0);
        assert_eq!(submission.patch.category, Category::Literature);
        assert_eq!(submission.patch.address, "Seoul");
        assert_eq!(submission.images.len(), 1);
        assert_eq!(submission.pending_count(), 1);
    }

    fn blank(form: &mut ProductFormState, field: RequiredField) {
        match field {
            RequiredField::Title => form.title.clear(),
            RequiredField::Category => form.category = None,
            RequiredField::Price => form.price.clear(),
            RequiredField::Description => form.description.clear(),
            RequiredField::Address => form
                .geolocation
                .set_from_map_event(MapEvent::new(1.0, 2.0, "")),
            RequiredField::Images => form.images.clear(),
        }
    }

    #[test]
    fn each_missing_field_is_reported() {
        let fields = [
            RequiredField::Title,
            RequiredField::Category,
            RequiredField::Price,
            RequiredField::Description,
            RequiredField::Address,
            RequiredField::Images,
        ];

        for field in fields {
            let mut form = filled();
            blank(&mut form, field);
            assert_eq!(
                form.validate(),
                Err(ValidationError::MissingFields(vec![field])),
                "expected {field} to be reported"
            );
        }
    }

    #[test]
    fn empty_form_reports_all_fields() {
        let err = ProductFormState::default().validate().unwrap_err();
        match err {
            ValidationError::MissingFields(fields) => assert_eq!(fields.len(), 6),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn whitespace_text_is_not_missing() {
        let mut form = filled();
        form.title = " ".into();
        form.description = "\t".into();
        form.geolocation
            .set_from_map_event(MapEvent::new(37.5, 127.0, "  "));

        let submission = form.validate().unwrap();
        assert_eq!(submission.patch.title, " ");
        assert_eq!(submission.patch.description, "\t");
        assert_eq!(submission.patch.address, "  ");
    }

    #[test]
    fn non_numeric_or_negative_price_is_rejected() {
        for bad in ["ten", "-5", "NaN", "inf", "  "] {
            let mut form = filled();
            form.price = bad.into();
            assert_eq!(form.validate(), Err(ValidationError::InvalidPrice(bad.into())));
        }
    }

    #[test]
    fn apply_record_fills_fields_and_marker() {
        let mut form = ProductFormState::default();
        form.apply_record(&ProductRecord {
            id: ProductId::from("p1"),
            title: "Atlas".into(),
            category: "인문학".into(),
            price: 12500.0,
            description: "Hardcover".into(),
            latitude: 37.4,
            longitude: 127.1,
            address: "Seongnam".into(),
        });

        assert_eq!(form.title, "Atlas");
        assert_eq!(form.category, Some(Category::Humanities));
        assert_eq!(form.price, "12500");
        assert_eq!(form.geolocation.address(), "Seongnam");
        assert_eq!(form.geolocation.latitude(), 37.4);
    }

    #[test]
    fn unknown_category_loads_as_unset() {
        let mut form = ProductFormState::default();
        form.apply_record(&ProductRecord {
            id: ProductId::from("p1"),
            title: "Atlas".into(),
            category: "잡지".into(),
            price: 1.5,
            description: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            address: String::new(),
        });
        assert_eq!(form.category, None);
        assert_eq!(form.price, "1.5");
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let registry = PreviewRegistry::new();
        let mut form = ProductFormState::new(registry.clone());
        form.title = "x".into();
        form.images.attach(vec![LocalFile::new("a.png", vec![1])]);

        form.reset();
        assert!(form.is_empty());
        assert_eq!(registry.live_count(), 0);
    }
}
