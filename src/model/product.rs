/// Represents a marketplace listing as stored in the `products` table.
///
/// The editor never creates products. It loads an existing record by id,
/// lets the user change it and writes it back with a [`ProductPatch`].
use serde::{Deserialize, Serialize};

use std::fmt::Display;
use std::str::FromStr;

/// Opaque, externally assigned product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Book categories offered by the listing form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "경제경영")]
    EconomicsBusiness,
    #[serde(rename = "만화")]
    Comics,
    #[serde(rename = "사회과학")]
    SocialScience,
    #[serde(rename = "소설/시/희곡")]
    Literature,
    #[serde(rename = "어린이")]
    Children,
    #[serde(rename = "에세이")]
    Essay,
    #[serde(rename = "유아")]
    Infant,
    #[serde(rename = "인문학")]
    Humanities,
    #[serde(rename = "기타")]
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::EconomicsBusiness,
        Category::Comics,
        Category::SocialScience,
        Category::Literature,
        Category::Children,
        Category::Essay,
        Category::Infant,
        Category::Humanities,
        Category::Other,
    ];

    /// The label stored in the `category` column.
    pub fn label(&self) -> &'static str {
        match self {
            Category::EconomicsBusiness => "경제경영",
            Category::Comics => "만화",
            Category::SocialScience => "사회과학",
            Category::Literature => "소설/시/희곡",
            Category::Children => "어린이",
            Category::Essay => "에세이",
            Category::Infant => "유아",
            Category::Humanities => "인문학",
            Category::Other => "기타",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a stored label is not one of [`Category::ALL`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unknown category label: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A row of the `products` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub title: String,
    /// Raw label; may be empty or outside the known set for legacy rows.
    pub category: String,
    pub price: f64,
    #[serde(rename = "contents")]
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

// Fields written by the update step of a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub title: String,
    pub category: Category,
    pub price: f64,
    #[serde(rename = "contents")]
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

impl ProductRecord {
    /// Applies a patch in place, keeping the id.
    pub fn apply(&mut self, patch: ProductPatch) {
        self.title = patch.title;
        self.category = patch.category.label().to_string();
        self.price = patch.price;
        self.description = patch.description;
        self.latitude = patch.latitude;
        self.longitude = patch.longitude;
        self.address = patch.address;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>(), Ok(category));
        }
        assert!("잡지".parse::<Category>().is_err());
    }

    #[test]
    fn patch_serializes_description_as_contents() {
        let patch = ProductPatch {
            title: "Book".into(),
            category: Category::Literature,
            price: 10000.0,
            description: "like new".into(),
            latitude: 37.5,
            longitude: 127.0,
            address: "Seoul".into(),
        };
        let value = toml::Value::try_from(&patch).unwrap();
        assert_eq!(value.get("contents").and_then(|v| v.as_str()), Some("like new"));
        assert_eq!(value.get("category").and_then(|v| v.as_str()), Some("소설/시/희곡"));
    }
}
