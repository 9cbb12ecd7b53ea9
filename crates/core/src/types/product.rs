//! Catalogue entities: products and lookbook gallery items.

use serde::{Deserialize, Serialize};

use super::id::{GalleryItemId, ProductId};
use super::price::Price;

/// A catalogue product.
///
/// Products are append-only: entries are created by seed data or admin
/// submission and never updated or deleted in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique id across the catalogue.
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Free-text category label (e.g., "Aso Ebi", "Outerwear").
    pub category: String,
    pub description: String,
    /// Image URI (remote URL or data URI for admin uploads).
    pub image: String,
    /// Size labels in display order.
    pub sizes: Vec<String>,
}

impl Product {
    /// Whether `size` is one of this product's offered sizes.
    #[must_use]
    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }
}

/// A lookbook gallery entry pointing at a catalogue product.
///
/// The product reference is not validated at write time; rendering code
/// treats a dangling reference as "no shop-through affordance" rather than
/// an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: GalleryItemId,
    pub image_url: String,
    pub caption: String,
    pub product_id: ProductId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gown() -> Product {
        Product {
            id: ProductId::new("1"),
            name: "The Zaria Indigo Gown".to_owned(),
            price: Price::from(1250),
            category: "Aso Ebi".to_owned(),
            description: "Flowing silhouette.".to_owned(),
            image: "https://example.com/gown.jpg".to_owned(),
            sizes: vec!["XS".to_owned(), "S".to_owned(), "M".to_owned()],
        }
    }

    #[test]
    fn offers_size_matches_exact_labels() {
        let product = gown();
        assert!(product.offers_size("M"));
        assert!(!product.offers_size("XL"));
        assert!(!product.offers_size("m"));
    }

    #[test]
    fn product_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(gown()).expect("serialize");
        assert_eq!(json["id"], "1");
        assert_eq!(json["price"], "1250");
        assert!(json.get("sizes").is_some());
    }

    #[test]
    fn gallery_item_serializes_with_camel_case_fields() {
        let item = GalleryItem {
            id: GalleryItemId::new("g1"),
            image_url: "https://example.com/look.jpg".to_owned(),
            caption: "Evening Grace".to_owned(),
            product_id: ProductId::new("1"),
        };
        let json = serde_json::to_value(item).expect("serialize");
        assert_eq!(json["imageUrl"], "https://example.com/look.jpg");
        assert_eq!(json["productId"], "1");
    }
}
