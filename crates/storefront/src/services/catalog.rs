//! Catalogue mutation: append-only product and gallery growth.

use larashen_core::{GalleryItem, Product};
use tracing::info;

use crate::store::{Store, StoreError};

/// Append `product` to the catalogue.
///
/// No validation beyond what the caller already performed; uniqueness of
/// the id is the caller's concern (ids are generated, not chosen).
///
/// # Errors
///
/// Returns an error if the catalogue cannot be read or persisted.
pub fn save_product(store: &Store, product: Product) -> Result<(), StoreError> {
    info!(product = %product.id, name = %product.name, "adding product to catalogue");
    store.save_product(product)
}

/// Append `item` to the lookbook gallery.
///
/// The product reference is not checked against the catalogue; a dangling
/// reference simply loses its shop-through affordance at render time.
///
/// # Errors
///
/// Returns an error if the gallery cannot be read or persisted.
pub fn save_gallery_item(store: &Store, item: GalleryItem) -> Result<(), StoreError> {
    info!(item = %item.id, product = %item.product_id, "adding look to gallery");
    store.save_gallery_item(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBackend;
    use larashen_core::{GalleryItemId, Price, ProductId};

    #[test]
    fn catalogue_and_gallery_grow_append_only() {
        let store = Store::new(Box::new(MemoryBackend::new()));
        let before = store.products().expect("products");

        save_product(
            &store,
            Product {
                id: ProductId::new("p-new"),
                name: "Adire Silk Scarf".to_owned(),
                price: Price::from(120),
                category: "Accessories".to_owned(),
                description: String::new(),
                image: "https://example.com/scarf.jpg".to_owned(),
                sizes: vec!["OS".to_owned()],
            },
        )
        .expect("save product");

        let after = store.products().expect("products");
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], &before[..]);

        // A gallery item may reference a product that does not exist.
        save_gallery_item(
            &store,
            GalleryItem {
                id: GalleryItemId::new("g-new"),
                image_url: "https://example.com/look.jpg".to_owned(),
                caption: "Studio Test".to_owned(),
                product_id: ProductId::new("does-not-exist"),
            },
        )
        .expect("save look");
        assert_eq!(store.gallery().expect("gallery").len(), 7);
    }
}
