//! Seed catalogue and gallery data.
//!
//! Installed on the first read of an empty store so the boutique is never
//! blank. Ids stay short and stable; admin-created entries use UUIDs.

use larashen_core::{GalleryItem, GalleryItemId, Price, Product, ProductId};

fn sizes(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| (*s).to_owned()).collect()
}

/// The default four-piece catalogue.
#[must_use]
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "The Zaria Indigo Gown".to_owned(),
            price: Price::from(1250),
            category: "Aso Ebi".to_owned(),
            description: "A modern reinterpretation of traditional Adire textiles, crafted into \
                          a flowing silhouette perfect for the grandest balls in Lagos."
                .to_owned(),
            image: "https://images.unsplash.com/photo-1566174053879-31528523f8ae?auto=format&fit=crop&q=80&w=800"
                .to_owned(),
            sizes: sizes(&["XS", "S", "M", "L"]),
        },
        Product {
            id: ProductId::new("2"),
            name: "Lekki Executive Trench".to_owned(),
            price: Price::from(890),
            category: "Outerwear".to_owned(),
            description: "Sharp tailoring meets bold aesthetics. A double-breasted trench \
                          designed for the Victoria Island mogul."
                .to_owned(),
            image: "https://images.unsplash.com/photo-1585487000160-6ebcfceb0d03?auto=format&fit=crop&q=80&w=800"
                .to_owned(),
            sizes: sizes(&["S", "M", "L", "XL"]),
        },
        Product {
            id: ProductId::new("3"),
            name: "Benin Coral Embellished Top".to_owned(),
            price: Price::from(450),
            category: "Tops".to_owned(),
            description: "Hand-stitched beading reminiscent of royal coral beads, set against \
                          sheer chiffon. Delicate and regal."
                .to_owned(),
            image: "https://images.unsplash.com/photo-1551163943-3f6a29e3965e?auto=format&fit=crop&q=80&w=800"
                .to_owned(),
            sizes: sizes(&["XS", "S", "M"]),
        },
        Product {
            id: ProductId::new("4"),
            name: "Savannah Wide-Leg Trousers".to_owned(),
            price: Price::from(550),
            category: "Bottoms".to_owned(),
            description: "High-waisted trousers in breathable linen, in earthy tones inspired \
                          by the Jos Plateau."
                .to_owned(),
            image: "https://images.unsplash.com/photo-1594633312681-425c7b97ccd1?auto=format&fit=crop&q=80&w=800"
                .to_owned(),
            sizes: sizes(&["S", "M", "L"]),
        },
    ]
}

/// The default lookbook.
#[must_use]
pub fn seed_gallery() -> Vec<GalleryItem> {
    let look = |id: &str, image_url: &str, caption: &str, product_id: &str| GalleryItem {
        id: GalleryItemId::new(id),
        image_url: image_url.to_owned(),
        caption: caption.to_owned(),
        product_id: ProductId::new(product_id),
    };

    vec![
        look(
            "g1",
            "https://images.unsplash.com/photo-1584286595398-a59f21d313f5?auto=format&fit=crop&q=80&w=800",
            "Evening Grace",
            "1",
        ),
        look(
            "g2",
            "https://images.unsplash.com/photo-1627483298235-f3ebac4dc614?auto=format&fit=crop&q=80&w=800",
            "Urban Chic",
            "2",
        ),
        look(
            "g3",
            "https://images.unsplash.com/photo-1589578228447-e1a4e481c6c8?auto=format&fit=crop&q=80&w=800",
            "Traditional Vibrance",
            "3",
        ),
        look(
            "g4",
            "https://images.unsplash.com/photo-1608228062593-382a5c3789b7?auto=format&fit=crop&q=80&w=800",
            "Savannah Walk",
            "4",
        ),
        look(
            "g5",
            "https://images.unsplash.com/photo-1564557287817-3785e38ec1f5?auto=format&fit=crop&q=80&w=800",
            "Royal Texture",
            "1",
        ),
        look(
            "g6",
            "https://images.unsplash.com/photo-1589156229687-496a31ad1d1f?auto=format&fit=crop&q=80&w=800",
            "Lagos Night",
            "3",
        ),
    ]
}
