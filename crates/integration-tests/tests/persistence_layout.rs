//! Persisted state layout: namespaced keys and camelCase collection shapes.

use larashen_core::{ProductId, Role};
use larashen_integration_tests::store_over;
use larashen_storefront::app::App;
use larashen_storefront::store::FileBackend;

#[test]
fn collections_land_under_namespaced_keys_with_the_documented_shape() {
    let dir = tempfile::tempdir().expect("tempdir");
    {
        let backend = FileBackend::open(dir.path()).expect("open backend");
        let mut app = App::new(store_over(backend)).expect("load app");

        app.add_to_cart(&ProductId::new("1"), "M").expect("add");
        app.login("amara@larashen.example", Some(Role::Customer))
            .expect("login");
        app.checkout().expect("checkout");
    }

    // products: array of Product with camelCase fields.
    let products =
        std::fs::read_to_string(dir.path().join("lns_products.json")).expect("products file");
    let products: serde_json::Value = serde_json::from_str(&products).expect("valid json");
    assert_eq!(products.as_array().map(Vec::len), Some(4));
    assert!(products[0].get("sizes").is_some());

    // gallery: array of GalleryItem keyed imageUrl/productId.
    let gallery =
        std::fs::read_to_string(dir.path().join("lns_gallery.json")).expect("gallery file");
    let gallery: serde_json::Value = serde_json::from_str(&gallery).expect("valid json");
    assert!(gallery[0].get("imageUrl").is_some());
    assert!(gallery[0].get("productId").is_some());

    // cart key is deleted after checkout.
    assert!(!dir.path().join("lns_cart.json").exists());

    // currentUser: single User object.
    let user = std::fs::read_to_string(dir.path().join("lns_user.json")).expect("user file");
    let user: serde_json::Value = serde_json::from_str(&user).expect("valid json");
    assert_eq!(user["role"], "customer");
    assert_eq!(user["name"], "amara");

    // orders: array of Order with the cart snapshot inlined.
    let orders = std::fs::read_to_string(dir.path().join("lns_orders.json")).expect("orders file");
    let orders: serde_json::Value = serde_json::from_str(&orders).expect("valid json");
    assert_eq!(orders.as_array().map(Vec::len), Some(1));
    assert_eq!(orders[0]["status"], "completed");
    assert!(orders[0]["items"][0].get("cartId").is_some());
    assert!(orders[0]["items"][0].get("selectedSize").is_some());
}
