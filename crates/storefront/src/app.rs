//! Application state coordinator.
//!
//! [`App`] owns the single source of render-time truth: the product list,
//! cart contents, and current user, mirrored from the persistent store.
//! Every mutating call goes through a domain service and then re-reads the
//! affected collection, so the mirrors are stale only between those two
//! steps. View selection is a synchronous state transition over a fixed set
//! of named views; at most one view is current.

use larashen_core::{
    CartItem, CartLineId, Email, GalleryItem, GalleryItemId, Order, Price, Product, ProductId,
    Role, User, cart_total,
};
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::error::AppError;
use crate::services::{cart, catalog, orders, session};
use crate::store::Store;

/// Fallback image for admin product submissions without an upload.
const DEFAULT_PRODUCT_IMAGE: &str =
    "https://images.unsplash.com/photo-1596305589440-4e292f2a14a6?auto=format&fit=crop&q=80&w=800";

/// Fallback image for gallery submissions without an upload.
const DEFAULT_LOOK_IMAGE: &str =
    "https://images.unsplash.com/photo-1584286595398-a59f21d313f5?auto=format&fit=crop&q=80&w=800";

/// Size run assigned to admin-created products.
const FULL_SIZE_RUN: [&str; 5] = ["XS", "S", "M", "L", "XL"];

/// The fixed set of named views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Shop,
    Gallery,
    ProductDetail,
    Cart,
    Login,
    Admin,
    Orders,
}

impl View {
    /// Resolve a path to a view. Unknown paths fall back to home.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        match path {
            "/shop" => Self::Shop,
            "/gallery" => Self::Gallery,
            "/product" => Self::ProductDetail,
            "/cart" => Self::Cart,
            "/login" => Self::Login,
            "/admin" => Self::Admin,
            "/profile" => Self::Orders,
            _ => Self::Home,
        }
    }
}

/// A gallery look joined against the catalogue.
///
/// `product` is `None` when the look's reference dangles; rendering then
/// omits the shop-through affordance instead of failing.
#[derive(Debug, Clone)]
pub struct Look {
    pub item: GalleryItem,
    pub product: Option<Product>,
}

/// The resolved render-time page for the current view.
///
/// Gating happens here: the admin view for a non-admin resolves to
/// [`Page::AccessDenied`], the orders view without a user resolves to the
/// login page, and a product-detail view with no resolvable selection falls
/// back to home.
#[derive(Debug, Clone)]
pub enum Page {
    Home,
    Shop { products: Vec<Product> },
    Gallery { looks: Vec<Look> },
    ProductDetail { product: Product },
    Cart { items: Vec<CartItem>, total: Decimal },
    Login,
    Admin { products: Vec<Product> },
    AccessDenied,
    Orders { orders: Vec<Order> },
}

/// Outcome of a checkout attempt.
#[derive(Debug, Clone)]
pub enum CheckoutOutcome {
    /// Order persisted; cart cleared.
    Placed(Order),
    /// No current user; navigated to the login view, cart untouched.
    LoginRequired,
}

/// Admin form input for a new product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub description: String,
    /// Image URI; the house campaign shot is used when absent.
    pub image: Option<String>,
}

/// Admin form input for a new gallery look.
#[derive(Debug, Clone)]
pub struct NewLook {
    pub caption: String,
    pub product_id: ProductId,
    pub image_url: Option<String>,
}

/// The application state coordinator.
pub struct App {
    store: Store,
    products: Vec<Product>,
    cart: Vec<CartItem>,
    user: Option<User>,
    view: View,
    selected_product: Option<ProductId>,
}

impl App {
    /// Create the coordinator over the only store handle, loading the
    /// in-memory mirrors.
    ///
    /// # Errors
    ///
    /// Returns an error if any collection cannot be read.
    pub fn new(store: Store) -> Result<Self, AppError> {
        let products = store.products()?;
        let cart = store.cart()?;
        let user = store.current_user()?;

        Ok(Self {
            store,
            products,
            cart,
            user,
            view: View::Home,
            selected_product: None,
        })
    }

    // =========================================================================
    // Mirrors
    // =========================================================================

    /// The mirrored catalogue.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The mirrored cart.
    #[must_use]
    pub fn cart(&self) -> &[CartItem] {
        &self.cart
    }

    /// Total units across all cart lines (the navbar badge).
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.iter().map(|line| line.quantity).sum()
    }

    /// The mirrored current user.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Look up a product in the mirror by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    // =========================================================================
    // Routing
    // =========================================================================

    /// The current view.
    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    /// Switch to `view`. Navigating away from product detail leaves the
    /// remembered selection in place; it is simply unused until next visited.
    pub fn navigate(&mut self, view: View) {
        debug!(from = ?self.view, to = ?view, "navigate");
        self.view = view;
    }

    /// Switch views by path, with unknown paths falling back to home.
    pub fn navigate_path(&mut self, path: &str) -> View {
        self.navigate(View::from_path(path));
        self.view
    }

    /// Remember `id` as the selected product and open its detail view.
    pub fn select_product(&mut self, id: ProductId) {
        self.selected_product = Some(id);
        self.navigate(View::ProductDetail);
    }

    /// Resolve the current view into a renderable page, applying gating.
    ///
    /// # Errors
    ///
    /// Returns an error if a collection read fails.
    pub fn page(&self) -> Result<Page, AppError> {
        Ok(match self.view {
            View::Home => Page::Home,
            View::Shop => Page::Shop {
                products: self.products.clone(),
            },
            View::Gallery => Page::Gallery {
                looks: self.gallery()?,
            },
            View::ProductDetail => self
                .selected_product
                .as_ref()
                .and_then(|id| self.product(id))
                .map_or(Page::Home, |product| Page::ProductDetail {
                    product: product.clone(),
                }),
            View::Cart => Page::Cart {
                items: self.cart.clone(),
                total: cart_total(&self.cart),
            },
            View::Login => Page::Login,
            View::Admin => match &self.user {
                Some(user) if user.is_admin() => Page::Admin {
                    products: self.products.clone(),
                },
                _ => Page::AccessDenied,
            },
            View::Orders => match &self.user {
                Some(user) => Page::Orders {
                    orders: orders::orders_for(&self.store, Some(&user.id))?,
                },
                None => Page::Login,
            },
        })
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The lookbook joined against the catalogue mirror.
    ///
    /// # Errors
    ///
    /// Returns an error if the gallery cannot be read.
    pub fn gallery(&self) -> Result<Vec<Look>, AppError> {
        let looks = self
            .store
            .gallery()?
            .into_iter()
            .map(|item| {
                let product = self.product(&item.product_id).cloned();
                Look { item, product }
            })
            .collect();
        Ok(looks)
    }

    /// Orders for the current user, oldest first. Empty when logged out.
    ///
    /// # Errors
    ///
    /// Returns an error if the order collection cannot be read.
    pub fn orders(&self) -> Result<Vec<Order>, AppError> {
        match &self.user {
            Some(user) => Ok(orders::orders_for(&self.store, Some(&user.id))?),
            None => Ok(Vec::new()),
        }
    }

    /// Every order regardless of owner (the admin view-all read).
    ///
    /// # Errors
    ///
    /// Returns an error if the order collection cannot be read.
    pub fn all_orders(&self) -> Result<Vec<Order>, AppError> {
        Ok(orders::orders_for(&self.store, None)?)
    }

    // =========================================================================
    // Mutations (service call, then re-read the affected collection)
    // =========================================================================

    /// Add one unit of `(product, size)` to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ProductNotFound`] for an unknown product id, or a
    /// store error if persistence fails.
    pub fn add_to_cart(&mut self, product_id: &ProductId, size: &str) -> Result<(), AppError> {
        let product = self
            .product(product_id)
            .cloned()
            .ok_or_else(|| AppError::ProductNotFound(product_id.clone()))?;

        cart::add_to_cart(&self.store, &product, size)?;
        self.cart = self.store.cart()?;
        Ok(())
    }

    /// Remove the cart line with `cart_id`; no-op if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn remove_from_cart(&mut self, cart_id: &CartLineId) -> Result<(), AppError> {
        cart::remove_from_cart(&self.store, cart_id)?;
        self.cart = self.store.cart()?;
        Ok(())
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn clear_cart(&mut self) -> Result<(), AppError> {
        cart::clear(&self.store)?;
        self.cart = self.store.cart()?;
        Ok(())
    }

    /// Log in and return to the home view.
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed email or if persistence fails.
    pub fn login(&mut self, email: &str, role: Option<Role>) -> Result<User, AppError> {
        let email = Email::parse(email)?;
        let user = session::login(&self.store, email, role)?;
        self.user = Some(user.clone());
        self.navigate(View::Home);
        Ok(user)
    }

    /// Log out and return to the home view.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn logout(&mut self) -> Result<(), AppError> {
        session::logout(&self.store)?;
        self.user = None;
        self.navigate(View::Home);
        Ok(())
    }

    /// Check out the mirrored cart.
    ///
    /// Without a current user this navigates to the login view and leaves
    /// the cart untouched. Otherwise the order snapshot is persisted, the
    /// cart mirror refreshed (now empty), and the view moves to order
    /// history.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn checkout(&mut self) -> Result<CheckoutOutcome, AppError> {
        let Some(user) = self.user.clone() else {
            self.navigate(View::Login);
            return Ok(CheckoutOutcome::LoginRequired);
        };

        let items = self.cart.clone();
        let total = cart_total(&items);
        let order = orders::place_order(&self.store, &user, items, total)?;

        self.cart = self.store.cart()?;
        self.navigate(View::Orders);
        Ok(CheckoutOutcome::Placed(order))
    }

    /// Append an admin-submitted product to the catalogue.
    ///
    /// # Errors
    ///
    /// Returns an error for a negative price or if persistence fails.
    pub fn add_product(&mut self, form: NewProduct) -> Result<Product, AppError> {
        let product = Product {
            id: ProductId::new(Uuid::new_v4().to_string()),
            name: form.name,
            price: Price::new(form.price)?,
            category: form.category,
            description: form.description,
            image: form.image.unwrap_or_else(|| DEFAULT_PRODUCT_IMAGE.to_owned()),
            sizes: FULL_SIZE_RUN.iter().map(|s| (*s).to_owned()).collect(),
        };

        catalog::save_product(&self.store, product.clone())?;
        self.products = self.store.products()?;
        Ok(product)
    }

    /// Append an admin-submitted look to the gallery.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails.
    pub fn add_gallery_item(&mut self, form: NewLook) -> Result<GalleryItem, AppError> {
        let item = GalleryItem {
            id: GalleryItemId::new(Uuid::new_v4().to_string()),
            image_url: form.image_url.unwrap_or_else(|| DEFAULT_LOOK_IMAGE.to_owned()),
            caption: form.caption,
            product_id: form.product_id,
        };

        catalog::save_gallery_item(&self.store, item.clone())?;
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBackend;

    fn test_app() -> App {
        App::new(Store::new(Box::new(MemoryBackend::new()))).expect("app")
    }

    #[test]
    fn unknown_paths_fall_back_to_home() {
        assert_eq!(View::from_path("/"), View::Home);
        assert_eq!(View::from_path("/shop"), View::Shop);
        assert_eq!(View::from_path("/profile"), View::Orders);
        assert_eq!(View::from_path("/no-such-page"), View::Home);
    }

    #[test]
    fn admin_view_is_gated_by_role() {
        let mut app = test_app();
        app.navigate(View::Admin);
        assert!(matches!(app.page().expect("page"), Page::AccessDenied));

        app.login("customer@larashen.example", None).expect("login");
        app.navigate(View::Admin);
        assert!(matches!(app.page().expect("page"), Page::AccessDenied));

        app.login("boss@larashen.example", Some(Role::Admin))
            .expect("login");
        app.navigate(View::Admin);
        assert!(matches!(app.page().expect("page"), Page::Admin { .. }));
    }

    #[test]
    fn product_detail_without_selection_falls_back_to_home() {
        let mut app = test_app();
        app.navigate(View::ProductDetail);
        assert!(matches!(app.page().expect("page"), Page::Home));

        app.select_product(ProductId::new("1"));
        assert!(matches!(
            app.page().expect("page"),
            Page::ProductDetail { .. }
        ));

        // Navigating away keeps the remembered selection.
        app.navigate(View::Shop);
        app.navigate(View::ProductDetail);
        assert!(matches!(
            app.page().expect("page"),
            Page::ProductDetail { .. }
        ));
    }

    #[test]
    fn checkout_without_user_redirects_to_login_and_keeps_cart() {
        let mut app = test_app();
        app.add_to_cart(&ProductId::new("1"), "M").expect("add");

        let outcome = app.checkout().expect("checkout");
        assert!(matches!(outcome, CheckoutOutcome::LoginRequired));
        assert_eq!(app.view(), View::Login);
        assert_eq!(app.cart().len(), 1);
    }

    #[test]
    fn checkout_places_order_and_refreshes_cart_mirror() {
        let mut app = test_app();
        app.add_to_cart(&ProductId::new("1"), "M").expect("add");
        app.add_to_cart(&ProductId::new("1"), "M").expect("add again");
        assert_eq!(app.cart_count(), 2);

        app.login("amara@larashen.example", None).expect("login");
        let outcome = app.checkout().expect("checkout");

        let CheckoutOutcome::Placed(order) = outcome else {
            panic!("expected a placed order");
        };
        assert_eq!(order.total, Price::from(1250).times(2));
        assert!(app.cart().is_empty());
        assert_eq!(app.view(), View::Orders);
        assert_eq!(app.orders().expect("orders").len(), 1);
    }

    #[test]
    fn add_to_cart_rejects_unknown_product() {
        let mut app = test_app();
        let err = app
            .add_to_cart(&ProductId::new("missing"), "M")
            .expect_err("unknown product");
        assert!(matches!(err, AppError::ProductNotFound(_)));
    }

    #[test]
    fn admin_product_submission_lands_in_the_mirror() {
        let mut app = test_app();
        let product = app
            .add_product(NewProduct {
                name: "Adire Silk Scarf".to_owned(),
                price: Decimal::from(120),
                category: "Accessories".to_owned(),
                description: "Hand-dyed silk.".to_owned(),
                image: None,
            })
            .expect("add product");

        assert_eq!(app.products().len(), 5);
        assert!(app.product(&product.id).is_some());
        assert_eq!(product.image, DEFAULT_PRODUCT_IMAGE);
    }

    #[test]
    fn gallery_join_tolerates_dangling_references() {
        let mut app = test_app();
        app.add_gallery_item(NewLook {
            caption: "Ghost Look".to_owned(),
            product_id: ProductId::new("deleted"),
            image_url: None,
        })
        .expect("add look");

        let looks = app.gallery().expect("gallery");
        assert_eq!(looks.len(), 7);
        let ghost = looks.last().expect("appended look");
        assert!(ghost.product.is_none());
        assert!(looks.first().expect("seed look").product.is_some());
    }
}
