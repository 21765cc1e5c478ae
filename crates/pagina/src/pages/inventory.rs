//! Inventory (products) page object.
//!
//! Cart state per product is a two-state machine driven by which
//! affordance is live: `NotInCart -> (add) -> InCart -> (remove) ->
//! NotInCart`. The visible button label and its `data-test` id move in
//! lock-step (`add-to-cart-<slug>` vs `remove-<slug>`), and the cart badge
//! equals the number of products currently in the cart.

use tracing::info;

use crate::element::Element;
use crate::page::{BrowserPage, PageConfig};
use crate::page_object::PageObject;
use crate::registry::ElementRegistry;
use crate::result::{PaginaError, PaginaResult};
use crate::selector::{ElementDescriptor, Selector};
use crate::wait::WaitOptions;

/// The currently visible action control for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAffordance {
    /// Product is not in the cart; "Add to cart" is shown.
    AddToCart,
    /// Product is in the cart; "Remove" is shown.
    Remove,
}

/// Page object for the inventory view.
#[derive(Debug)]
pub struct InventoryPage<P: BrowserPage> {
    page: P,
    registry: ElementRegistry,
    config: PageConfig,
}

impl<P: BrowserPage> InventoryPage<P> {
    /// Create an inventory page over a browsing context with default config.
    pub fn new(page: P) -> Self {
        Self::with_config(page, PageConfig::default())
    }

    /// Create an inventory page with explicit configuration.
    pub fn with_config(page: P, config: PageConfig) -> Self {
        let registry = ElementRegistry::new("InventoryPage")
            .with_element("title", Selector::test_id("title"))
            .with_element("shopping-cart-badge", Selector::test_id("shopping-cart-badge"));
        Self {
            page,
            registry,
            config,
        }
    }

    fn wait(&self) -> WaitOptions {
        WaitOptions::from_durations(self.config.action_timeout, self.config.poll_interval)
    }

    /// Bind a registered element to the live context.
    pub fn element(&mut self, name: &str) -> PaginaResult<Element<'_, P>> {
        let wait = self.wait();
        self.registry.resolve(name, &mut self.page, wait)
    }

    /// Bind a per-product element by its `data-test` id.
    fn product_element(&mut self, test_id: String) -> Element<'_, P> {
        let wait = self.wait();
        let descriptor = ElementDescriptor::new(test_id.clone(), Selector::test_id(test_id));
        Element::bind(&mut self.page, descriptor, "InventoryPage", wait)
    }

    /// Navigate to the inventory page's canonical location.
    pub async fn navigate(&mut self) -> PaginaResult<()> {
        let url = PageObject::url(self);
        info!(%url, "navigate to inventory page");
        self.page.navigate(&url).await
    }

    /// Add a product to the cart by slug.
    pub async fn add_to_cart(&mut self, product: &str) -> PaginaResult<()> {
        info!(product, "add to cart");
        self.product_element(format!("add-to-cart-{product}"))
            .click()
            .await
    }

    /// Remove a product from the cart by slug.
    pub async fn remove_from_cart(&mut self, product: &str) -> PaginaResult<()> {
        info!(product, "remove from cart");
        self.product_element(format!("remove-{product}"))
            .click()
            .await
    }

    /// Which affordance is currently live for a product.
    ///
    /// # Errors
    ///
    /// `ElementNotFound` when neither affordance is present (product not in
    /// the catalog, or the view is not rendered).
    pub async fn affordance(&mut self, product: &str) -> PaginaResult<CartAffordance> {
        if self
            .product_element(format!("add-to-cart-{product}"))
            .count()
            .await?
            > 0
        {
            return Ok(CartAffordance::AddToCart);
        }
        if self
            .product_element(format!("remove-{product}"))
            .count()
            .await?
            > 0
        {
            return Ok(CartAffordance::Remove);
        }
        Err(PaginaError::ElementNotFound {
            element: product.to_string(),
            page: "InventoryPage".to_string(),
        })
    }

    /// Text of the affordance button for a product, `""` when absent.
    pub async fn affordance_label(&mut self, product: &str) -> PaginaResult<String> {
        let affordance = self.affordance(product).await?;
        let test_id = match affordance {
            CartAffordance::AddToCart => format!("add-to-cart-{product}"),
            CartAffordance::Remove => format!("remove-{product}"),
        };
        self.product_element(test_id).text_content().await
    }

    /// Number of items in the cart as shown by the badge.
    ///
    /// An absent badge means an empty cart and maps to 0.
    pub async fn badge_count(&mut self) -> PaginaResult<usize> {
        let badge = self.element("shopping-cart-badge")?;
        if badge.count().await? == 0 {
            return Ok(0);
        }
        let text = badge.text_content().await?;
        text.parse().map_err(|_| PaginaError::Page {
            message: format!("cart badge text '{text}' is not a count"),
        })
    }

    /// Aggregate count of "Add to cart" affordances across the catalog.
    pub async fn add_button_count(&mut self) -> PaginaResult<usize> {
        let selector = Selector::css("[data-test^=\"add-to-cart-\"]");
        self.page.query_count(&selector).await
    }

    /// Borrow the underlying browsing context.
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Release the underlying browsing context.
    pub fn into_page(self) -> P {
        self.page
    }
}

impl<P: BrowserPage> PageObject for InventoryPage<P> {
    fn url(&self) -> String {
        format!(
            "{}/inventory.html",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    fn page_name(&self) -> &str {
        "InventoryPage"
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fixture::Credentials;
    use crate::mock::{MockPage, CATALOG};
    use crate::pages::LoginPage;

    const BACKPACK: &str = "sauce-labs-backpack";
    const BIKE_LIGHT: &str = "sauce-labs-bike-light";

    async fn logged_in_inventory() -> InventoryPage<MockPage> {
        let mut login = LoginPage::new(MockPage::new());
        login.navigate().await.unwrap();
        login
            .login(&Credentials::new("standard_user", "secret_sauce"))
            .await
            .unwrap();
        login.into_inventory()
    }

    #[tokio::test]
    async fn test_all_products_start_not_in_cart() {
        let mut inventory = logged_in_inventory().await;
        for slug in CATALOG {
            assert_eq!(
                inventory.affordance(slug).await.unwrap(),
                CartAffordance::AddToCart
            );
        }
        assert_eq!(inventory.badge_count().await.unwrap(), 0);
        assert_eq!(inventory.add_button_count().await.unwrap(), CATALOG.len());
    }

    #[tokio::test]
    async fn test_add_flips_affordance_and_badge() {
        let mut inventory = logged_in_inventory().await;
        let before = inventory.add_button_count().await.unwrap();

        inventory.add_to_cart(BACKPACK).await.unwrap();

        assert_eq!(
            inventory.affordance(BACKPACK).await.unwrap(),
            CartAffordance::Remove
        );
        assert_eq!(inventory.affordance_label(BACKPACK).await.unwrap(), "Remove");
        assert_eq!(inventory.badge_count().await.unwrap(), 1);
        // Other products are untouched.
        assert_eq!(
            inventory.affordance(BIKE_LIGHT).await.unwrap(),
            CartAffordance::AddToCart
        );
        assert_eq!(inventory.add_button_count().await.unwrap(), before - 1);
    }

    #[tokio::test]
    async fn test_remove_round_trip() {
        let mut inventory = logged_in_inventory().await;
        inventory.add_to_cart(BACKPACK).await.unwrap();
        inventory.remove_from_cart(BACKPACK).await.unwrap();

        assert_eq!(
            inventory.affordance(BACKPACK).await.unwrap(),
            CartAffordance::AddToCart
        );
        assert_eq!(inventory.badge_count().await.unwrap(), 0);
        assert_eq!(inventory.add_button_count().await.unwrap(), CATALOG.len());
    }

    #[tokio::test]
    async fn test_badge_tracks_multiple_products() {
        let mut inventory = logged_in_inventory().await;
        inventory.add_to_cart(BACKPACK).await.unwrap();
        inventory.add_to_cart(BIKE_LIGHT).await.unwrap();
        assert_eq!(inventory.badge_count().await.unwrap(), 2);
        inventory.remove_from_cart(BIKE_LIGHT).await.unwrap();
        assert_eq!(inventory.badge_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_unknown_product_has_no_affordance() {
        let mut inventory = logged_in_inventory().await;
        let err = inventory.affordance("no-such-product").await.unwrap_err();
        assert!(matches!(err, PaginaError::ElementNotFound { .. }));
    }

    #[tokio::test]
    async fn test_add_unknown_product_times_out() {
        let mut login = LoginPage::with_config(
            MockPage::new(),
            PageConfig::new()
                .with_action_timeout(std::time::Duration::from_millis(20))
                .with_poll_interval(std::time::Duration::from_millis(5)),
        );
        login.navigate().await.unwrap();
        login
            .login(&Credentials::new("standard_user", "secret_sauce"))
            .await
            .unwrap();
        let mut inventory = login.into_inventory();
        let err = inventory.add_to_cart("no-such-product").await.unwrap_err();
        match err {
            PaginaError::Timeout {
                element, action, ..
            } => {
                assert_eq!(element, "add-to-cart-no-such-product");
                assert_eq!(action, "click");
            }
            other => panic!("expected Timeout, got {other:?}"),
        }
    }
}
