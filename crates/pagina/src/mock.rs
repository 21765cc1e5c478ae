//! In-memory page engine for hermetic tests.
//!
//! [`MockPage`] implements [`BrowserPage`] against a model of the
//! saucedemo.com demo shop: the login form with its credential rules, the
//! inventory catalog with add/remove affordances, and the cart badge. It
//! records every capability call so tests can verify interaction order.
//!
//! Selector support is intentionally narrow — the attribute forms the
//! crate itself emits: exact `[data-test="…"]`, prefix `[data-test^="…"]`,
//! and role matching by tag name.

use async_trait::async_trait;

use crate::page::{BrowserPage, ElementHandle};
use crate::result::{PaginaError, PaginaResult};
use crate::selector::Selector;

/// Error copy shown for the locked-out demo user.
pub const LOCKED_OUT_MESSAGE: &str = "Epic sadface: Sorry, this user has been locked out.";

/// Error copy shown for credentials that match no user.
pub const INVALID_CREDENTIALS_MESSAGE: &str =
    "Epic sadface: Username and password do not match any user in this service";

const BASE_URL: &str = "https://www.saucedemo.com";

/// Product slugs in the demo catalog, as used in `data-test` ids.
pub const CATALOG: [&str; 6] = [
    "sauce-labs-backpack",
    "sauce-labs-bike-light",
    "sauce-labs-bolt-t-shirt",
    "sauce-labs-fleece-jacket",
    "sauce-labs-onesie",
    "test.allthethings()-t-shirt-(red)",
];

#[derive(Debug, Clone)]
struct ProductState {
    slug: String,
    in_cart: bool,
}

/// Rendered element: `data-test` id plus observable state.
#[derive(Debug, Clone)]
struct Rendered {
    test_id: String,
    handle: ElementHandle,
}

/// In-memory browsing context simulating the demo shop.
#[derive(Debug)]
pub struct MockPage {
    current_url: String,
    offline: bool,
    logged_in: bool,
    error: Option<String>,
    username_value: String,
    password_value: String,
    products: Vec<ProductState>,
    call_history: Vec<String>,
}

impl Default for MockPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MockPage {
    /// Create a fresh context pointed at the login page.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_url: format!("{BASE_URL}/"),
            offline: false,
            logged_in: false,
            error: None,
            username_value: String::new(),
            password_value: String::new(),
            products: CATALOG
                .iter()
                .map(|slug| ProductState {
                    slug: (*slug).to_string(),
                    in_cart: false,
                })
                .collect(),
            call_history: Vec::new(),
        }
    }

    /// Make navigation fail, for exercising `Navigation` errors.
    #[must_use]
    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Every capability call made so far, in order.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.call_history
    }

    /// Whether a capability method was called (prefix match on history).
    #[must_use]
    pub fn was_called(&self, call: &str) -> bool {
        self.call_history.iter().any(|c| c.starts_with(call))
    }

    fn cart_count(&self) -> usize {
        self.products.iter().filter(|p| p.in_cart).count()
    }

    fn on_inventory(&self) -> bool {
        self.current_url.ends_with("/inventory.html")
    }

    fn on_login(&self) -> bool {
        self.current_url == format!("{BASE_URL}/") || self.current_url == BASE_URL
    }

    /// Elements present in the current view.
    fn rendered(&self) -> Vec<Rendered> {
        let mut elements = Vec::new();
        if self.on_login() {
            elements.push(Rendered {
                test_id: "username".to_string(),
                handle: ElementHandle::new("input").with_text(self.username_value.clone()),
            });
            elements.push(Rendered {
                test_id: "password".to_string(),
                handle: ElementHandle::new("input").with_text(self.password_value.clone()),
            });
            elements.push(Rendered {
                test_id: "login-button".to_string(),
                handle: ElementHandle::new("input").with_text("Login"),
            });
            if let Some(message) = &self.error {
                elements.push(Rendered {
                    test_id: "error".to_string(),
                    handle: ElementHandle::new("h3").with_text(message.clone()),
                });
                elements.push(Rendered {
                    test_id: "error-button".to_string(),
                    handle: ElementHandle::new("button").with_text("Close"),
                });
            }
        } else if self.on_inventory() && self.logged_in {
            elements.push(Rendered {
                test_id: "title".to_string(),
                handle: ElementHandle::new("span").with_text("Products"),
            });
            let count = self.cart_count();
            if count > 0 {
                elements.push(Rendered {
                    test_id: "shopping-cart-badge".to_string(),
                    handle: ElementHandle::new("span").with_text(count.to_string()),
                });
            }
            for product in &self.products {
                if product.in_cart {
                    elements.push(Rendered {
                        test_id: format!("remove-{}", product.slug),
                        handle: ElementHandle::new("button").with_text("Remove"),
                    });
                } else {
                    elements.push(Rendered {
                        test_id: format!("add-to-cart-{}", product.slug),
                        handle: ElementHandle::new("button").with_text("Add to cart"),
                    });
                }
            }
        }
        elements
    }

    fn matches(&self, selector: &Selector) -> Vec<Rendered> {
        let rendered = self.rendered();
        match selector {
            Selector::TestId(id) => rendered
                .into_iter()
                .filter(|r| &r.test_id == id)
                .collect(),
            Selector::Role(role) => rendered
                .into_iter()
                .filter(|r| &r.handle.tag_name == role)
                .collect(),
            Selector::Css(css) => {
                if let Some(id) = attr_query(css, "=") {
                    rendered.into_iter().filter(|r| r.test_id == id).collect()
                } else if let Some(prefix) = attr_query(css, "^=") {
                    rendered
                        .into_iter()
                        .filter(|r| r.test_id.starts_with(&prefix))
                        .collect()
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn submit_login(&mut self) {
        match (self.username_value.as_str(), self.password_value.as_str()) {
            ("standard_user", "secret_sauce") => {
                self.logged_in = true;
                self.error = None;
                self.current_url = format!("{BASE_URL}/inventory.html");
            }
            ("locked_out_user", "secret_sauce") => {
                self.error = Some(LOCKED_OUT_MESSAGE.to_string());
            }
            _ => {
                self.error = Some(INVALID_CREDENTIALS_MESSAGE.to_string());
            }
        }
    }

    fn apply_click(&mut self, test_id: &str) {
        if test_id == "login-button" {
            self.submit_login();
        } else if test_id == "error-button" {
            self.error = None;
        } else if let Some(slug) = test_id.strip_prefix("add-to-cart-") {
            let slug = slug.to_string();
            for product in &mut self.products {
                if product.slug == slug {
                    product.in_cart = true;
                }
            }
        } else if let Some(slug) = test_id.strip_prefix("remove-") {
            let slug = slug.to_string();
            for product in &mut self.products {
                if product.slug == slug {
                    product.in_cart = false;
                }
            }
        }
    }
}

/// Extract the value of a `[data-test<op>"value"]` attribute query.
fn attr_query(css: &str, op: &str) -> Option<String> {
    let body = css.strip_prefix("[data-test")?.strip_suffix(']')?;
    let value = body.strip_prefix(op)?;
    let value = value.strip_prefix('"')?.strip_suffix('"')?;
    Some(value.to_string())
}

#[async_trait]
impl BrowserPage for MockPage {
    async fn navigate(&mut self, url: &str) -> PaginaResult<()> {
        self.call_history.push(format!("navigate:{url}"));
        if self.offline {
            return Err(PaginaError::Navigation {
                url: url.to_string(),
                message: "network unreachable".to_string(),
            });
        }
        self.current_url = url.to_string();
        Ok(())
    }

    async fn current_url(&self) -> PaginaResult<String> {
        Ok(self.current_url.clone())
    }

    async fn query_count(&self, selector: &Selector) -> PaginaResult<usize> {
        Ok(self.matches(selector).len())
    }

    async fn query(&self, selector: &Selector) -> PaginaResult<Option<ElementHandle>> {
        Ok(self.matches(selector).into_iter().next().map(|r| r.handle))
    }

    async fn click(&mut self, selector: &Selector) -> PaginaResult<()> {
        self.call_history.push(format!("click:{selector}"));
        let target = self
            .matches(selector)
            .into_iter()
            .next()
            .ok_or_else(|| PaginaError::Page {
                message: format!("no element matching {selector} to click"),
            })?;
        self.apply_click(&target.test_id);
        Ok(())
    }

    async fn fill(&mut self, selector: &Selector, text: &str) -> PaginaResult<()> {
        self.call_history.push(format!("fill:{selector}"));
        let target = self
            .matches(selector)
            .into_iter()
            .next()
            .ok_or_else(|| PaginaError::Page {
                message: format!("no element matching {selector} to fill"),
            })?;
        match target.test_id.as_str() {
            "username" => self.username_value = text.to_string(),
            "password" => self.password_value = text.to_string(),
            other => {
                return Err(PaginaError::Page {
                    message: format!("element '{other}' is not fillable"),
                })
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_id(id: &str) -> Selector {
        Selector::test_id(id)
    }

    #[tokio::test]
    async fn test_fresh_page_shows_login_form() {
        let page = MockPage::new();
        assert_eq!(page.query_count(&test_id("username")).await.unwrap(), 1);
        assert_eq!(page.query_count(&test_id("password")).await.unwrap(), 1);
        assert_eq!(page.query_count(&test_id("login-button")).await.unwrap(), 1);
        assert_eq!(page.query_count(&test_id("error")).await.unwrap(), 0);
        assert_eq!(page.query_count(&test_id("title")).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_standard_login_lands_on_inventory() {
        let mut page = MockPage::new();
        page.fill(&test_id("username"), "standard_user").await.unwrap();
        page.fill(&test_id("password"), "secret_sauce").await.unwrap();
        page.click(&test_id("login-button")).await.unwrap();
        assert!(page.current_url().await.unwrap().ends_with("/inventory.html"));
        let title = page.query(&test_id("title")).await.unwrap().unwrap();
        assert_eq!(title.text_content.as_deref(), Some("Products"));
    }

    #[tokio::test]
    async fn test_locked_login_surfaces_error() {
        let mut page = MockPage::new();
        page.fill(&test_id("username"), "locked_out_user").await.unwrap();
        page.fill(&test_id("password"), "secret_sauce").await.unwrap();
        page.click(&test_id("login-button")).await.unwrap();
        let error = page.query(&test_id("error")).await.unwrap().unwrap();
        assert_eq!(error.text_content.as_deref(), Some(LOCKED_OUT_MESSAGE));
        assert_eq!(page.query_count(&test_id("error-button")).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_error_button_dismisses_error() {
        let mut page = MockPage::new();
        page.fill(&test_id("username"), "nobody").await.unwrap();
        page.fill(&test_id("password"), "nothing").await.unwrap();
        page.click(&test_id("login-button")).await.unwrap();
        assert_eq!(page.query_count(&test_id("error")).await.unwrap(), 1);
        page.click(&test_id("error-button")).await.unwrap();
        assert_eq!(page.query_count(&test_id("error")).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_prefix_selector_counts_add_buttons() {
        let mut page = MockPage::new();
        page.fill(&test_id("username"), "standard_user").await.unwrap();
        page.fill(&test_id("password"), "secret_sauce").await.unwrap();
        page.click(&test_id("login-button")).await.unwrap();

        let add_buttons = Selector::css("[data-test^=\"add-to-cart-\"]");
        assert_eq!(page.query_count(&add_buttons).await.unwrap(), CATALOG.len());

        page.click(&test_id("add-to-cart-sauce-labs-backpack")).await.unwrap();
        assert_eq!(
            page.query_count(&add_buttons).await.unwrap(),
            CATALOG.len() - 1
        );
        assert_eq!(
            page.query_count(&test_id("remove-sauce-labs-backpack"))
                .await
                .unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn test_badge_absent_at_zero() {
        let mut page = MockPage::new();
        page.fill(&test_id("username"), "standard_user").await.unwrap();
        page.fill(&test_id("password"), "secret_sauce").await.unwrap();
        page.click(&test_id("login-button")).await.unwrap();
        assert_eq!(
            page.query_count(&test_id("shopping-cart-badge")).await.unwrap(),
            0
        );
        page.click(&test_id("add-to-cart-sauce-labs-onesie")).await.unwrap();
        let badge = page
            .query(&test_id("shopping-cart-badge"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(badge.text_content.as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_offline_navigation_fails() {
        let mut page = MockPage::new().with_offline(true);
        let err = page.navigate("https://www.saucedemo.com/").await.unwrap_err();
        assert!(matches!(err, PaginaError::Navigation { .. }));
    }

    #[tokio::test]
    async fn test_call_history_records_order() {
        let mut page = MockPage::new();
        page.fill(&test_id("username"), "standard_user").await.unwrap();
        page.click(&test_id("login-button")).await.unwrap();
        assert!(page.was_called("fill:[data-test=\"username\"]"));
        assert!(page.was_called("click:[data-test=\"login-button\"]"));
        assert!(page.history().len() >= 2);
    }

    mod attr_query_tests {
        use super::*;

        #[test]
        fn test_exact_form() {
            assert_eq!(
                attr_query("[data-test=\"error\"]", "=").as_deref(),
                Some("error")
            );
        }

        #[test]
        fn test_prefix_form() {
            assert_eq!(
                attr_query("[data-test^=\"add-to-cart-\"]", "^=").as_deref(),
                Some("add-to-cart-")
            );
        }

        #[test]
        fn test_prefix_form_is_not_exact() {
            assert_eq!(attr_query("[data-test^=\"add-to-cart-\"]", "="), None);
        }

        #[test]
        fn test_non_attribute_css() {
            assert_eq!(attr_query("button.primary", "="), None);
        }
    }
}
