//! Login page object.
//!
//! Binds the login form's element set (all located by `data-test`
//! attributes) and exposes the login flow as one atomic action. The
//! authentication state machine per scenario is
//! `Unauthenticated -> {Authenticated, AuthenticationFailed}`; a failed
//! login stays failed until the caller takes an explicit corrective
//! action, there is no automatic retry.

use tracing::{debug, info};

use crate::element::Element;
use crate::fixture::Credentials;
use crate::page::{BrowserPage, PageConfig};
use crate::page_object::PageObject;
use crate::registry::ElementRegistry;
use crate::result::{PaginaError, PaginaResult};
use crate::selector::Selector;
use crate::wait::WaitOptions;

use super::InventoryPage;

/// Terminal authentication states observable after a login action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Products title is visible: the session is authenticated.
    Authenticated,
    /// The error banner is visible; locked-out and bad-credential logins
    /// both land here, distinguished only by the observed message.
    AuthenticationFailed {
        /// Error copy shown to the user
        message: String,
    },
}

/// Page object for the login view.
#[derive(Debug)]
pub struct LoginPage<P: BrowserPage> {
    page: P,
    registry: ElementRegistry,
    config: PageConfig,
}

impl<P: BrowserPage> LoginPage<P> {
    /// Create a login page over a browsing context with default config.
    pub fn new(page: P) -> Self {
        Self::with_config(page, PageConfig::default())
    }

    /// Create a login page with explicit configuration.
    pub fn with_config(page: P, config: PageConfig) -> Self {
        let registry = ElementRegistry::new("LoginPage")
            .with_element("username", Selector::test_id("username"))
            .with_element("password", Selector::test_id("password"))
            .with_element("login-button", Selector::test_id("login-button"))
            .with_element("error", Selector::test_id("error"))
            .with_element("error-button", Selector::test_id("error-button"))
            .with_element("title", Selector::test_id("title"));
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

    /// Navigate to the login page's canonical location.
    pub async fn navigate(&mut self) -> PaginaResult<()> {
        let url = PageObject::url(self);
        info!(%url, "navigate to login page");
        self.page.navigate(&url).await
    }

    /// Log in with the given credentials.
    ///
    /// Validates the inputs, then fills username, fills password, and
    /// clicks the login button, in that order. Fails at the first
    /// unresolvable element with the step's element name attached.
    pub async fn login(&mut self, credentials: &Credentials) -> PaginaResult<()> {
        if credentials.username.is_empty() {
            return Err(PaginaError::InvalidInput {
                message: "username must be a non-empty string".to_string(),
            });
        }
        if credentials.password.is_empty() {
            return Err(PaginaError::InvalidInput {
                message: "password must be a non-empty string".to_string(),
            });
        }
        info!(username = %credentials.username, "login");
        self.element("username")?.fill(&credentials.username).await?;
        self.element("password")?.fill(&credentials.password).await?;
        self.element("login-button")?.click().await?;
        Ok(())
    }

    /// Current error message text, `""` when no error is rendered.
    pub async fn error_message(&mut self) -> PaginaResult<String> {
        self.element("error")?.text_content().await
    }

    /// Whether the error banner is visible.
    pub async fn is_error_visible(&mut self) -> PaginaResult<bool> {
        self.element("error")?.is_visible().await
    }

    /// Whether the error dismiss affordance is visible.
    pub async fn is_error_indicator_visible(&mut self) -> PaginaResult<bool> {
        self.element("error-button")?.is_visible().await
    }

    /// Text of the post-login page title, `""` when not rendered.
    pub async fn title_text(&mut self) -> PaginaResult<String> {
        self.element("title")?.text_content().await
    }

    /// Whether the post-login title is visible.
    pub async fn is_title_visible(&mut self) -> PaginaResult<bool> {
        self.element("title")?.is_visible().await
    }

    /// Classify the live page state after a login action.
    ///
    /// # Errors
    ///
    /// `Page` error when neither terminal state is observable (e.g. the
    /// login action has not been performed).
    pub async fn outcome(&mut self) -> PaginaResult<LoginOutcome> {
        if self.is_title_visible().await? && self.title_text().await? == "Products" {
            debug!("login outcome: authenticated");
            return Ok(LoginOutcome::Authenticated);
        }
        if self.is_error_visible().await? {
            let message = self.error_message().await?;
            debug!(%message, "login outcome: authentication failed");
            return Ok(LoginOutcome::AuthenticationFailed { message });
        }
        Err(PaginaError::Page {
            message: "login outcome indeterminate: neither title nor error is visible"
                .to_string(),
        })
    }

    /// Borrow the underlying browsing context.
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Hand the browsing context over to the inventory page object.
    pub fn into_inventory(self) -> InventoryPage<P> {
        InventoryPage::with_config(self.page, self.config)
    }

    /// Release the underlying browsing context.
    pub fn into_page(self) -> P {
        self.page
    }
}

impl<P: BrowserPage> PageObject for LoginPage<P> {
    fn url(&self) -> String {
        format!("{}/", self.config.base_url.trim_end_matches('/'))
    }

    fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    fn page_name(&self) -> &str {
        "LoginPage"
    }
}
