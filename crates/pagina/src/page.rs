//! Browser page capability layer.
//!
//! The browser engine itself (process control, locator query execution,
//! network) is an external collaborator. This module defines the abstract
//! [`BrowserPage`] trait that page objects drive, so implementations can be
//! swapped (CDP, WebDriver, or the in-memory [`crate::mock::MockPage`])
//! without touching test logic.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::result::PaginaResult;
use crate::selector::Selector;

/// Observation snapshot of a resolved DOM element.
///
/// Handles are never cached across calls; every query re-resolves against
/// the live page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementHandle {
    /// Element tag name
    pub tag_name: String,
    /// Element text content, if any is rendered
    pub text_content: Option<String>,
    /// Whether the element is currently visible
    pub visible: bool,
}

impl ElementHandle {
    /// Create a new element handle
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            text_content: None,
            visible: true,
        }
    }

    /// Set the text content
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_content = Some(text.into());
        self
    }

    /// Set visibility
    #[must_use]
    pub const fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// Abstract capability trait provided by a browsing context.
///
/// One logical flow per instance: operations execute sequentially, each
/// awaiting the previous. Scenarios must not share an instance.
#[async_trait]
pub trait BrowserPage: Send + Sync {
    /// Navigate to a URL
    async fn navigate(&mut self, url: &str) -> PaginaResult<()>;

    /// Current URL of the browsing context
    async fn current_url(&self) -> PaginaResult<String>;

    /// Number of elements matching the selector right now
    async fn query_count(&self, selector: &Selector) -> PaginaResult<usize>;

    /// Resolve the selector to a single element snapshot, if one matches
    async fn query(&self, selector: &Selector) -> PaginaResult<Option<ElementHandle>>;

    /// Click the element matching the selector
    async fn click(&mut self, selector: &Selector) -> PaginaResult<()>;

    /// Fill the element matching the selector with text
    async fn fill(&mut self, selector: &Selector, text: &str) -> PaginaResult<()>;
}

/// Configuration for page objects
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Base URL the page's canonical location is resolved against
    pub base_url: String,
    /// Timeout for element interactions
    pub action_timeout: Duration,
    /// Polling interval while waiting for elements
    pub poll_interval: Duration,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.saucedemo.com".to_string(),
            action_timeout: Duration::from_secs(5),
            poll_interval: Duration::from_millis(50),
        }
    }
}

impl PageConfig {
    /// Create new config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the interaction timeout
    #[must_use]
    pub const fn with_action_timeout(mut self, timeout: Duration) -> Self {
        self.action_timeout = timeout;
        self
    }

    /// Set the polling interval
    #[must_use]
    pub const fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}
