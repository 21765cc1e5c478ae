//! Live-bound element interactions.
//!
//! An [`Element`] pairs an [`ElementDescriptor`] with a live page context.
//! Binding is cheap and stateless: every operation re-queries the page, so
//! DOM changes between calls are always reflected. Before any interaction
//! the selector must resolve to exactly one element — zero matches fail
//! with `ElementNotFound`, more than one with `AmbiguousElement`.

use tracing::debug;

use crate::page::{BrowserPage, ElementHandle};
use crate::result::{PaginaError, PaginaResult};
use crate::selector::ElementDescriptor;
use crate::wait::{poll_until, WaitOptions};

/// A semantic element bound to a live page context.
#[derive(Debug)]
pub struct Element<'a, P: BrowserPage + ?Sized> {
    page: &'a mut P,
    descriptor: ElementDescriptor,
    page_name: String,
    wait: WaitOptions,
}

impl<'a, P: BrowserPage + ?Sized> Element<'a, P> {
    /// Bind a descriptor to a live page context.
    pub fn bind(
        page: &'a mut P,
        descriptor: ElementDescriptor,
        page_name: impl Into<String>,
        wait: WaitOptions,
    ) -> Self {
        Self {
            page,
            descriptor,
            page_name: page_name.into(),
            wait,
        }
    }

    /// Semantic name of the bound element
    #[must_use]
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    /// The descriptor this element was bound from
    #[must_use]
    pub const fn descriptor(&self) -> &ElementDescriptor {
        &self.descriptor
    }

    /// Resolve to exactly one element snapshot, without waiting.
    ///
    /// # Errors
    ///
    /// `ElementNotFound` on zero matches, `AmbiguousElement` on more than
    /// one — never returns a handle for zero or multiple elements.
    pub async fn resolve(&self) -> PaginaResult<ElementHandle> {
        self.query_unique()
            .await?
            .ok_or_else(|| PaginaError::ElementNotFound {
                element: self.descriptor.name().to_string(),
                page: self.page_name.clone(),
            })
    }

    /// Query enforcing the single-match invariant, treating absence as
    /// `None` rather than an error.
    async fn query_unique(&self) -> PaginaResult<Option<ElementHandle>> {
        let selector = self.descriptor.selector();
        match self.page.query_count(selector).await? {
            0 => Ok(None),
            1 => self.page.query(selector).await,
            count => Err(PaginaError::AmbiguousElement {
                element: self.descriptor.name().to_string(),
                count,
            }),
        }
    }

    /// Wait until the selector matches at least one element, then enforce
    /// the single-match invariant.
    async fn resolve_for(&self, action: &str) -> PaginaResult<ElementHandle> {
        let selector = self.descriptor.selector();
        let page: &P = &*self.page;
        let count = poll_until(self.descriptor.name(), action, self.wait, move || {
            async move {
                let n = page.query_count(selector).await?;
                Ok((n > 0).then_some(n))
            }
        })
        .await?;
        if count > 1 {
            return Err(PaginaError::AmbiguousElement {
                element: self.descriptor.name().to_string(),
                count,
            });
        }
        self.page
            .query(selector)
            .await?
            .ok_or_else(|| PaginaError::ElementNotFound {
                element: self.descriptor.name().to_string(),
                page: self.page_name.clone(),
            })
    }

    /// Click the element.
    ///
    /// Fails at this step with the element and action attached if the
    /// selector cannot be strictly resolved within the wait.
    pub async fn click(&mut self) -> PaginaResult<()> {
        let _ = self.resolve_for("click").await?;
        debug!(page = %self.page_name, element = %self.descriptor.name(), "click");
        self.page.click(self.descriptor.selector()).await
    }

    /// Fill the element with text.
    pub async fn fill(&mut self, text: &str) -> PaginaResult<()> {
        let _ = self.resolve_for("fill").await?;
        debug!(page = %self.page_name, element = %self.descriptor.name(), "fill");
        self.page.fill(self.descriptor.selector(), text).await
    }

    /// Text content of the element.
    ///
    /// Returns the defined default `""` when the element is absent or has
    /// no rendered content; "empty" and "not rendered" are distinguished
    /// via [`Element::is_visible`], not a null value.
    ///
    /// # Errors
    ///
    /// `AmbiguousElement` when the selector matches more than one element.
    pub async fn text_content(&self) -> PaginaResult<String> {
        Ok(self
            .query_unique()
            .await?
            .and_then(|h| h.text_content)
            .unwrap_or_default())
    }

    /// Whether the element is currently visible (absent counts as hidden).
    ///
    /// # Errors
    ///
    /// `AmbiguousElement` when the selector matches more than one element.
    pub async fn is_visible(&self) -> PaginaResult<bool> {
        Ok(self.query_unique().await?.is_some_and(|h| h.visible))
    }

    /// Number of elements the selector matches right now.
    pub async fn count(&self) -> PaginaResult<usize> {
        self.page.query_count(self.descriptor.selector()).await
    }
}
