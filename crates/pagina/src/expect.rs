//! Assertion builder over live-bound elements.
//!
//! Scenario-layer verification: assertions observe live page state through
//! an [`Element`] and fail with [`PaginaError::AssertionError`] carrying
//! the element name and the expected vs observed state. A failing
//! assertion stops the scenario; there is no continue-on-error within one
//! causal chain.

use crate::element::Element;
use crate::page::BrowserPage;
use crate::result::{PaginaError, PaginaResult};

/// Assertion builder for a bound element.
#[derive(Debug)]
pub struct Expect<'e, 'a, P: BrowserPage + ?Sized> {
    element: &'e Element<'a, P>,
}

impl<P: BrowserPage + ?Sized> Expect<'_, '_, P> {
    fn fail(&self, message: String) -> PaginaError {
        PaginaError::AssertionError {
            message: format!("'{}': {message}", self.element.name()),
        }
    }

    /// Assert the element is visible.
    pub async fn to_be_visible(&self) -> PaginaResult<()> {
        if self.element.is_visible().await? {
            Ok(())
        } else {
            Err(self.fail("expected element to be visible".to_string()))
        }
    }

    /// Assert the element is hidden or absent.
    pub async fn to_be_hidden(&self) -> PaginaResult<()> {
        if self.element.is_visible().await? {
            Err(self.fail("expected element to be hidden".to_string()))
        } else {
            Ok(())
        }
    }

    /// Assert the element has exactly the given text.
    pub async fn to_have_text(&self, expected: &str) -> PaginaResult<()> {
        let actual = self.element.text_content().await?;
        if actual == expected {
            Ok(())
        } else {
            Err(self.fail(format!("expected text '{expected}' but got '{actual}'")))
        }
    }

    /// Assert the element's text contains the given substring.
    pub async fn to_contain_text(&self, expected: &str) -> PaginaResult<()> {
        let actual = self.element.text_content().await?;
        if actual.contains(expected) {
            Ok(())
        } else {
            Err(self.fail(format!(
                "expected text to contain '{expected}' but got '{actual}'"
            )))
        }
    }

    /// Assert the selector matches exactly `expected` elements.
    pub async fn to_have_count(&self, expected: usize) -> PaginaResult<()> {
        let actual = self.element.count().await?;
        if actual == expected {
            Ok(())
        } else {
            Err(self.fail(format!("expected count {expected} but got {actual}")))
        }
    }
}

/// Create an expectation for a bound element.
#[must_use]
pub fn expect<'e, 'a, P: BrowserPage + ?Sized>(element: &'e Element<'a, P>) -> Expect<'e, 'a, P> {
    Expect { element }
}
