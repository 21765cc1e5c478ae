//! Selector strategies and element descriptors.
//!
//! # Design Philosophy
//!
//! - **Strict Selection**: a selector is expected to match exactly one
//!   interactive element at time of use (prevents flaky tests)
//! - **Stability First**: attribute-based (`data-test`) selectors are
//!   preferred over structural ones, surviving layout and copy changes

use serde::{Deserialize, Serialize};

/// Selector strategy for locating elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector {
    /// Test ID selector (`data-test` attribute) — preferred for stability
    TestId(String),
    /// Accessible role selector (e.g. "button")
    Role(String),
    /// CSS selector (e.g. "button.primary")
    Css(String),
}

impl Selector {
    /// Create a test ID selector
    #[must_use]
    pub fn test_id(id: impl Into<String>) -> Self {
        Self::TestId(id.into())
    }

    /// Create a role selector
    #[must_use]
    pub fn role(role: impl Into<String>) -> Self {
        Self::Role(role.into())
    }

    /// Create a CSS selector
    #[must_use]
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Render as a CSS query string for the underlying engine
    #[must_use]
    pub fn to_query(&self) -> String {
        match self {
            Self::TestId(id) => format!("[data-test=\"{id}\"]"),
            Self::Role(role) => format!("[role=\"{role}\"]"),
            Self::Css(css) => css.clone(),
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_query())
    }
}

/// An immutable binding of a semantic element name to a selector.
///
/// Registered once per page object; identifies one semantic UI element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementDescriptor {
    /// Semantic name, unique within a registry
    name: String,
    /// Selector used to locate the element at call time
    selector: Selector,
}

impl ElementDescriptor {
    /// Create a new descriptor
    #[must_use]
    pub fn new(name: impl Into<String>, selector: Selector) -> Self {
        Self {
            name: name.into(),
            selector,
        }
    }

    /// Semantic element name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Selector for this element
    #[must_use]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod selector_tests {
        use super::*;

        #[test]
        fn test_test_id_query() {
            let selector = Selector::test_id("login-button");
            assert_eq!(selector.to_query(), "[data-test=\"login-button\"]");
        }

        #[test]
        fn test_role_query() {
            let selector = Selector::role("button");
            assert_eq!(selector.to_query(), "[role=\"button\"]");
        }

        #[test]
        fn test_css_query_passthrough() {
            let selector = Selector::css("button.primary");
            assert_eq!(selector.to_query(), "button.primary");
        }

        #[test]
        fn test_display_matches_query() {
            let selector = Selector::test_id("error");
            assert_eq!(selector.to_string(), selector.to_query());
        }

        #[test]
        fn test_serde_round_trip() {
            let selector = Selector::test_id("shopping-cart-badge");
            let json = serde_json::to_string(&selector).unwrap();
            let back: Selector = serde_json::from_str(&json).unwrap();
            assert_eq!(back, selector);
        }
    }

    mod descriptor_tests {
        use super::*;

        #[test]
        fn test_descriptor_fields() {
            let desc = ElementDescriptor::new("username", Selector::test_id("username"));
            assert_eq!(desc.name(), "username");
            assert_eq!(desc.selector(), &Selector::TestId("username".to_string()));
        }
    }
}
