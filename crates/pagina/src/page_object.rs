//! Page Object Model support.
//!
//! A page object binds a UI view's element set and the operations
//! performable on it into one cohesive unit, isolating test logic from
//! selector detail. Concrete pages live in [`crate::pages`].

use crate::registry::ElementRegistry;

/// Trait for page objects representing a page or component in the UI.
///
/// Implementors own an [`ElementRegistry`] scoped to one logical view and
/// expose semantic action and query methods on top of it. A page object is
/// constructed per navigation context and discarded when the context ends.
pub trait PageObject {
    /// Canonical URL of this page.
    fn url(&self) -> String;

    /// The element registry for this page.
    fn registry(&self) -> &ElementRegistry;

    /// Page name for logging and error context.
    fn page_name(&self) -> &str
    where
        Self: Sized,
    {
        std::any::type_name::<Self>()
    }
}
