//! Declarative element registry.
//!
//! Maps semantic element names to selectors at construction time and binds
//! them to a live page context at call time. Resolution is lazy and
//! stateless: no handles are cached across calls, so page state changes
//! between calls are always reflected.

use std::collections::HashMap;

use crate::element::Element;
use crate::page::BrowserPage;
use crate::result::{PaginaError, PaginaResult};
use crate::selector::{ElementDescriptor, Selector};
use crate::wait::WaitOptions;

/// Registry of semantic element names for one logical page.
///
/// Keys are unique by name; registering a name twice replaces the earlier
/// descriptor.
#[derive(Debug, Clone)]
pub struct ElementRegistry {
    page_name: String,
    descriptors: HashMap<String, ElementDescriptor>,
}

impl ElementRegistry {
    /// Create an empty registry scoped to a page name (used in errors).
    #[must_use]
    pub fn new(page_name: impl Into<String>) -> Self {
        Self {
            page_name: page_name.into(),
            descriptors: HashMap::new(),
        }
    }

    /// Register an element by name and selector (builder style).
    #[must_use]
    pub fn with_element(mut self, name: impl Into<String>, selector: Selector) -> Self {
        self.register(ElementDescriptor::new(name, selector));
        self
    }

    /// Register a descriptor.
    pub fn register(&mut self, descriptor: ElementDescriptor) {
        let _ = self
            .descriptors
            .insert(descriptor.name().to_string(), descriptor);
    }

    /// Look up a descriptor by name.
    #[must_use]
    pub fn descriptor(&self, name: &str) -> Option<&ElementDescriptor> {
        self.descriptors.get(name)
    }

    /// Name of the page this registry is scoped to.
    #[must_use]
    pub fn page_name(&self) -> &str {
        &self.page_name
    }

    /// All registered element names.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.descriptors.keys().map(String::as_str).collect()
    }

    /// Number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the registry has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Bind a registered element to a live page context.
    ///
    /// # Errors
    ///
    /// `ElementNotFound` if no descriptor is registered under `name`.
    pub fn resolve<'a, P: BrowserPage + ?Sized>(
        &self,
        name: &str,
        page: &'a mut P,
        wait: WaitOptions,
    ) -> PaginaResult<Element<'a, P>> {
        let descriptor = self
            .descriptor(name)
            .ok_or_else(|| PaginaError::ElementNotFound {
                element: name.to_string(),
                page: self.page_name.clone(),
            })?
            .clone();
        Ok(Element::bind(page, descriptor, self.page_name.as_str(), wait))
    }
}
