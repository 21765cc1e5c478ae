//! Pagina: page-object abstraction layer for UI test automation.
//!
//! Pagina (Spanish: "page") models page structure, user actions, and
//! verifications for maintainable UI-driven test automation: semantic
//! element names bind to stable selectors at construction time and resolve
//! lazily against a live browsing context at call time.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                     PAGINA Architecture                        │
//! ├────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌─────────────┐    ┌──────────────┐        │
//! │   │ Scenario   │    │ PageObject  │    │ BrowserPage  │        │
//! │   │ (test)     │───►│ + Registry  │───►│ capability   │        │
//! │   │            │    │             │    │ (engine)     │        │
//! │   └────────────┘    └─────────────┘    └──────────────┘        │
//! │        ▲  observations (text, visibility, counts)  │           │
//! │        └───────────────────────────────────────────┘           │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The browser engine itself is an external collaborator behind the
//! [`BrowserPage`] trait; [`mock::MockPage`] ships for hermetic tests.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod element;
mod expect;
mod fixture;
mod page;
mod page_object;
mod registry;
mod result;
mod selector;
mod wait;

/// In-memory page engine for hermetic tests
pub mod mock;

/// Concrete page objects for the demo shop flows
pub mod pages;

pub use element::Element;
pub use expect::{expect, Expect};
pub use fixture::{CredentialStore, Credentials, ROLE_LOCKED, ROLE_STANDARD};
pub use page::{BrowserPage, ElementHandle, PageConfig};
pub use page_object::PageObject;
pub use pages::{CartAffordance, InventoryPage, LoginOutcome, LoginPage};
pub use registry::ElementRegistry;
pub use result::{PaginaError, PaginaResult};
pub use selector::{ElementDescriptor, Selector};
pub use wait::{poll_until, WaitOptions, DEFAULT_POLL_INTERVAL_MS, DEFAULT_WAIT_TIMEOUT_MS};
