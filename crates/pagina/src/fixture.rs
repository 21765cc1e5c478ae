//! Fixture data for test scenarios.
//!
//! Credentials are externally supplied, immutable test inputs. The store
//! is an explicitly injected mapping from role name to credentials — no
//! process-wide fixture global — so parallel scenarios can each own an
//! isolated copy.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::result::{PaginaError, PaginaResult};

/// Immutable login credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account username
    pub username: String,
    /// Account password
    pub password: String,
}

impl Credentials {
    /// Create new credentials.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Role name for the standard demo user.
pub const ROLE_STANDARD: &str = "standard";

/// Role name for the locked-out demo user.
pub const ROLE_LOCKED: &str = "locked";

/// Injected mapping from role name to credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialStore {
    roles: HashMap<String, Credentials>,
}

impl CredentialStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the saucedemo.com demo users.
    #[must_use]
    pub fn saucedemo() -> Self {
        let mut store = Self::new();
        store.register(ROLE_STANDARD, Credentials::new("standard_user", "secret_sauce"));
        store.register(ROLE_LOCKED, Credentials::new("locked_out_user", "secret_sauce"));
        store
    }

    /// Register credentials under a role name, replacing any earlier entry.
    pub fn register(&mut self, role: impl Into<String>, credentials: Credentials) {
        let _ = self.roles.insert(role.into(), credentials);
    }

    /// Look up credentials for a role.
    ///
    /// # Errors
    ///
    /// `Fixture` error naming the role when nothing is registered under it.
    pub fn get(&self, role: &str) -> PaginaResult<&Credentials> {
        self.roles.get(role).ok_or_else(|| PaginaError::Fixture {
            message: format!("no credentials registered for role '{role}'"),
        })
    }

    /// Whether a role is registered.
    #[must_use]
    pub fn is_registered(&self, role: &str) -> bool {
        self.roles.contains_key(role)
    }

    /// Number of registered roles.
    #[must_use]
    pub fn count(&self) -> usize {
        self.roles.len()
    }
}
