//! Concrete page objects for the demo shop flows.

mod inventory;
mod login;

pub use inventory::{CartAffordance, InventoryPage};
pub use login::{LoginOutcome, LoginPage};
