//! In-memory store state: the three ledgers and the store title
//!
//! - [`accounts`]: operator accounts (email → salted password hash)
//! - [`inventory`]: the product ledger (append, lookup, search, sell)
//! - [`customers`]: the customer due ledger (credit entries, totals, summary)
//!
//! [`Store`] aggregates them into one explicitly-owned application state
//! value. Every operation takes the store (or one of its ledgers) by
//! reference; nothing here is global, and nothing survives process exit.

pub mod accounts;
pub mod customers;
pub mod errors;
pub mod inventory;

pub use accounts::AccountDirectory;
pub use customers::CustomerLedger;
pub use errors::StoreError;
pub use inventory::Inventory;

/// Banner title shown on the home page until the operator changes it.
pub const DEFAULT_STORE_TITLE: &str = "SHARMA STORE";

/// The whole application state
#[derive(Debug, Default)]
pub struct Store {
    pub accounts: AccountDirectory,
    pub inventory: Inventory,
    pub customers: CustomerLedger,
    pub title: String,
}

impl Store {
    /// An empty store with the default title.
    pub fn new() -> Self {
        Store {
            accounts: AccountDirectory::new(),
            inventory: Inventory::new(),
            customers: CustomerLedger::new(),
            title: DEFAULT_STORE_TITLE.to_string(),
        }
    }

    /// The demo store the binary starts with: two stocked products, no
    /// accounts, no customers.
    pub fn seeded() -> Self {
        let mut store = Store::new();
        store
            .inventory
            .add("Glass Bottle", 100, 20.0)
            .expect("seed product is valid");
        store
            .inventory
            .add("Tin Box", 50, 30.0)
            .expect("seed product is valid");
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store() {
        let store = Store::seeded();
        assert_eq!(store.inventory.products().len(), 2);
        assert_eq!(store.title, DEFAULT_STORE_TITLE);
        assert!(store.accounts.is_empty());
        assert!(store.customers.customers().is_empty());
    }
}
