//! Customer credit ("due") ledger
//!
//! Customers are keyed by name and created implicitly by their first due
//! entry. Each entry snapshots the product rate at the time it was recorded,
//! so later price changes never rewrite old dues. Entries reference products
//! by name only; a renamed product leaves old entries pointing at the old
//! name, which is accepted behavior.

use chrono::NaiveDate;

use super::errors::StoreError;

/// One credit purchase, priced at the rate current when it was recorded
#[derive(Debug, Clone, PartialEq)]
pub struct DueEntry {
    pub product: String,
    pub quantity: u32,
    pub rate: f64,
    pub date: NaiveDate,
}

impl DueEntry {
    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.rate
    }
}

/// A customer and their outstanding dues
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub name: String,
    /// Contact phone, set once when the customer record is created.
    pub phone: String,
    pub dues: Vec<DueEntry>,
}

impl Customer {
    pub fn total(&self) -> f64 {
        self.dues.iter().map(DueEntry::subtotal).sum()
    }
}

/// One row of [`CustomerLedger::summary`]
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub name: String,
    pub total: f64,
}

/// Per-customer totals plus the grand total across all customers
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSummary {
    pub rows: Vec<SummaryRow>,
    pub grand_total: f64,
}

/// The customer ledger, in creation order
#[derive(Debug, Default)]
pub struct CustomerLedger {
    customers: Vec<Customer>,
}

impl CustomerLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All customers in creation order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn get(&self, name: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.name == name)
    }

    /// Case-insensitive substring search on the customer name.
    pub fn search(&self, query: &str) -> Vec<&Customer> {
        let query = query.to_lowercase();
        self.customers
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Record a credit purchase.
    ///
    /// Creates the customer (with `phone` and an empty due list) on first use
    /// of the name; later calls never update the phone. The `rate` argument
    /// is stored as-is, snapshotting the price at call time.
    pub fn add_due(
        &mut self,
        name: &str,
        phone: &str,
        product: &str,
        quantity: u32,
        rate: f64,
        date: NaiveDate,
    ) -> Result<(), StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyField {
                field: "Customer name",
            });
        }
        if quantity == 0 {
            return Err(StoreError::ZeroQuantity);
        }

        let pos = match self.customers.iter().position(|c| c.name == name) {
            Some(pos) => pos,
            None => {
                self.customers.push(Customer {
                    name: name.to_string(),
                    phone: phone.trim().to_string(),
                    dues: Vec::new(),
                });
                self.customers.len() - 1
            }
        };
        self.customers[pos].dues.push(DueEntry {
            product: product.to_string(),
            quantity,
            rate,
            date,
        });
        Ok(())
    }

    /// Delete the due entry at `index` in the named customer's sequence.
    ///
    /// Out-of-range indices are an error, not a silent no-op. Returns the
    /// removed entry.
    pub fn remove_entry(&mut self, name: &str, index: usize) -> Result<DueEntry, StoreError> {
        let customer = self
            .customers
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| StoreError::UnknownCustomer {
                name: name.to_string(),
            })?;
        if index >= customer.dues.len() {
            return Err(StoreError::DueIndexOutOfRange {
                index,
                len: customer.dues.len(),
            });
        }
        Ok(customer.dues.remove(index))
    }

    /// Remove the customer record entirely, including all dues.
    pub fn clear(&mut self, name: &str) -> Result<Customer, StoreError> {
        let pos = self
            .customers
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| StoreError::UnknownCustomer {
                name: name.to_string(),
            })?;
        Ok(self.customers.remove(pos))
    }

    /// Sum of `quantity * rate` over the named customer's current dues.
    pub fn total_for(&self, name: &str) -> Result<f64, StoreError> {
        self.get(name)
            .map(Customer::total)
            .ok_or_else(|| StoreError::UnknownCustomer {
                name: name.to_string(),
            })
    }

    /// Per-customer totals in creation order, plus the grand total.
    pub fn summary(&self) -> LedgerSummary {
        let rows: Vec<SummaryRow> = self
            .customers
            .iter()
            .map(|c| SummaryRow {
                name: c.name.clone(),
                total: c.total(),
            })
            .collect();
        let grand_total = rows.iter().map(|r| r.total).sum();
        LedgerSummary { rows, grand_total }
    }
}
