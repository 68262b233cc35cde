//! Error types for the store ledgers
//!
//! This module defines [`StoreError`], which covers every failure a ledger
//! operation or form submission can produce. All store errors are recoverable:
//! the operation is aborted, the message is shown on the status line, and the
//! operator re-submits.

use std::fmt;

/// Errors produced by ledger operations and form input parsing
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Password does not satisfy the exact-length rule
    PasswordLength { actual: usize },

    /// Login failed; unknown email and wrong password are indistinguishable
    InvalidCredentials,

    /// Account lookup failed for an operation that requires one
    UnknownAccount { email: String },

    /// Password hashing backend failed
    PasswordHash { message: String },

    /// A required form field was left empty
    EmptyField { field: &'static str },

    /// Product rate must be positive
    NonPositiveRate,

    /// Quantity must be at least one
    ZeroQuantity,

    /// No product with this exact name exists
    UnknownProduct { name: String },

    /// Sale rejected outright; stock is unchanged
    InsufficientStock {
        name: String,
        requested: u32,
        available: u32,
    },

    /// No customer with this name exists
    UnknownCustomer { name: String },

    /// Due entry index past the end of the customer's list
    DueIndexOutOfRange { index: usize, len: usize },

    /// A numeric form field did not parse
    InvalidNumber { field: &'static str, input: String },

    /// A date form field did not parse as YYYY-MM-DD
    InvalidDate { input: String },

    /// A protected page was requested without an authenticated session
    NotLoggedIn,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::PasswordLength { actual } => {
                write!(
                    f,
                    "Password must be exactly 8 characters (got {})",
                    actual
                )
            }
            StoreError::InvalidCredentials => {
                write!(f, "Invalid email or password")
            }
            StoreError::UnknownAccount { email } => {
                write!(f, "No account registered for '{}'", email)
            }
            StoreError::PasswordHash { message } => {
                write!(f, "Password hashing failed: {}", message)
            }
            StoreError::EmptyField { field } => {
                write!(f, "{} must not be empty", field)
            }
            StoreError::NonPositiveRate => {
                write!(f, "Rate must be greater than zero")
            }
            StoreError::ZeroQuantity => {
                write!(f, "Quantity must be at least 1")
            }
            StoreError::UnknownProduct { name } => {
                write!(f, "No product named '{}'", name)
            }
            StoreError::InsufficientStock {
                name,
                requested,
                available,
            } => {
                write!(
                    f,
                    "Not enough stock of '{}': requested {}, available {}",
                    name, requested, available
                )
            }
            StoreError::UnknownCustomer { name } => {
                write!(f, "No customer named '{}'", name)
            }
            StoreError::DueIndexOutOfRange { index, len } => {
                write!(
                    f,
                    "Due entry {} out of range (customer has {})",
                    index, len
                )
            }
            StoreError::InvalidNumber { field, input } => {
                write!(f, "{} is not a valid number: '{}'", field, input)
            }
            StoreError::InvalidDate { input } => {
                write!(f, "Not a valid date (YYYY-MM-DD): '{}'", input)
            }
            StoreError::NotLoggedIn => {
                write!(f, "Log in first")
            }
        }
    }
}

impl std::error::Error for StoreError {}
