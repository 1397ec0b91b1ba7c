//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                       │
//! │  ├── CheckoutError    - Named failure kinds raised by the engine        │
//! │  └── ValidationError  - The field-level violation underneath            │
//! │                                                                         │
//! │  checkout-terminal errors (separate crate)                              │
//! │  └── TerminalError    - I/O and configuration failures                  │
//! │                                                                         │
//! │  Flow: ValidationError → CheckoutError → (cause chain) → terminal       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Cause Chains
//! Every higher-level error keeps the error that triggered it as its
//! [`std::error::Error::source`]. The terminal walks that chain to print:
//!
//! ```text
//! Could not price basket item 0 ('E')
//!  - caused by -
//! Product E in basket does not have pricing data
//! ```

use thiserror::Error;

// =============================================================================
// Checkout Error
// =============================================================================

/// Errors raised by the pricing engine.
///
/// Every variant is raised at the point of detection. A single bad item
/// invalidates the whole computation; there is no partial total.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Basket text is not valid JSON.
    #[error("Invalid JSON")]
    MalformedInput(#[source] serde_json::Error),

    /// The basket is not a list, or its elements are not all key/value maps.
    #[error("Invalid Basket Format, {reason}")]
    InvalidBasketShape { reason: String },

    /// An element purporting to be a basket item is malformed.
    ///
    /// `item` is the offending element as written (JSON text or code).
    #[error("Invalid format for basket item {item}")]
    InvalidBasketItem {
        item: String,
        #[source]
        source: ValidationError,
    },

    /// Price modifier parameters are invalid.
    #[error("Invalid price modifier configuration")]
    InvalidModifierConfig(#[source] ValidationError),

    /// A call-time quantity is negative.
    #[error("Quantity must be an int >= 0, got {quantity}")]
    InvalidQuantity { quantity: i64 },

    /// The pricing table received a malformed entry.
    ///
    /// `entry` names the product id or position that failed.
    #[error("Invalid pricing configuration for {entry}")]
    InvalidPricingConfig {
        entry: String,
        #[source]
        source: Box<CheckoutError>,
    },

    /// The basket references a product with no pricing entry.
    #[error("Product {code} in basket does not have pricing data")]
    UnknownProduct { code: String },

    /// Context wrapper naming the basket line that failed.
    ///
    /// [`CheckoutError::kind`] looks through this to the underlying failure.
    #[error("Could not price basket item {index} ('{code}')")]
    LineItem {
        index: usize,
        code: String,
        #[source]
        source: Box<CheckoutError>,
    },

    /// A monetary amount exceeded the representable range.
    #[error("Amount overflowed while pricing")]
    AmountOverflow,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CheckoutError {
    /// Wraps an error as the cause of an `InvalidPricingConfig` for `entry`.
    pub fn pricing_config(entry: impl Into<String>, source: impl Into<CheckoutError>) -> Self {
        CheckoutError::InvalidPricingConfig {
            entry: entry.into(),
            source: Box::new(source.into()),
        }
    }

    /// Flat classification of this error.
    ///
    /// `LineItem` is transparent: the kind of the failure it wraps is
    /// returned, so an unknown product deep inside a basket still reports
    /// [`ErrorKind::UnknownProduct`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckoutError::MalformedInput(_) => ErrorKind::MalformedInput,
            CheckoutError::InvalidBasketShape { .. } => ErrorKind::InvalidBasketShape,
            CheckoutError::InvalidBasketItem { .. } => ErrorKind::InvalidBasketItem,
            CheckoutError::InvalidModifierConfig(_) => ErrorKind::InvalidModifierConfig,
            CheckoutError::InvalidQuantity { .. } => ErrorKind::InvalidQuantity,
            CheckoutError::InvalidPricingConfig { .. } => ErrorKind::InvalidPricingConfig,
            CheckoutError::UnknownProduct { .. } => ErrorKind::UnknownProduct,
            CheckoutError::LineItem { source, .. } => source.kind(),
            CheckoutError::AmountOverflow => ErrorKind::AmountOverflow,
            CheckoutError::Validation(_) => ErrorKind::Validation,
        }
    }
}

/// Discriminant of [`CheckoutError`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedInput,
    InvalidBasketShape,
    InvalidBasketItem,
    InvalidModifierConfig,
    InvalidQuantity,
    InvalidPricingConfig,
    UnknownProduct,
    AmountOverflow,
    Validation,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level validation failures.
///
/// These never surface alone from the engine's public operations; they are
/// the `source` of a [`CheckoutError`] that says where the field came from.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("'{field}' is required")]
    Required { field: String },

    /// Field holds a value of the wrong JSON type.
    #[error("'{field}' value must be {expected}, is {found}")]
    InvalidType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Value cannot be read as a number.
    #[error("'{field}' must be castable to float, got {value}")]
    NotNumeric { field: String, value: String },

    /// Value is numeric but not a whole number.
    #[error("'{field}' must be an integer, got {value}")]
    NotInteger { field: String, value: String },

    /// Value must be strictly positive.
    #[error("'{field}' must be an int > 0, got {value}")]
    MustBePositive { field: String, value: i64 },

    /// Value must not be negative.
    #[error("'{field}' must not be negative, got {value}")]
    MustBeNonNegative { field: String, value: String },

    /// Numeric value is out of range.
    #[error("'{field}' is out of range: {value}")]
    OutOfRange { field: String, value: String },

    /// Duplicate value (e.g., two pricings for one product).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CheckoutError.
pub type CoreResult<T> = Result<T, CheckoutError>;

// =============================================================================
// Unit Tests
// =============================================================================
