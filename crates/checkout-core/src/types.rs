//! # Domain Types
//!
//! The two leaf types of the engine.
//!
//! ```text
//! ┌─────────────────┐        ┌─────────────────┐
//! │    Product      │        │   BasketItem    │
//! │  ─────────────  │  id ◄──│  ─────────────  │
//! │  name (= id)    │        │  code           │
//! └─────────────────┘        │  quantity >= 0  │
//!                            └─────────────────┘
//! ```
//!
//! A `BasketItem` refers to a product by identity only; it does not own one.
//! The lookup happens in [`crate::pricing::PricingInfo`].

use serde::Serialize;
use serde_json::Value;
use ts_rs::TS;

use crate::error::{CheckoutError, CoreResult};
use crate::validation::{read_integer, read_str, require_field, validate_product_name, validate_quantity};

// =============================================================================
// Product
// =============================================================================

/// A purchasable product.
///
/// The price is deliberately not part of the product: the same product can
/// be priced differently by different [`crate::pricing::PricingInfo`] tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
pub struct Product {
    name: String,
}

impl Product {
    /// Creates a product, rejecting empty names.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::Product;
    ///
    /// let product = Product::new("A").unwrap();
    /// assert_eq!(product.id(), product.name());
    /// assert!(Product::new("").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> CoreResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        Ok(Product { name })
    }

    /// Display name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identity used as the pricing table key. Same as the name.
    #[inline]
    pub fn id(&self) -> &str {
        &self.name
    }
}

// =============================================================================
// Basket Item
// =============================================================================

/// One line of a basket: a product code and how many of it.
///
/// Serializes to the basket wire format: `{"code": "A", "quantity": 3}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct BasketItem {
    code: String,
    quantity: i64,
}

impl BasketItem {
    /// Creates a basket item. A negative quantity fails immediately.
    pub fn new(code: impl Into<String>, quantity: i64) -> CoreResult<Self> {
        let code = code.into();
        validate_quantity(quantity).map_err(|source| CheckoutError::InvalidBasketItem {
            item: format!("'{}'", code),
            source,
        })?;
        Ok(BasketItem { code, quantity })
    }

    /// Converts an untyped key/value map into a basket item.
    ///
    /// ## Rules
    /// - Both `code` and `quantity` must be present
    /// - `code` must be a string
    /// - `quantity` must be an integer (not a boolean or float) and >= 0
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::{BasketItem, ErrorKind};
    /// use serde_json::json;
    ///
    /// let item = BasketItem::from_value(&json!({"code": "A", "quantity": 3})).unwrap();
    /// assert_eq!(item.code(), "A");
    /// assert_eq!(item.quantity(), 3);
    ///
    /// let err = BasketItem::from_value(&json!({"code": "A"})).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidBasketItem);
    /// ```
    pub fn from_value(value: &Value) -> CoreResult<Self> {
        let invalid = |source| CheckoutError::InvalidBasketItem {
            item: value.to_string(),
            source,
        };

        let map = value.as_object().ok_or_else(|| CheckoutError::InvalidBasketShape {
            reason: "all elements of basket must be maps with 'code' and 'quantity'".to_string(),
        })?;

        let code = require_field(map, "code").and_then(|v| read_str(v, "code")).map_err(invalid)?;
        let quantity = require_field(map, "quantity")
            .and_then(|v| read_integer(v, "quantity"))
            .map_err(invalid)?;
        validate_quantity(quantity).map_err(invalid)?;

        Ok(BasketItem {
            code: code.to_string(),
            quantity,
        })
    }

    /// Product identity this line refers to.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Number of units. Never negative.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
