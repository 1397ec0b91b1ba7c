//! # Basket Input
//!
//! The engine accepts a basket in three shapes. They are normalized once,
//! here, into a single `[BasketItem]` before any pricing happens.
//!
//! ```text
//! ┌──────────────────────┐
//! │ Json(&str)           │──► serde_json::from_str ──┐   MalformedInput
//! └──────────────────────┘                           │
//! ┌──────────────────────┐                           ▼
//! │ Value(Value)         │──────────────────► must be a list   InvalidBasketShape
//! └──────────────────────┘                           │
//!                                                    ▼
//!                                   every element a map? ──no──► InvalidBasketShape
//!                                                    │yes
//!                                                    ▼
//!                                   BasketItem::from_value       InvalidBasketItem
//!                                                    │
//! ┌──────────────────────┐                           ▼
//! │ Items(&[BasketItem]) │────────────────────► Cow<[BasketItem]>
//! └──────────────────────┘      (borrowed as-is)
//! ```

use std::borrow::Cow;

use serde_json::Value;

use crate::error::{CheckoutError, CoreResult};
use crate::types::BasketItem;

/// One of the accepted basket shapes.
#[derive(Debug, Clone)]
pub enum BasketInput<'a> {
    /// JSON text encoding a list of `{"code", "quantity"}` maps.
    Json(&'a str),
    /// An already-parsed JSON value; must be a list of maps.
    Value(Value),
    /// Already-validated items.
    Items(&'a [BasketItem]),
}

impl<'a> From<&'a str> for BasketInput<'a> {
    fn from(text: &'a str) -> Self {
        BasketInput::Json(text)
    }
}

impl<'a> From<&'a String> for BasketInput<'a> {
    fn from(text: &'a String) -> Self {
        BasketInput::Json(text.as_str())
    }
}

impl From<Value> for BasketInput<'_> {
    fn from(value: Value) -> Self {
        BasketInput::Value(value)
    }
}

impl From<Vec<Value>> for BasketInput<'_> {
    fn from(values: Vec<Value>) -> Self {
        BasketInput::Value(Value::Array(values))
    }
}

impl<'a> From<&'a [BasketItem]> for BasketInput<'a> {
    fn from(items: &'a [BasketItem]) -> Self {
        BasketInput::Items(items)
    }
}

impl<'a> From<&'a Vec<BasketItem>> for BasketInput<'a> {
    fn from(items: &'a Vec<BasketItem>) -> Self {
        BasketInput::Items(items.as_slice())
    }
}

impl<'a> BasketInput<'a> {
    /// Normalizes the input into basket items.
    ///
    /// Typed items are borrowed; untyped input is parsed into owned items.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::basket::BasketInput;
    ///
    /// let items = BasketInput::from(r#"[{"code": "A", "quantity": 3}]"#)
    ///     .into_items()
    ///     .unwrap();
    /// assert_eq!(items.len(), 1);
    /// assert_eq!(items[0].code(), "A");
    /// ```
    pub fn into_items(self) -> CoreResult<Cow<'a, [BasketItem]>> {
        match self {
            BasketInput::Items(items) => Ok(Cow::Borrowed(items)),
            BasketInput::Json(text) => {
                let value: Value = serde_json::from_str(text).map_err(CheckoutError::MalformedInput)?;
                items_from_value(&value).map(Cow::Owned)
            }
            BasketInput::Value(value) => items_from_value(&value).map(Cow::Owned),
        }
    }
}

/// Converts an untyped basket (a list of maps) into items.
fn items_from_value(value: &Value) -> CoreResult<Vec<BasketItem>> {
    let elements = value.as_array().ok_or_else(|| CheckoutError::InvalidBasketShape {
        reason: "basket must be a list".to_string(),
    })?;

    if !elements.iter().all(Value::is_object) {
        return Err(CheckoutError::InvalidBasketShape {
            reason: "all elements of basket must be maps with 'code' and 'quantity'".to_string(),
        });
    }

    elements.iter().map(BasketItem::from_value).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
