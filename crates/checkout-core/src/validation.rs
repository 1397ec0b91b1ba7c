//! # Validation Module
//!
//! Field validators shared by the typed constructors and the untyped
//! (JSON) readers.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: JSON readers (read_* functions)                               │
//! │  ├── Field presence                                                     │
//! │  └── JSON type checks (string / integer / number)                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Typed validators (validate_* functions)                       │
//! │  ├── Range rules (quantity >= 0, per_amount > 0, price >= 0)            │
//! │  └── Used by every constructor and setter                               │
//! │                                                                         │
//! │  Each failure is a ValidationError; callers wrap it in the              │
//! │  CheckoutError variant that says where the field came from.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::{read_integer, validate_quantity};
//! use serde_json::json;
//!
//! let qty = read_integer(&json!(3), "quantity").unwrap();
//! assert!(validate_quantity(qty).is_ok());
//!
//! // Booleans are never integers
//! assert!(read_integer(&json!(true), "quantity").is_err());
//! ```

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Typed Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a basket quantity.
///
/// ## Rules
/// - Must be non-negative (zero is allowed and costs nothing)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
            value: qty.to_string(),
        });
    }

    Ok(())
}

/// Validates the "N" of an N-for-price combo.
///
/// ## Rules
/// - Must be strictly positive
pub fn validate_per_amount(per_amount: i64) -> ValidationResult<()> {
    if per_amount <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "per_amount".to_string(),
            value: per_amount,
        });
    }

    Ok(())
}

/// Validates a configured price.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use checkout_core::money::Money;
/// use checkout_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_units(50), "unit_price").is_ok());
/// assert!(validate_price(Money::zero(), "unit_price").is_ok());
/// assert!(validate_price(Money::from_units(-1), "unit_price").is_err());
/// ```
pub fn validate_price(price: Money, field: &str) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
            value: price.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// JSON Readers
// =============================================================================

/// Describes a JSON value's type for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_f64() => "a float",
        Value::Number(_) => "an integer",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a map",
    }
}

/// Returns the value under `field`, or `Required` if it is absent.
pub fn require_field<'a>(map: &'a Map<String, Value>, field: &str) -> ValidationResult<&'a Value> {
    map.get(field).ok_or_else(|| ValidationError::Required {
        field: field.to_string(),
    })
}

/// Reads a JSON string.
pub fn read_str<'a>(value: &'a Value, field: &str) -> ValidationResult<&'a str> {
    value.as_str().ok_or_else(|| ValidationError::InvalidType {
        field: field.to_string(),
        expected: "a string",
        found: json_type_name(value),
    })
}

/// Reads a JSON integer.
///
/// Only JSON integer literals qualify: `true`, `3.0`, `"3"` are all rejected.
pub fn read_integer(value: &Value, field: &str) -> ValidationResult<i64> {
    match value {
        Value::Number(n) => {
            if let Some(int) = n.as_i64() {
                Ok(int)
            } else if n.is_u64() {
                Err(ValidationError::OutOfRange {
                    field: field.to_string(),
                    value: n.to_string(),
                })
            } else {
                Err(ValidationError::NotInteger {
                    field: field.to_string(),
                    value: n.to_string(),
                })
            }
        }
        other => Err(ValidationError::InvalidType {
            field: field.to_string(),
            expected: "an integer",
            found: json_type_name(other),
        }),
    }
}

/// Reads a price in major units and converts it to [`Money`].
///
/// Accepts anything castable to a float: JSON numbers and numeric strings
/// such as `"140"` or `"12.5"`. Booleans are rejected.
pub fn read_money(value: &Value, field: &str) -> ValidationResult<Money> {
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    let amount = amount.ok_or_else(|| ValidationError::NotNumeric {
        field: field.to_string(),
        value: value.to_string(),
    })?;

    Money::from_decimal(amount).ok_or_else(|| ValidationError::OutOfRange {
        field: field.to_string(),
        value: value.to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("A").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(999).is_ok());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_per_amount() {
        assert!(validate_per_amount(1).is_ok());
        assert!(validate_per_amount(3).is_ok());
        assert_eq!(
            validate_per_amount(0),
            Err(ValidationError::MustBePositive {
                field: "per_amount".to_string(),
                value: 0,
            })
        );
        assert!(validate_per_amount(-5).is_err());
    }

    #[test]
    fn test_require_field() {
        let map = json!({"code": "A"});
        let map = map.as_object().unwrap();
        assert_eq!(require_field(map, "code").unwrap(), &json!("A"));
        assert_eq!(
            require_field(map, "quantity"),
            Err(ValidationError::Required {
                field: "quantity".to_string()
            })
        );
    }

    #[test]
    fn test_read_str() {
        assert_eq!(read_str(&json!("A"), "code").unwrap(), "A");
        assert!(matches!(
            read_str(&json!(5), "code"),
            Err(ValidationError::InvalidType { found: "an integer", .. })
        ));
    }

    #[test]
    fn test_read_integer() {
        assert_eq!(read_integer(&json!(3), "quantity"), Ok(3));
        assert_eq!(read_integer(&json!(-1), "quantity"), Ok(-1));
        assert!(matches!(
            read_integer(&json!(5.5), "quantity"),
            Err(ValidationError::NotInteger { .. })
        ));
        assert!(matches!(
            read_integer(&json!(3.0), "quantity"),
            Err(ValidationError::NotInteger { .. })
        ));
        assert!(matches!(
            read_integer(&json!(true), "quantity"),
            Err(ValidationError::InvalidType { found: "a boolean", .. })
        ));
        assert!(matches!(
            read_integer(&json!("3"), "quantity"),
            Err(ValidationError::InvalidType { found: "a string", .. })
        ));
        assert!(matches!(
            read_integer(&json!(u64::MAX), "quantity"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_read_money() {
        assert_eq!(read_money(&json!(50), "unit_price"), Ok(Money::from_units(50)));
        assert_eq!(read_money(&json!(12.5), "unit_price"), Ok(Money::from_cents(1250)));
        assert_eq!(read_money(&json!("140"), "combo_price"), Ok(Money::from_units(140)));
        assert!(matches!(
            read_money(&json!("the bee, of course"), "combo_price"),
            Err(ValidationError::NotNumeric { .. })
        ));
        assert!(matches!(
            read_money(&json!(false), "combo_price"),
            Err(ValidationError::NotNumeric { .. })
        ));
        assert!(matches!(
            read_money(&json!("inf"), "combo_price"),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
