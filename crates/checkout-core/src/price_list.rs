//! # Price List
//!
//! Builds a [`PricingInfo`] from JSON text, so the pricing table can come from
//! a file instead of code.
//!
//! ## Accepted Shapes
//! ```json
//! [
//!   {"product": "A", "unit_price": 50,
//!    "modifier": {"type": "combo_deal", "combo_price": 140, "per_amount": 3}},
//!   {"product": "C", "unit_price": 25}
//! ]
//! ```
//! or keyed by product id:
//! ```json
//! {"A": {"unit_price": 50, "modifier": {"type": "combo_deal", "combo_price": 140, "per_amount": 3}},
//!  "C": {"unit_price": 25}}
//! ```
//!
//! Prices are in major units and may be any value castable to a float
//! (`50`, `12.5`, `"140"`). `per_amount` must be a JSON integer.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::{CheckoutError, CoreResult, ValidationError};
use crate::modifier::{ComboDealPriceModifier, PriceModifier};
use crate::pricing::{PricingInfo, ProductPricing};
use crate::types::Product;
use crate::validation::{json_type_name, read_integer, read_money, read_str, require_field};

/// Parses a JSON price list into a pricing table.
///
/// ## Errors
/// - [`CheckoutError::MalformedInput`] if the text is not JSON
/// - [`CheckoutError::InvalidPricingConfig`] for any bad entry, with the
///   field-level or modifier error as its cause
///
/// ## Example
/// ```rust
/// use checkout_core::price_list::parse_price_list;
/// use checkout_core::Money;
///
/// let pricing = parse_price_list(r#"[
///     {"product": "B", "unit_price": 35,
///      "modifier": {"type": "combo_deal", "combo_price": 60, "per_amount": 2}}
/// ]"#).unwrap();
///
/// let total = pricing.calculate_total_cost(r#"[{"code": "B", "quantity": 3}]"#).unwrap();
/// assert_eq!(total, Money::from_units(95));
/// ```
pub fn parse_price_list(text: &str) -> CoreResult<PricingInfo> {
    let value: Value = serde_json::from_str(text).map_err(CheckoutError::MalformedInput)?;
    price_list_from_value(&value)
}

/// Builds a pricing table from an already-parsed JSON price list.
pub fn price_list_from_value(value: &Value) -> CoreResult<PricingInfo> {
    match value {
        Value::Array(entries) => {
            let pricings = entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    let fields = entry_fields(entry, || format!("entry {}", index))?;
                    let product = require_field(fields, "product")
                        .and_then(|v| read_str(v, "product"))
                        .map_err(|e| CheckoutError::pricing_config(format!("entry {}", index), e))?;
                    product_pricing(product, fields)
                })
                .collect::<CoreResult<Vec<_>>>()?;
            PricingInfo::new(pricings)
        }
        Value::Object(entries) => {
            let pricings = entries
                .iter()
                .map(|(id, entry)| {
                    let fields = entry_fields(entry, || id.clone())?;
                    product_pricing(id, fields).map(|pricing| (id.clone(), pricing))
                })
                .collect::<CoreResult<HashMap<_, _>>>()?;
            PricingInfo::new(pricings)
        }
        other => Err(CheckoutError::pricing_config(
            "price list",
            ValidationError::InvalidType {
                field: "price list".to_string(),
                expected: "a list or a map",
                found: json_type_name(other),
            },
        )),
    }
}

fn entry_fields(entry: &Value, name: impl Fn() -> String) -> CoreResult<&Map<String, Value>> {
    entry.as_object().ok_or_else(|| {
        CheckoutError::pricing_config(
            name(),
            ValidationError::InvalidType {
                field: "price list entry".to_string(),
                expected: "a map",
                found: json_type_name(entry),
            },
        )
    })
}

fn product_pricing(id: &str, fields: &Map<String, Value>) -> CoreResult<ProductPricing> {
    let product = Product::new(id).map_err(|e| CheckoutError::pricing_config(id, e))?;
    let unit_price = require_field(fields, "unit_price")
        .and_then(|v| read_money(v, "unit_price"))
        .map_err(|e| CheckoutError::pricing_config(id, e))?;

    let mut pricing = ProductPricing::new(product, unit_price)?;

    match fields.get("modifier") {
        None | Some(Value::Null) => {}
        Some(modifier) => {
            let modifier = price_modifier(modifier).map_err(|e| CheckoutError::pricing_config(id, e))?;
            pricing.set_price_modifier(Some(modifier));
        }
    }

    Ok(pricing)
}

fn price_modifier(value: &Value) -> CoreResult<PriceModifier> {
    let invalid = CheckoutError::InvalidModifierConfig;

    let fields = value.as_object().ok_or_else(|| {
        invalid(ValidationError::InvalidType {
            field: "modifier".to_string(),
            expected: "a map",
            found: json_type_name(value),
        })
    })?;

    let kind = require_field(fields, "type")
        .and_then(|v| read_str(v, "type"))
        .map_err(invalid)?;

    match kind {
        "combo_deal" => {
            let combo_price = require_field(fields, "combo_price")
                .and_then(|v| read_money(v, "combo_price"))
                .map_err(invalid)?;
            let per_amount = require_field(fields, "per_amount")
                .and_then(|v| read_integer(v, "per_amount"))
                .map_err(invalid)?;
            ComboDealPriceModifier::new(combo_price, per_amount).map(PriceModifier::from)
        }
        other => Err(invalid(ValidationError::InvalidType {
            field: format!("modifier type '{}'", other),
            expected: "\"combo_deal\"",
            found: "an unknown deal type",
        })),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
