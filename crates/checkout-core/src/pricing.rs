//! # Pricing
//!
//! The pricing table and the total-cost computation over a basket.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  basket (JSON text │ JSON value │ [BasketItem])                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BasketInput::into_items()           ← one normalization step           │
//! │       │                                                                 │
//! │       ▼  for each item                                                  │
//! │  lookup item.code ──missing──► UnknownProduct (wrapped in LineItem)     │
//! │       │                                                                 │
//! │       ├── has modifier?  modifier.modified_price(unit_price, qty)       │
//! │       └── otherwise      unit_price × qty                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Σ line costs ──► Quote { lines, total }                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! `PricingInfo` is the single owner of every `ProductPricing` and modifier.
//! Price changes (promotions) go through `&mut PricingInfo`, so nothing can
//! observe a half-applied update and past quotes are never affected.

use std::collections::HashMap;

use serde::Serialize;
use ts_rs::TS;

use crate::basket::BasketInput;
use crate::error::{CheckoutError, CoreResult, ValidationError};
use crate::modifier::PriceModifier;
use crate::money::Money;
use crate::types::{BasketItem, Product};
use crate::validation::validate_price;

// =============================================================================
// Product Pricing
// =============================================================================

/// Unit price and optional deal for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ProductPricing {
    product: Product,
    unit_price: Money,
    price_modifier: Option<PriceModifier>,
}

impl ProductPricing {
    /// Creates a pricing without a modifier.
    ///
    /// ## Errors
    /// [`CheckoutError::InvalidPricingConfig`] if `unit_price` is negative.
    pub fn new(product: Product, unit_price: Money) -> CoreResult<Self> {
        validate_price(unit_price, "unit_price")
            .map_err(|e| CheckoutError::pricing_config(product.id(), e))?;
        Ok(ProductPricing {
            product,
            unit_price,
            price_modifier: None,
        })
    }

    /// Attaches a price modifier.
    pub fn with_modifier(mut self, modifier: impl Into<PriceModifier>) -> Self {
        self.price_modifier = Some(modifier.into());
        self
    }

    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    #[inline]
    pub fn price_modifier(&self) -> Option<&PriceModifier> {
        self.price_modifier.as_ref()
    }

    /// Mutable access to the modifier, for adjusting deal terms in place.
    #[inline]
    pub fn price_modifier_mut(&mut self) -> Option<&mut PriceModifier> {
        self.price_modifier.as_mut()
    }

    /// Changes the unit price. Negative prices are rejected.
    pub fn set_unit_price(&mut self, unit_price: Money) -> CoreResult<()> {
        validate_price(unit_price, "unit_price")
            .map_err(|e| CheckoutError::pricing_config(self.product.id(), e))?;
        self.unit_price = unit_price;
        Ok(())
    }

    /// Replaces (or removes) the modifier.
    pub fn set_price_modifier(&mut self, modifier: Option<PriceModifier>) {
        self.price_modifier = modifier;
    }

    /// Cost of `quantity` units under this pricing.
    pub fn cost(&self, quantity: i64) -> CoreResult<Money> {
        match &self.price_modifier {
            Some(modifier) => modifier.modified_price(self.unit_price, quantity),
            None => {
                if quantity < 0 {
                    return Err(CheckoutError::InvalidQuantity { quantity });
                }
                self.unit_price
                    .checked_mul_quantity(quantity)
                    .ok_or(CheckoutError::AmountOverflow)
            }
        }
    }
}

// =============================================================================
// Pricing Source
// =============================================================================

/// The two shapes a pricing table can be built from.
#[derive(Debug, Clone)]
pub enum PricingSource {
    /// Explicit product id → pricing map. Keys are used as given.
    Map(HashMap<String, ProductPricing>),
    /// A list keyed by each pricing's product id.
    List(Vec<ProductPricing>),
}

impl From<HashMap<String, ProductPricing>> for PricingSource {
    fn from(map: HashMap<String, ProductPricing>) -> Self {
        PricingSource::Map(map)
    }
}

impl From<Vec<ProductPricing>> for PricingSource {
    fn from(list: Vec<ProductPricing>) -> Self {
        PricingSource::List(list)
    }
}

// =============================================================================
// Quote
// =============================================================================

/// One priced basket line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct QuotedLine {
    pub code: String,
    pub quantity: i64,
    pub cost: Money,
}

/// A fully priced basket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Quote {
    pub lines: Vec<QuotedLine>,
    pub total: Money,
}

// =============================================================================
// Pricing Info
// =============================================================================

/// A pricing table: product id → [`ProductPricing`].
#[derive(Debug, Clone, Default)]
pub struct PricingInfo {
    product_pricings: HashMap<String, ProductPricing>,
}

impl PricingInfo {
    /// Builds a pricing table from a map or a list.
    ///
    /// ## Errors
    /// [`CheckoutError::InvalidPricingConfig`] when a map key is empty, or
    /// when a list holds two pricings for the same product id.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::{BasketItem, Money, PricingInfo, Product, ProductPricing};
    ///
    /// let pricing = PricingInfo::new(vec![
    ///     ProductPricing::new(Product::new("C").unwrap(), Money::from_units(25)).unwrap(),
    /// ])
    /// .unwrap();
    ///
    /// let item = BasketItem::new("C", 2).unwrap();
    /// assert_eq!(pricing.calculate_item_cost(&item).unwrap(), Money::from_units(50));
    /// ```
    pub fn new(source: impl Into<PricingSource>) -> CoreResult<Self> {
        let product_pricings = match source.into() {
            PricingSource::Map(map) => {
                if let Some(key) = map.keys().find(|key| key.trim().is_empty()) {
                    return Err(CheckoutError::pricing_config(
                        format!("key '{}'", key),
                        ValidationError::Required {
                            field: "product id".to_string(),
                        },
                    ));
                }
                map
            }
            PricingSource::List(list) => {
                let mut map = HashMap::with_capacity(list.len());
                for pricing in list {
                    let id = pricing.product().id().to_string();
                    if map.contains_key(&id) {
                        return Err(CheckoutError::pricing_config(
                            id.clone(),
                            ValidationError::Duplicate {
                                field: "product id".to_string(),
                                value: id,
                            },
                        ));
                    }
                    map.insert(id, pricing);
                }
                map
            }
        };

        Ok(PricingInfo { product_pricings })
    }

    /// Number of priced products.
    pub fn len(&self) -> usize {
        self.product_pricings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.product_pricings.is_empty()
    }

    /// Priced product ids in sorted order.
    pub fn product_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.product_pricings.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Looks up the pricing for a product id.
    pub fn pricing(&self, id: &str) -> Option<&ProductPricing> {
        self.product_pricings.get(id)
    }

    /// Mutable lookup; fails with `UnknownProduct` when absent.
    pub fn pricing_mut(&mut self, id: &str) -> CoreResult<&mut ProductPricing> {
        self.product_pricings
            .get_mut(id)
            .ok_or_else(|| CheckoutError::UnknownProduct { code: id.to_string() })
    }

    /// Changes a product's unit price.
    pub fn set_unit_price(&mut self, id: &str, unit_price: Money) -> CoreResult<()> {
        self.pricing_mut(id)?.set_unit_price(unit_price)
    }

    /// Changes the combo price of a product's combo deal.
    ///
    /// ## Errors
    /// - [`CheckoutError::UnknownProduct`] for an unpriced id
    /// - [`CheckoutError::InvalidModifierConfig`] if the product has no combo deal
    ///   or the price is negative
    pub fn set_combo_price(&mut self, id: &str, combo_price: Money) -> CoreResult<()> {
        let combo = self
            .pricing_mut(id)?
            .price_modifier_mut()
            .and_then(PriceModifier::as_combo_deal_mut)
            .ok_or_else(|| {
                CheckoutError::InvalidModifierConfig(ValidationError::Required {
                    field: format!("combo deal for product {}", id),
                })
            })?;
        combo.set_combo_price(combo_price)
    }

    /// Cost of a single basket item.
    ///
    /// ## Errors
    /// - [`CheckoutError::UnknownProduct`] if `item.code()` is not priced
    /// - whatever the modifier raises for the quantity
    pub fn calculate_item_cost(&self, item: &BasketItem) -> CoreResult<Money> {
        let pricing = self
            .product_pricings
            .get(item.code())
            .ok_or_else(|| CheckoutError::UnknownProduct {
                code: item.code().to_string(),
            })?;

        pricing.cost(item.quantity())
    }

    /// Prices every line of a basket.
    ///
    /// Lines are priced independently: two lines for the same product do not
    /// pool their quantities toward a combo.
    pub fn price_basket<'a>(&self, basket: impl Into<BasketInput<'a>>) -> CoreResult<Quote> {
        let items = basket.into().into_items()?;

        let mut lines = Vec::with_capacity(items.len());
        let mut total = Money::zero();

        for (index, item) in items.iter().enumerate() {
            let cost = self
                .calculate_item_cost(item)
                .map_err(|source| CheckoutError::LineItem {
                    index,
                    code: item.code().to_string(),
                    source: Box::new(source),
                })?;

            total = total.checked_add(cost).ok_or(CheckoutError::AmountOverflow)?;
            lines.push(QuotedLine {
                code: item.code().to_string(),
                quantity: item.quantity(),
                cost,
            });
        }

        Ok(Quote { lines, total })
    }

    /// Total cost of a basket given as JSON text, a JSON value, or items.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::{ComboDealPriceModifier, Money, PricingInfo, Product, ProductPricing};
    ///
    /// let a = ProductPricing::new(Product::new("A").unwrap(), Money::from_units(50))
    ///     .unwrap()
    ///     .with_modifier(ComboDealPriceModifier::new(Money::from_units(140), 3).unwrap());
    /// let pricing = PricingInfo::new(vec![a]).unwrap();
    ///
    /// let total = pricing.calculate_total_cost(r#"[{"code":"A","quantity":4}]"#).unwrap();
    /// assert_eq!(total, Money::from_units(190));
    /// ```
    pub fn calculate_total_cost<'a>(&self, basket: impl Into<BasketInput<'a>>) -> CoreResult<Money> {
        self.price_basket(basket).map(|quote| quote.total)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::modifier::ComboDealPriceModifier;
    use serde_json::{json, Value};

    const INPUT_AS_JSON: &str = r#"[{"code":"A","quantity":3},{"code":"B","quantity":3},{"code":"C","quantity":1},{"code":"D","quantity":2}]"#;

    fn combo(price: i64, per_amount: i64) -> ComboDealPriceModifier {
        ComboDealPriceModifier::new(Money::from_units(price), per_amount).unwrap()
    }

    fn pricing(name: &str, unit_price: i64) -> ProductPricing {
        ProductPricing::new(Product::new(name).unwrap(), Money::from_units(unit_price)).unwrap()
    }

    /// A=50 (3 for 140), B=35 (2 for 60), C=25, D=12.
    fn pricing_info() -> PricingInfo {
        PricingInfo::new(vec![
            pricing("A", 50).with_modifier(combo(140, 3)),
            pricing("B", 35).with_modifier(combo(60, 2)),
            pricing("C", 25),
            pricing("D", 12),
        ])
        .unwrap()
    }

    fn input_as_object() -> Vec<Value> {
        vec![
            json!({"code": "A", "quantity": 3}),
            json!({"code": "B", "quantity": 3}),
            json!({"code": "C", "quantity": 1}),
            json!({"code": "D", "quantity": 2}),
        ]
    }

    fn input_as_items() -> Vec<BasketItem> {
        vec![
            BasketItem::new("A", 3).unwrap(),
            BasketItem::new("B", 3).unwrap(),
            BasketItem::new("C", 1).unwrap(),
            BasketItem::new("D", 2).unwrap(),
        ]
    }

    #[test]
    fn test_pricing_info_json_parsing() {
        let total = pricing_info().calculate_total_cost(INPUT_AS_JSON).unwrap();
        assert_eq!(total, Money::from_units(284));
    }

    #[test]
    fn test_all_input_shapes_agree() {
        let info = pricing_info();
        let items = input_as_items();
        let expected = Money::from_units(284);

        assert_eq!(info.calculate_total_cost(INPUT_AS_JSON).unwrap(), expected);
        assert_eq!(info.calculate_total_cost(input_as_object()).unwrap(), expected);
        assert_eq!(info.calculate_total_cost(json!(input_as_object())).unwrap(), expected);
        assert_eq!(info.calculate_total_cost(&items).unwrap(), expected);
    }

    #[test]
    fn test_quote_breakdown() {
        let quote = pricing_info().price_basket(INPUT_AS_JSON).unwrap();
        let costs: Vec<(&str, i64)> = quote
            .lines
            .iter()
            .map(|line| (line.code.as_str(), line.cost.units()))
            .collect();
        assert_eq!(costs, vec![("A", 140), ("B", 95), ("C", 25), ("D", 24)]);
        assert_eq!(quote.total, Money::from_units(284));
    }

    /// (expected, a_combo_price_mod, a_unit_price_mod, a_quantity_mod, d_unit_price_mod)
    #[test]
    fn test_pricing_info_calculation_after_updates() {
        let cases = [
            (284, 0, 0, 0, 0),
            (294, 10, 0, 0, 0),
            (280, 0, 0, 0, -2),
            (334, 0, 0, 1, 0),
            (284, 0, 7, 0, 0),
        ];

        for (expected, a_combo_mod, a_unit_mod, a_qty_mod, d_unit_mod) in cases {
            let mut info = pricing_info();

            let a_unit = info.pricing("A").unwrap().unit_price();
            info.set_unit_price("A", a_unit + Money::from_units(a_unit_mod)).unwrap();
            let d_unit = info.pricing("D").unwrap().unit_price();
            info.set_unit_price("D", d_unit + Money::from_units(d_unit_mod)).unwrap();
            info.set_combo_price("A", Money::from_units(140 + a_combo_mod)).unwrap();

            let mut basket = input_as_object();
            basket[0]["quantity"] = json!(3 + a_qty_mod);

            assert_eq!(
                info.calculate_total_cost(basket).unwrap(),
                Money::from_units(expected),
                "case {:?}",
                (expected, a_combo_mod, a_unit_mod, a_qty_mod, d_unit_mod)
            );
        }
    }

    #[test]
    fn test_updates_do_not_change_past_results() {
        let mut info = pricing_info();
        let before = info.calculate_total_cost(INPUT_AS_JSON).unwrap();
        info.set_combo_price("A", Money::from_units(150)).unwrap();
        let after = info.calculate_total_cost(INPUT_AS_JSON).unwrap();

        assert_eq!(before, Money::from_units(284));
        assert_eq!(after, Money::from_units(294));
    }

    #[test]
    fn test_modifier_mutated_in_place() {
        let mut info = pricing_info();
        let modifier = info.pricing_mut("B").unwrap().price_modifier_mut().unwrap();
        modifier.as_combo_deal_mut().unwrap().set_per_amount(3).unwrap();

        let item = BasketItem::new("B", 3).unwrap();
        assert_eq!(info.calculate_item_cost(&item).unwrap(), Money::from_units(60));
    }

    #[test]
    fn test_idempotent() {
        let info = pricing_info();
        let basket = input_as_items();
        let first = info.calculate_total_cost(&basket).unwrap();
        let second = info.calculate_total_cost(&basket).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_lines_are_priced_independently() {
        let basket = vec![
            BasketItem::new("A", 3).unwrap(),
            BasketItem::new("A", 3).unwrap(),
            BasketItem::new("C", 1).unwrap(),
            BasketItem::new("D", 2).unwrap(),
        ];
        assert_eq!(
            pricing_info().calculate_total_cost(&basket).unwrap(),
            Money::from_units(329)
        );

        let split = vec![BasketItem::new("A", 2).unwrap(), BasketItem::new("A", 1).unwrap()];
        assert_eq!(
            pricing_info().calculate_total_cost(&split).unwrap(),
            Money::from_units(150)
        );
    }

    #[test]
    fn test_unknown_product() {
        let info = pricing_info();
        let err = info
            .calculate_item_cost(&BasketItem::new("E", 1).unwrap())
            .unwrap_err();
        assert!(matches!(err, CheckoutError::UnknownProduct { ref code } if code == "E"));

        for code in ["A", "B", "C", "D"] {
            assert!(info.calculate_item_cost(&BasketItem::new(code, 1).unwrap()).is_ok());
        }

        let err = info
            .calculate_total_cost(vec![json!({"code": "E", "quantity": 1})])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownProduct);
        assert!(matches!(err, CheckoutError::LineItem { index: 0, .. }));
    }

    #[test]
    fn test_pricing_info_bad_input() {
        let info = pricing_info();

        let err = info.calculate_total_cost("not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);

        let err = info.calculate_total_cost(vec![json!(5)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBasketShape);

        let err = info.calculate_total_cost(json!({"code": "A", "quantity": 1})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBasketShape);

        for bad_input in [
            json!([{"code": "A"}]),
            json!([{"quantity": 5}]),
            json!([{"code": 5, "quantity": 5}]),
            json!([{"code": "A", "quantity": 5.5}]),
            json!([{"code": "A", "quantity": -1}]),
            json!([{"code": "A", "quantity": false}]),
        ] {
            let err = info.calculate_total_cost(bad_input.clone()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidBasketItem, "{bad_input}");
        }
    }

    #[test]
    fn test_empty_basket_costs_nothing() {
        assert_eq!(pricing_info().calculate_total_cost("[]").unwrap(), Money::zero());
    }

    #[test]
    fn test_construct_from_map() {
        let mut map = HashMap::new();
        map.insert("A".to_string(), pricing("A", 50).with_modifier(combo(140, 3)));
        map.insert("C".to_string(), pricing("C", 25));
        let info = PricingInfo::new(map).unwrap();

        assert_eq!(info.product_ids(), vec!["A", "C"]);
        assert_eq!(
            info.calculate_total_cost(r#"[{"code":"A","quantity":4},{"code":"C","quantity":1}]"#)
                .unwrap(),
            Money::from_units(215)
        );
    }

    #[test]
    fn test_construct_rejects_empty_key() {
        let mut map = HashMap::new();
        map.insert(String::new(), pricing("A", 50));
        let err = PricingInfo::new(map).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPricingConfig);
    }

    #[test]
    fn test_construct_rejects_duplicate_ids() {
        let err = PricingInfo::new(vec![pricing("A", 50), pricing("A", 45)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPricingConfig);
        assert!(matches!(
            err,
            CheckoutError::InvalidPricingConfig { ref source, .. }
                if matches!(**source, CheckoutError::Validation(ValidationError::Duplicate { .. }))
        ));
    }

    #[test]
    fn test_negative_unit_price_rejected() {
        let err = ProductPricing::new(Product::new("A").unwrap(), Money::from_units(-1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPricingConfig);

        let mut info = pricing_info();
        assert!(info.set_unit_price("C", Money::from_units(-3)).is_err());
        assert_eq!(info.pricing("C").unwrap().unit_price(), Money::from_units(25));
    }

    #[test]
    fn test_update_path_errors() {
        let mut info = pricing_info();
        let err = info.set_unit_price("E", Money::from_units(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownProduct);

        let err = info.set_combo_price("C", Money::from_units(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidModifierConfig);
    }

    #[test]
    fn test_plain_pricing_rejects_negative_quantity() {
        let err = pricing("C", 25).cost(-1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidQuantity);
    }
}
