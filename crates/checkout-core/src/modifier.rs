//! # Price Modifiers
//!
//! Deal rules that replace plain `unit_price × quantity` for a product.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  COMBO DEAL: "3 for 140", unit price 50                                 │
//! │                                                                         │
//! │  quantity 4                                                             │
//! │     │                                                                   │
//! │     ├── 4 / 3 = 1 combo      → 1 × 140 = 140                            │
//! │     └── 4 % 3 = 1 remaining  → 1 × 50  =  50                            │
//! │                                          ─────                          │
//! │                                            190                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! New deal types are new [`PriceModifier`] variants; callers only ever use
//! [`PriceModifier::modified_price`].

use serde::Serialize;
use ts_rs::TS;

use crate::error::{CheckoutError, CoreResult};
use crate::money::Money;
use crate::validation::{validate_per_amount, validate_price};

// =============================================================================
// Price Modifier
// =============================================================================

/// A deal rule attached to a product's pricing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PriceModifier {
    /// "N for a fixed price" with the remainder at unit price.
    ComboDeal(ComboDealPriceModifier),
}

impl PriceModifier {
    /// Price of `quantity` units at `unit_price` with this rule applied.
    ///
    /// ## Errors
    /// - [`CheckoutError::InvalidQuantity`] if `quantity` is negative
    /// - [`CheckoutError::AmountOverflow`] if the result does not fit
    pub fn modified_price(&self, unit_price: Money, quantity: i64) -> CoreResult<Money> {
        match self {
            PriceModifier::ComboDeal(combo) => combo.modified_price(unit_price, quantity),
        }
    }

    /// The combo deal, if this is one.
    pub fn as_combo_deal_mut(&mut self) -> Option<&mut ComboDealPriceModifier> {
        match self {
            PriceModifier::ComboDeal(combo) => Some(combo),
        }
    }
}

impl From<ComboDealPriceModifier> for PriceModifier {
    fn from(combo: ComboDealPriceModifier) -> Self {
        PriceModifier::ComboDeal(combo)
    }
}

// =============================================================================
// Combo Deal
// =============================================================================

/// "`per_amount` for `combo_price`", e.g. 3 for 140 or 2 for 60.
///
/// ## Invariants
/// - `per_amount > 0`
/// - `combo_price >= 0`
///
/// Both are re-checked by the setters, so a promotion can adjust the deal
/// without ever making it invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ComboDealPriceModifier {
    combo_price: Money,
    per_amount: i64,
}

impl ComboDealPriceModifier {
    /// Creates a combo deal.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::{ComboDealPriceModifier, ErrorKind, Money};
    ///
    /// let three_for_140 = ComboDealPriceModifier::new(Money::from_units(140), 3).unwrap();
    /// assert_eq!(
    ///     three_for_140.modified_price(Money::from_units(50), 4).unwrap(),
    ///     Money::from_units(190)
    /// );
    ///
    /// let err = ComboDealPriceModifier::new(Money::from_units(5), 0).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidModifierConfig);
    /// ```
    pub fn new(combo_price: Money, per_amount: i64) -> CoreResult<Self> {
        validate_price(combo_price, "combo_price").map_err(CheckoutError::InvalidModifierConfig)?;
        validate_per_amount(per_amount).map_err(CheckoutError::InvalidModifierConfig)?;
        Ok(ComboDealPriceModifier {
            combo_price,
            per_amount,
        })
    }

    /// Price of one full combo.
    #[inline]
    pub fn combo_price(&self) -> Money {
        self.combo_price
    }

    /// Units per combo.
    #[inline]
    pub fn per_amount(&self) -> i64 {
        self.per_amount
    }

    /// Changes the combo price.
    pub fn set_combo_price(&mut self, combo_price: Money) -> CoreResult<()> {
        validate_price(combo_price, "combo_price").map_err(CheckoutError::InvalidModifierConfig)?;
        self.combo_price = combo_price;
        Ok(())
    }

    /// Changes the number of units per combo.
    pub fn set_per_amount(&mut self, per_amount: i64) -> CoreResult<()> {
        validate_per_amount(per_amount).map_err(CheckoutError::InvalidModifierConfig)?;
        self.per_amount = per_amount;
        Ok(())
    }

    /// `(q / n) × combo_price + (q % n) × unit_price`.
    pub fn modified_price(&self, unit_price: Money, quantity: i64) -> CoreResult<Money> {
        if quantity < 0 {
            return Err(CheckoutError::InvalidQuantity { quantity });
        }

        let combos = quantity / self.per_amount;
        let remaining = quantity % self.per_amount;

        let deal_price = self
            .combo_price
            .checked_mul_quantity(combos)
            .ok_or(CheckoutError::AmountOverflow)?;
        let remaining_price = unit_price
            .checked_mul_quantity(remaining)
            .ok_or(CheckoutError::AmountOverflow)?;

        deal_price
            .checked_add(remaining_price)
            .ok_or(CheckoutError::AmountOverflow)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
