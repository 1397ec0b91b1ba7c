//! # checkout-core: Pure Pricing Engine
//!
//! Computes the total cost of a basket from a price list in which some
//! products are sold under "N for a fixed price" combo deals.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 checkout-terminal (apps/terminal)               │   │
//! │  │   stdin / --input file ──► try_input ──► total or cause chain   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ calculate_total_cost(&str)             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ checkout-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  modifier │  │  pricing  │  │  basket   │  │   │
//! │  │   │  Product  │  │ ComboDeal │  │PricingInfo│  │BasketInput│  │   │
//! │  │   │BasketItem │  │           │  │   Quote   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product and BasketItem
//! - [`modifier`] - PriceModifier and the combo deal
//! - [`pricing`] - ProductPricing, PricingInfo, Quote
//! - [`basket`] - The accepted basket input shapes and their normalization
//! - [`price_list`] - JSON price list loading
//! - [`money`] - Money type with integer arithmetic
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same pricing + same basket = same total
//! 2. **No I/O**: reading files or stdin belongs to the terminal app
//! 3. **Integer Money**: all monetary values are cents (i64)
//! 4. **Explicit Errors**: every failure is a named variant with its cause
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{ComboDealPriceModifier, Money, PricingInfo, Product, ProductPricing};
//!
//! # fn main() -> Result<(), checkout_core::CheckoutError> {
//! let pricing = PricingInfo::new(vec![
//!     ProductPricing::new(Product::new("A")?, Money::from_units(50))?
//!         .with_modifier(ComboDealPriceModifier::new(Money::from_units(140), 3)?),
//!     ProductPricing::new(Product::new("B")?, Money::from_units(35))?
//!         .with_modifier(ComboDealPriceModifier::new(Money::from_units(60), 2)?),
//!     ProductPricing::new(Product::new("C")?, Money::from_units(25))?,
//!     ProductPricing::new(Product::new("D")?, Money::from_units(12))?,
//! ])?;
//!
//! let total = pricing.calculate_total_cost(
//!     r#"[{"code":"A","quantity":3},{"code":"B","quantity":3},
//!         {"code":"C","quantity":1},{"code":"D","quantity":2}]"#,
//! )?;
//! assert_eq!(total.to_string(), "284");
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod basket;
pub mod error;
pub mod modifier;
pub mod money;
pub mod price_list;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use checkout_core::Money` instead of
// `use checkout_core::money::Money`

pub use basket::BasketInput;
pub use error::{CheckoutError, CoreResult, ErrorKind, ValidationError};
pub use modifier::{ComboDealPriceModifier, PriceModifier};
pub use money::Money;
pub use pricing::{PricingInfo, PricingSource, ProductPricing, Quote, QuotedLine};
pub use types::{BasketItem, Product};
