//! Terminal configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults.
//!
//! | Variable              | Default    | Meaning                          |
//! |-----------------------|------------|----------------------------------|
//! | `CHECKOUT_PRICE_LIST` | (built-in) | Path to a JSON price list        |
//! | `CHECKOUT_LOG`        | `warn`     | `tracing` filter directive       |

use std::env;
use std::fs;
use std::path::PathBuf;

use checkout_core::price_list::parse_price_list;
use checkout_core::{ComboDealPriceModifier, CoreResult, Money, PricingInfo, Product, ProductPricing};

use crate::error::ConfigError;

/// Environment variable naming the price list file.
pub const PRICE_LIST_ENV: &str = "CHECKOUT_PRICE_LIST";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "CHECKOUT_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Terminal configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalConfig {
    /// Price list file; `None` uses the built-in list
    pub price_list_path: Option<PathBuf>,

    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl TerminalConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let price_list_path = match lookup(PRICE_LIST_ENV) {
            Some(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue(PRICE_LIST_ENV.to_string()))
            }
            Some(path) => Some(PathBuf::from(path)),
            None => None,
        };

        let log_filter = lookup(LOG_ENV)
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(TerminalConfig {
            price_list_path,
            log_filter,
        })
    }

    /// Human-readable name of where prices come from.
    pub fn price_list_source(&self) -> String {
        match &self.price_list_path {
            Some(path) => path.display().to_string(),
            None => "built-in".to_string(),
        }
    }

    /// Builds the pricing table this configuration points at.
    pub fn pricing_info(&self) -> Result<PricingInfo, ConfigError> {
        let pricing = match &self.price_list_path {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| ConfigError::ReadPriceList {
                    path: path.display().to_string(),
                    source,
                })?;
                parse_price_list(&text)
            }
            None => default_pricing_info(),
        };

        pricing.map_err(|source| ConfigError::PriceList {
            source_name: self.price_list_source(),
            source,
        })
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        TerminalConfig {
            price_list_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// The built-in price list.
///
/// | Product | Unit price | Deal       |
/// |---------|------------|------------|
/// | A       | 50         | 3 for 140  |
/// | B       | 35         | 2 for 60   |
/// | C       | 25         |            |
/// | D       | 12         |            |
pub fn default_pricing_info() -> CoreResult<PricingInfo> {
    let combo = |price: i64, per_amount: i64| ComboDealPriceModifier::new(Money::from_units(price), per_amount);
    let plain = |name: &str, unit_price: i64| -> CoreResult<ProductPricing> {
        ProductPricing::new(Product::new(name)?, Money::from_units(unit_price))
    };

    PricingInfo::new(vec![
        plain("A", 50)?.with_modifier(combo(140, 3)?),
        plain("B", 35)?.with_modifier(combo(60, 2)?),
        plain("C", 25)?,
        plain("D", 12)?,
    ])
}
