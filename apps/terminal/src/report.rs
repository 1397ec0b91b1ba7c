//! Rendering of pricing failures for the terminal.
//!
//! The engine hands back a [`CheckoutError`] whose `source()` chain explains
//! what went wrong. This module walks that chain into text:
//!
//! ```text
//! Invalid Input:
//! ===
//! Invalid format for basket item {"code":"A"}
//!  - caused by -
//! 'quantity' is required
//! ===
//! ```

use std::error::Error;

use checkout_core::{CheckoutError, ErrorKind};

/// Separator placed between consecutive causes.
pub const CAUSE_SEPARATOR: &str = "\n - caused by -\n";

/// The error followed by each of its causes, outermost first.
pub fn cause_stack<'a>(error: &'a (dyn Error + 'static)) -> Vec<&'a (dyn Error + 'static)> {
    let mut stack = vec![error];
    let mut current = error;
    while let Some(cause) = current.source() {
        stack.push(cause);
        current = cause;
    }
    stack
}

/// Every message in the cause chain, joined by [`CAUSE_SEPARATOR`].
pub fn format_causes(error: &(dyn Error + 'static)) -> String {
    cause_stack(error)
        .iter()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join(CAUSE_SEPARATOR)
}

/// The block printed when a basket cannot be priced.
pub fn render_failure(error: &CheckoutError) -> String {
    match error.kind() {
        ErrorKind::MalformedInput => format!(
            "Input JSON failed to parse.\nJSON Error:\n===\n{}\n===",
            format_causes(error)
        ),
        _ => format!("\nInvalid Input:\n===\n{}\n===", format_causes(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_core::{BasketItem, PricingInfo};

    #[test]
    fn test_single_error_has_no_separator() {
        let err = CheckoutError::UnknownProduct {
            code: "E".to_string(),
        };
        assert_eq!(cause_stack(&err).len(), 1);
        assert_eq!(format_causes(&err), "Product E in basket does not have pricing data");
    }

    #[test]
    fn test_chain_is_outermost_first() {
        let pricing = PricingInfo::default();
        let err = pricing
            .calculate_total_cost(&vec![BasketItem::new("E", 1).unwrap()])
            .unwrap_err();

        assert_eq!(
            format_causes(&err),
            "Could not price basket item 0 ('E')\n - caused by -\nProduct E in basket does not have pricing data"
        );
    }

    #[test]
    fn test_render_invalid_item() {
        let err = PricingInfo::default()
            .calculate_total_cost(r#"[{"code":"A"}]"#)
            .unwrap_err();
        let rendered = render_failure(&err);

        assert!(rendered.starts_with("\nInvalid Input:\n===\n"));
        assert!(rendered.contains(r#"Invalid format for basket item {"code":"A"}"#));
        assert!(rendered.contains("'quantity' is required"));
        assert!(rendered.ends_with("\n==="));
    }

    #[test]
    fn test_render_malformed_json() {
        let err = PricingInfo::default()
            .calculate_total_cost("not json")
            .unwrap_err();
        let rendered = render_failure(&err);

        assert!(rendered.starts_with("Input JSON failed to parse.\nJSON Error:\n===\nInvalid JSON"));
        assert_eq!(rendered.matches(CAUSE_SEPARATOR).count(), 1);
    }
}
