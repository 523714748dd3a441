//! Consumer price: quantity-tiered multiplier over a multi-product order.
//!
//! The multiplier is chosen from the total number of units in the whole order
//! and applied once, to the accumulated total (never per line).

use std::collections::BTreeMap;

use serde::Serialize;

use stockroom_core::{DomainError, DomainResult, ProductId};

use crate::product::Product;

/// Quantity tier of an order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    /// Fewer than 10 units.
    Small,
    /// 10 to 19 units.
    Medium,
    /// 20 units or more.
    Bulk,
}

impl PriceTier {
    pub fn for_units(units: u64) -> Self {
        match units {
            0..=9 => PriceTier::Small,
            10..=19 => PriceTier::Medium,
            _ => PriceTier::Bulk,
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            PriceTier::Small => 1.21,
            PriceTier::Medium => 1.17,
            PriceTier::Bulk => 1.15,
        }
    }
}

/// Result of pricing an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsumerPrice {
    pub products: Vec<Product>,
    pub total_price: f64,
}

/// Requested quantities keyed by product id.
///
/// `BTreeMap` keeps lines in ascending id order, so the first failing line is
/// always the one with the smallest id.
pub type OrderQuantities = BTreeMap<ProductId, u32>;

/// Parse the `[1,2,2,3]` list form: a repeated id adds one unit.
pub fn parse_id_list(raw: &str) -> DomainResult<OrderQuantities> {
    let invalid = || DomainError::invalid_data(format!("invalid consumer price list {raw:?}"));

    let inner = raw
        .trim()
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(invalid)?;

    let mut quantities = OrderQuantities::new();
    for part in inner.split(',') {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let id: ProductId = part.parse()?;
        let entry = quantities.entry(id).or_insert(0);
        *entry = entry.checked_add(1).ok_or_else(invalid)?;
    }
    Ok(quantities)
}

/// Price already-checked order lines.
///
/// Callers are responsible for stock and publication checks; see
/// `ProductService::consumer_price`.
pub fn price_lines<'a, I>(lines: I) -> f64
where
    I: IntoIterator<Item = (&'a Product, u32)>,
{
    let mut total = 0.0;
    let mut units: u64 = 0;
    for (product, requested) in lines {
        total += product.price * f64::from(requested);
        units += u64::from(requested);
    }
    total * PriceTier::for_units(units).multiplier()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expiration::Expiration;

    fn product(id: u64, price: f64) -> Product {
        Product {
            id: ProductId::new(id).unwrap(),
            name: format!("p{id}"),
            quantity: 100,
            code_value: format!("P{id}"),
            is_published: true,
            expiration: Expiration::parse("01/01/2099").unwrap(),
            price,
        }
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(PriceTier::for_units(0), PriceTier::Small);
        assert_eq!(PriceTier::for_units(9), PriceTier::Small);
        assert_eq!(PriceTier::for_units(10), PriceTier::Medium);
        assert_eq!(PriceTier::for_units(19), PriceTier::Medium);
        assert_eq!(PriceTier::for_units(20), PriceTier::Bulk);
        assert_eq!(PriceTier::for_units(u64::MAX), PriceTier::Bulk);
    }

    #[test]
    fn small_order_uses_highest_markup() {
        let a = product(1, 10.0);
        assert_close(price_lines([(&a, 3)]), 36.3);
    }

    #[test]
    fn medium_order() {
        let a = product(1, 10.0);
        assert_close(price_lines([(&a, 12)]), 140.4);
    }

    #[test]
    fn multiplier_uses_units_across_all_lines() {
        // 5 + 6 = 11 units: medium tier even though each line alone is small.
        let a = product(1, 2.0);
        let b = product(2, 4.0);
        assert_close(price_lines([(&a, 5), (&b, 6)]), (10.0 + 24.0) * 1.17);
    }

    #[test]
    fn bulk_order() {
        let a = product(1, 1.0);
        assert_close(price_lines([(&a, 20)]), 23.0);
    }

    #[test]
    fn empty_order_is_free() {
        assert_eq!(price_lines(std::iter::empty()), 0.0);
    }

    #[test]
    fn parses_repeated_ids_as_quantities() {
        let q = parse_id_list("[1,2,2,3]").unwrap();
        let pairs: Vec<(u64, u32)> = q.iter().map(|(id, n)| (id.get(), *n)).collect();
        assert_eq!(pairs, vec![(1, 1), (2, 2), (3, 1)]);
    }

    #[test]
    fn rejects_malformed_lists() {
        for raw in ["", "[]", "1,2", "[1,,2]", "[1, 2]", "[a]", "[1,2", "[-1]"] {
            assert!(
                matches!(parse_id_list(raw), Err(DomainError::InvalidData(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_zero_id() {
        assert!(matches!(parse_id_list("[0]"), Err(DomainError::InvalidId(_))));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the multiplier is applied once to the summed subtotal.
            #[test]
            fn total_is_subtotal_times_tier(
                lines in proptest::collection::vec((0.0f64..1000.0, 1u32..15), 1..6)
            ) {
                let products: Vec<Product> = lines
                    .iter()
                    .enumerate()
                    .map(|(i, (price, _))| product(i as u64 + 1, *price))
                    .collect();
                let order: Vec<(&Product, u32)> = products
                    .iter()
                    .zip(lines.iter().map(|(_, n)| *n))
                    .collect();

                let subtotal: f64 = order.iter().map(|(p, n)| p.price * f64::from(*n)).sum();
                let units: u64 = order.iter().map(|(_, n)| u64::from(*n)).sum();
                let expected = subtotal * PriceTier::for_units(units).multiplier();

                let total = price_lines(order.iter().copied());
                prop_assert!((total - expected).abs() <= 1e-6 * expected.max(1.0));
            }

            /// Property: bigger orders never get a bigger multiplier.
            #[test]
            fn multiplier_is_non_increasing(a in 0u64..100, b in 0u64..100) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                prop_assert!(
                    PriceTier::for_units(hi).multiplier() <= PriceTier::for_units(lo).multiplier()
                );
            }
        }
    }
}
