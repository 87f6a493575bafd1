//! Order summary shown in the checkout modal.

use dripstore_core::Price;

use crate::models::LineItem;
use crate::promotions::PromoCode;

/// Totals for a set of cart lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub item_count: u64,
    pub subtotal: Price,
    pub discount: Price,
    pub total: Price,
    /// Code that produced `discount`, if any.
    pub promo_code: Option<&'static str>,
}

impl CheckoutSummary {
    /// Compute totals, applying `promo` to the subtotal.
    ///
    /// The discount is rounded to cents.
    #[must_use]
    pub fn compute(items: &[LineItem], promo: Option<&PromoCode>) -> Self {
        let item_count = items.iter().map(|line| u64::from(line.quantity)).sum();
        let subtotal: Price = items.iter().map(LineItem::line_total).sum();
        let discount = promo.map_or(Price::ZERO, |promo| subtotal.percent(promo.percent_off));

        Self {
            item_count,
            subtotal,
            discount,
            total: subtotal - discount,
            promo_code: promo.map(|promo| promo.code),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use dripstore_core::{ProductSnapshot, Size};

    use super::*;

    fn lines() -> Vec<LineItem> {
        let tee = ProductSnapshot::new("p1", "Tee", Price::from_cents(2000), "tee.jpg");
        let cap = ProductSnapshot::new("p2", "Cap", Price::from_cents(1499), "cap.jpg");
        vec![
            LineItem::new(&tee, Size::new("M"), 3),
            LineItem::new(&cap, Size::new("L"), 1),
        ]
    }

    #[test]
    fn test_without_promo() {
        let summary = CheckoutSummary::compute(&lines(), None);
        assert_eq!(summary.item_count, 4);
        assert_eq!(summary.subtotal, Price::from_cents(7499));
        assert_eq!(summary.discount, Price::ZERO);
        assert_eq!(summary.total, Price::from_cents(7499));
        assert_eq!(summary.promo_code, None);
    }

    #[test]
    fn test_with_promo() {
        let promo = PromoCode::lookup("NEWDRIP20").unwrap();
        let summary = CheckoutSummary::compute(&lines(), Some(promo));

        // 20% of 74.99 = 14.998
        assert_eq!(summary.discount, Price::from_cents(1500));
        assert_eq!(summary.total, Price::from_cents(5999));
        assert_eq!(summary.promo_code, Some("NEWDRIP20"));
    }

    #[test]
    fn test_empty_cart() {
        let promo = PromoCode::lookup("WEEKEND15").unwrap();
        let summary = CheckoutSummary::compute(&[], Some(promo));
        assert_eq!(summary.item_count, 0);
        assert_eq!(summary.total, Price::ZERO);
    }
}
