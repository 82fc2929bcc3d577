use chrono::{DateTime, Utc};

use crate::domain::ProductId;

/// A time-bounded percentage discount attached to one product.
///
/// Created once and immutable thereafter; promotions are never
/// individually removed. The discount is expected to be in 0-100 but is
/// not validated: out-of-range values are carried and applied as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Promotion {
    /// Reference to the owning product, not ownership.
    pub product_id: ProductId,
    pub discount_percentage: f64,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

impl Promotion {
    pub fn new(
        product_id: ProductId,
        discount_percentage: f64,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Self {
        Self {
            product_id,
            discount_percentage,
            starts_at,
            ends_at,
        }
    }

    /// Whether `at` falls inside the promotion window, inclusive of both
    /// ends.
    pub fn is_active_at(&self, at: DateTime<Utc>) -> bool {
        self.starts_at <= at && at <= self.ends_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn window(start_offset_days: i64, end_offset_days: i64) -> Promotion {
        let now = Utc::now();
        Promotion::new(
            1,
            20.0,
            now + Duration::days(start_offset_days),
            now + Duration::days(end_offset_days),
        )
    }

    #[test]
    fn active_inside_window() {
        assert!(window(-1, 1).is_active_at(Utc::now()));
    }

    #[test]
    fn inactive_outside_window() {
        assert!(!window(1, 3).is_active_at(Utc::now()));
        assert!(!window(-3, -1).is_active_at(Utc::now()));
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let promo = window(0, 5);
        assert!(promo.is_active_at(promo.starts_at));
        assert!(promo.is_active_at(promo.ends_at));
    }

    #[test]
    fn inverted_window_is_never_active() {
        // End before start is not validated at construction; the window
        // simply never matches.
        let promo = window(2, -2);
        assert!(!promo.is_active_at(Utc::now()));
    }
}
