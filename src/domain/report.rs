use crate::domain::Order;

/// Revenue summary over the whole orders collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalesReport {
    pub total_orders: usize,
    pub total_revenue: f64,
}

/// Read-only aggregation: order count and the sum of frozen totals.
pub fn sales_report(orders: &[Order]) -> SalesReport {
    SalesReport {
        total_orders: orders.len(),
        total_revenue: orders.iter().map(|o| o.total).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Order, Product};
    use chrono::Utc;

    #[test]
    fn empty_collection_reports_zero() {
        let report = sales_report(&[]);
        assert_eq!(report.total_orders, 0);
        assert_eq!(report.total_revenue, 0.0);
    }

    #[test]
    fn report_sums_frozen_totals() {
        let a = Product::new(1, "a", 25.0, 10);
        let b = Product::new(2, "b", 60.0, 10);
        let orders = vec![
            Order::place(1, 1, &[a.clone(), b.clone()], Utc::now()),
            Order::place(2, 2, &[b], Utc::now()),
        ];

        let report = sales_report(&orders);
        assert_eq!(report.total_orders, 2);
        assert!((report.total_revenue - 145.0).abs() < 1e-9);
    }
}
