use chrono::{DateTime, Utc};

use crate::domain::{CustomerId, Product, ProductId};

pub type OrderId = u64;

/// Orders are created in this state and never transition out of it; no
/// further lifecycle exists yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Created,
}

/// A placed order: a customer, the product line items, and a total frozen
/// at placement time.
///
/// The same product id may appear more than once (one line per selected
/// unit). The total is computed once from the product states at
/// `placed_at` and is never recomputed, even if prices or promotions
/// change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub product_ids: Vec<ProductId>,
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub total: f64,
}

impl Order {
    /// Price every line item at the same `placed_at` instant and freeze
    /// the sum. An empty product list yields a total of 0.0.
    pub fn place(
        id: OrderId,
        customer_id: CustomerId,
        products: &[Product],
        placed_at: DateTime<Utc>,
    ) -> Self {
        let total = products.iter().map(|p| p.effective_price(placed_at)).sum();
        Self {
            id,
            customer_id,
            product_ids: products.iter().map(|p| p.id).collect(),
            placed_at,
            status: OrderStatus::Created,
            total,
        }
    }
}
