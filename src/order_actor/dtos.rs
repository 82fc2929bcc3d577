use chrono::{DateTime, Utc};

use crate::domain::{CustomerId, Product};

/// Payload for placing an order.
///
/// Carries product snapshots taken by the orchestrator so the total can
/// be computed at construction; the instant is captured once by the
/// caller and reused for every line item.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: CustomerId,
    pub products: Vec<Product>,
    pub placed_at: DateTime<Utc>,
}
