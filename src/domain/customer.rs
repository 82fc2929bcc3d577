use crate::domain::OrderId;

pub type CustomerId = u64;

/// A registered customer and the ids of the orders they have placed.
///
/// The order list holds back-references only; the order registry owns
/// order lifetime, and deleting an order does not prune this list.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub orders: Vec<OrderId>,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            orders: Vec::new(),
        }
    }

    pub fn record_order(&mut self, order_id: OrderId) {
        self.orders.push(order_id);
    }
}
