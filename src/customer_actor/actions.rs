use crate::domain::OrderId;

/// Custom actions for Customer entities.
#[derive(Debug, Clone)]
pub enum CustomerAction {
    /// Append an order id to the customer's order list. The list is a
    /// back-reference only and is never pruned, even when the order is
    /// later deleted.
    RecordOrder(OrderId),
}
