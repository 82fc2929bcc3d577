use crate::domain::Promotion;

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Append a promotion to the product's promotion list. Dates and
    /// discount are not validated.
    AddPromotion(Promotion),
    /// Take one unit of stock. No floor check; stock may go negative.
    TakeUnit,
}

/// Results from ProductActions - variants match 1:1 with ProductAction.
#[derive(Debug, Clone)]
pub enum ProductActionResult {
    PromotionAdded,
    /// Remaining stock after the decrement.
    StockLevel(i64),
}
