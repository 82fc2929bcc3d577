use chrono::{DateTime, Utc};

use crate::domain::Promotion;

pub type ProductId = u64;

/// A catalog item with a unit price, a stock count, and its promotions.
///
/// Stock is decremented on order placement with no floor check, so it may
/// go negative. Promotions are kept in insertion order; that order decides
/// which one wins when several are active at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub stock: i64,
    pub promotions: Vec<Promotion>,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: f64, stock: i64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
            promotions: Vec::new(),
        }
    }

    pub fn add_promotion(&mut self, promotion: Promotion) {
        self.promotions.push(promotion);
    }

    /// First promotion in insertion order whose window contains `at`.
    pub fn active_promotion(&self, at: DateTime<Utc>) -> Option<&Promotion> {
        self.promotions.iter().find(|p| p.is_active_at(at))
    }

    /// The listed price, unless a promotion is active at `at`.
    ///
    /// First-match semantics: when several promotions are active, the one
    /// inserted earliest applies, not the deepest discount. The discount
    /// percentage is applied as-is; values outside 0-100 inflate the price
    /// or push it negative.
    pub fn effective_price(&self, at: DateTime<Utc>) -> f64 {
        match self.active_promotion(at) {
            Some(promo) => self.price * (1.0 - promo.discount_percentage / 100.0),
            None => self.price,
        }
    }
}
