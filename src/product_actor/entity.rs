use super::actions::{ProductAction, ProductActionResult};
use super::dtos::ProductCreate;
use crate::domain::Product;
use crate::registry::{Entity, EntityId};

impl Entity for Product {
    type CreateParams = ProductCreate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;

    const KIND: &'static str = "product";

    fn id(&self) -> EntityId {
        self.id
    }

    fn from_create_params(id: EntityId, params: ProductCreate) -> Self {
        Product::new(id, params.name, params.price, params.stock)
    }

    fn apply(&mut self, action: ProductAction) -> ProductActionResult {
        match action {
            ProductAction::AddPromotion(promotion) => {
                self.add_promotion(promotion);
                ProductActionResult::PromotionAdded
            }
            ProductAction::TakeUnit => {
                self.stock -= 1;
                ProductActionResult::StockLevel(self.stock)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn take_unit_has_no_floor() {
        let mut product = Product::from_create_params(
            1,
            ProductCreate {
                name: "T-Shirt".into(),
                price: 25.0,
                stock: 1,
            },
        );

        product.apply(ProductAction::TakeUnit);
        assert_eq!(product.stock, 0);

        match product.apply(ProductAction::TakeUnit) {
            ProductActionResult::StockLevel(level) => assert_eq!(level, -1),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn promotions_accumulate_in_insertion_order() {
        let mut product = Product::from_create_params(
            1,
            ProductCreate {
                name: "Jacket".into(),
                price: 100.0,
                stock: 5,
            },
        );

        let now = Utc::now();
        for discount in [10.0, 20.0] {
            product.apply(ProductAction::AddPromotion(crate::domain::Promotion::new(
                1,
                discount,
                now - Duration::days(1),
                now + Duration::days(1),
            )));
        }

        let discounts: Vec<f64> = product
            .promotions
            .iter()
            .map(|p| p.discount_percentage)
            .collect();
        assert_eq!(discounts, vec![10.0, 20.0]);
    }
}
