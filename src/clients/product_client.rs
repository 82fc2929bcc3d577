use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use crate::domain::{Product, ProductId, Promotion};
use crate::impl_basic_client;
use crate::product_actor::{ProductAction, ProductActionResult, ProductCreate, ProductError};
use crate::registry::RegistryHandle;

/// Client for the product registry.
#[derive(Clone)]
pub struct ProductClient {
    inner: RegistryHandle<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner
            .create(params)
            .await
            .map_err(ProductError::from_registry)
    }

    /// Append a promotion to the product's promotion list. Discount and
    /// date ordering are passed through unvalidated.
    #[instrument(skip(self))]
    pub async fn add_promotion(
        &self,
        product_id: ProductId,
        discount_percentage: f64,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Result<(), ProductError> {
        debug!("Sending request");
        let promotion = Promotion::new(product_id, discount_percentage, starts_at, ends_at);
        match self
            .inner
            .action(product_id, ProductAction::AddPromotion(promotion))
            .await
        {
            Ok(ProductActionResult::PromotionAdded) => Ok(()),
            Ok(other) => Err(ProductError::Registry(format!(
                "unexpected action result: {other:?}"
            ))),
            Err(e) => Err(ProductError::from_registry(e)),
        }
    }

    /// Take one unit of stock; returns the remaining level, which may be
    /// negative.
    #[instrument(skip(self))]
    pub(crate) async fn take_unit(&self, product_id: ProductId) -> Result<i64, ProductError> {
        debug!("Sending request");
        match self.inner.action(product_id, ProductAction::TakeUnit).await {
            Ok(ProductActionResult::StockLevel(level)) => Ok(level),
            Ok(other) => Err(ProductError::Registry(format!(
                "unexpected action result: {other:?}"
            ))),
            Err(e) => Err(ProductError::from_registry(e)),
        }
    }
}
