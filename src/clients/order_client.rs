use chrono::Utc;
use tracing::{error, info, instrument};

use crate::clients::{CustomerClient, ProductClient};
use crate::customer_actor::CustomerError;
use crate::domain::{sales_report, CustomerId, Order, OrderId, ProductId, SalesReport};
use crate::impl_client_methods;
use crate::order_actor::{OrderCreate, OrderError};
use crate::product_actor::ProductError;
use crate::registry::RegistryHandle;

/// Client for the order registry.
///
/// Placing an order is a cross-collection workflow, so this client also
/// holds customer and product clients and coordinates them: resolve the
/// references, freeze the total, record the back-reference, decrement
/// stock.
#[derive(Clone)]
pub struct OrderClient {
    inner: RegistryHandle<Order>,
    customer_client: CustomerClient,
    product_client: ProductClient,
}

impl_client_methods!(OrderClient, Order, OrderError, order);

impl OrderClient {
    pub fn new(
        inner: RegistryHandle<Order>,
        customer_client: CustomerClient,
        product_client: ProductClient,
    ) -> Self {
        Self {
            inner,
            customer_client,
            product_client,
        }
    }

    /// Place an order for one unit of each listed product.
    ///
    /// The same product id may appear more than once; each occurrence is
    /// priced and its stock decremented separately. The pricing instant
    /// is captured once for the whole order.
    #[instrument(skip(self))]
    pub async fn place_order(
        &self,
        customer_id: CustomerId,
        product_ids: Vec<ProductId>,
    ) -> Result<OrderId, OrderError> {
        info!("Processing place_order request");

        // Step 1: resolve the customer
        match self.customer_client.get_customer(customer_id).await {
            Ok(Some(customer)) => {
                info!(customer_name = %customer.name, "Customer resolved")
            }
            Ok(None) => {
                error!("Customer not found");
                return Err(OrderError::CustomerNotFound(customer_id));
            }
            Err(CustomerError::NotFound(id)) => {
                error!("Customer not found");
                return Err(OrderError::CustomerNotFound(id));
            }
            Err(e) => {
                error!(error = %e, "Customer lookup failed");
                return Err(OrderError::Registry(e.to_string()));
            }
        }

        // Step 2: snapshot every line item's product state
        let mut products = Vec::with_capacity(product_ids.len());
        for product_id in &product_ids {
            match self.product_client.get_product(*product_id).await {
                Ok(Some(product)) => {
                    info!(product_name = %product.name, price = %product.price, "Product resolved");
                    products.push(product);
                }
                Ok(None) => {
                    error!(product_id = %product_id, "Product not found");
                    return Err(OrderError::ProductNotFound(*product_id));
                }
                Err(e) => {
                    error!(error = %e, "Product lookup failed");
                    return Err(OrderError::Registry(e.to_string()));
                }
            }
        }

        // Step 3: create the order; the total is frozen at this instant
        let placed_at = Utc::now();
        let order_id = self
            .inner
            .create(OrderCreate {
                customer_id,
                products,
                placed_at,
            })
            .await
            .map_err(OrderError::from_registry)?;

        // Step 4: back-reference on the customer
        self.customer_client
            .record_order(customer_id, order_id)
            .await
            .map_err(|e| OrderError::Registry(e.to_string()))?;

        // Step 5: one unit of stock per line occurrence, no floor
        for product_id in &product_ids {
            match self.product_client.take_unit(*product_id).await {
                Ok(remaining) => info!(product_id = %product_id, remaining, "Stock decremented"),
                Err(ProductError::NotFound(id)) => {
                    error!(product_id = %id, "Product vanished during placement");
                    return Err(OrderError::ProductNotFound(id));
                }
                Err(e) => {
                    error!(error = %e, "Stock decrement failed");
                    return Err(OrderError::Registry(e.to_string()));
                }
            }
        }

        info!(order_id = %order_id, "Order placed successfully");
        Ok(order_id)
    }

    /// Remove an order from the registry. Deleting an id that is not
    /// present is a silent no-op. Stock is not restored and the
    /// customer's order list keeps the dangling id; both are inherited
    /// behavior.
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<(), OrderError> {
        info!("Processing delete_order request");
        self.inner.delete(id).await.map_err(OrderError::from_registry)
    }

    /// Revenue report over all orders: count plus the sum of frozen
    /// totals.
    #[instrument(skip(self))]
    pub async fn sales_report(&self) -> Result<SalesReport, OrderError> {
        let orders = self.list_orders().await?;
        Ok(sales_report(&orders))
    }
}
