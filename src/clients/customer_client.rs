use tracing::{debug, instrument};

use crate::customer_actor::{CustomerAction, CustomerCreate, CustomerError};
use crate::domain::{Customer, CustomerId, OrderId};
use crate::impl_basic_client;
use crate::registry::RegistryHandle;

/// Client for the customer registry.
#[derive(Clone)]
pub struct CustomerClient {
    inner: RegistryHandle<Customer>,
}

impl_basic_client!(CustomerClient, Customer, CustomerError, customer);

impl CustomerClient {
    #[instrument(skip(self))]
    pub async fn create_customer(
        &self,
        params: CustomerCreate,
    ) -> Result<CustomerId, CustomerError> {
        debug!("Sending request");
        self.inner
            .create(params)
            .await
            .map_err(CustomerError::from_registry)
    }

    /// Append an order id to the customer's back-reference list.
    #[instrument(skip(self))]
    pub(crate) async fn record_order(
        &self,
        customer_id: CustomerId,
        order_id: OrderId,
    ) -> Result<(), CustomerError> {
        debug!("Sending request");
        self.inner
            .action(customer_id, CustomerAction::RecordOrder(order_id))
            .await
            .map_err(CustomerError::from_registry)
    }
}
