use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info};

use crate::clients::{CustomerClient, OrderClient, ProductClient};
use crate::domain::{Customer, Order, Product};
use crate::registry::{EntityId, RegistryActor};

const MAILBOX_SIZE: usize = 32;

fn sequential_ids() -> impl Fn() -> EntityId + Send + Sync {
    let counter = Arc::new(AtomicU64::new(1));
    move || counter.fetch_add(1, Ordering::SeqCst)
}

/// The storefront administration system: one registry actor per
/// collection, wired together behind typed clients.
///
/// Constructed once at application start; torn down with [`shutdown`].
/// There is no ambient global state, every component reaches the
/// registries through the clients held here.
///
/// [`shutdown`]: StoreSystem::shutdown
pub struct StoreSystem {
    pub product_client: ProductClient,
    pub customer_client: CustomerClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    pub fn new() -> Self {
        let (product_actor, product_handle) =
            RegistryActor::<Product>::new(MAILBOX_SIZE, sequential_ids());
        let product_client = ProductClient::new(product_handle);
        let product_task = tokio::spawn(product_actor.run());

        let (customer_actor, customer_handle) =
            RegistryActor::<Customer>::new(MAILBOX_SIZE, sequential_ids());
        let customer_client = CustomerClient::new(customer_handle);
        let customer_task = tokio::spawn(customer_actor.run());

        let (order_actor, order_handle) =
            RegistryActor::<Order>::new(MAILBOX_SIZE, sequential_ids());
        let order_client = OrderClient::new(
            order_handle,
            customer_client.clone(),
            product_client.clone(),
        );
        let order_task = tokio::spawn(order_actor.run());

        Self {
            product_client,
            customer_client,
            order_client,
            handles: vec![product_task, customer_task, order_task],
        }
    }

    /// Drop every client so the registry channels close, then wait for
    /// the actor tasks to finish.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down store system...");

        drop(self.order_client);
        drop(self.customer_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Registry task failed: {:?}", e);
                return Err(format!("Registry task failed: {:?}", e));
            }
        }

        info!("Store system shutdown complete.");
        Ok(())
    }
}

impl Default for StoreSystem {
    fn default() -> Self {
        Self::new()
    }
}
