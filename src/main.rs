mod app_system;
mod clients;
mod customer_actor;
mod domain;
mod order_actor;
mod product_actor;
mod registry;

#[cfg(test)]
mod mock_registry;

use chrono::{Duration, Utc};
use tracing::{info, Instrument};

use crate::app_system::{setup_tracing, StoreSystem};
use crate::customer_actor::CustomerCreate;
use crate::product_actor::ProductCreate;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting storefront administration system");

    let system = StoreSystem::new();

    // Seed the catalog the way a fresh session starts
    let span = tracing::info_span!("catalog_seed");
    let (shirt_id, jacket_id) = async {
        let shirt_id = system
            .product_client
            .create_product(ProductCreate {
                name: "T-Shirt".into(),
                price: 25.0,
                stock: 15,
            })
            .await
            .map_err(|e| e.to_string())?;
        system
            .product_client
            .create_product(ProductCreate {
                name: "Jeans".into(),
                price: 60.0,
                stock: 20,
            })
            .await
            .map_err(|e| e.to_string())?;
        let jacket_id = system
            .product_client
            .create_product(ProductCreate {
                name: "Winter Jacket".into(),
                price: 100.0,
                stock: 20,
            })
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>((shirt_id, jacket_id))
    }
    .instrument(span)
    .await?;

    let customer_id = system
        .customer_client
        .create_customer(CustomerCreate {
            name: "Alice".into(),
        })
        .await
        .map_err(|e| e.to_string())?;
    system
        .customer_client
        .create_customer(CustomerCreate { name: "Bob".into() })
        .await
        .map_err(|e| e.to_string())?;

    // Read the collections back, the way the page re-renders its lists
    // after seeding
    let products = system
        .product_client
        .list_products()
        .await
        .map_err(|e| e.to_string())?;
    for product in &products {
        info!(name = %product.name, price = %product.price, stock = %product.stock, "Catalog entry");
    }
    let customers = system
        .customer_client
        .list_customers()
        .await
        .map_err(|e| e.to_string())?;
    for customer in &customers {
        info!(name = %customer.name, "Customer entry");
    }

    // A week-long 20% promotion on the jacket
    let now = Utc::now();
    system
        .product_client
        .add_promotion(jacket_id, 20.0, now - Duration::days(1), now + Duration::days(6))
        .await
        .map_err(|e| e.to_string())?;

    info!(product_id = %jacket_id, "Promotion added");

    // Place an order: one jacket (discounted) and one shirt
    let span = tracing::info_span!("order_processing");
    let order_id = async {
        info!("Placing order through the store system");
        system
            .order_client
            .place_order(customer_id, vec![jacket_id, shirt_id])
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    let order = system
        .order_client
        .get_order(order_id)
        .await
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "order vanished after placement".to_string())?;
    info!(order_id = %order.id, total = %order.total, "Order placed");

    let report = system
        .order_client
        .sales_report()
        .await
        .map_err(|e| e.to_string())?;
    info!(
        total_orders = report.total_orders,
        total_revenue = %report.total_revenue,
        "Revenue report"
    );

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
