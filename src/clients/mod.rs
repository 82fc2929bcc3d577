//! Typed clients over the registry handles. Each client is a thin,
//! cloneable wrapper; `OrderClient` additionally orchestrates the
//! cross-collection workflow of placing an order.

pub mod macros;

pub mod customer_client;
pub mod order_client;
pub mod product_client;

pub use customer_client::CustomerClient;
pub use order_client::OrderClient;
pub use product_client::ProductClient;
