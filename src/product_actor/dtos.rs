/// Payload for registering a new product.
///
/// Price and stock are taken as-is; negative values are not rejected.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub stock: i64,
}
