//! Business domain entities. Pure data and pure pricing functions with no
//! actor-specific concerns.

pub mod customer;
pub mod order;
pub mod product;
pub mod promotion;
pub mod report;

pub use customer::*;
pub use order::*;
pub use product::*;
pub use promotion::*;
pub use report::*;
