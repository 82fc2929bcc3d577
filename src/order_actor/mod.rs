//! Order-specific registry wiring. Orders are immutable once placed, so
//! no custom actions exist.

mod dtos;
pub mod entity;
pub mod error;

pub use dtos::*;
pub use error::*;
