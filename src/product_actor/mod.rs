//! Product-specific registry wiring: stock decrements and promotion
//! management.

mod actions;
mod dtos;
pub mod entity;
pub mod error;

pub use actions::*;
pub use dtos::*;
pub use error::*;
