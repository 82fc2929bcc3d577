//! Customer-specific registry wiring, including order back-reference
//! bookkeeping.

mod actions;
mod dtos;
pub mod entity;
pub mod error;

pub use actions::*;
pub use dtos::*;
pub use error::*;
