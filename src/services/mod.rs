//! Service layer for the export pipeline
//!
//! Services encapsulate fetching pages from the store and shaping
//! parameters into environment variables.

pub mod fetcher;
pub mod shaper;

pub use fetcher::{Fetcher, Pages};
pub use shaper::Shaper;
