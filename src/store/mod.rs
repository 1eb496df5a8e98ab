//! Parameter store abstraction layer
//!
//! Provides a trait-based abstraction over AWS SSM Parameter Store for
//! testability.

pub mod ssm;
pub mod traits;

pub use ssm::{SsmStore, SsmStoreConfig};
pub use traits::ParameterStore;
