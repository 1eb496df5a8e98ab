//! Trait definitions for parameter store operations
//!
//! This trait abstracts the remote store to enable testing with mocks.

use crate::domain::{Page, PageRequest};
use crate::error::StoreError;

/// Trait for listing parameters by path
///
/// Implementations issue exactly one remote request per call and never
/// follow continuation tokens themselves; paging is driven by the caller.
pub trait ParameterStore {
    /// Fetch one page of parameters at or under `request.path`
    fn get_parameters_by_path(&self, request: &PageRequest) -> Result<Page, StoreError>;
}

impl<S: ParameterStore + ?Sized> ParameterStore for &S {
    fn get_parameters_by_path(&self, request: &PageRequest) -> Result<Page, StoreError> {
        (**self).get_parameters_by_path(request)
    }
}
