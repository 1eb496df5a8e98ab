//! Mock implementations for testing
//!
//! Provides a scripted parameter store for unit testing without AWS.

use crate::domain::{Page, PageRequest, PaginationToken, Parameter};
use crate::error::StoreError;
use crate::store::ParameterStore;

use std::sync::Mutex;

/// Mock store serving a fixed sequence of pages
///
/// The n-th call returns the n-th page regardless of the token sent; every
/// request is recorded for later inspection.
#[derive(Debug, Default)]
pub struct MockStore {
    pages: Vec<Page>,
    fail_at: Option<usize>,
    requests: Mutex<Vec<PageRequest>>,
}

impl MockStore {
    /// Create a store serving a single final page
    pub fn single(parameters: Vec<Parameter>) -> Self {
        Self::with_pages(vec![Page::new(parameters, None)])
    }

    /// Create a store serving `pages` in order
    pub fn with_pages(pages: Vec<Page>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    /// Split `parameters` into pages of `page_size`, chained by tokens
    pub fn paged(parameters: Vec<Parameter>, page_size: usize) -> Self {
        let chunks: Vec<Vec<Parameter>> = parameters
            .chunks(page_size)
            .map(|c| c.to_vec())
            .collect();
        let count = chunks.len();

        let pages = chunks
            .into_iter()
            .enumerate()
            .map(|(i, params)| {
                let token = if i + 1 < count {
                    PaginationToken::new(format!("token-{}", i + 1))
                } else {
                    None
                };
                Page::new(params, token)
            })
            .collect();

        Self::with_pages(pages)
    }

    /// Builder: fail the call with this zero-based index
    pub fn failing_at(mut self, call: usize) -> Self {
        self.fail_at = Some(call);
        self
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ParameterStore for MockStore {
    fn get_parameters_by_path(&self, request: &PageRequest) -> Result<Page, StoreError> {
        let mut requests = self.requests.lock().unwrap();
        let call = requests.len();
        requests.push(request.clone());

        if self.fail_at == Some(call) {
            return Err(StoreError::RequestFailed {
                path: request.path.clone(),
                message: "mock failure".to_string(),
            });
        }

        // Past the script: keep handing out pages that point further on
        Ok(self.pages.get(call).cloned().unwrap_or_else(|| {
            Page::new(Vec::new(), PaginationToken::new(format!("token-{}", call + 1)))
        }))
    }
}

/// Store that never signals the last page
#[derive(Debug, Default)]
pub struct EndlessStore {
    calls: Mutex<u32>,
}

impl EndlessStore {
    /// Number of requests served
    pub fn calls(&self) -> u32 {
        *self.calls.lock().unwrap()
    }
}

impl ParameterStore for EndlessStore {
    fn get_parameters_by_path(&self, request: &PageRequest) -> Result<Page, StoreError> {
        let mut calls = self.calls.lock().unwrap();
        *calls += 1;
        Ok(Page::new(
            vec![Parameter::new(format!("{}p{}", request.path, *calls), "v")],
            PaginationToken::new("again"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_store_paged() {
        let params = (0..5)
            .map(|i| Parameter::new(format!("/app/p{}", i), "v"))
            .collect();
        let store = MockStore::paged(params, 2);

        let first = store
            .get_parameters_by_path(&PageRequest::first("/app/", false))
            .unwrap();
        assert_eq!(first.parameters.len(), 2);
        assert_eq!(first.next_token.unwrap().as_str(), "token-1");
        assert_eq!(store.requests().len(), 1);
    }

    #[test]
    fn test_mock_store_failure() {
        let store = MockStore::single(vec![]).failing_at(0);
        let result = store.get_parameters_by_path(&PageRequest::first("/app/", false));
        assert!(matches!(result, Err(StoreError::RequestFailed { .. })));
    }
}
