//! Paginated fetch service
//!
//! Walks a "get by path" listing page by page, threading the continuation
//! token from one request to the next.

use crate::domain::{Page, PageRequest};
use crate::error::ServiceError;
use crate::store::ParameterStore;

/// Service for listing every parameter under a path
#[derive(Debug, Clone)]
pub struct Fetcher {
    path: String,
    recursive: bool,
    max_pages: u32,
}

impl Fetcher {
    /// Create a new fetcher
    ///
    /// At most `max_pages` requests are issued; if the last of them still
    /// carries a continuation token the iteration ends with an error.
    pub fn new(path: impl Into<String>, recursive: bool, max_pages: u32) -> Self {
        Self {
            path: path.into(),
            recursive,
            max_pages,
        }
    }

    /// Iterate over the pages of the listing
    ///
    /// Each page is requested lazily when the iterator is advanced.
    pub fn pages<'a, S: ParameterStore>(&self, store: &'a S) -> Pages<'a, S> {
        Pages {
            store,
            next_request: Some(PageRequest::first(self.path.clone(), self.recursive)),
            fetched: 0,
            max_pages: self.max_pages,
        }
    }
}

/// Iterator over the pages of one listing
///
/// Yields at most one error, after which it is exhausted.
pub struct Pages<'a, S> {
    store: &'a S,
    next_request: Option<PageRequest>,
    fetched: u32,
    max_pages: u32,
}

impl<S> Pages<'_, S> {
    /// Number of pages fetched so far
    pub fn fetched(&self) -> u32 {
        self.fetched
    }
}

impl<S: ParameterStore> Iterator for Pages<'_, S> {
    type Item = Result<Page, ServiceError>;

    fn next(&mut self) -> Option<Self::Item> {
        let request = self.next_request.take()?;

        if self.fetched >= self.max_pages {
            return Some(Err(ServiceError::PageLimitExceeded {
                path: request.path,
                pages: self.fetched,
            }));
        }

        let page = match self.store.get_parameters_by_path(&request) {
            Ok(page) => page,
            Err(e) => return Some(Err(e.into())),
        };
        self.fetched += 1;

        log::debug!(
            "Fetched page {} under {} ({} parameters, last: {})",
            self.fetched,
            request.path,
            page.parameters.len(),
            page.is_last()
        );

        if let Some(token) = &page.next_token {
            self.next_request = Some(request.next(token.clone()));
        }

        Some(Ok(page))
    }
}

impl<S: ParameterStore> std::iter::FusedIterator for Pages<'_, S> {}
