//! Parameter store domain types
//!
//! Provides the Parameter, Page and PageRequest types exchanged with the
//! parameter store.

use serde::Deserialize;
use std::fmt;

/// A single name/value pair returned by the store
///
/// The name is a slash-delimited path; the value is opaque and may itself be
/// JSON-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Parameter {
    /// Full parameter name (e.g., "/app/db/host")
    pub name: String,
    /// Parameter value, already decrypted by the store
    pub value: String,
}

impl Parameter {
    /// Create a new parameter
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Values may be secrets; never print them
        write!(f, "{}", self.name)
    }
}

/// Opaque continuation cursor handed back by the store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct PaginationToken(String);

impl PaginationToken {
    /// Wrap a raw token
    ///
    /// Returns `None` for an empty token: re-sending one would restart the
    /// listing from the first page.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Get the raw token string
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One page of a "get by path" listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Page {
    /// Parameters in store order
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Token for the next page, absent on the last one
    #[serde(default)]
    pub next_token: Option<PaginationToken>,
}

impl Page {
    /// Create a page
    pub fn new(parameters: Vec<Parameter>, next_token: Option<PaginationToken>) -> Self {
        Self {
            parameters,
            next_token,
        }
    }

    /// Check if this is the final page
    pub fn is_last(&self) -> bool {
        self.next_token.is_none()
    }
}

/// A single "get by path" request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Path prefix to list
    pub path: String,
    /// Include parameters at all depths below the path
    pub recursive: bool,
    /// Ask the store to decrypt SecureString values
    pub with_decryption: bool,
    /// Continuation token from the previous page
    pub next_token: Option<PaginationToken>,
}

impl PageRequest {
    /// Create the request for the first page
    ///
    /// Decryption is always requested.
    pub fn first(path: impl Into<String>, recursive: bool) -> Self {
        Self {
            path: path.into(),
            recursive,
            with_decryption: true,
            next_token: None,
        }
    }

    /// Create the request following a page that carried `token`
    pub fn next(&self, token: PaginationToken) -> Self {
        Self {
            next_token: Some(token),
            ..self.clone()
        }
    }
}
