//! Pagination on the wire: query parameters in, page envelope out.

use serde::{Deserialize, Serialize};

/// Raw `?page=&size=&sort=` parameters of a list request.
///
/// `sort` has the form `property[,asc|desc]`. Interpretation happens in
/// `blog-core`, which knows the sortable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub size: Option<u64>,
    pub sort: Option<String>,
}

/// One page of a larger result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    /// Zero-based page index.
    pub number: u64,
    pub size: u64,
    pub number_of_elements: u64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}
