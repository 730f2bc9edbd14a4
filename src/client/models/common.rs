//! List query parameters and the response page envelope

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Query parameters accepted by every list endpoint.
///
/// Mirrors the backend's base query contract: pagination, sorting and keyword
/// search, plus resource-specific parameters (`productId`, `variationId`,
/// `populate`, ...) carried in [`ListQuery::extra`]. The same parameter set
/// drives both the request query string and the cache key, so two queries
/// that differ in any parameter resolve to distinct cache entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Cursor: id of the last item of the previous page
    pub last_id: Option<String>,

    /// Raw filter expression, passed through verbatim
    pub filter: Option<String>,

    /// `asc`/`desc` (or the backend's numeric equivalents)
    pub sort_order: Option<String>,

    pub sort_field: Option<String>,

    pub limit: Option<u32>,

    pub page: Option<u32>,

    pub page_size: Option<u32>,

    /// Keyword search term
    pub keyword: Option<String>,

    /// Field(s) the keyword applies to
    pub search_field: Option<String>,

    /// Resource-specific parameters, e.g. `productId` for product items
    pub extra: BTreeMap<String, String>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource-specific parameter.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }

    /// Render the query as sorted `key=value` pairs.
    ///
    /// Sorting makes the pair list deterministic regardless of construction
    /// order, which keeps cache keys stable.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params: Vec<(String, String)> = Vec::new();

        if let Some(ref v) = self.last_id {
            params.push(("lastId".to_string(), v.clone()));
        }
        if let Some(ref v) = self.filter {
            params.push(("filter".to_string(), v.clone()));
        }
        if let Some(ref v) = self.sort_order {
            params.push(("sortOrder".to_string(), v.clone()));
        }
        if let Some(ref v) = self.sort_field {
            params.push(("sortField".to_string(), v.clone()));
        }
        if let Some(v) = self.limit {
            params.push(("limit".to_string(), v.to_string()));
        }
        if let Some(v) = self.page {
            params.push(("page".to_string(), v.to_string()));
        }
        if let Some(v) = self.page_size {
            params.push(("pageSize".to_string(), v.to_string()));
        }
        if let Some(ref v) = self.keyword {
            params.push(("keyword".to_string(), v.clone()));
        }
        if let Some(ref v) = self.search_field {
            params.push(("searchField".to_string(), v.clone()));
        }

        for (k, v) in &self.extra {
            params.push((k.clone(), v.clone()));
        }

        params.sort_by(|a, b| a.0.cmp(&b.0));
        params
    }
}

/// Envelope returned by list endpoints: the page payload plus totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,

    #[serde(rename = "lastId", default, skip_serializing_if = "Option::is_none")]
    pub last_id: Option<String>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: None,
            last_id: None,
        }
    }
}
