//! Shared command arguments

use clap::Args;

use crate::client::models::ListQuery;

/// Listing options shared by every `list` subcommand
#[derive(Debug, Clone, Args, Default)]
pub struct ListArgs {
    /// Page number (1-based)
    #[arg(long)]
    pub page: Option<u32>,

    /// Items per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Maximum number of items to return
    #[arg(long)]
    pub limit: Option<u32>,

    /// Keyword to search for
    #[arg(long)]
    pub keyword: Option<String>,

    /// Field the keyword applies to
    #[arg(long)]
    pub search_field: Option<String>,

    /// Field to sort by
    #[arg(long)]
    pub sort_field: Option<String>,

    /// Sort direction (asc/desc)
    #[arg(long)]
    pub sort_order: Option<String>,
}

impl ListArgs {
    pub fn to_query(&self) -> ListQuery {
        ListQuery {
            page: self.page,
            page_size: self.page_size,
            limit: self.limit,
            keyword: self.keyword.clone(),
            search_field: self.search_field.clone(),
            sort_field: self.sort_field.clone(),
            sort_order: self.sort_order.clone(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_query_carries_pagination() {
        let args = ListArgs {
            page: Some(2),
            page_size: Some(10),
            keyword: Some("shoe".to_string()),
            ..Default::default()
        };

        let query = args.to_query();
        assert_eq!(query.page, Some(2));
        assert_eq!(query.page_size, Some(10));
        assert_eq!(query.keyword.as_deref(), Some("shoe"));
        assert!(query.extra.is_empty());
    }
}
