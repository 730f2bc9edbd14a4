//! Command execution context
//!
//! One place that wires config, credential store, HTTP client, cache and
//! notifier together, and hands out ready-made repositories per resource.

use std::sync::Arc;

use serde::Serialize;
use tabled::Tabled;

use crate::cache::{CacheStorage, CacheTtl, QueryCache};
use crate::cli::{ListArgs, OutputFormat};
use crate::client::models::ListQuery;
use crate::client::services::{
    CategoryService, CategoryVariationService, ProductItemService, ProductService,
    PromotionCategoryService, PromotionProductService, PromotionService, VariationOptionService,
    VariationService,
};
use crate::client::{AuthService, HttpClient};
use crate::config::Config;
use crate::credentials::{CredentialStore, FileCredentialStore};
use crate::error::Result;
use crate::notify::{ConsoleNotifier, Messages, Notify, SilentNotifier};
use crate::output::{json, table};
use crate::repo::{Repository, ResourceKey};

/// Context for command execution containing config, client, and runtime
/// options.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
    http: Arc<HttpClient>,
    cache: Arc<QueryCache>,
    notifier: Arc<dyn Notify>,
}

impl CommandContext {
    /// Create a new command context with full initialization.
    ///
    /// # Arguments
    /// * `format` - Output format (table/json)
    /// * `config_path` - Optional path to the config file
    /// * `no_cache` - Whether to bypass the response cache
    /// * `quiet` - Whether to suppress notifications
    pub fn new(
        format: OutputFormat,
        config_path: Option<&str>,
        no_cache: bool,
        quiet: bool,
    ) -> Result<Self> {
        let config = Config::load_at(config_path)?;
        let api_url = config.api_url()?;

        let store: Arc<dyn CredentialStore> = Arc::new(FileCredentialStore::open_default()?);
        let http = Arc::new(HttpClient::new(api_url, store)?);

        let cache = if no_cache {
            Arc::new(QueryCache::disabled())
        } else {
            // A cache that fails to open degrades to no caching
            Arc::new(QueryCache::new(CacheStorage::open().ok()))
        };

        let notifier: Arc<dyn Notify> = if quiet {
            Arc::new(SilentNotifier)
        } else {
            Arc::new(ConsoleNotifier)
        };

        Ok(Self {
            config,
            format,
            http,
            cache,
            notifier,
        })
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(Arc::clone(&self.http))
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub fn categories(&self) -> Repository<CategoryService> {
        self.repository(
            ["categories"],
            CategoryService::new(Arc::clone(&self.http)),
            Messages::for_noun("Category"),
            CacheTtl::CATEGORIES,
        )
    }

    pub fn products(&self) -> Repository<ProductService> {
        self.repository(
            ["products"],
            ProductService::new(Arc::clone(&self.http)),
            Messages::for_noun("Product"),
            CacheTtl::PRODUCTS,
        )
    }

    pub fn product_items(&self) -> Repository<ProductItemService> {
        self.repository(
            ["product-items"],
            ProductItemService::new(Arc::clone(&self.http)),
            Messages::for_noun("Product item"),
            CacheTtl::PRODUCT_ITEMS,
        )
    }

    pub fn variations(&self) -> Repository<VariationService> {
        self.repository(
            ["variations"],
            VariationService::new(Arc::clone(&self.http)),
            Messages::for_noun("Variation"),
            CacheTtl::VARIATIONS,
        )
    }

    pub fn variation_options(&self) -> Repository<VariationOptionService> {
        self.repository(
            ["variation-options"],
            VariationOptionService::new(Arc::clone(&self.http)),
            Messages::for_noun("Variation option"),
            CacheTtl::VARIATION_OPTIONS,
        )
    }

    pub fn category_variations(&self) -> Repository<CategoryVariationService> {
        self.repository(
            ["category-variations"],
            CategoryVariationService::new(Arc::clone(&self.http)),
            Messages::for_noun("Category variation"),
            CacheTtl::CATEGORY_VARIATIONS,
        )
    }

    pub fn promotions(&self) -> Repository<PromotionService> {
        self.repository(
            ["promotions"],
            PromotionService::new(Arc::clone(&self.http)),
            Messages::for_noun("Promotion"),
            CacheTtl::PROMOTIONS,
        )
    }

    pub fn promotion_categories(&self) -> Repository<PromotionCategoryService> {
        self.repository(
            ["promotion-categories"],
            PromotionCategoryService::new(Arc::clone(&self.http)),
            Messages::for_noun("Promotion category"),
            CacheTtl::PROMOTION_LINKS,
        )
    }

    pub fn promotion_products(&self) -> Repository<PromotionProductService> {
        self.repository(
            ["promotion-products"],
            PromotionProductService::new(Arc::clone(&self.http)),
            Messages::for_noun("Promotion product"),
            CacheTtl::PROMOTION_LINKS,
        )
    }

    fn repository<S>(
        &self,
        key: [&str; 1],
        service: S,
        messages: Messages,
        ttl: std::time::Duration,
    ) -> Repository<S> {
        Repository::new(
            ResourceKey::new(key),
            service,
            Arc::clone(&self.cache),
            Arc::clone(&self.notifier),
        )
        .with_messages(messages)
        .with_ttl(ttl)
    }

    /// Build a list query from CLI args, applying the configured default
    /// page size when none was given.
    pub fn list_query(&self, args: &ListArgs) -> ListQuery {
        let mut query = args.to_query();
        if query.page_size.is_none() {
            query.page_size = Some(self.config.preferences.page_size);
        }
        query
    }

    /// Print rows in the selected output format.
    pub fn print<T: Tabled + Serialize>(&self, rows: &[T]) -> Result<()> {
        match self.format {
            OutputFormat::Table => println!("{}", table::format_table(rows)),
            OutputFormat::Json => println!("{}", json::format_json(&rows)?),
        }
        Ok(())
    }
}
