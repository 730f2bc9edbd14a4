//! Generic resource repository
//!
//! The data-access layer every resource shares: one type, four operations,
//! uniform caching and notification behavior. A concrete resource supplies
//! its endpoint service and a resource key; which operations exist on the
//! resulting repository follows from the capability traits the service
//! implements.

use std::sync::Arc;
use std::time::Duration;

use crate::cache::{cache_key, QueryCache};
use crate::client::api::{CreateEndpoint, DeleteEndpoint, ListEndpoint, UpdateEndpoint};
use crate::client::models::{ListQuery, Page};
use crate::error::{Error, Result};
use crate::notify::{Messages, Notify};

const DEFAULT_TTL: Duration = Duration::from_secs(10 * 60);

/// Ordered segments identifying a logical collection.
///
/// The joined key scopes cache invalidation: a mutation staleness-marks
/// every cache entry under the key, whatever query parameters the entries
/// were fetched with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceKey {
    segments: Vec<String>,
}

impl ResourceKey {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The joined form used as the cache's resource tag.
    pub fn resource(&self) -> String {
        self.segments.join("/")
    }
}

impl std::fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.resource())
    }
}

/// Outcome of a mutation.
///
/// Failures are reported through the notifier and captured here rather than
/// returned as `Err`, so a caller that only cares about the notification
/// cannot be crashed by a server rejection. Callers that do want to react
/// inspect [`Mutation::error`] or convert with [`Mutation::into_result`].
#[derive(Debug)]
pub struct Mutation<T> {
    value: Option<T>,
    error: Option<Error>,
}

impl<T> Mutation<T> {
    fn succeeded(value: T) -> Self {
        Self {
            value: Some(value),
            error: None,
        }
    }

    fn failed(error: Error) -> Self {
        Self {
            value: None,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn into_result(self) -> Result<T> {
        match (self.value, self.error) {
            (Some(value), None) => Ok(value),
            (_, Some(error)) => Err(error),
            (None, None) => Err(Error::Other("mutation produced no outcome".to_string())),
        }
    }
}

/// Cached, notifying data access for one resource.
pub struct Repository<S> {
    key: ResourceKey,
    service: S,
    cache: Arc<QueryCache>,
    notifier: Arc<dyn Notify>,
    messages: Messages,
    ttl: Duration,
}

impl<S> Repository<S> {
    pub fn new(
        key: ResourceKey,
        service: S,
        cache: Arc<QueryCache>,
        notifier: Arc<dyn Notify>,
    ) -> Self {
        Self {
            key,
            service,
            cache,
            notifier,
            messages: Messages::default(),
            ttl: DEFAULT_TTL,
        }
    }

    /// Replace the default notification messages.
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Replace the default cache TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn key(&self) -> &ResourceKey {
        &self.key
    }

    /// The underlying service, for endpoint extras outside the four
    /// uniform operations (e.g. the category-scoped option listing).
    pub fn service(&self) -> &S {
        &self.service
    }

    fn notify_failure(&self, err: &Error, fallback: &str) {
        let message = match err {
            Error::Api(api) => api.server_message().unwrap_or(fallback),
            _ => fallback,
        };
        self.notifier.error(message);
    }
}

impl<S: ListEndpoint> Repository<S> {
    /// Fetch one page of the collection, serving from the cache when a
    /// fresh entry exists for this exact query.
    pub async fn fetch_list(&self, query: &ListQuery) -> Result<Page<S::Item>> {
        let resource = self.key.resource();
        let key = cache_key(&resource, &query.to_params());

        self.cache
            .fetch(&resource, &key, self.ttl, || self.service.get_all(query))
            .await
    }
}

impl<S: CreateEndpoint> Repository<S> {
    pub async fn create(&self, payload: &S::Payload) -> Mutation<S::Item> {
        match self.service.create_one(payload).await {
            Ok(item) => {
                self.notifier.success(&self.messages.create_ok);
                self.cache.invalidate(&self.key.resource());
                Mutation::succeeded(item)
            }
            Err(err) => {
                self.notify_failure(&err, &self.messages.create_err);
                Mutation::failed(err)
            }
        }
    }
}

impl<S: UpdateEndpoint> Repository<S> {
    pub async fn update(&self, id: &str, patch: &S::Patch) -> Mutation<S::Item> {
        match self.service.update_one(id, patch).await {
            Ok(item) => {
                self.notifier.success(&self.messages.update_ok);
                self.cache.invalidate(&self.key.resource());
                Mutation::succeeded(item)
            }
            Err(err) => {
                self.notify_failure(&err, &self.messages.update_err);
                Mutation::failed(err)
            }
        }
    }
}

impl<S: DeleteEndpoint> Repository<S> {
    pub async fn delete(&self, id: &str) -> Mutation<()> {
        match self.service.delete_one(id).await {
            Ok(()) => {
                self.notifier.success(&self.messages.delete_ok);
                self.cache.invalidate(&self.key.resource());
                Mutation::succeeded(())
            }
            Err(err) => {
                self.notify_failure(&err, &self.messages.delete_err);
                Mutation::failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tempfile::TempDir;

    use crate::cache::CacheStorage;
    use crate::error::ApiError;

    /// In-memory stand-in for an endpoint service: items are strings,
    /// bucketed by the `productId` query parameter.
    struct StubService {
        list_calls: AtomicUsize,
        buckets: Mutex<HashMap<String, Vec<String>>>,
        fail_next: Mutex<Option<ApiError>>,
    }

    impl StubService {
        fn new(buckets: &[(&str, &[&str])]) -> Self {
            Self {
                list_calls: AtomicUsize::new(0),
                buckets: Mutex::new(
                    buckets
                        .iter()
                        .map(|(k, items)| {
                            (
                                k.to_string(),
                                items.iter().map(|i| i.to_string()).collect(),
                            )
                        })
                        .collect(),
                ),
                fail_next: Mutex::new(None),
            }
        }

        fn fail_next(&self, err: ApiError) {
            *self.fail_next.lock().unwrap() = Some(err);
        }

        fn take_failure(&self) -> Option<ApiError> {
            self.fail_next.lock().unwrap().take()
        }
    }

    #[async_trait]
    impl ListEndpoint for StubService {
        type Item = String;

        async fn get_all(&self, query: &ListQuery) -> Result<Page<String>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            let bucket = query.extra.get("productId").cloned().unwrap_or_default();
            let data = self
                .buckets
                .lock()
                .unwrap()
                .get(&bucket)
                .cloned()
                .unwrap_or_default();
            Ok(Page {
                total: Some(data.len() as u64),
                data,
                last_id: None,
            })
        }
    }

    #[async_trait]
    impl CreateEndpoint for StubService {
        type Item = String;
        type Payload = String;

        async fn create_one(&self, payload: &String) -> Result<String> {
            if let Some(err) = self.take_failure() {
                return Err(err.into());
            }
            self.buckets
                .lock()
                .unwrap()
                .entry(String::new())
                .or_default()
                .push(payload.clone());
            Ok(payload.clone())
        }
    }

    #[async_trait]
    impl UpdateEndpoint for StubService {
        type Item = String;
        type Patch = String;

        async fn update_one(&self, _id: &str, patch: &String) -> Result<String> {
            if let Some(err) = self.take_failure() {
                return Err(err.into());
            }
            Ok(patch.clone())
        }
    }

    #[async_trait]
    impl DeleteEndpoint for StubService {
        async fn delete_one(&self, _id: &str) -> Result<()> {
            if let Some(err) = self.take_failure() {
                return Err(err.into());
            }
            Ok(())
        }
    }

    /// Notifier that records what it was asked to show.
    #[derive(Default)]
    struct RecordingNotifier {
        successes: Mutex<Vec<String>>,
        errors: Mutex<Vec<String>>,
    }

    impl Notify for RecordingNotifier {
        fn success(&self, message: &str) {
            self.successes.lock().unwrap().push(message.to_string());
        }

        fn error(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_string());
        }
    }

    struct Fixture {
        repo: Repository<StubService>,
        notifier: Arc<RecordingNotifier>,
        _dir: TempDir,
    }

    fn fixture(buckets: &[(&str, &[&str])]) -> Fixture {
        let dir = TempDir::new().unwrap();
        let storage = CacheStorage::open_at(dir.path()).unwrap();
        let cache = Arc::new(QueryCache::new(Some(storage)));
        let notifier = Arc::new(RecordingNotifier::default());

        let repo = Repository::new(
            ResourceKey::new(["product-items"]),
            StubService::new(buckets),
            cache,
            Arc::clone(&notifier) as Arc<dyn Notify>,
        );

        Fixture {
            repo,
            notifier,
            _dir: dir,
        }
    }

    fn query_for(product: &str) -> ListQuery {
        ListQuery::new().with("productId", product)
    }

    #[tokio::test]
    async fn test_distinct_params_populate_distinct_entries() {
        let fx = fixture(&[("A", &["a1", "a2"][..]), ("B", &["b1"][..])]);

        let page_a = fx.repo.fetch_list(&query_for("A")).await.unwrap();
        let page_b = fx.repo.fetch_list(&query_for("B")).await.unwrap();
        assert_eq!(page_a.data, vec!["a1", "a2"]);
        assert_eq!(page_b.data, vec!["b1"]);

        // Cached reads keep their own payloads; B's fetch did not overwrite A's
        let page_a2 = fx.repo.fetch_list(&query_for("A")).await.unwrap();
        let page_b2 = fx.repo.fetch_list(&query_for("B")).await.unwrap();
        assert_eq!(page_a2.data, vec!["a1", "a2"]);
        assert_eq!(page_b2.data, vec!["b1"]);

        assert_eq!(fx.repo.service().list_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_create_invalidates_every_entry_of_the_resource() {
        let fx = fixture(&[("A", &["a1"][..]), ("B", &["b1"][..])]);

        let _ = fx.repo.fetch_list(&query_for("A")).await.unwrap();
        let _ = fx.repo.fetch_list(&query_for("B")).await.unwrap();
        assert_eq!(fx.repo.service().list_calls.load(Ordering::SeqCst), 2);

        let outcome = fx.repo.create(&"a3".to_string()).await;
        assert!(outcome.is_success());

        // Both parameterizations refetch after the mutation
        let _ = fx.repo.fetch_list(&query_for("A")).await.unwrap();
        let _ = fx.repo.fetch_list(&query_for("B")).await.unwrap();
        assert_eq!(fx.repo.service().list_calls.load(Ordering::SeqCst), 4);

        assert_eq!(
            fx.notifier.successes.lock().unwrap().clone(),
            vec!["Created!"]
        );
    }

    #[tokio::test]
    async fn test_failed_create_notifies_with_server_message() {
        let fx = fixture(&[]);
        fx.repo.service().fail_next(ApiError::Rejected {
            status: 400,
            message: Some("Invalid name".to_string()),
        });

        let outcome = fx.repo.create(&"bad".to_string()).await;

        assert!(!outcome.is_success());
        assert!(outcome.value().is_none());
        assert!(outcome.error().is_some());
        assert_eq!(
            fx.notifier.errors.lock().unwrap().clone(),
            vec!["Invalid name"]
        );
    }

    #[tokio::test]
    async fn test_failed_create_falls_back_to_configured_message() {
        let fx = fixture(&[]);
        fx.repo
            .service()
            .fail_next(ApiError::Network("connection reset".to_string()));

        let outcome = fx.repo.create(&"x".to_string()).await;

        assert!(!outcome.is_success());
        assert_eq!(
            fx.notifier.errors.lock().unwrap().clone(),
            vec!["Create failed!"]
        );
    }

    #[tokio::test]
    async fn test_failed_mutation_leaves_cache_untouched() {
        let fx = fixture(&[("A", &["a1"][..])]);

        let _ = fx.repo.fetch_list(&query_for("A")).await.unwrap();
        fx.repo.service().fail_next(ApiError::Rejected {
            status: 400,
            message: None,
        });
        let _ = fx.repo.create(&"x".to_string()).await;

        // Still served from cache: the rejected create invalidated nothing
        let _ = fx.repo.fetch_list(&query_for("A")).await.unwrap();
        assert_eq!(fx.repo.service().list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_update_and_delete_invalidate_and_notify() {
        let fx = fixture(&[("A", &["a1"][..])]);

        let _ = fx.repo.fetch_list(&query_for("A")).await.unwrap();

        let updated = fx.repo.update("id-1", &"patched".to_string()).await;
        assert!(updated.is_success());
        assert_eq!(updated.value().map(String::as_str), Some("patched"));

        let deleted = fx.repo.delete("id-1").await;
        assert!(deleted.is_success());

        let _ = fx.repo.fetch_list(&query_for("A")).await.unwrap();
        assert_eq!(fx.repo.service().list_calls.load(Ordering::SeqCst), 2);

        assert_eq!(
            fx.notifier.successes.lock().unwrap().clone(),
            vec!["Updated!", "Deleted!"]
        );
    }

    #[tokio::test]
    async fn test_resource_messages_flow_through() {
        let dir = TempDir::new().unwrap();
        let storage = CacheStorage::open_at(dir.path()).unwrap();
        let notifier = Arc::new(RecordingNotifier::default());
        let repo = Repository::new(
            ResourceKey::new(["categories"]),
            StubService::new(&[]),
            Arc::new(QueryCache::new(Some(storage))),
            Arc::clone(&notifier) as Arc<dyn Notify>,
        )
        .with_messages(Messages::for_noun("Category"));

        let outcome = repo.create(&"Shoes".to_string()).await;
        assert!(outcome.is_success());
        assert_eq!(
            notifier.successes.lock().unwrap().clone(),
            vec!["Category created!"]
        );
    }

    #[test]
    fn test_resource_key_display_and_segments() {
        let key = ResourceKey::new(["product-items", "p-1"]);
        assert_eq!(key.resource(), "product-items/p-1");
        assert_eq!(key.to_string(), "product-items/p-1");
        assert_eq!(key.segments().len(), 2);
    }

    #[test]
    fn test_mutation_into_result() {
        let ok: Mutation<u32> = Mutation::succeeded(7);
        assert_eq!(ok.into_result().unwrap(), 7);

        let err: Mutation<u32> = Mutation::failed(ApiError::SessionExpired.into());
        assert!(err.into_result().is_err());
    }
}
