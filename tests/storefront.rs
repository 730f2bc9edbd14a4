//! End-to-end tests against a mock platform API

use std::sync::{Arc, Mutex};

use base64::{engine::general_purpose, Engine as _};
use tempfile::TempDir;

use storeops::cache::{CacheStorage, QueryCache};
use storeops::client::models::{CreateCategory, ListQuery};
use storeops::client::services::CategoryService;
use storeops::client::{AuthApi, AuthService, HttpClient};
use storeops::credentials::{CredentialStore, MemoryCredentialStore, TOKEN_KEY};
use storeops::notify::{Messages, Notify};
use storeops::repo::{Repository, ResourceKey};

/// A syntactically valid JWT whose payload carries the given claims JSON.
fn fake_jwt(claims: &str) -> String {
    let payload = general_purpose::URL_SAFE_NO_PAD.encode(claims.as_bytes());
    format!("eyJhbGciOiJIUzI1NiJ9.{}.c2ln", payload)
}

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

/// Login persists the bundle, later calls pick it up from storage with no
/// explicit token passing, and logout clears it again.
#[tokio::test]
async fn session_lifecycle() {
    let mut server = mockito::Server::new_async().await;
    let jwt = fake_jwt(r#"{"userId":"u-1","username":"admin","role":"ADMIN","exp":4102444800}"#);

    let login_mock = server
        .mock("POST", "/auth/login")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "username": "admin",
            "password": "hunter2"
        })))
        .with_status(200)
        .with_body(format!(
            r#"{{"type":"Bearer","accessToken":"{}","refreshToken":"refresh-1"}}"#,
            jwt
        ))
        .create_async()
        .await;

    let user_mock = server
        .mock("GET", "/user")
        .match_header("authorization", format!("Bearer {}", jwt).as_str())
        .with_status(200)
        .with_body(r#"{"_id":"u-1","username":"admin","role":"ADMIN"}"#)
        .create_async()
        .await;

    let anonymous_user_mock = server
        .mock("GET", "/user")
        .match_header("authorization", mockito::Matcher::Missing)
        .with_status(200)
        .with_body(r#"{"_id":"guest","username":"guest","role":"GUEST"}"#)
        .create_async()
        .await;

    let store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());
    let http = Arc::new(HttpClient::new(server.url(), Arc::clone(&store)).unwrap());
    let auth = AuthService::new(http);

    // Sign in: bundle is persisted and claims decoded
    let session = auth.sign_in("admin", "hunter2").await.unwrap();
    assert_eq!(session.claims.username.as_deref(), Some("admin"));
    assert_eq!(session.bundle.refresh_token, "refresh-1");

    let stored = store.get(TOKEN_KEY).unwrap().expect("bundle persisted");
    assert_eq!(stored.access_token, jwt);

    // The user call carries the stored token automatically
    let user = auth.current_user().await.unwrap();
    assert_eq!(user.username, "admin");

    // Logout clears storage; the next call goes out unauthenticated
    auth.sign_out().unwrap();
    assert!(store.get(TOKEN_KEY).unwrap().is_none());

    let anonymous = auth.current_user().await.unwrap();
    assert_eq!(anonymous.role, "GUEST");

    login_mock.assert_async().await;
    user_mock.assert_async().await;
    anonymous_user_mock.assert_async().await;
}

/// Creating a category notifies with the configured message and invalidates
/// the cached list, so the next read refetches.
#[tokio::test]
async fn category_create_invalidates_cached_list() {
    let mut server = mockito::Server::new_async().await;

    // Served twice: the initial fetch and the post-create refetch. The
    // cached read in between must not count against this.
    let list_mock = server
        .mock("GET", "/product-category")
        .with_status(200)
        .with_body(
            r#"{"data":[{"_id":"c-1","categoryName":"Shoes","status":true}],"total":1}"#,
        )
        .expect(2)
        .create_async()
        .await;

    let create_mock = server
        .mock("POST", "/product-category")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "categoryName": "Shoes",
            "status": true
        })))
        .with_status(201)
        .with_body(r#"{"_id":"c-2","categoryName":"Shoes","status":true}"#)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());
    let http = Arc::new(HttpClient::new(server.url(), store).unwrap());
    let notifier = Arc::new(RecordingNotifier::default());

    let categories = Repository::new(
        ResourceKey::new(["categories"]),
        CategoryService::new(http),
        Arc::new(QueryCache::new(Some(CacheStorage::open_at(dir.path()).unwrap()))),
        Arc::clone(&notifier) as Arc<dyn Notify>,
    )
    .with_messages(Messages::for_noun("Category"));

    let query = ListQuery::new();

    let first = categories.fetch_list(&query).await.unwrap();
    assert_eq!(first.data.len(), 1);

    // Second read is served from the cache
    let cached = categories.fetch_list(&query).await.unwrap();
    assert_eq!(cached.data.len(), 1);

    let outcome = categories
        .create(&CreateCategory {
            category_name: "Shoes".to_string(),
            parent_category: None,
            status: true,
        })
        .await;
    assert!(outcome.is_success());
    assert_eq!(
        notifier.successes.lock().unwrap().clone(),
        vec!["Category created!"]
    );

    // The mutation marked the list stale; this read refetches
    let refreshed = categories.fetch_list(&query).await.unwrap();
    assert_eq!(refreshed.data.len(), 1);

    list_mock.assert_async().await;
    create_mock.assert_async().await;
}

/// A rejected create surfaces the server's message through the notifier and
/// the outcome, without becoming an `Err` or a panic.
#[tokio::test]
async fn rejected_create_reports_server_message() {
    let mut server = mockito::Server::new_async().await;

    let _create_mock = server
        .mock("POST", "/product-category")
        .with_status(400)
        .with_body(r#"{"message":"Invalid name"}"#)
        .create_async()
        .await;

    let dir = TempDir::new().unwrap();
    let store: Arc<dyn CredentialStore> = Arc::new(MemoryCredentialStore::new());
    let http = Arc::new(HttpClient::new(server.url(), store).unwrap());
    let notifier = Arc::new(RecordingNotifier::default());

    let categories = Repository::new(
        ResourceKey::new(["categories"]),
        CategoryService::new(http),
        Arc::new(QueryCache::new(Some(CacheStorage::open_at(dir.path()).unwrap()))),
        Arc::clone(&notifier) as Arc<dyn Notify>,
    )
    .with_messages(Messages::for_noun("Category"));

    let outcome = categories
        .create(&CreateCategory {
            category_name: String::new(),
            parent_category: None,
            status: true,
        })
        .await;

    assert!(!outcome.is_success());
    assert!(outcome.error().is_some());
    assert_eq!(
        notifier.errors.lock().unwrap().clone(),
        vec!["Invalid name"]
    );
}
