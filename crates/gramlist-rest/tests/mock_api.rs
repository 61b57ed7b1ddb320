//! Mock API tests for the REST client.
//!
//! These use wiremock to stand in for the backend and exercise the client's
//! behavior without network access or real credentials.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{any, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use gramlist_core::{
    AccessToken, ApiUrl, Credentials, Error, MemoryTokenStore, RefreshToken, SessionState,
    TokenStore,
};
use gramlist_rest::services::{
    AmazonService, AnalyticsService, ChatbotService, InstagramService, ProductsService,
};
use gramlist_rest::{ApiClient, SessionManager};

/// Matches requests that carry no Authorization header at all.
struct NoAuthHeader;

impl wiremock::Match for NoAuthHeader {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("authorization")
    }
}

fn client_for(server: &MockServer) -> (ApiClient, Arc<MemoryTokenStore>) {
    let store = Arc::new(MemoryTokenStore::new());
    let base = ApiUrl::new(server.uri()).unwrap();
    (ApiClient::new(base, store.clone()), store)
}

fn seed_token(store: &MemoryTokenStore, access: &str) {
    store
        .set_tokens(&AccessToken::new(access), &RefreshToken::new("refresh"))
        .unwrap();
}

// ============================================================================
// Session lifecycle
// ============================================================================

#[tokio::test]
async fn login_stores_token_pair_and_user() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({
            "email": "u@example.com",
            "password": "p"
        })))
        .and(NoAuthHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A",
            "refresh_token": "R",
            "user": {"id": 1, "name": "U"}
        })))
        .mount(&server)
        .await;

    let (client, store) = client_for(&server);
    let session = SessionManager::new(client);

    let payload = session
        .login(&Credentials::new("u@example.com", "p"))
        .await
        .unwrap();

    assert_eq!(payload.access_token, "A");
    assert_eq!(store.access_token().unwrap().as_str(), "A");
    assert_eq!(store.refresh_token().unwrap().as_str(), "R");

    let user = session.user().unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.name, "U");
}

#[tokio::test]
async fn login_failure_propagates_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "Invalid credentials"
        })))
        .mount(&server)
        .await;

    let (client, store) = client_for(&server);
    let session = SessionManager::new(client);

    let err = session
        .login(&Credentials::new("u@example.com", "wrong"))
        .await
        .unwrap_err();

    // A 401 on an anonymous auth call is a credential failure, not session
    // expiry: no store clear, no expiry signal.
    match err {
        Error::Api(api) => {
            assert_eq!(api.status, 401);
            assert_eq!(api.message.as_deref(), Some("Invalid credentials"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert!(store.access_token().is_none());
    assert!(session.user().is_none());
}

#[tokio::test]
async fn rehydrate_without_token_makes_no_network_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server);
    let session = SessionManager::new(client);

    let state = session.rehydrate().await;
    assert_eq!(state, SessionState::Anonymous);
}

#[tokio::test]
async fn rehydrate_adopts_user_from_stored_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .and(header("authorization", "Bearer stored-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {
                "id": "64f1c0",
                "name": "Ada",
                "email": "ada@example.com",
                "instagram_connected": true,
                "instagram_username": "ada.makes",
                "amazon_connected": false
            }
        })))
        .mount(&server)
        .await;

    let (client, store) = client_for(&server);
    seed_token(&store, "stored-token");
    let session = SessionManager::new(client);

    let state = session.rehydrate().await;
    let user = state.user().unwrap();
    assert_eq!(user.instagram_username.as_deref(), Some("ada.makes"));
    // Token survives a successful rehydration.
    assert!(store.access_token().is_some());
}

#[tokio::test]
async fn rehydrate_with_rejected_token_ends_anonymous_with_empty_store() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "Token has expired"
        })))
        .mount(&server)
        .await;

    let (client, store) = client_for(&server);
    seed_token(&store, "stale-token");
    let session = SessionManager::new(client);

    let state = session.rehydrate().await;
    assert_eq!(state, SessionState::Anonymous);
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
}

#[tokio::test]
async fn logout_is_local_and_synchronous() {
    let server = MockServer::start().await;

    // Any request at all would fail the test.
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let (client, store) = client_for(&server);
    seed_token(&store, "live-token");
    let session = SessionManager::new(client);

    session.logout().unwrap();

    assert!(store.access_token().is_none());
    assert_eq!(session.state(), SessionState::Anonymous);
}

#[tokio::test]
async fn logout_invalidates_in_flight_rehydration() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"user": {"id": "1", "name": "U"}}))
                .set_delay(std::time::Duration::from_millis(200)),
        )
        .mount(&server)
        .await;

    let (client, store) = client_for(&server);
    seed_token(&store, "live-token");
    let session = SessionManager::new(client);

    let in_flight = {
        let session = session.clone();
        tokio::spawn(async move { session.rehydrate().await })
    };

    // Let the rehydration reach the wire, then tear the session down.
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    session.logout().unwrap();

    in_flight.await.unwrap();

    // The stale continuation must not resurrect the session.
    assert_eq!(session.state(), SessionState::Anonymous);
    assert!(store.access_token().is_none());
}

// ============================================================================
// Bearer header handling
// ============================================================================

#[tokio::test]
async fn authed_requests_carry_bearer_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/analytics/dashboard"))
        .and(header("authorization", "Bearer live-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_products": 4,
            "total_sales": 310.0,
            "total_orders": 9,
            "products_with_posts": 2,
            "amazon_connected": true,
            "instagram_connected": true
        })))
        .mount(&server)
        .await;

    let (client, store) = client_for(&server);
    seed_token(&store, "live-token");

    let summary = AnalyticsService::new(&client).dashboard().await.unwrap();
    assert_eq!(summary.total_orders, 9);
}

#[tokio::test]
async fn anonymous_requests_omit_authorization_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chatbot"))
        .and(NoAuthHeader)
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"reply": "Ask about listings."})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server);
    let reply = ChatbotService::new(&client).send("help").await.unwrap();
    assert_eq!(reply.reply, "Ask about listings.");
}

// ============================================================================
// 401 interception
// ============================================================================

#[tokio::test]
async fn expired_session_clears_store_and_signals_expiry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/amazon/listings"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "Token has expired"
        })))
        .mount(&server)
        .await;

    let (client, store) = client_for(&server);
    seed_token(&store, "stale-token");

    let err = AmazonService::new(&client).listings().await.unwrap_err();
    assert!(matches!(
        err,
        Error::Auth(gramlist_core::error::AuthError::SessionExpired)
    ));
    assert!(store.access_token().is_none());
    assert!(store.refresh_token().is_none());
}

#[tokio::test]
async fn expiry_fires_even_on_non_json_401_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/insta-connect/media/media"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string("Unauthorized")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let (client, store) = client_for(&server);
    seed_token(&store, "stale-token");

    let err = InstagramService::new(&client).media().await.unwrap_err();
    assert!(matches!(err, Error::Auth(_)));
    assert!(store.access_token().is_none());
}

// ============================================================================
// Error handling
// ============================================================================

#[tokio::test]
async fn validation_error_carries_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "Email already exists"
        })))
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server);
    let session = SessionManager::new(client);

    let err = session
        .register(&gramlist_core::Registration::new(
            "Ada",
            "ada@example.com",
            "pw",
        ))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Email already exists"));
}

#[tokio::test]
async fn non_json_error_body_falls_back_to_generic_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/analytics/sales"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_string("Internal Server Error")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&server)
        .await;

    let (client, store) = client_for(&server);
    seed_token(&store, "live-token");

    let err = AnalyticsService::new(&client).sales().await.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("500"));
    assert!(message.contains("API request failed"));
    // A plain server error must not log the user out.
    assert!(store.access_token().is_some());
}

// ============================================================================
// Feature services
// ============================================================================

#[tokio::test]
async fn instagram_connect_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/insta-connect/instagram/initiate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authorization_url": "https://www.facebook.com/v20.0/dialog/oauth?client_id=x"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/insta-connect/instagram/callback"))
        .and(query_param("code", "oauth-code"))
        .and(query_param("state", "opaque-state"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Instagram connection successful",
            "instagram_username": "ada.makes",
            "expires_in_days": 60
        })))
        .mount(&server)
        .await;

    let (client, store) = client_for(&server);
    seed_token(&store, "live-token");
    let instagram = InstagramService::new(&client);

    let auth = instagram.initiate().await.unwrap();
    assert!(auth.authorization_url.contains("dialog/oauth"));

    let link = instagram
        .complete_callback("oauth-code", "opaque-state")
        .await
        .unwrap();
    assert_eq!(link.instagram_username.as_deref(), Some("ada.makes"));
    assert_eq!(link.expires_in_days, Some(60));
}

#[tokio::test]
async fn media_feed_lists_connected_account_media() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/insta-connect/media/media"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "media": [
                {
                    "id": "179000000001",
                    "caption": "new batch",
                    "media_type": "IMAGE",
                    "media_url": "https://cdn.example/1.jpg",
                    "timestamp": "2024-11-02T09:30:00Z"
                }
            ],
            "new_media_stored": 1
        })))
        .mount(&server)
        .await;

    let (client, store) = client_for(&server);
    seed_token(&store, "live-token");

    let feed = InstagramService::new(&client).media().await.unwrap();
    assert_eq!(feed.media.len(), 1);
    assert_eq!(feed.media[0].media_type, "IMAGE");
    assert_eq!(feed.new_media_stored, Some(1));
}

#[tokio::test]
async fn product_create_and_listing_publish() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/products"))
        .and(body_json(json!({
            "name": "Stoneware mug",
            "price": 18.0,
            "sku": "MUG-007"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "product": {
                "id": 7,
                "name": "Stoneware mug",
                "price": 18.0,
                "sku": "MUG-007",
                "stock": 0
            }
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/amazon/listings"))
        .and(body_json(json!({"product_id": "7"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "listing": {
                "id": "L-1",
                "product_id": "7",
                "asin": "B0EXAMPLE",
                "title": "Stoneware mug",
                "price": 18.0,
                "quantity": 0,
                "status": "draft"
            }
        })))
        .mount(&server)
        .await;

    let (client, store) = client_for(&server);
    seed_token(&store, "live-token");

    let product = ProductsService::new(&client)
        .create(&gramlist_core::NewProduct {
            name: "Stoneware mug".to_string(),
            price: 18.0,
            sku: "MUG-007".to_string(),
            description: None,
            stock: None,
        })
        .await
        .unwrap();
    assert_eq!(product.id, "7");

    let listing = AmazonService::new(&client).publish(&product.id).await.unwrap();
    assert_eq!(listing.asin.as_deref(), Some("B0EXAMPLE"));
    assert_eq!(listing.status.as_deref(), Some("draft"));
}
