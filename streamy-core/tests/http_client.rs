use std::time::Duration;

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::get,
};
use serde_json::{Value, json};
use streamy_core::{CatalogClient, CatalogError, HttpCatalogClient, LookupKind};
use streamy_model::{CatalogId, MediaKind};
use tokio::net::TcpListener;

async fn movies(Path(query): Path<String>) -> Json<Value> {
    Json(json!({
        "status": "success",
        "query": query,
        "count": 1,
        "results": [{
            "id": 155,
            "title": "The Dark Knight",
            "overview": "Batman raises the stakes.",
            "release_date": "2008-07-16",
            "vote_average": 8.5,
            "poster_path": "https://image.tmdb.org/t/p/w500/dk.jpg",
            "backdrop_path": null
        }]
    }))
}

async fn tv_shows(Path(_query): Path<String>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"status": "error", "message": "TMDB down"})),
    )
}

async fn multi(Path(query): Path<String>) -> Json<Value> {
    Json(json!({
        "status": "success",
        "query": query,
        "count": 2,
        "results": [
            {"id": 525, "name": "Christopher Nolan", "media_type": "person"},
            {"id": 1396, "name": "Breaking Bad", "first_air_date": "2008-01-20", "media_type": "tv"}
        ]
    }))
}

async fn slow(Path(_query): Path<String>) -> Json<Value> {
    tokio::time::sleep(Duration::from_millis(500)).await;
    Json(json!({"status": "success", "query": "", "count": 0, "results": []}))
}

async fn spawn_catalog(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

fn catalog_router() -> Router {
    Router::new()
        .route("/movies/{query}", get(movies))
        .route("/tv-shows/{query}", get(tv_shows))
        .route("/search/{query}", get(multi))
        .route("/health", get(|| async { Json(json!({"status": "healthy"})) }))
}

#[tokio::test]
async fn movie_search_maps_results_and_decodes_query() {
    let base = spawn_catalog(catalog_router()).await;
    let client = HttpCatalogClient::new(&base, Duration::from_secs(5)).expect("client");

    let page = client.search_movies("the dark knight").await.expect("search");

    assert_eq!(page.query, "the dark knight");
    assert_eq!(page.count, 1);
    let item = page.first().expect("one result");
    assert_eq!(item.id, CatalogId::movie(155));
    assert_eq!(item.kind(), MediaKind::Movie);
    assert_eq!(item.year(), Some(2008));
    assert_eq!(item.backdrop, None);
    assert_eq!(item.landscape_art(), Some("https://image.tmdb.org/t/p/w500/dk.jpg"));
}

#[tokio::test]
async fn error_status_carries_server_message() {
    let base = spawn_catalog(catalog_router()).await;
    let client = HttpCatalogClient::new(&base, Duration::from_secs(5)).expect("client");

    let err = client
        .lookup(LookupKind::TvShow, "breaking bad")
        .await
        .expect_err("500 must fail");

    match err {
        CatalogError::Status {
            endpoint,
            status,
            message,
        } => {
            assert_eq!(endpoint, "/tv-shows/breaking%20bad");
            assert_eq!(status, 500);
            assert_eq!(message, "TMDB down");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn multi_search_keeps_only_titles() {
    let base = spawn_catalog(catalog_router()).await;
    let client = HttpCatalogClient::new(&base, Duration::from_secs(5)).expect("client");

    let page = client.search_multi("nolan").await.expect("search");

    assert_eq!(page.count, 1);
    assert_eq!(page.results[0].id, CatalogId::series(1396));
    assert_eq!(page.results[0].title, "Breaking Bad");
}

#[tokio::test]
async fn health_probe_succeeds() {
    let base = spawn_catalog(catalog_router()).await;
    let client = HttpCatalogClient::new(&format!("{base}/"), Duration::from_secs(5))
        .expect("client");

    client.health().await.expect("healthy");
}

#[tokio::test]
async fn undecodable_body_is_a_decode_error() {
    let router = Router::new().route("/movies/{query}", get(|| async { "not json" }));
    let base = spawn_catalog(router).await;
    let client = HttpCatalogClient::new(&base, Duration::from_secs(5)).expect("client");

    let err = client.search_movies("x").await.expect_err("decode");
    assert!(matches!(err, CatalogError::Decode { .. }));
}

#[tokio::test]
async fn request_timeout_is_the_only_deadline() {
    let router = Router::new().route("/movies/{query}", get(slow));
    let base = spawn_catalog(router).await;
    let client = HttpCatalogClient::new(&base, Duration::from_millis(50)).expect("client");

    let err = client.search_movies("anything").await.expect_err("timeout");
    assert!(err.is_timeout(), "unexpected error: {err}");
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client =
        HttpCatalogClient::new(&format!("http://{addr}"), Duration::from_secs(2)).expect("client");
    let err = client.search_movies("inception").await.expect_err("refused");
    assert!(matches!(err, CatalogError::Transport { .. }));
}
