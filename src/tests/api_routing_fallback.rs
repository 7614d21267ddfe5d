use crate::error::ErrorStatusPolicy;
use crate::tests::fixtures::{get_json, send, seeded_app};
use axum::http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_root_is_empty_ok() {
    let app = seeded_app(ErrorStatusPolicy::Legacy).await;

    let (status, body) = send(&app, Method::GET, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

// the unmatched-route 404 holds under either policy
#[tokio::test]
async fn test_unregistered_paths_are_404() {
    for policy in [ErrorStatusPolicy::Legacy, ErrorStatusPolicy::Standard] {
        let app = seeded_app(policy).await;

        for uri in ["/api/bogus", "/api", "/api/races/circuits", "/api/races/2021/5/extra"] {
            let (status, json) = get_json(&app, uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri} under {policy:?}");
            assert_eq!(json, json!({ "error": "URL not found" }), "{uri}");
        }
    }
}

#[tokio::test]
async fn test_other_methods_are_404() {
    let app = seeded_app(ErrorStatusPolicy::Legacy).await;

    for method in [Method::POST, Method::PUT, Method::DELETE] {
        let (status, body) = send(&app, method.clone(), "/api/circuits").await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method}");
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, json!({ "error": "URL not found" }));
    }
}

// listings are arrays, never error objects, while the store is healthy
#[tokio::test]
async fn test_listings_return_arrays() {
    let app = seeded_app(ErrorStatusPolicy::Legacy).await;

    for uri in ["/api/circuits", "/api/races", "/api/drivers", "/api/constructors"] {
        let (status, json) = get_json(&app, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert!(json.is_array(), "{uri} should list");
    }
}
