// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use newsrs::domain::news::source::SourceError;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

use super::helpers::{aggregator_with, test_app, StubSource};

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// 测试根路径返回第一页的新闻条目
///
/// 验证响应为 JSON 数组，每个条目包含全部五个文档化字段。
#[tokio::test]
async fn test_root_returns_first_page() {
    let stub = Arc::new(StubSource::new(30));
    let app = test_app(aggregator_with(stub, 5_000));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let stories = body.as_array().unwrap();
    assert_eq!(stories.len(), 30);

    let first = stories[0].as_object().unwrap();
    assert_eq!(first["title"], "page 1 story 0");
    assert_eq!(first["points"], 100);
    assert_eq!(first["sent_by"], "user0");
    assert_eq!(first["published"], "1 hours ago");
    assert_eq!(first["comments"], 0);
    assert_eq!(first.len(), 5);
}

/// 测试路径参数聚合多页并保持页码顺序
#[tokio::test]
async fn test_page_count_path_aggregates_pages() {
    let stub = Arc::new(StubSource::new(30));
    let app = test_app(aggregator_with(stub, 5_000));

    let response = app
        .oneshot(Request::builder().uri("/3").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let stories = body.as_array().unwrap();
    assert_eq!(stories.len(), 90);
    assert_eq!(stories[0]["title"], "page 1 story 0");
    assert_eq!(stories[30]["title"], "page 2 story 0");
    assert_eq!(stories[60]["title"], "page 3 story 0");
}

/// 测试零或负的页数参数按第一页处理
#[tokio::test]
async fn test_non_positive_page_count_normalizes() {
    let stub = Arc::new(StubSource::new(30));
    let aggregator = aggregator_with(Arc::clone(&stub), 5_000);

    for uri in ["/0", "/-2"] {
        let response = test_app(Arc::clone(&aggregator))
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body.as_array().unwrap().len(), 30);
    }

    // Both requests resolved to the cached first page.
    assert_eq!(stub.fetches(1), 1);
    assert_eq!(stub.total_fetches(), 1);
}

/// 测试非整数的路径段被拒绝
#[tokio::test]
async fn test_non_integer_page_count_is_rejected() {
    let stub = Arc::new(StubSource::new(30));
    let app = test_app(aggregator_with(stub, 5_000));

    let response = app
        .oneshot(Request::builder().uri("/abc").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// 测试上游失败映射为 502 并返回结构化错误
#[tokio::test]
async fn test_upstream_failure_maps_to_bad_gateway() {
    let stub = Arc::new(StubSource::new(30));
    stub.fail_with(1, SourceError::Status(503));
    let app = test_app(aggregator_with(stub, 5_000));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("503"));
}

/// 测试上游超时映射为 502
#[tokio::test(start_paused = true)]
async fn test_upstream_timeout_maps_to_bad_gateway() {
    let stub = Arc::new(StubSource::new(30));
    stub.set_delay(1, std::time::Duration::from_millis(500));
    let app = test_app(aggregator_with(stub, 100));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Timeout");
}
