use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use keyidx::{IndexBuilder, NoiseWords};
use serde_json::Value;
use tower::ServiceExt;

fn tiny_app() -> Router {
    let mut builder = IndexBuilder::new(NoiseWords::new());
    builder.add_document("doc1", "Ant bee cat.".split_whitespace());
    builder.add_document("doc2", "Bee bee dog!".split_whitespace());
    server::build_app(builder.finish())
}

async fn call(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::get(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

#[tokio::test]
async fn search_returns_ranked_documents() {
    let (status, json) = call(tiny_app(), "/search?kw1=Bee&kw2=ant").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["kw1"], "bee");
    let docs: Vec<&str> = json["results"].as_array().unwrap().iter().map(|v| v.as_str().unwrap()).collect();
    assert_eq!(docs, vec!["doc2", "doc1"]);
}

#[tokio::test]
async fn search_without_matches_is_null() {
    let (status, json) = call(tiny_app(), "/search?kw1=zzz1&kw2=zzz2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["results"].is_null());
}

#[tokio::test]
async fn keyword_lists_occurrences() {
    let (status, json) = call(tiny_app(), "/keyword/bee").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["document"], "doc2");
    assert_eq!(json[0]["frequency"], 2);
    assert_eq!(json[1]["document"], "doc1");

    let (status, _) = call(tiny_app(), "/keyword/zebra").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
