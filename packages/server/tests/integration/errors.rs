use serde_json::json;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn unknown_route_gets_the_generic_404() {
    let app = TestApp::spawn().await;

    let res = app.get("/no/such/route").await;

    assert_eq!(res.status, 404);
    assert_eq!(
        res.body,
        json!({"success": false, "error": 404, "message": "Resource not found"})
    );
}

#[tokio::test]
async fn unsupported_method_gets_the_generic_405() {
    let app = TestApp::spawn().await;

    let res = app.put(routes::CATEGORIES, &json!({})).await;

    assert_eq!(res.status, 405);
    assert_eq!(res.body["success"], false);
    assert_eq!(res.body["error"], 405);
}

#[tokio::test]
async fn body_without_json_content_type_gets_the_generic_400() {
    let app = TestApp::spawn().await;

    let res = app
        .post_raw(routes::QUIZZES, "previous_questions=1", "text/plain")
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["error"], 400);
    assert_eq!(res.body["message"], "Bad Request");
}

#[tokio::test]
async fn openapi_document_lists_every_route() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::OPENAPI).await;

    assert_eq!(res.status, 200);
    let paths = res.body["paths"].as_object().expect("paths object");
    for path in [
        "/categories",
        "/categories/{id}/questions",
        "/questions",
        "/questions/{id}",
        "/questions/search",
        "/quizzes",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}

#[tokio::test]
async fn panicking_handler_gets_the_generic_500() {
    use axum::{Router, routing::get};
    use tower_http::catch_panic::CatchPanicLayer;
    use trivia_server::handlers::fallback;

    async fn explode() -> &'static str {
        panic!("handler blew up")
    }

    let app = Router::new()
        .route("/explode", get(explode))
        .layer(CatchPanicLayer::custom(fallback::panic_response));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    let res = reqwest::get(format!("http://{addr}/explode")).await.unwrap();

    assert_eq!(res.status(), 500);
    assert_eq!(
        res.json::<serde_json::Value>().await.unwrap(),
        json!({"success": false, "error": 500, "message": "Internal Server Error"})
    );
}
