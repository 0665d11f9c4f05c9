// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chuckme::{create_app, AppState};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_for(upstream: &MockServer) -> axum::Router {
  create_app(AppState::new(format!("{}/jokes/random", upstream.uri())))
}

#[tokio::test]
async fn random_returns_the_upstream_value_as_plain_text() {
  let upstream = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/jokes/random"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
      "icon_url": "https://api.chucknorris.io/img/avatar/chuck-norris.png",
      "value": "Chuck Norris can divide by zero."
    })))
    .mount(&upstream)
    .await;

  let response = app_for(&upstream)
    .oneshot(Request::builder().uri("/random").body(Body::empty()).unwrap())
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::OK);
  let content_type = response
    .headers()
    .get("content-type")
    .and_then(|v| v.to_str().ok())
    .unwrap_or_default()
    .to_string();
  assert!(content_type.starts_with("text/plain"), "got {content_type}");

  let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
  assert_eq!(&body[..], b"Chuck Norris can divide by zero.");
}

#[tokio::test]
async fn upstream_failure_maps_to_bad_gateway() {
  let upstream = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/jokes/random"))
    .respond_with(ResponseTemplate::new(500))
    .mount(&upstream)
    .await;

  let response = app_for(&upstream)
    .oneshot(Request::builder().uri("/random").body(Body::empty()).unwrap())
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}
