// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// Anything that goes in here must be cheap to clone; axum clones the state
// per request.
#[derive(Clone)]
pub struct AppState {
  client: reqwest::Client,
  upstream_url: String,
}

impl AppState {
  pub fn new(upstream_url: impl Into<String>) -> Self {
    Self {
      client: reqwest::Client::new(),
      upstream_url: upstream_url.into(),
    }
  }
}

#[derive(Debug, Deserialize)]
struct JokeResponse {
  value: String,
}

pub fn create_app(state: AppState) -> Router {
  Router::new()
    .route("/random", get(random_joke))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// One upstream GET, reshaped to a plain-text body. No retry, no caching.
async fn random_joke(State(state): State<AppState>) -> Result<String, (StatusCode, String)> {
  let response = state
    .client
    .get(&state.upstream_url)
    .send()
    .await
    .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

  if !response.status().is_success() {
    return Err((
      StatusCode::BAD_GATEWAY,
      format!("Upstream request failed: {}", response.status()),
    ));
  }

  let joke: JokeResponse = response
    .json()
    .await
    .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

  Ok(joke.value)
}
