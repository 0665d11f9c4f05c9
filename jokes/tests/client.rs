// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use error::Error;
use jokes::{JokeApi, JokeClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn random_returns_icon_and_text() {
  let mock_server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/jokes/random"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
      "icon_url": "https://api.chucknorris.io/img/avatar/chuck-norris.png",
      "value": "Chuck Norris counted to infinity. Twice."
    })))
    .mount(&mock_server)
    .await;

  let joke = JokeClient::with_base_url(mock_server.uri()).random().await.unwrap();

  assert_eq!(joke.value, "Chuck Norris counted to infinity. Twice.");
  assert!(joke.icon_url.ends_with("chuck-norris.png"));
}

#[tokio::test]
async fn upstream_failure_has_its_own_fixed_message() {
  let mock_server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/jokes/random"))
    .respond_with(ResponseTemplate::new(503))
    .mount(&mock_server)
    .await;

  let err = JokeClient::with_base_url(mock_server.uri()).random().await.unwrap_err();

  assert!(matches!(err, Error::JokeUnavailable));
  assert_eq!(err.to_string(), "Unable to fetch Chuck Norris joke");
}
