// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod models;
pub mod service;

pub use models::JokeSnippet;
pub use service::{JokeApi, JokeClient};

pub mod constants {
  use std::time::Duration;
  pub(crate) const DEFAULT_BASE_URL: &str = "https://api.chucknorris.io";
  pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
}
