// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{constants::*, models::JokeSnippet};
use async_trait::async_trait;
use error::Error;
use tracing::{debug, instrument};

#[async_trait]
pub trait JokeApi: Send + Sync {
  async fn random(&self) -> Result<JokeSnippet, Error>;
}

#[derive(Debug, Clone)]
pub struct JokeClient {
  client: reqwest::Client,
  base_url: String,
}

impl JokeClient {
  pub fn new() -> Self {
    Self::with_base_url(DEFAULT_BASE_URL)
  }

  pub fn with_base_url(base_url: impl Into<String>) -> Self {
    Self {
      client: reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("Failed to create HTTP client"),
      base_url: base_url.into(),
    }
  }
}

impl Default for JokeClient {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl JokeApi for JokeClient {
  #[instrument(skip(self))]
  async fn random(&self) -> Result<JokeSnippet, Error> {
    let url = format!("{}/jokes/random", self.base_url);
    let response = self.client.get(&url).send().await?;

    if !response.status().is_success() {
      debug!("Joke request failed with status: {}", response.status());
      return Err(Error::JokeUnavailable);
    }

    Ok(response.json().await?)
  }
}
