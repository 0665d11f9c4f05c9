// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use thiserror::Error as ThisError;

/// Every failure a fetch cycle can surface. Display strings are shown to the
/// user verbatim, so the per-source variants carry their fixed messages here.
#[derive(ThisError, Debug)]
pub enum Error {
  #[error("City not found! Try another one")]
  CityNotFound,
  #[error("Unable to fetch forecast data")]
  ForecastUnavailable,
  #[error("Unable to fetch Chuck Norris joke")]
  JokeUnavailable,
  #[error("Unable to retrieve your location")]
  LocationUnavailable,
  #[error("Geolocation is not supported by this browser.")]
  GeolocationUnsupported,
  // Transport errors pass the underlying message through unchanged.
  #[error("{0}")]
  HttpError(#[from] reqwest::Error),
  #[error("Configuration error: {0}")]
  ConfigError(String),
  #[error("IO error: {0}")]
  IoError(#[from] std::io::Error),
  #[error("Invalid API key")]
  InvalidApiKey,
  #[error("Invalid response from weather API: {0}")]
  InvalidResponse(String),
}
