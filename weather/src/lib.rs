// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod config;
pub mod models;
pub mod service;

pub use config::WeatherConfig;
pub use models::weather::{Coordinates, ForecastEntry, ForecastSeries, WeatherSnapshot};
pub use service::{WeatherApi, WeatherClient};

pub mod constants {
  use std::time::Duration;
  pub(crate) const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
  pub(crate) const DEFAULT_UNITS: &str = "metric";
  pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
}
