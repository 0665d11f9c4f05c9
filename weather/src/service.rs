// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  config::WeatherConfig,
  constants::*,
  models::{
    api::{CurrentWeatherResponse, ForecastResponse},
    weather::{Coordinates, ForecastSeries, WeatherSnapshot},
  },
};
use async_trait::async_trait;
use error::Error;
use tracing::{debug, instrument};
use url::Url;

#[async_trait]
pub trait WeatherApi: Send + Sync {
  /// Current conditions for a typed city query.
  async fn current(&self, city: &str) -> Result<WeatherSnapshot, Error>;
  /// Current conditions via the coordinate lookup; the snapshot's
  /// `location` is the provider's reverse-geocoded city name.
  async fn current_by_coords(&self, coords: Coordinates) -> Result<WeatherSnapshot, Error>;
  async fn forecast(&self, city: &str) -> Result<ForecastSeries, Error>;
}

pub struct WeatherClient {
  config: WeatherConfig,
  client: reqwest::Client,
}

impl WeatherClient {
  pub fn new(config: WeatherConfig) -> Self {
    Self {
      config,
      client: reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("Failed to create HTTP client"),
    }
  }

  fn build_api_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, Error> {
    let mut pairs = params.to_vec();
    pairs.push(("appid", self.config.api_key.as_str()));
    pairs.push(("units", self.config.units.as_str()));

    Url::parse_with_params(&format!("{}/{}", self.config.base_url, path), &pairs)
      .map_err(|_| Error::ConfigError("Failed to build API URL".to_string()))
  }

  // Any non-success status on /weather reads as an unknown city.
  async fn fetch_current(&self, params: &[(&str, &str)]) -> Result<WeatherSnapshot, Error> {
    let url = self.build_api_url("weather", params)?;
    let response = self.client.get(url).send().await?;

    if !response.status().is_success() {
      debug!("Weather request failed with status: {}", response.status());
      return Err(Error::CityNotFound);
    }

    let weather_data: CurrentWeatherResponse = response.json().await?;
    WeatherSnapshot::from_response(weather_data)
  }
}

#[async_trait]
impl WeatherApi for WeatherClient {
  #[instrument(skip(self))]
  async fn current(&self, city: &str) -> Result<WeatherSnapshot, Error> {
    self.fetch_current(&[("q", city)]).await
  }

  #[instrument(skip(self))]
  async fn current_by_coords(&self, coords: Coordinates) -> Result<WeatherSnapshot, Error> {
    let lat = coords.latitude.to_string();
    let lon = coords.longitude.to_string();
    self.fetch_current(&[("lat", &lat), ("lon", &lon)]).await
  }

  #[instrument(skip(self))]
  async fn forecast(&self, city: &str) -> Result<ForecastSeries, Error> {
    let url = self.build_api_url("forecast", &[("q", city)])?;
    let response = self.client.get(url).send().await?;

    if !response.status().is_success() {
      debug!("Forecast request failed with status: {}", response.status());
      return Err(Error::ForecastUnavailable);
    }

    let forecast_data: ForecastResponse = response.json().await?;
    ForecastSeries::from_response(forecast_data)
  }
}
