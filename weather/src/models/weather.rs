// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::api::{CurrentWeatherResponse, ForecastResponse};
use chrono::{DateTime, TimeZone, Utc};
use error::Error;
use serde::Serialize;

/// Device position, as the geolocation capability reports it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Coordinates {
  pub latitude: f64,
  pub longitude: f64,
}

/// Current conditions for one location. Temperature is rounded to the
/// nearest whole degree for display; humidity and wind speed stay exactly
/// as the API returned them.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherSnapshot {
  pub location: String,
  pub country: String,
  pub temp: i64,
  pub humidity: u8,
  pub wind_speed: f64,
  pub icon: String,
}

impl WeatherSnapshot {
  pub(crate) fn from_response(response: CurrentWeatherResponse) -> Result<Self, Error> {
    let condition = response
      .weather
      .first()
      .ok_or_else(|| Error::InvalidResponse("No weather data available".to_string()))?;

    Ok(Self {
      location: response.name,
      country: response.sys.country,
      temp: response.main.temp.round() as i64,
      humidity: response.main.humidity,
      wind_speed: response.wind.speed,
      icon: condition.icon.clone(),
    })
  }
}

/// Ordered future intervals. Held as state; the view does not render it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ForecastSeries {
  pub entries: Vec<ForecastEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForecastEntry {
  pub timestamp: DateTime<Utc>,
  pub temp: f64,
  pub icon: String,
}

impl ForecastSeries {
  pub(crate) fn from_response(response: ForecastResponse) -> Result<Self, Error> {
    let entries = response
      .list
      .into_iter()
      .map(|item| {
        let timestamp = Utc
          .timestamp_opt(item.dt, 0)
          .single()
          .ok_or_else(|| Error::InvalidResponse(format!("Invalid forecast timestamp: {}", item.dt)))?;
        let condition = item
          .weather
          .first()
          .ok_or_else(|| Error::InvalidResponse("No weather data available".to_string()))?;

        Ok(ForecastEntry {
          timestamp,
          temp: item.main.temp,
          icon: condition.icon.clone(),
        })
      })
      .collect::<Result<Vec<_>, Error>>()?;

    Ok(Self { entries })
  }
}
