// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Deserialize;

/// Raw shape of `/weather` as OpenWeatherMap returns it.
#[derive(Debug, Deserialize, Clone)]
pub struct CurrentWeatherResponse {
  pub name: String,
  pub sys: SysInfo,
  pub main: MainWeather,
  pub wind: Wind,
  pub weather: Vec<Condition>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SysInfo {
  pub country: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MainWeather {
  pub temp: f64,
  pub humidity: u8,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Wind {
  pub speed: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Condition {
  pub icon: String,
}

/// Raw shape of `/forecast`: future intervals under `list`.
#[derive(Debug, Deserialize, Clone)]
pub struct ForecastResponse {
  pub list: Vec<ForecastItem>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastItem {
  pub dt: i64,
  pub main: ForecastMain,
  pub weather: Vec<Condition>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastMain {
  pub temp: f64,
}
