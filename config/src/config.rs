// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::instrument;

/// Workspace configuration. Every section is optional in the TOML file;
/// API keys never live here, only in the environment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
  pub weather: WeatherSection,
  pub jokes: JokesSection,
  pub location: Option<LocationSection>,
  pub proxy: ProxySection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WeatherSection {
  pub base_url: String,
  pub units: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JokesSection {
  pub base_url: String,
}

/// Fixed coordinates standing in for a device geolocation capability.
/// Absence of this section models a host without one.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LocationSection {
  pub latitude: f64,
  pub longitude: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProxySection {
  pub bind_addr: String,
  pub upstream_url: String,
}

impl Default for WeatherSection {
  fn default() -> Self {
    Self {
      base_url: "https://api.openweathermap.org/data/2.5".into(),
      units: "metric".into(),
    }
  }
}

impl Default for JokesSection {
  fn default() -> Self {
    Self {
      base_url: "https://api.chucknorris.io".into(),
    }
  }
}

impl Default for ProxySection {
  fn default() -> Self {
    Self {
      bind_addr: "127.0.0.1:8080".into(),
      upstream_url: "https://api.chucknorris.io/jokes/random".into(),
    }
  }
}

impl Config {
  #[instrument(skip(path))]
  pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
    let path = path.as_ref();
    if !path.exists() {
      tracing::debug!("No config file at {}, using defaults", path.display());
      return Ok(Self::default());
    }

    let content = fs::read_to_string(path)?;
    let config: Self = toml::from_str(&content)?;
    tracing::debug!("Loaded configuration successfully");
    Ok(config)
  }
}
