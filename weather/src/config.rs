// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_UNITS};
use error::Error;

#[derive(Debug, Clone)]
pub struct WeatherConfig {
  pub(crate) api_key: String,
  pub(crate) base_url: String,
  pub(crate) units: String,
}

impl WeatherConfig {
  pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
    let api_key = api_key.into();
    if api_key.trim().is_empty() {
      return Err(Error::InvalidApiKey);
    }

    Ok(Self {
      api_key,
      base_url: DEFAULT_BASE_URL.into(),
      units: DEFAULT_UNITS.into(),
    })
  }

  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  pub fn with_units(mut self, units: impl Into<String>) -> Self {
    self.units = units.into();
    self
  }
}

#[cfg(test)]
mod tests {
  use super::WeatherConfig;

  #[test]
  fn rejects_blank_api_key() {
    assert!(WeatherConfig::new("").is_err());
    assert!(WeatherConfig::new("   ").is_err());
    assert!(WeatherConfig::new("6aa1b1b9").is_ok());
  }
}
