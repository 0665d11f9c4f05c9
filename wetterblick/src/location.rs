// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use async_trait::async_trait;
use error::Error;
use weather::Coordinates;

/// Host geolocation capability. Awaited exactly once per fetch cycle; an
/// error here means the position could not be obtained (denied, unavailable).
#[async_trait]
pub trait LocationProvider: Send + Sync {
  async fn current_position(&self) -> Result<Coordinates, Error>;
}

/// Coordinates pinned in configuration. The dashboard host stands in for a
/// device geolocation service.
#[derive(Debug, Clone, Copy)]
pub struct ConfiguredLocation {
  coords: Coordinates,
}

impl ConfiguredLocation {
  pub fn new(latitude: f64, longitude: f64) -> Self {
    Self {
      coords: Coordinates { latitude, longitude },
    }
  }
}

#[async_trait]
impl LocationProvider for ConfiguredLocation {
  async fn current_position(&self) -> Result<Coordinates, Error> {
    Ok(self.coords)
  }
}
