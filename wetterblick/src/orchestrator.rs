// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{
  location::LocationProvider,
  state::{CycleCounter, CycleToken, Dashboard, RequestState},
};
use error::Error;
use jokes::JokeApi;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};
use weather::WeatherApi;

/// Drives the fetch sequence (geolocation → weather → forecast → joke) and
/// owns the resulting request state.
pub struct Orchestrator {
  weather: Arc<dyn WeatherApi>,
  jokes: Arc<dyn JokeApi>,
  location: Option<Arc<dyn LocationProvider>>,
  state: RwLock<RequestState>,
  cycles: CycleCounter,
}

impl Orchestrator {
  pub fn new(
    weather: Arc<dyn WeatherApi>,
    jokes: Arc<dyn JokeApi>,
    location: Option<Arc<dyn LocationProvider>>,
  ) -> Self {
    Self {
      weather,
      jokes,
      location,
      state: RwLock::new(RequestState::Idle),
      cycles: CycleCounter::default(),
    }
  }

  /// Snapshot of the current request state. Readers never mutate it.
  pub async fn state(&self) -> RequestState {
    self.state.read().await.clone()
  }

  /// Runs one fetch cycle for a typed city query.
  #[instrument(skip(self))]
  pub async fn submit(&self, city: &str) {
    let token = self.begin_cycle().await;
    let outcome = self.run_cycle(city).await;
    self.complete(token, outcome).await;
  }

  /// Resolves the device position, reverse-geocodes it to a city name via
  /// the weather API's coordinate lookup, then proceeds exactly as `submit`
  /// with the resolved name.
  #[instrument(skip(self))]
  pub async fn use_current_location(&self) {
    let token = self.begin_cycle().await;

    let Some(provider) = self.location.as_ref() else {
      self.complete(token, Err(Error::GeolocationUnsupported)).await;
      return;
    };

    let coords = match provider.current_position().await {
      Ok(coords) => coords,
      Err(e) => {
        warn!("Geolocation failed: {e}");
        self.complete(token, Err(Error::LocationUnavailable)).await;
        return;
      }
    };

    let outcome = match self.weather.current_by_coords(coords).await {
      Ok(snapshot) => {
        info!("Resolved coordinates to {}", snapshot.location);
        self.run_cycle(&snapshot.location).await
      }
      Err(e) => Err(e),
    };
    self.complete(token, outcome).await;
  }

  async fn begin_cycle(&self) -> CycleToken {
    let token = self.cycles.begin();
    *self.state.write().await = RequestState::Loading;
    token
  }

  // Weather must complete before the forecast is requested; the joke is
  // joined with no ordering dependency on either.
  async fn run_cycle(&self, city: &str) -> Result<Dashboard, Error> {
    let weather_chain = async {
      let weather = self.weather.current(city).await?;
      let forecast = self.weather.forecast(city).await?;
      Ok::<_, Error>((weather, forecast))
    };

    let (chain, joke) = tokio::join!(weather_chain, self.jokes.random());
    let (weather, forecast) = chain?;

    let (joke, joke_error) = match joke {
      Ok(joke) => (Some(joke), None),
      Err(e) => {
        warn!("Joke fetch failed: {e}");
        (None, Some(e.to_string()))
      }
    };

    Ok(Dashboard {
      weather,
      forecast,
      joke,
      joke_error,
    })
  }

  // The only writer of Success/Failed. Loading is cleared on every exit
  // path that still owns the cycle; a superseded completion is dropped.
  async fn complete(&self, token: CycleToken, outcome: Result<Dashboard, Error>) {
    let mut state = self.state.write().await;
    if !self.cycles.is_current(token) {
      debug!("Dropping completion of superseded fetch cycle");
      return;
    }

    *state = match outcome {
      Ok(dashboard) => RequestState::Success(dashboard),
      Err(e) => RequestState::Failed(e.to_string()),
    };
  }
}
