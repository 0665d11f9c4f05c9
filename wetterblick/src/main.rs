// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{Context, Result};
use config::Config;
use jokes::JokeClient;
use std::env;
use std::sync::Arc;
use tracing::error;
use weather::{WeatherClient, WeatherConfig};
use wetterblick::{ConfiguredLocation, LocationProvider, Orchestrator, RequestState};

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt().init();
}

#[tokio::main]
async fn main() -> Result<()> {
  #[cfg(debug_assertions)]
  config::dotenv::load()?;
  setup_logging();

  let api_key =
    env::var("OPENWEATHER_API_KEY").context("Missing OPENWEATHER_API_KEY environment variable")?;
  let config = Config::from_file("wetterblick.toml")?;

  let weather_config = WeatherConfig::new(api_key)?
    .with_base_url(config.weather.base_url.clone())
    .with_units(config.weather.units.clone());

  let location = config
    .location
    .map(|l| Arc::new(ConfiguredLocation::new(l.latitude, l.longitude)) as Arc<dyn LocationProvider>);

  let orchestrator = Orchestrator::new(
    Arc::new(WeatherClient::new(weather_config)),
    Arc::new(JokeClient::with_base_url(config.jokes.base_url.clone())),
    location,
  );

  let query = env::args()
    .nth(1)
    .context("Usage: wetterblick <CITY> | wetterblick --locate")?;
  if query == "--locate" {
    orchestrator.use_current_location().await;
  } else {
    orchestrator.submit(&query).await;
  }

  let state = orchestrator.state().await;
  println!("{}", wetterblick::view::render(&state));

  if let RequestState::Failed(message) = state {
    error!("Fetch cycle failed: {}", message);
    std::process::exit(1);
  }

  Ok(())
}
