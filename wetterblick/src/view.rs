// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::state::RequestState;

/// Text rendering of the request state. Error messages are shown verbatim;
/// the forecast is held as state but intentionally not rendered.
pub fn render(state: &RequestState) -> String {
  match state {
    RequestState::Idle => "Search a city to see its weather.".to_string(),
    RequestState::Loading => "Loading...".to_string(),
    RequestState::Failed(message) => message.clone(),
    RequestState::Success(dashboard) => {
      let weather = &dashboard.weather;
      let mut out = format!(
        "Currently in **{}** ({}): **{}°C** [{}]\nHumidity: {}%\nWind speed: {} km/h",
        weather.location, weather.country, weather.temp, weather.icon, weather.humidity, weather.wind_speed,
      );

      if let Some(joke) = &dashboard.joke {
        out.push_str(&format!("\n\n{}", joke.value));
      }
      if let Some(joke_error) = &dashboard.joke_error {
        out.push_str(&format!("\n\n{}", joke_error));
      }

      out
    }
  }
}

#[cfg(test)]
mod tests {
  use super::render;
  use crate::state::{Dashboard, RequestState};
  use jokes::JokeSnippet;
  use weather::{ForecastSeries, WeatherSnapshot};

  fn dashboard() -> Dashboard {
    Dashboard {
      weather: WeatherSnapshot {
        location: "Winterthur".into(),
        country: "CH".into(),
        temp: 22,
        humidity: 81,
        wind_speed: 4.6,
        icon: "04d".into(),
      },
      forecast: ForecastSeries::default(),
      joke: Some(JokeSnippet {
        icon_url: "https://api.chucknorris.io/img/avatar/chuck-norris.png".into(),
        value: "Chuck Norris counted to infinity. Twice.".into(),
      }),
      joke_error: None,
    }
  }

  #[test]
  fn failed_state_renders_the_message_verbatim() {
    let rendered = render(&RequestState::Failed("City not found! Try another one".into()));
    assert_eq!(rendered, "City not found! Try another one");
  }

  #[test]
  fn success_renders_rounded_temp_and_joke() {
    let rendered = render(&RequestState::Success(dashboard()));
    assert!(rendered.contains("**Winterthur** (CH)"));
    assert!(rendered.contains("**22°C**"));
    assert!(rendered.contains("Humidity: 81%"));
    assert!(rendered.contains("Wind speed: 4.6 km/h"));
    assert!(rendered.contains("counted to infinity"));
  }

  #[test]
  fn joke_error_shows_without_hiding_the_weather() {
    let mut dashboard = dashboard();
    dashboard.joke = None;
    dashboard.joke_error = Some("Unable to fetch Chuck Norris joke".into());

    let rendered = render(&RequestState::Success(dashboard));
    assert!(rendered.contains("**Winterthur** (CH)"));
    assert!(rendered.contains("Unable to fetch Chuck Norris joke"));
  }
}
