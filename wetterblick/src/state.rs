// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use jokes::JokeSnippet;
use std::sync::atomic::{AtomicU64, Ordering};
use weather::{ForecastSeries, WeatherSnapshot};

/// Everything one successful fetch cycle produced. The joke keeps its own
/// error slot: a joke failure must not mask a successful weather result,
/// and completion order must not matter.
#[derive(Debug, Clone)]
pub struct Dashboard {
  pub weather: WeatherSnapshot,
  pub forecast: ForecastSeries,
  pub joke: Option<JokeSnippet>,
  pub joke_error: Option<String>,
}

/// Single source of truth for a fetch cycle. Exactly one variant holds at a
/// time; only the orchestrator writes it, readers just observe.
#[derive(Debug, Clone, Default)]
pub enum RequestState {
  #[default]
  Idle,
  Loading,
  Success(Dashboard),
  Failed(String),
}

impl RequestState {
  pub fn is_loading(&self) -> bool {
    matches!(self, Self::Loading)
  }

  pub fn error(&self) -> Option<&str> {
    match self {
      Self::Failed(message) => Some(message),
      _ => None,
    }
  }

  pub fn dashboard(&self) -> Option<&Dashboard> {
    match self {
      Self::Success(dashboard) => Some(dashboard),
      _ => None,
    }
  }
}

/// Monotonically increasing fetch-cycle tokens. A completion may only be
/// applied while its token is still the newest one issued; a superseded
/// cycle's completion is dropped instead of overwriting fresher state.
#[derive(Debug, Default)]
pub(crate) struct CycleCounter(AtomicU64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CycleToken(u64);

impl CycleCounter {
  pub(crate) fn begin(&self) -> CycleToken {
    CycleToken(self.0.fetch_add(1, Ordering::SeqCst) + 1)
  }

  pub(crate) fn is_current(&self, token: CycleToken) -> bool {
    self.0.load(Ordering::SeqCst) == token.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn newer_cycle_invalidates_older_tokens() {
    let cycles = CycleCounter::default();
    let first = cycles.begin();
    assert!(cycles.is_current(first));

    let second = cycles.begin();
    assert!(!cycles.is_current(first));
    assert!(cycles.is_current(second));
  }

  #[test]
  fn state_starts_idle_and_reports_loading() {
    let state = RequestState::default();
    assert!(!state.is_loading());
    assert!(state.error().is_none());
    assert!(state.dashboard().is_none());

    assert!(RequestState::Loading.is_loading());
  }

  #[test]
  fn failed_state_exposes_its_message() {
    let state = RequestState::Failed("City not found! Try another one".into());
    assert_eq!(state.error(), Some("City not found! Try another one"));
    assert!(!state.is_loading());
  }
}
