// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod location;
pub mod orchestrator;
pub mod state;
pub mod view;

pub use location::{ConfiguredLocation, LocationProvider};
pub use orchestrator::Orchestrator;
pub use state::{Dashboard, RequestState};
