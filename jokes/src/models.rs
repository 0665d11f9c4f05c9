// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::{Deserialize, Serialize};

/// One random joke, sourced independently of any weather query.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct JokeSnippet {
  pub icon_url: String,
  pub value: String,
}
