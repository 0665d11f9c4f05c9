// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{Context, Result};
use chuckme::{create_app, AppState};
use config::Config;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt().init();

  let config = Config::from_file("wetterblick.toml")?;
  let app = create_app(AppState::new(config.proxy.upstream_url.clone()));

  let listener = tokio::net::TcpListener::bind(&config.proxy.bind_addr)
    .await
    .with_context(|| format!("Failed to bind {}", config.proxy.bind_addr))?;
  info!("chuckme listening on {}", config.proxy.bind_addr);

  axum::serve(listener, app).await?;
  Ok(())
}
