// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{bail, Result};
use std::env;
use std::fs;
use std::path::Path;
use std::sync::Once;

static INIT: Once = Once::new();
static DEFAULT_FILENAME: &str = ".env";

fn parse_line(line: &str) -> Result<(String, String)> {
  let Some((key, value)) = line.split_once('=') else {
    bail!("Invalid format: missing '='");
  };

  let key = key.trim();
  if key.is_empty() {
    bail!("Empty key");
  }

  let value = value.trim().trim_matches('"').trim_matches('\'');
  Ok((key.to_string(), value.to_string()))
}

fn load_from_file(path: &Path) -> Result<()> {
  let content = fs::read_to_string(path)?;

  for (line_num, line) in content.lines().enumerate() {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
      continue;
    }

    match parse_line(trimmed) {
      Ok((key, value)) => env::set_var(key, value),
      Err(err) => bail!("Error on line {}: {}", line_num + 1, err),
    }
  }

  Ok(())
}

/// Loads `.env` into the process environment once. A missing file is not an
/// error; secrets may already be in the environment.
pub fn load() -> Result<()> {
  let mut result = Ok(());
  INIT.call_once(|| {
    let path = Path::new(DEFAULT_FILENAME);
    if path.exists() {
      result = load_from_file(path);
    }
  });
  result
}

#[cfg(test)]
mod tests {
  use super::parse_line;

  #[test]
  fn parses_quoted_and_bare_values() {
    assert_eq!(
      parse_line("OPENWEATHER_API_KEY=abc123").unwrap(),
      ("OPENWEATHER_API_KEY".into(), "abc123".into())
    );
    assert_eq!(
      parse_line("KEY=\"quoted value\"").unwrap(),
      ("KEY".into(), "quoted value".into())
    );
  }

  #[test]
  fn rejects_malformed_lines() {
    assert!(parse_line("NO_EQUALS_SIGN").is_err());
    assert!(parse_line("=value-without-key").is_err());
  }
}
