use crate::{
  error::ThreadnestResult,
  settings::structs::Settings,
};
use deser_hjson::from_str;
use once_cell::sync::Lazy;
use std::{env, fs};

pub mod structs;

static CONFIG_FILE: &str = "config/config.hjson";

#[allow(clippy::expect_used)]
pub static SETTINGS: Lazy<Settings> =
  Lazy::new(|| Settings::init().expect("Failed to load settings file"));

impl Settings {
  /// Reads config from the config file, if one exists, falling back to the
  /// defaults. `THREADNEST_DATABASE_URL` always wins for the database
  /// connection, see [`Settings::get_database_url`].
  fn init() -> ThreadnestResult<Self> {
    match Self::read_config_file() {
      Ok(file) => Ok(from_str::<Settings>(&file)?),
      Err(_) => Ok(Settings::default()),
    }
  }

  pub fn get_database_url(&self) -> String {
    env::var("THREADNEST_DATABASE_URL").unwrap_or_else(|_| self.database.uri.clone())
  }

  pub fn get_config_location() -> String {
    env::var("THREADNEST_CONFIG_LOCATION").unwrap_or_else(|_| CONFIG_FILE.to_string())
  }

  pub fn read_config_file() -> Result<String, std::io::Error> {
    fs::read_to_string(Self::get_config_location())
  }
}

#[cfg(test)]
mod tests {
  use super::structs::Settings;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_defaults() {
    let settings = Settings::default();
    assert_eq!(30, settings.database.pool_size);
    assert!(settings.database.uri.starts_with("postgres://"));
  }

  #[test]
  fn test_parses_hjson() {
    let settings = deser_hjson::from_str::<Settings>(
      r#"{
        database: {
          uri: "postgres://threadnest:hunter2@db:5432/threadnest"
          pool_size: 5
        }
      }"#,
    );
    let settings = match settings {
      Ok(s) => s,
      Err(e) => panic!("failed to parse settings: {e}"),
    };
    assert_eq!(5, settings.database.pool_size);
    assert_eq!(
      "postgres://threadnest:hunter2@db:5432/threadnest",
      settings.database.uri
    );
  }
}
