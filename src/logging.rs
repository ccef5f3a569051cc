use failure::{Error, Fail};

const PIANOROLL_LOG_CONFIG: &str = "PIANOROLL_LOG_CONFIG";
const DEFAULT_PIANOROLL_LOG_CONFIG: &str = "log4rs.yaml";

#[derive(Debug, Fail)]
pub enum LoggingError {
  #[fail(display = "Failed to init logging from {}: {}", path, cause)]
  Init { path: String, cause: String },
}

/// Path of the log4rs configuration, overridable through the environment
pub fn log_config_path() -> String {
  config_path_or_default(std::env::var(PIANOROLL_LOG_CONFIG).ok())
}

fn config_path_or_default(value: Option<String>) -> String {
  value
    .filter(|path| !path.is_empty())
    .unwrap_or_else(|| DEFAULT_PIANOROLL_LOG_CONFIG.to_string())
}

/// Initialises log4rs for a host application from a YAML configuration file
pub fn init_logging<'a, T>(path: T) -> Result<(), Error>
where
  T: Into<&'a str>,
{
  let path = path.into();
  log4rs::init_file(path, Default::default()).map_err(|err| LoggingError::Init {
    path: path.to_string(),
    cause: err.to_string(),
  })?;
  Ok(())
}

/// Initialises log4rs from the configured log configuration path
pub fn init_default_logging() -> Result<(), Error> {
  let path = log_config_path();
  init_logging(path.as_str())
}

#[cfg(test)]
mod test {

  use super::{config_path_or_default, init_logging, LoggingError};

  #[test]
  pub fn init_logging_missing_file() {
    let err = init_logging("/nonexistent/log4rs.yaml").unwrap_err();
    match err.downcast::<LoggingError>() {
      Ok(LoggingError::Init { path, .. }) => assert_eq!(path, "/nonexistent/log4rs.yaml"),
      Err(err) => panic!("unexpected error: {}", err),
    }
  }

  #[test]
  pub fn config_path_override() {
    assert_eq!(
      config_path_or_default(Some("/etc/pianoroll/log4rs.yaml".to_string())),
      "/etc/pianoroll/log4rs.yaml"
    );
  }

  #[test]
  pub fn config_path_default() {
    assert_eq!(config_path_or_default(None), "log4rs.yaml");
    assert_eq!(config_path_or_default(Some(String::new())), "log4rs.yaml");
  }
}
