use failure::{Error, Fail};

use serde_derive::Deserialize;

use std::fs::File;
use std::io::Read;

use crate::time::{ticks::DEFAULT_RESOLUTION, Signature, Tempo};

#[derive(Debug, Fail)]
pub enum ConfigError {
  #[fail(
    display = "Invalid time signature {}/{}, the note value must be a power of two",
    num_beats, note_value
  )]
  InvalidSignature { num_beats: u8, note_value: u8 },
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct WorkspaceConfig {
  /// Ticks per quarter note
  pub resolution: u16,
  pub tempo: u16,
  pub signature_num_beats: u8,
  pub signature_note_value: u8,
  pub tracks: usize,
}

impl Default for WorkspaceConfig {
  fn default() -> WorkspaceConfig {
    WorkspaceConfig {
      resolution: DEFAULT_RESOLUTION,
      tempo: 120,
      signature_num_beats: 4,
      signature_note_value: 4,
      tracks: 2,
    }
  }
}

impl WorkspaceConfig {
  pub fn tempo(&self) -> Tempo {
    Tempo::new(self.tempo)
  }

  /// None when the signature can not be written as a time signature event
  pub fn signature(&self) -> Option<Signature> {
    Signature::checked(self.signature_num_beats, self.signature_note_value)
  }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Editor {
  /// Grid cells per quarter note, 0 disables snapping
  pub snap: u16,
}

impl Default for Editor {
  fn default() -> Editor {
    Editor { snap: 4 }
  }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
  pub workspace: WorkspaceConfig,
  pub editor: Editor,
}

impl Config {
  pub fn from_file<'a, T>(path: T) -> Result<Config, Error>
  where
    T: Into<&'a str>,
  {
    let mut content = String::new();
    let path_str = path.into();
    let mut file = File::open(path_str)?;
    file.read_to_string(&mut content)?;
    Config::from_str(content.as_str())
  }

  pub fn from_str<'a, T>(content: T) -> Result<Config, Error>
  where
    T: Into<&'a str>,
  {
    let config: Config = toml::from_str(content.into())?;
    if config.workspace.signature().is_none() {
      return Err(
        ConfigError::InvalidSignature {
          num_beats: config.workspace.signature_num_beats,
          note_value: config.workspace.signature_note_value,
        }
        .into(),
      );
    }
    Ok(config)
  }
}

#[cfg(test)]
mod test {

  use super::{Config, ConfigError};
  use crate::time::{Signature, Tempo};

  #[test]
  pub fn defaults() {
    let config = Config::default();
    assert_eq!(config.workspace.resolution, 480);
    assert_eq!(config.workspace.tempo(), Tempo::new(120));
    assert_eq!(config.workspace.signature(), Some(Signature::new(4, 4)));
    assert_eq!(config.workspace.tracks, 2);
    assert_eq!(config.editor.snap, 4);
  }

  #[test]
  pub fn from_str_partial() {
    let config = Config::from_str(
      r#"
      [workspace]
      resolution = 960
      signature_num_beats = 3

      [editor]
      snap = 0
      "#,
    )
    .unwrap();
    assert_eq!(config.workspace.resolution, 960);
    assert_eq!(config.workspace.signature(), Some(Signature::new(3, 4)));
    assert_eq!(config.workspace.tempo, 120);
    assert_eq!(config.editor.snap, 0);
  }

  #[test]
  pub fn from_str_empty() {
    let config = Config::from_str("").unwrap();
    assert_eq!(config.workspace.resolution, 480);
  }

  #[test]
  pub fn from_str_invalid() {
    assert!(Config::from_str("[workspace]\nresolution = \"fast\"").is_err());
  }

  #[test]
  pub fn from_str_rejects_signature() {
    for content in &[
      "[workspace]\nsignature_num_beats = 5\nsignature_note_value = 12",
      "[workspace]\nsignature_note_value = 0",
      "[workspace]\nsignature_num_beats = 0",
    ] {
      let err = Config::from_str(*content).unwrap_err();
      match err.downcast::<ConfigError>() {
        Ok(ConfigError::InvalidSignature { .. }) => {}
        Err(err) => panic!("unexpected error: {}", err),
      }
    }
  }

  #[test]
  pub fn from_file_missing() {
    assert!(Config::from_file("/nonexistent/pianoroll.toml").is_err());
  }
}
