//! Key/value configuration file naming the image and model directories and
//! the match file to visualize.
//!
//! ```text
//! # comment
//! PATH_TO_EQUI  = /data/equi
//! PATH_TO_MODEL = /data/model
//! FILE_MATCHES2 = imgA_imgB
//! ```

use crate::data::{derive_image_names, Arity};
use crate::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_DIR: &str = "./";

const KEY_EQUI: &str = "PATH_TO_EQUI";
const KEY_MODEL: &str = "PATH_TO_MODEL";
const KEY_MATCHES2: &str = "FILE_MATCHES2";
const KEY_MATCHES3: &str = "FILE_MATCHES3";

/// Settings as read from the file, before the visualization mode is chosen
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSettings {
    pub path_to_equi: PathBuf,
    pub path_to_model: PathBuf,
    pub file_2_matches: Option<String>,
    pub file_3_matches: Option<String>,
}

impl Default for ConfigSettings {
    fn default() -> Self {
        Self {
            path_to_equi: PathBuf::from(DEFAULT_DIR),
            path_to_model: PathBuf::from(DEFAULT_DIR),
            file_2_matches: None,
            file_3_matches: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchMode {
    Pairs(String),
    Triplets(String),
}

impl MatchMode {
    pub fn arity(&self) -> Arity {
        match self {
            MatchMode::Pairs(_) => Arity::Pair,
            MatchMode::Triplets(_) => Arity::Triplet,
        }
    }

    pub fn file_name(&self) -> &str {
        match self {
            MatchMode::Pairs(name) | MatchMode::Triplets(name) => name,
        }
    }

    fn subdirectory(&self) -> &'static str {
        match self {
            MatchMode::Pairs(_) => "2_matches",
            MatchMode::Triplets(_) => "3_triplets",
        }
    }
}

/// Validated configuration for one visualization session
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub path_to_equi: PathBuf,
    pub path_to_model: PathBuf,
    pub mode: MatchMode,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        ConfigSettings::load_from_file(path)?.into_config()
    }

    pub fn match_file_path(&self) -> PathBuf {
        self.path_to_model
            .join("output")
            .join(self.mode.subdirectory())
            .join(self.mode.file_name())
    }

    pub fn image_paths(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let names = derive_image_names(self.mode.file_name(), self.mode.arity())?;
        Ok(names
            .into_iter()
            .map(|name| self.path_to_equi.join(name))
            .collect())
    }
}

impl ConfigSettings {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "Read configuration file");
        Self::parse(&content)
    }

    /// Scan the file top to bottom, validating each known key as it appears
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        for line in content.lines() {
            let Some((key, value)) = split_entry(line) else {
                continue;
            };

            match key.as_str() {
                KEY_EQUI => settings.path_to_equi = existing_dir(KEY_EQUI, value)?,
                KEY_MODEL => settings.path_to_model = existing_dir(KEY_MODEL, value)?,
                KEY_MATCHES2 => {
                    settings.file_2_matches = Some(non_empty(KEY_MATCHES2, value)?.to_string())
                }
                KEY_MATCHES3 => {
                    settings.file_3_matches = Some(non_empty(KEY_MATCHES3, value)?.to_string())
                }
                _ => tracing::debug!(key = %key, "Ignoring unknown configuration key"),
            }
        }

        Ok(settings)
    }

    pub fn into_config(self) -> Result<Config, ConfigError> {
        let mode = match (self.file_2_matches, self.file_3_matches) {
            (Some(name), None) => MatchMode::Pairs(name),
            (None, Some(name)) => MatchMode::Triplets(name),
            (None, None) => return Err(ConfigError::NoMatchFile),
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingMatchFiles),
        };

        Ok(Config {
            path_to_equi: self.path_to_equi,
            path_to_model: self.path_to_model,
            mode,
        })
    }
}

/// Split `KEY = value` into the upper-cased key and the trimmed value.
/// Blank lines and `#` comments yield `None`.
fn split_entry(line: &str) -> Option<(String, &str)> {
    let line = trim_blanks(line);
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    Some((trim_blanks(key).to_uppercase(), trim_blanks(value)))
}

fn trim_blanks(s: &str) -> &str {
    s.trim_matches(|c| c == ' ' || c == '\t')
}

fn non_empty<'a>(key: &'static str, value: &'a str) -> Result<&'a str, ConfigError> {
    if value.is_empty() {
        Err(ConfigError::EmptyValue(key))
    } else {
        Ok(value)
    }
}

fn existing_dir(key: &'static str, value: &str) -> Result<PathBuf, ConfigError> {
    let path = PathBuf::from(non_empty(key, value)?);
    if !path.exists() {
        return Err(ConfigError::PathNotFound { key, path });
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_entry() {
        assert_eq!(
            split_entry("  path_to_equi\t=  /x \t"),
            Some(("PATH_TO_EQUI".to_string(), "/x"))
        );
        assert_eq!(split_entry("KEY = a=b"), Some(("KEY".to_string(), "a=b")));
        assert_eq!(split_entry(" \t "), None);
        assert_eq!(split_entry("  # PATH_TO_EQUI = /x"), None);
        assert_eq!(split_entry("no separator here"), None);
    }

    #[test]
    fn test_match_file_path() {
        let config = Config {
            path_to_equi: PathBuf::from("/equi"),
            path_to_model: PathBuf::from("/model"),
            mode: MatchMode::Triplets("a_b_c".to_string()),
        };
        assert_eq!(config.match_file_path(), PathBuf::from("/model/output/3_triplets/a_b_c"));
        assert_eq!(
            config.image_paths().unwrap(),
            vec![
                PathBuf::from("/equi/a.bmp"),
                PathBuf::from("/equi/b.bmp"),
                PathBuf::from("/equi/c.bmp"),
            ]
        );
    }
}
