use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::GlobalArgs;
use crate::error::{Error, Result};
use crate::report::histogram::DEFAULT_MARKER;

pub const DEFAULT_INPUT: &str = "CS210_Project_Three_Input_File.txt";
pub const DEFAULT_SNAPSHOT: &str = "frequency.dat";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub snapshot: PathBuf,
    pub marker: char,
    pub color: bool,
    pub json_output: bool,
}

/// Optional settings from `config.toml`. Missing keys keep the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    input: Option<PathBuf>,
    snapshot: Option<PathBuf>,
    marker: Option<char>,
    color: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from(DEFAULT_INPUT),
            snapshot: PathBuf::from(DEFAULT_SNAPSHOT),
            marker: DEFAULT_MARKER,
            color: true,
            json_output: false,
        }
    }
}

/// ~/.config/grocer/config.toml or platform equivalent
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "grocer")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

impl Config {
    /// Defaults, then the config file, then command line flags.
    ///
    /// A file named with `--config` must exist; the default location is
    /// skipped silently when absent.
    pub fn load(args: &GlobalArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) => Some(read_file_config(path)?),
            None => match default_config_path() {
                Some(path) if path.is_file() => Some(read_file_config(&path)?),
                _ => None,
            },
        };

        let mut config = Config::default();
        if let Some(file) = file {
            config.apply_file(file);
        }
        config.apply_args(args);
        Ok(config)
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(input) = file.input {
            self.input = input;
        }
        if let Some(snapshot) = file.snapshot {
            self.snapshot = snapshot;
        }
        if let Some(marker) = file.marker {
            self.marker = marker;
        }
        if let Some(color) = file.color {
            self.color = color;
        }
    }

    fn apply_args(&mut self, args: &GlobalArgs) {
        if let Some(input) = &args.input {
            self.input = input.clone();
        }
        if let Some(snapshot) = &args.snapshot {
            self.snapshot = snapshot.clone();
        }
        if let Some(marker) = args.marker {
            self.marker = marker;
        }
        if args.no_color {
            self.color = false;
        }
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    let to_err = |message: String| Error::Config {
        path: path.to_path_buf(),
        message,
    };

    let text = fs::read_to_string(path).map_err(|e| to_err(e.to_string()))?;
    let file: FileConfig = toml::from_str(&text).map_err(|e| to_err(e.to_string()))?;
    log::debug!("loaded config from {}", path.display());
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_config(path: PathBuf) -> GlobalArgs {
        GlobalArgs {
            config: Some(path),
            ..GlobalArgs::default()
        }
    }

    #[test]
    fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "input = \"monday.txt\"\nmarker = \"#\"\ncolor = false\n").unwrap();

        let config = Config::load(&args_with_config(path)).unwrap();
        assert_eq!(config.input, PathBuf::from("monday.txt"));
        assert_eq!(config.snapshot, PathBuf::from(DEFAULT_SNAPSHOT));
        assert_eq!(config.marker, '#');
        assert!(!config.color);
    }

    #[test]
    fn flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "input = \"monday.txt\"\nsnapshot = \"out.dat\"\n").unwrap();

        let mut args = args_with_config(path);
        args.input = Some(PathBuf::from("tuesday.txt"));
        args.marker = Some('=');

        let config = Config::load(&args).unwrap();
        assert_eq!(config.input, PathBuf::from("tuesday.txt"));
        assert_eq!(config.snapshot, PathBuf::from("out.dat"));
        assert_eq!(config.marker, '=');
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&args_with_config(dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "inputt = \"typo.txt\"\n").unwrap();

        let err = Config::load(&args_with_config(path)).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
