use std::{
    env,
    fs::File,
    path::{Path, PathBuf},
};

use serde::Deserialize;

const CONFIG_FILENAME: &str = "dropbox-status.yml";
const CONFIG_DIR: &str = "/etc/dropbox-status";

fn default_command() -> Vec<String> {
    vec!["dropbox".to_string(), "status".to_string()]
}

fn default_capacity() -> usize {
    1024
}

fn default_image() -> String {
    "".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_command")]
    pub command: Vec<String>,

    // Bytes, one of which is reserved, so at most `capacity - 1` bytes are captured
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    #[serde(default = "default_image")]
    pub image: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command: default_command(),
            capacity: default_capacity(),
            image: default_image(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unable to read config {}, {}", .0.display(), .1)]
    Read(PathBuf, std::io::Error),

    #[error("unable to parse config {}, {}", .0.display(), .1)]
    Parse(PathBuf, serde_yaml::Error),

    #[error("command is not presented")]
    MissingCommand,

    #[error("capacity must be at least 1 byte")]
    ZeroCapacity,
}

fn config_paths() -> Vec<PathBuf> {
    let mut paths = vec![];

    if let Ok(pwd) = env::current_dir() {
        paths.push(pwd.join(CONFIG_FILENAME));
    }

    paths.push(Path::new(CONFIG_DIR).join(CONFIG_FILENAME));

    paths
}

impl Config {
    /*
     * The config file is optional, without one the plugin
     * runs `dropbox status` with the defaults above
     */
    pub fn load() -> Result<Self, ConfigError> {
        for path in config_paths() {
            if path.exists() {
                return Config::from_path(&path)?.validate();
            }
        }

        Ok(Config::default())
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|err| ConfigError::Read(path.to_path_buf(), err))?;

        serde_yaml::from_reader(file).map_err(|err| ConfigError::Parse(path.to_path_buf(), err))
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        match self.command.split_first() {
            Some((executable, _)) if !executable.trim().is_empty() => (),
            _ => return Err(ConfigError::MissingCommand),
        }

        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }

        Ok(self)
    }
}
