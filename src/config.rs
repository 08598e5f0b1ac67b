use std::{env, path::PathBuf};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATA_PATH: &str = "data/goals.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
}

impl Config {
    /// Reads `PORT` and `GOALS_DATA_PATH`; unset or unparsable values fall
    /// back to the defaults.
    pub fn from_env() -> Self {
        Self::from_vars(env::var("PORT").ok(), env::var("GOALS_DATA_PATH").ok())
    }

    fn from_vars(port: Option<String>, data_path: Option<String>) -> Self {
        let port = port
            .and_then(|value| value.trim().parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let data_path = data_path
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        Self { port, data_path }
    }
}
