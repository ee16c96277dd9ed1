use crate::analysis::derive::TOTAL_MATCHES;
use crate::error::AppError;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub total_matches: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let data_path = env::var("ARAM_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("aram_top3.csv"));

        let total_matches = match env::var("ARAM_TOTAL_MATCHES") {
            Ok(value) => value.parse::<u32>().map_err(|_| {
                AppError::ConfigError(format!(
                    "ARAM_TOTAL_MATCHES must be a positive integer, got {:?}",
                    value
                ))
            })?,
            Err(_) => TOTAL_MATCHES,
        };

        if total_matches == 0 {
            return Err(AppError::ConfigError(
                "ARAM_TOTAL_MATCHES must be greater than zero".to_string(),
            ));
        }

        Ok(Config {
            data_path,
            total_matches,
        })
    }
}
